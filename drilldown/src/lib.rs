pub mod animation;
pub mod buffer;
pub mod dataset;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod navigator;
pub mod render;
pub mod templates;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use buffer::Buffer;
pub use dataset::{Children, Dataset, Entry, Record};
pub use element::{find_element, Content, Element};
pub use error::{DrilldownError, Result};
pub use event::{translate_events, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, LayoutResult, Rect};
pub use navigator::{EventResult, Navigator};
pub use templates::{Config, Templates, NAV_BACK_ID, NAV_START_ID};
pub use terminal::Terminal;
pub use transitions::{Easing, SlideConfig};
pub use types::*;
