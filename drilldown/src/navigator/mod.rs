//! Drill-down tree navigator.
//!
//! The navigator keeps a stack of entered link data over an immutable
//! dataset, renders the current page (link rows or a terminal detail
//! view) into an element tree, and slides between pages. At most one
//! slide is in flight at a time: input arriving mid-slide is dropped,
//! not queued.
//!
//! # Example
//!
//! ```no_run
//! use drilldown::{Config, Entry, Navigator, Record};
//!
//! let dataset = vec![
//!     Entry::branch(
//!         Record::new().field("text", "Buildings"),
//!         vec![Entry::leaf(
//!             Record::new().field("text", "New building"),
//!             Record::new().field("permit-type", "R"),
//!         )],
//!     ),
//! ];
//!
//! let mut nav = Navigator::new(Config::new().width(40));
//! nav.reset(dataset);
//! // each frame: nav.tick(); render nav.element(); feed events back in
//! ```

mod events;
mod render;
mod state;

pub use events::EventResult;
pub use state::Navigator;
