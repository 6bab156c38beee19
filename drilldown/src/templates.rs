//! Template and configuration contract for the navigator.
//!
//! Each template is a function from a bound record to an element
//! fragment. `link` and `last` receive the entry's own fields merged
//! over the base model; `title` and `nav` receive the base model.
//! Built-in defaults stand in for any slot not supplied.

use std::time::Duration;

use crate::dataset::Record;
use crate::element::Element;
use crate::transitions::Easing;
use crate::types::{Color, Size, Style, TextAlign};

/// Well-known element id the nav template must give its back control.
pub const NAV_BACK_ID: &str = "tree-nav-back";
/// Well-known element id the nav template must give its start control.
pub const NAV_START_ID: &str = "tree-nav-start";

pub type TemplateFn = Box<dyn Fn(&Record) -> Element>;
pub type SelectFn = Box<dyn FnMut(Option<&Record>)>;

/// The four template slots: page header, back/start controls, one link
/// row, and the terminal detail view.
pub struct Templates {
    pub title: TemplateFn,
    pub nav: TemplateFn,
    pub link: TemplateFn,
    pub last: TemplateFn,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            title: Box::new(default_title),
            nav: Box::new(default_nav),
            link: Box::new(default_link),
            last: Box::new(default_last),
        }
    }
}

fn default_title(model: &Record) -> Element {
    Element::text(model.get("title").unwrap_or("").to_string())
        .width(Size::Fill)
        .text_align(TextAlign::Center)
        .style(Style::new().bold().foreground(Color::oklch(0.9, 0.02, 250.0)))
}

fn default_nav(_model: &Record) -> Element {
    let button_style = Style::new()
        .background(Color::oklch(0.3, 0.05, 250.0))
        .foreground(Color::oklch(0.9, 0.02, 250.0));

    Element::row()
        .width(Size::Fill)
        .gap(2)
        .child(
            Element::text(" ← back ")
                .id(NAV_BACK_ID)
                .clickable(true)
                .style(button_style),
        )
        .child(
            Element::text(" ⌂ start ")
                .id(NAV_START_ID)
                .clickable(true)
                .style(button_style),
        )
}

fn default_link(data: &Record) -> Element {
    Element::text(format!("▸ {}", data.get("text").unwrap_or("")))
        .width(Size::Fill)
        .style(Style::new().foreground(Color::oklch(0.85, 0.04, 250.0)))
}

fn default_last(data: &Record) -> Element {
    Element::col().width(Size::Fill).children(
        data.iter()
            .map(|(k, v)| Element::text(format!("{k}: {v}"))),
    )
}

/// Navigator construction options.
pub struct Config {
    pub templates: Templates,
    /// Extra key/value context merged into every template binding.
    pub base_model: Record,
    /// Width of one page, in columns.
    pub width: u16,
    /// Slide duration. Defaults to width/2 milliseconds.
    pub speed: Option<Duration>,
    pub easing: Easing,
    /// Invoked with the selected leaf record, or None when the
    /// selection is cleared.
    pub on_select: Option<SelectFn>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: Templates::default(),
            base_model: Record::new(),
            width: 40,
            speed: None,
            easing: Easing::EaseOut,
            on_select: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn speed(mut self, speed: Duration) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn base_model(mut self, base_model: Record) -> Self {
        self.base_model = base_model;
        self
    }

    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    pub fn link_template(mut self, f: impl Fn(&Record) -> Element + 'static) -> Self {
        self.templates.link = Box::new(f);
        self
    }

    pub fn last_template(mut self, f: impl Fn(&Record) -> Element + 'static) -> Self {
        self.templates.last = Box::new(f);
        self
    }

    pub fn title_template(mut self, f: impl Fn(&Record) -> Element + 'static) -> Self {
        self.templates.title = Box::new(f);
        self
    }

    pub fn nav_template(mut self, f: impl Fn(&Record) -> Element + 'static) -> Self {
        self.templates.nav = Box::new(f);
        self
    }

    pub fn on_select(mut self, f: impl FnMut(Option<&Record>) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }
}
