//! Element assembly for the navigator region: title, the clipped page
//! strip, and the nav controls. Pages sit side by side inside the
//! strip; the strip's horizontal offset is what slides.

use crate::element::Element;
use crate::types::{Overflow, Size};

use super::state::Navigator;

pub(crate) const STRIP_ID: &str = "tree-strip";
pub(crate) const CONTENT_ID: &str = "tree-content";

impl Navigator {
    /// Build the element tree for the current state. Sample this once
    /// per frame; while a slide is active the strip offset moves.
    pub fn element(&self) -> Element {
        let title = (self.config.templates.title)(&self.config.base_model);
        let nav = (self.config.templates.nav)(&self.config.base_model);

        let strip_width = self.width() * self.pages.len().max(1) as u16;
        let strip = Element::row()
            .id(STRIP_ID)
            .width(Size::Fixed(strip_width))
            .height(Size::Fill)
            .offset_x(self.current_offset())
            .children(self.pages.iter().map(|p| p.element.clone()));

        let content = Element::box_()
            .id(CONTENT_ID)
            .width(Size::Fixed(self.width()))
            .height(Size::Fill)
            .overflow(Overflow::Hidden)
            .child(strip);

        Element::col()
            .width(Size::Fixed(self.width()))
            .height(Size::Fill)
            .gap(1)
            .child(title)
            .child(content)
            .child(nav)
    }
}
