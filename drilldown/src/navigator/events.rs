//! Event routing for the navigator.
//!
//! Clicks are resolved against the component-held row map of the
//! current page; nav controls route by their well-known ids. While a
//! slide is in flight all input is dropped, never queued.

use log::trace;

use crate::event::{Event, Key};
use crate::templates::{NAV_BACK_ID, NAV_START_ID};

use super::state::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl Navigator {
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        // Commit a finished slide before deciding whether input is live.
        self.tick();
        if self.is_sliding() {
            if matches!(event, Event::Click { .. } | Event::Key { .. }) {
                trace!("input dropped: slide in flight");
            }
            return EventResult::Ignored;
        }

        match event {
            Event::Click {
                target: Some(id), ..
            } => self.route_click(id),
            // Click landed outside any row: silently ignored.
            Event::Click { target: None, .. } => EventResult::Ignored,
            Event::Key { key, modifiers } if modifiers.none() => match key {
                Key::Backspace | Key::Left => {
                    if self.back() {
                        EventResult::Consumed
                    } else {
                        EventResult::Ignored
                    }
                }
                Key::Home => {
                    self.go_start();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    fn route_click(&mut self, id: &str) -> EventResult {
        if id == NAV_BACK_ID {
            return if self.back() {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }
        if id == NAV_START_ID {
            self.go_start();
            return EventResult::Consumed;
        }

        let index = self.current_rows().and_then(|rows| rows.get(id).copied());
        match index {
            Some(index) => {
                self.navigate(index);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
