//! # TitleBar Component
//!
//! Top line showing where the user is and what just happened.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Roomdesk  /manage-rooms | Manage Rooms"`
//! 2. **Default**: `"Roomdesk  /manage-rooms"`
//!
//! Stateless: all data comes in as props, so it renders whatever it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing the current address and status.
pub struct TitleBar {
    /// Full current address, e.g. `/booking?room=r1`
    pub address: String,
    /// Transient status, e.g. "No page at /x"
    pub status_message: String,
}

impl TitleBar {
    pub fn new(address: String, status_message: String) -> Self {
        Self {
            address,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Roomdesk  {}", self.address)
        } else {
            format!("Roomdesk  {} | {}", self.address, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
