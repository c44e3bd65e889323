//! # NavBar Component
//!
//! One line listing every route in table order with its number key:
//!
//! ```text
//!  1 Dashboard   2 Book a Room   3 Manage Bookings   4 Manage Rooms
//! ```
//!
//! The route at `active` is highlighted. On the not-found page nothing is.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::route::Route;
use crate::tui::component::Component;

pub struct NavBar<'a> {
    pub routes: &'a [Route],
    pub active: Option<usize>,
}

impl<'a> NavBar<'a> {
    pub fn new(routes: &'a [Route], active: Option<usize>) -> Self {
        Self { routes, active }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.routes.len() * 2);
        for (i, route) in self.routes.iter().enumerate() {
            let style = if Some(i) == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            // Only the first nine routes get a number key
            let label = if i < 9 {
                format!(" {} {} ", i + 1, route.view.title())
            } else {
                format!(" {} ", route.view.title())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
