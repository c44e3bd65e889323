//! # Page Views
//!
//! One component per [`View`]. The router decides which one is shown; this
//! module only turns catalog data into text. Pages are read-only: booking
//! forms and editing live with whatever backend owns the data.
//!
//! ```text
//! View::Dashboard       → counts + bookings from today on
//! View::BookingRoom     → rooms currently offered
//! View::ManageBookings  → every booking
//! View::ManageRooms     → every room with its active state
//! View::NotFound        → the path that matched nothing
//! ```

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::core::catalog::Catalog;
use crate::core::route::View;
use crate::tui::component::Component;

/// Bookings listed on the dashboard.
const DASHBOARD_UPCOMING: usize = 5;

pub struct Page<'a> {
    pub view: View,
    pub catalog: &'a Catalog,
    /// Requested path, shown on the not-found page.
    pub path: &'a str,
    /// Lines scrolled off the top. Clamped on render.
    pub scroll: u16,
    /// `YYYY-MM-DD`; earlier bookings are left off the dashboard.
    pub today: String,
}

impl<'a> Page<'a> {
    pub fn new(view: View, catalog: &'a Catalog, path: &'a str) -> Self {
        Self {
            view,
            catalog,
            path,
            scroll: 0,
            today: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_today(mut self, today: &str) -> Self {
        self.today = today.to_string();
        self
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        match self.view {
            View::Dashboard => dashboard_lines(self.catalog, &self.today),
            View::BookingRoom => booking_room_lines(self.catalog),
            View::ManageBookings => manage_bookings_lines(self.catalog),
            View::ManageRooms => manage_rooms_lines(self.catalog),
            View::NotFound => not_found_lines(self.path),
        }
    }
}

impl Component for Page<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.view.title()))
            .padding(Padding::horizontal(1));

        let lines = self.lines();
        // Stop once the last line reaches the bottom border
        let visible = usize::from(area.height.saturating_sub(2));
        let max_scroll = u16::try_from(lines.len().saturating_sub(visible)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn dashboard_lines(catalog: &Catalog, today: &str) -> Vec<Line<'static>> {
    let offered = catalog.offered_rooms().count();
    let mut lines = vec![
        Line::from(format!(
            "Rooms: {} ({} offered)",
            catalog.rooms.len(),
            offered
        )),
        Line::from(format!("Bookings: {}", catalog.bookings.len())),
        Line::default(),
        heading("Next bookings"),
    ];

    let upcoming = catalog.upcoming(today, DASHBOARD_UPCOMING);
    if upcoming.is_empty() {
        lines.push(dim("Nothing booked from today on."));
    }
    for booking in upcoming {
        lines.push(Line::from(format!(
            "{} {}  {}  {}",
            booking.date,
            booking.time,
            catalog.room_name(booking),
            booking.booked_by
        )));
    }
    lines
}

fn booking_room_lines(catalog: &Catalog) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Available rooms")];
    let mut any = false;
    for room in catalog.offered_rooms() {
        any = true;
        lines.push(Line::from(format!(
            "{}  (seats {})",
            room.name, room.capacity
        )));
    }
    if !any {
        lines.push(dim("No rooms are open for booking."));
    }
    lines
}

fn manage_bookings_lines(catalog: &Catalog) -> Vec<Line<'static>> {
    if catalog.bookings.is_empty() {
        return vec![dim("No bookings.")];
    }
    let mut lines = vec![heading("Date        Time   Room / Booked by / Created")];
    for booking in &catalog.bookings {
        lines.push(Line::from(format!(
            "{:<10}  {:<5}  {} / {} / {}",
            booking.date,
            booking.time,
            catalog.room_name(booking),
            booking.booked_by,
            format_created_at(&booking.created_at)
        )));
    }
    lines
}

fn manage_rooms_lines(catalog: &Catalog) -> Vec<Line<'static>> {
    if catalog.rooms.is_empty() {
        return vec![dim("No rooms.")];
    }
    let mut lines = vec![heading("Room / Seats / State")];
    for room in &catalog.rooms {
        let state = match room.active {
            Some(true) => "active",
            Some(false) => "inactive",
            None => "active (default)",
        };
        let style = if Catalog::is_offered(room) {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{} / {} / {}", room.name, room.capacity, state),
            style,
        )));
    }
    lines
}

fn not_found_lines(path: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(format!("Nothing lives at {path}")),
        Line::default(),
        dim("Pick a page with 1-4 or Tab, or press / to type another address."),
    ]
}

/// Format an RFC 3339 timestamp as "Jan 15 08:00" local time.
/// Anything unparseable is shown as is.
fn format_created_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Local).format("%b %d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_dashboard_counts() {
        let catalog = sample_catalog();
        let page = Page::new(View::Dashboard, &catalog, "/").with_today("2024-01-01");
        let text = text_of(&page.lines());
        assert!(text.contains("Rooms: 3 (2 offered)"));
        assert!(text.contains("Bookings: 3"));
        assert!(text.contains("2024-01-01 14:00  Board Room  bob"));
    }

    #[test]
    fn test_dashboard_leaves_out_past_bookings() {
        let catalog = sample_catalog();
        let page = Page::new(View::Dashboard, &catalog, "/").with_today("2024-01-02");
        let text = text_of(&page.lines());
        assert!(!text.contains("Board Room"));
        assert!(text.contains("2024-01-02 09:00  Room A  alice"));

        let page = Page::new(View::Dashboard, &catalog, "/").with_today("2099-01-01");
        assert!(text_of(&page.lines()).contains("Nothing booked from today on."));
    }

    #[test]
    fn test_booking_room_hides_inactive() {
        let catalog = sample_catalog();
        let text = text_of(&Page::new(View::BookingRoom, &catalog, "/booking").lines());
        assert!(text.contains("Room A"));
        assert!(text.contains("Board Room"));
        assert!(!text.contains("Lab"));
    }

    #[test]
    fn test_manage_rooms_shows_states() {
        let catalog = sample_catalog();
        let text = text_of(&Page::new(View::ManageRooms, &catalog, "/manage-rooms").lines());
        assert!(text.contains("Room A / 4 / active (default)"));
        assert!(text.contains("Lab / 10 / inactive"));
        assert!(text.contains("Board Room / 12 / active"));
    }

    #[test]
    fn test_manage_bookings_lists_all() {
        let catalog = sample_catalog();
        let lines = Page::new(View::ManageBookings, &catalog, "/manage-bookings").lines();
        // heading + one line per booking
        assert_eq!(lines.len(), 4);
        assert!(text_of(&lines).contains("Room A / alice"));
    }

    #[test]
    fn test_empty_catalog_pages() {
        let catalog = Catalog::default();
        let text = text_of(&Page::new(View::Dashboard, &catalog, "/").lines());
        assert!(text.contains("Nothing booked from today on."));
        let text = text_of(&Page::new(View::BookingRoom, &catalog, "/booking").lines());
        assert!(text.contains("No rooms are open for booking."));
    }

    #[test]
    fn test_not_found_names_path() {
        let catalog = Catalog::default();
        let text = text_of(&Page::new(View::NotFound, &catalog, "/unknown").lines());
        assert!(text.contains("Nothing lives at /unknown"));
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_ne!(format_created_at("2024-01-01T08:00:00Z"), "2024-01-01T08:00:00Z");
    }

    #[test]
    fn test_render_has_view_title() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let catalog = sample_catalog();

        terminal
            .draw(|f| {
                let area = f.area();
                Page::new(View::ManageRooms, &catalog, "/manage-rooms").render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Manage Rooms"));
    }

    fn long_catalog(rooms: usize) -> Catalog {
        let mut catalog = Catalog::default();
        for i in 0..rooms {
            catalog
                .rooms
                .push(crate::test_support::room(&format!("r{i}"), &format!("Room {i:02}"), 4));
        }
        catalog
    }

    fn render_page(page: &mut Page, height: u16) -> String {
        let backend = TestBackend::new(60, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                page.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_scroll_reveals_rows_below_the_fold() {
        let catalog = long_catalog(30);
        // 10 rows: 8 inside the border, heading + 7 rooms
        let mut page = Page::new(View::ManageRooms, &catalog, "/manage-rooms");
        let text = render_page(&mut page, 10);
        assert!(text.contains("Room 06"));
        assert!(!text.contains("Room 29"));

        let mut page = Page::new(View::ManageRooms, &catalog, "/manage-rooms").with_scroll(23);
        let text = render_page(&mut page, 10);
        assert!(text.contains("Room 29"));
        assert!(!text.contains("Room 06"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let catalog = long_catalog(30);
        let mut page = Page::new(View::ManageRooms, &catalog, "/manage-rooms").with_scroll(500);
        let text = render_page(&mut page, 10);
        // 31 lines, 8 visible
        assert_eq!(page.scroll, 23);
        assert!(text.contains("Room 29"));
    }
}
