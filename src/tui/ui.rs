use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::catalog::Catalog;
use crate::core::state::Navigator;
use crate::tui::component::Component;
use crate::tui::components::address_bar::ADDRESS_BAR_HEIGHT;
use crate::tui::components::{NavBar, Page, TitleBar};
use crate::tui::{InputMode, TuiState};

const BROWSE_HELP: &str =
    " 1-4 / Tab pages   ← → back/forward   ↑ ↓ scroll   / or : address   q quit ";

/// Lays out one frame:
///
/// ```text
/// ┌ title bar ─────────────────────────┐ 1 line
/// │ nav bar                            │ 1 line
/// │ page                               │ rest
/// │ address bar | help line            │ 3 lines | 1 line
/// └────────────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, nav: &Navigator, catalog: &Catalog, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let bottom_height = match tui.input_mode {
        InputMode::Address => ADDRESS_BAR_HEIGHT,
        InputMode::Browse => 1,
    };
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(bottom_height)]);
    let [title_area, nav_area, page_area, bottom_area] = layout.areas(frame.area());

    let current = nav.current();
    let address = current.address();

    TitleBar::new(address, nav.status_message.clone()).render(frame, title_area);

    let active = nav.routes().position(&current.location.path);
    NavBar::new(nav.routes().routes(), active).render(frame, nav_area);

    let mut page =
        Page::new(current.view, catalog, &current.location.path).with_scroll(tui.page_scroll);
    page.render(frame, page_area);
    tui.page_scroll = page.scroll;

    match tui.input_mode {
        InputMode::Address => tui.address_bar.render(frame, bottom_area),
        InputMode::Browse => {
            let help = Line::styled(BROWSE_HELP, Style::default().fg(Color::DarkGray));
            frame.render_widget(help, bottom_area);
        }
    }
}
