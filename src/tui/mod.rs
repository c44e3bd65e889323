//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current view,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Navigation is synchronous, so the loop only redraws after an event. While
//! idle it sleeps up to 500ms per poll.
//!
//! Switching views never tears the terminal down: `update()` swaps the current
//! route and the next frame draws the new page in place.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::Arc;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::{Catalog, load_catalog};
use crate::core::config::ResolvedConfig;
use crate::core::history::MemoryHistory;
use crate::core::route::RouteTable;
use crate::core::state::Navigator;
use crate::tui::component::EventHandler;
use crate::tui::components::{AddressBar, AddressEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub enum InputMode {
    /// Single keys switch pages and move through history.
    Browse,
    /// Keys go to the address bar.
    Address,
}

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub address_bar: AddressBar,
    pub input_mode: InputMode,
    /// Lines scrolled off the top of the page. Reset on every route change.
    pub page_scroll: u16,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            address_bar: AddressBar::new(),
            input_mode: InputMode::Browse,
            page_scroll: 0,
        }
    }
}

/// Lines moved by PageUp / PageDown.
const PAGE_SCROLL_STEP: u16 = 10;

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the navigator from a resolved config.
/// A config notice replaces the welcome message.
pub fn build_navigator(config: &ResolvedConfig) -> Navigator {
    let mut nav = Navigator::new(
        Arc::new(RouteTable::default()),
        Box::new(MemoryHistory::new(&config.start_path)),
        config.fallback.clone(),
    );
    if let Some(notice) = &config.notice {
        nav.status_message = notice.clone();
    }
    nav
}

/// Status shown on the first frame: config and catalog problems, if any.
fn startup_status(config_notice: Option<&str>, catalog_status: &str) -> Option<String> {
    match (config_notice, catalog_status.is_empty()) {
        (Some(notice), false) => Some(format!("{notice}; {catalog_status}")),
        (Some(notice), true) => Some(notice.to_string()),
        (None, false) => Some(catalog_status.to_string()),
        (None, true) => None,
    }
}

/// Load the catalog named in the config. A missing setting means an empty
/// catalog; a broken file is logged and reported through `status`.
fn build_catalog(data_file: Option<&Path>, status: &mut String) -> Catalog {
    let Some(path) = data_file else {
        info!("No data file configured, starting with an empty catalog");
        return Catalog::default();
    };
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("Failed to load catalog {}: {}", path.display(), e);
            *status = format!("Data not loaded: {e}");
            Catalog::default()
        }
    }
}

/// Target of the route `offset` places away from the current one, wrapping
/// around the table. From an unmatched location, forward starts at the first
/// route and backward at the last.
fn cycle_route(nav: &Navigator, offset: isize) -> Option<String> {
    let routes = nav.routes().routes();
    if routes.is_empty() {
        return None;
    }
    let len = routes.len() as isize;
    let next = match nav.routes().position(&nav.current().location.path) {
        Some(i) => (i as isize + offset).rem_euclid(len),
        None if offset >= 0 => 0,
        None => len - 1,
    };
    Some(routes[next as usize].path.clone())
}

/// Apply one terminal event to the navigator and TUI state.
pub fn handle_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let before = nav.current().address();
    let effect = dispatch(nav, tui, event);
    if nav.current().address() != before {
        tui.page_scroll = 0;
    }
    effect
}

fn dispatch(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // ForceQuit (Ctrl+C) always quits regardless of mode
    if matches!(event, TuiEvent::ForceQuit) {
        return update(nav, Action::Quit);
    }
    // Scroll events go to the page regardless of mode; the renderer clamps
    let scrolled = match event {
        TuiEvent::ScrollUp => Some(tui.page_scroll.saturating_sub(1)),
        TuiEvent::ScrollDown => Some(tui.page_scroll.saturating_add(1)),
        TuiEvent::ScrollPageUp => Some(tui.page_scroll.saturating_sub(PAGE_SCROLL_STEP)),
        TuiEvent::ScrollPageDown => Some(tui.page_scroll.saturating_add(PAGE_SCROLL_STEP)),
        _ => None,
    };
    if let Some(offset) = scrolled {
        tui.page_scroll = offset;
        return Effect::Render;
    }
    // History keys work in both modes
    match event {
        TuiEvent::HistoryBack => return update(nav, Action::Back),
        TuiEvent::HistoryForward => return update(nav, Action::Forward),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Address => match tui.address_bar.handle_event(&event) {
            Some(AddressEvent::Submit(target)) => {
                tui.input_mode = InputMode::Browse;
                update(nav, Action::Navigate(target))
            }
            Some(AddressEvent::Cancel) => {
                tui.input_mode = InputMode::Browse;
                Effect::Render
            }
            Some(AddressEvent::ContentChanged) => Effect::Render,
            None => Effect::None,
        },
        InputMode::Browse => match event {
            TuiEvent::InputChar('q') => update(nav, Action::Quit),
            TuiEvent::InputChar(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match nav.routes().routes().get(index) {
                    Some(route) => {
                        let path = route.path.clone();
                        update(nav, Action::Navigate(path))
                    }
                    None => Effect::None,
                }
            }
            TuiEvent::InputChar('/') => {
                tui.address_bar.open_with("/");
                tui.input_mode = InputMode::Address;
                Effect::Render
            }
            TuiEvent::InputChar(':') => {
                tui.address_bar.open_with(&nav.current().address());
                tui.input_mode = InputMode::Address;
                Effect::Render
            }
            TuiEvent::NextRoute | TuiEvent::PrevRoute => {
                let offset = if matches!(event, TuiEvent::NextRoute) { 1 } else { -1 };
                match cycle_route(nav, offset) {
                    Some(path) => update(nav, Action::Navigate(path)),
                    None => Effect::None,
                }
            }
            TuiEvent::CursorLeft => update(nav, Action::Back),
            TuiEvent::CursorRight => update(nav, Action::Forward),
            _ => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut nav = build_navigator(&config);
    let mut status = String::new();
    let catalog = build_catalog(config.data_file.as_deref(), &mut status);
    if let Some(message) = startup_status(config.notice.as_deref(), &status) {
        nav.status_message = message;
    }
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    info!("Started at {}", nav.current().address());

    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &nav, &catalog, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                needs_redraw = true;
                continue;
            }
            // Status messages change even when the route does not
            needs_redraw = true;
            if handle_event(&mut nav, &mut tui, event) == Effect::Quit {
                break 'event_loop;
            }
        }
    }

    info!("Exiting at {}", nav.current().address());
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::History;
    use crate::core::route::{Fallback, View};
    use crate::test_support::{navigator_at, test_navigator};

    fn press(nav: &mut Navigator, tui: &mut TuiState, events: Vec<TuiEvent>) -> Effect {
        let mut last = Effect::None;
        for event in events {
            last = handle_event(nav, tui, event);
        }
        last
    }

    #[test]
    fn test_number_keys_pick_routes() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::InputChar('2')),
            Effect::Render
        );
        assert_eq!(nav.current().view, View::BookingRoom);
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('4'));
        assert_eq!(nav.current().view, View::ManageRooms);
        // No fifth route
        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::InputChar('5')),
            Effect::None
        );
    }

    #[test]
    fn test_tab_wraps_around() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        handle_event(&mut nav, &mut tui, TuiEvent::PrevRoute);
        assert_eq!(nav.current().view, View::ManageRooms);
        handle_event(&mut nav, &mut tui, TuiEvent::NextRoute);
        assert_eq!(nav.current().view, View::Dashboard);
        handle_event(&mut nav, &mut tui, TuiEvent::NextRoute);
        assert_eq!(nav.current().view, View::BookingRoom);
    }

    #[test]
    fn test_tab_from_not_found() {
        let mut nav = navigator_at("/nope", Fallback::NotFound);
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::NextRoute);
        assert_eq!(nav.current().view, View::Dashboard);

        let mut nav = navigator_at("/nope", Fallback::NotFound);
        handle_event(&mut nav, &mut tui, TuiEvent::PrevRoute);
        assert_eq!(nav.current().view, View::ManageRooms);
    }

    #[test]
    fn test_arrows_move_through_history() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('3'));

        handle_event(&mut nav, &mut tui, TuiEvent::CursorLeft);
        assert_eq!(nav.current().view, View::Dashboard);
        handle_event(&mut nav, &mut tui, TuiEvent::CursorRight);
        assert_eq!(nav.current().view, View::ManageBookings);
        handle_event(&mut nav, &mut tui, TuiEvent::HistoryBack);
        assert_eq!(nav.current().view, View::Dashboard);
    }

    #[test]
    fn test_address_bar_navigates() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        let mut events = vec![TuiEvent::InputChar('/')];
        events.extend("manage-rooms".chars().map(TuiEvent::InputChar));
        events.push(TuiEvent::Submit);

        assert_eq!(press(&mut nav, &mut tui, events), Effect::Render);
        assert_eq!(nav.current().view, View::ManageRooms);
        assert_eq!(nav.history().location(), "/manage-rooms");
        assert!(matches!(tui.input_mode, InputMode::Browse));
    }

    #[test]
    fn test_typing_q_in_address_bar_does_not_quit() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();
        let effect = press(
            &mut nav,
            &mut tui,
            vec![TuiEvent::InputChar('/'), TuiEvent::InputChar('q')],
        );
        assert_eq!(effect, Effect::Render);
        assert_eq!(tui.address_bar.buffer, "/q");
    }

    #[test]
    fn test_address_bar_escape_keeps_route() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();
        press(
            &mut nav,
            &mut tui,
            vec![TuiEvent::InputChar(':'), TuiEvent::InputChar('x'), TuiEvent::Escape],
        );
        assert!(matches!(tui.input_mode, InputMode::Browse));
        assert_eq!(nav.current().view, View::Dashboard);
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn test_colon_prefills_current_address() {
        let mut nav = test_navigator();
        nav.navigate("/booking?room=r1");
        let mut tui = TuiState::new();
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar(':'));
        assert_eq!(tui.address_bar.buffer, "/booking?room=r1");
    }

    #[test]
    fn test_quit_keys() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::InputChar('q')),
            Effect::Quit
        );
        tui.input_mode = InputMode::Address;
        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_build_catalog_reports_missing_file() {
        let mut status = String::new();
        let catalog = build_catalog(
            Some(Path::new("/definitely/not/here/rooms.json")),
            &mut status,
        );
        assert_eq!(catalog, Catalog::default());
        assert!(status.starts_with("Data not loaded"));

        let mut status = String::new();
        build_catalog(None, &mut status);
        assert!(status.is_empty());
    }

    #[test]
    fn test_build_navigator_uses_config() {
        let config = ResolvedConfig {
            start_path: "/manage-bookings".to_string(),
            fallback: Fallback::NotFound,
            data_file: None,
            notice: None,
        };
        let nav = build_navigator(&config);
        assert_eq!(nav.current().view, View::ManageBookings);
        assert_eq!(nav.status_message, "Welcome! Manage Bookings");
    }

    #[test]
    fn test_config_notice_becomes_status() {
        let config = ResolvedConfig {
            start_path: "/".to_string(),
            fallback: Fallback::NotFound,
            data_file: None,
            notice: Some("Using default settings (config parse error)".to_string()),
        };
        let nav = build_navigator(&config);
        assert_eq!(nav.current().view, View::Dashboard);
        assert_eq!(
            nav.status_message,
            "Using default settings (config parse error)"
        );
    }

    #[test]
    fn test_startup_status_keeps_both_problems() {
        assert_eq!(startup_status(None, ""), None);
        assert_eq!(
            startup_status(Some("bad config"), ""),
            Some("bad config".to_string())
        );
        assert_eq!(
            startup_status(None, "Data not loaded: x"),
            Some("Data not loaded: x".to_string())
        );
        assert_eq!(
            startup_status(Some("bad config"), "Data not loaded: x"),
            Some("bad config; Data not loaded: x".to_string())
        );
    }

    #[test]
    fn test_scroll_keys_move_page_in_both_modes() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();

        assert_eq!(
            handle_event(&mut nav, &mut tui, TuiEvent::ScrollUp),
            Effect::Render
        );
        assert_eq!(tui.page_scroll, 0);
        handle_event(&mut nav, &mut tui, TuiEvent::ScrollPageDown);
        handle_event(&mut nav, &mut tui, TuiEvent::ScrollDown);
        assert_eq!(tui.page_scroll, PAGE_SCROLL_STEP + 1);

        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('/'));
        handle_event(&mut nav, &mut tui, TuiEvent::ScrollPageUp);
        assert_eq!(tui.page_scroll, 1);
        assert_eq!(tui.address_bar.buffer, "/");
    }

    #[test]
    fn test_route_change_resets_scroll() {
        let mut nav = test_navigator();
        let mut tui = TuiState::new();
        tui.page_scroll = 7;

        // Unhandled key keeps the offset
        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('x'));
        assert_eq!(tui.page_scroll, 7);

        handle_event(&mut nav, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(tui.page_scroll, 0);
    }
}
