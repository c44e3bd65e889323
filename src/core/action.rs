//! # Actions
//!
//! Everything that can happen to navigation becomes an `Action`.
//! User picks a tab? That's `Action::Navigate("/booking")`.
//! User presses Left? That's `Action::Back`.
//!
//! `update()` applies an action to the navigator and returns an `Effect`
//! telling the adapter what to do next. No terminal I/O here.
//!
//! ```text
//! Navigator + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::state::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    Replace(String),
    Back,
    Forward,
    Go(isize),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed except possibly the status message.
    None,
    /// The current route changed; redraw the view.
    Render,
    Quit,
}

pub fn update(nav: &mut Navigator, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let changed = match action {
        Action::Navigate(target) => nav.navigate(&target),
        Action::Replace(target) => nav.replace(&target),
        Action::Back => nav.back(),
        Action::Forward => nav.forward(),
        Action::Go(delta) => nav.go(delta),
        Action::Quit => return Effect::Quit,
    };
    if changed { Effect::Render } else { Effect::None }
}
