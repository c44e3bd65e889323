//! # Navigator State
//!
//! The navigation engine: the route table, the history it writes to, and the
//! one piece of mutable navigation state, the current route.
//!
//! ```text
//! Navigator
//! ├── routes: Arc<RouteTable>     // immutable, shared with the TUI
//! ├── history: Box<dyn History>   // visible address + back/forward stack
//! ├── fallback: Fallback          // policy for unmatched locations
//! ├── current: CurrentRoute       // private; only navigation changes it
//! └── status_message: String      // status bar text
//! ```
//!
//! Reducer-style callers go through `update(state, action)` in action.rs.

use log::{debug, info, warn};
use std::sync::Arc;

use crate::core::history::{History, Location};
use crate::core::route::{Fallback, RouteTable, View};

/// The route being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    pub location: Location,
    pub view: View,
    /// False when no route matched and the fallback view is shown.
    pub matched: bool,
}

impl CurrentRoute {
    /// The full address, as shown in the address bar.
    pub fn address(&self) -> String {
        self.location.to_string()
    }
}

pub struct Navigator {
    routes: Arc<RouteTable>,
    history: Box<dyn History>,
    fallback: Fallback,
    current: CurrentRoute,
    pub status_message: String,
}

impl Navigator {
    /// Builds a navigator showing whatever the history currently points at.
    ///
    /// If the initial location is unmatched and the fallback redirects, the
    /// initial history entry is replaced by the redirect target.
    pub fn new(routes: Arc<RouteTable>, history: Box<dyn History>, fallback: Fallback) -> Self {
        let initial = Location::parse(history.location());
        let mut nav = Self {
            routes,
            history,
            fallback,
            current: CurrentRoute {
                location: Location::default(),
                view: View::NotFound,
                matched: false,
            },
            status_message: String::new(),
        };
        let current = nav.resolve(&initial.to_string());
        if current.location != initial {
            nav.history.replace(&current.address());
        }
        nav.status_message = format!("Welcome! {}", current.view.title());
        nav.current = current;
        nav
    }

    pub fn current(&self) -> &CurrentRoute {
        &self.current
    }

    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// Resolves a target to the route it would display, applying the fallback.
    /// Pure: neither history nor the current route change.
    pub fn resolve(&self, target: &str) -> CurrentRoute {
        let location = Location::parse(target);
        if let Some(view) = self.routes.resolve(&location.path) {
            return CurrentRoute {
                location,
                view,
                matched: true,
            };
        }

        if let Fallback::Redirect(redirect) = &self.fallback {
            let redirected = Location::parse(redirect);
            if let Some(view) = self.routes.resolve(&redirected.path) {
                debug!("Redirecting unmatched {} to {}", location, redirected);
                return CurrentRoute {
                    location: redirected,
                    view,
                    matched: true,
                };
            }
            warn!("Redirect target {} matches no route either", redirected);
        }

        CurrentRoute {
            location,
            view: View::NotFound,
            matched: false,
        }
    }

    /// Shows the view for `target` and pushes it onto the history.
    ///
    /// Returns `false` if `target` resolves to the location already shown; no
    /// history entry is added in that case.
    pub fn navigate(&mut self, target: &str) -> bool {
        let next = self.resolve(target);
        if next.location == self.current.location {
            debug!("Already at {}", next.address());
            self.status_message = format!("Already at {}", next.address());
            return false;
        }
        self.history.push(&next.address());
        self.commit(next);
        true
    }

    /// Like [`navigate`](Self::navigate), but overwrites the current history
    /// entry instead of adding one.
    pub fn replace(&mut self, target: &str) -> bool {
        let next = self.resolve(target);
        if next.location == self.current.location {
            debug!("Already at {}", next.address());
            self.status_message = format!("Already at {}", next.address());
            return false;
        }
        self.history.replace(&next.address());
        self.commit(next);
        true
    }

    /// Moves through history by `delta` entries and shows what is there.
    pub fn go(&mut self, delta: isize) -> bool {
        if !self.history.go(delta) {
            self.status_message = if delta < 0 {
                "No earlier page".to_string()
            } else {
                "No later page".to_string()
            };
            return false;
        }
        let next = self.resolve(self.history.location());
        if next.address() != self.history.location() {
            // The fallback policy changed what this entry resolves to
            self.history.replace(&next.address());
        }
        self.commit(next);
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    fn commit(&mut self, next: CurrentRoute) {
        if next.matched {
            info!("Navigated to {} ({:?})", next.address(), next.view);
            self.status_message = next.view.title().to_string();
        } else {
            warn!("No route for {}, showing {:?}", next.address(), next.view);
            self.status_message = format!("No page at {}", next.location.path);
        }
        self.current = next;
    }
}
