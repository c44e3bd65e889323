//! # Route Table
//!
//! Maps URL paths to the view that renders at that path.
//!
//! ```text
//! /                 → Dashboard
//! /booking          → BookingRoom
//! /manage-bookings  → ManageBookings
//! /manage-rooms     → ManageRooms
//! ```
//!
//! Matching is exact and case-sensitive, first match in table order wins.
//! No parameters, no nesting, no guards. `/booking/` does not match `/booking`.
//!
//! The table is built once and never changes. The navigator holds it behind an
//! `Arc`, so there is no global route state to reset between tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A page-level view. The router only names them; rendering lives in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    BookingRoom,
    ManageBookings,
    ManageRooms,
    /// Shown for locations no route matches (unless a redirect is configured).
    NotFound,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::BookingRoom => "Book a Room",
            View::ManageBookings => "Manage Bookings",
            View::ManageRooms => "Manage Rooms",
            View::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: View,
}

impl Route {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// What to do when a location matches no route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Keep the requested location and show [`View::NotFound`].
    #[default]
    NotFound,
    /// Record the given location instead and show whatever it resolves to.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    EmptyPath,
    MissingLeadingSlash(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::EmptyPath => write!(f, "route path is empty"),
            RouteError::MissingLeadingSlash(p) => {
                write!(f, "route path {p:?} must start with '/'")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Ordered, immutable list of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for route in &routes {
            if route.path.is_empty() {
                return Err(RouteError::EmptyPath);
            }
            if !route.path.starts_with('/') {
                return Err(RouteError::MissingLeadingSlash(route.path.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// The view bound to the first route whose path equals `path`.
    pub fn resolve(&self, path: &str) -> Option<View> {
        self.routes.iter().find(|r| r.path == path).map(|r| r.view)
    }

    /// Index of the first route whose path equals `path`.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new("/", View::Dashboard),
                Route::new("/booking", View::BookingRoom),
                Route::new("/manage-bookings", View::ManageBookings),
                Route::new("/manage-rooms", View::ManageRooms),
            ],
        }
    }
}
