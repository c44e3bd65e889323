//! # Core Application Logic
//!
//! Routing, navigation and the data the views show.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RouteTable (paths)   │
//!                    │  • Navigator (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  History   │      │  (memory   │
//!     │ (ratatui)  │      │  (future)  │      │  history)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: `RouteTable`, `View` and the unmatched-path `Fallback`
//! - [`history`]: the `History` seam, `MemoryHistory` and `Location`
//! - [`state`]: the `Navigator`, owner of the current route
//! - [`action`]: the `Action` enum and `update()`
//! - [`types`]: `Room` and `Booking`
//! - [`catalog`]: read-only rooms/bookings snapshot for the views
//! - [`config`]: file/env/CLI configuration

pub mod action;
pub mod catalog;
pub mod config;
pub mod history;
pub mod route;
pub mod state;
pub mod types;
