//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: current address and status message
//! - `NavBar`: the route list with the active route highlighted
//! - `Page`: the view for the current route
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `AddressBar`: text field for typing a location
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into the
//! navigator. This keeps them testable with a `TestBackend`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(nav.current().address(), nav.status_message.clone()).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── nav_bar.rs       (Route tabs)
//! ├── pages.rs         (One renderer per view)
//! └── address_bar/     (Location input)
//! ```

pub mod address_bar;
pub mod nav_bar;
pub mod pages;
mod title_bar;

pub use address_bar::{AddressBar, AddressEvent};
pub use nav_bar::NavBar;
pub use pages::Page;
pub use title_bar::TitleBar;
