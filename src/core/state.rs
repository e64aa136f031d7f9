//! # Application State
//!
//! Core business state for Halaman. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // the items on display
//! ├── nav: Nav                  // which screen / which tab
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::Catalog;
use crate::core::nav::Nav;

pub struct App {
    pub catalog: Catalog,
    pub nav: Nav,
    pub status_message: String,
}

impl App {
    /// The catalog is injected rather than loaded here, so tests can
    /// run the whole app against a handful of fixture items.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            nav: Nav::default(),
            status_message: String::from("Selamat datang di HALAMAN!"),
        }
    }
}
