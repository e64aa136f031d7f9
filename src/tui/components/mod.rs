//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `HeaderBar`: Top app bar showing title, status and key hints
//! - `TabBar`: Bottom navigation strip (only Home is functional)
//! - `ItemCard`: One catalog entry as a bordered card
//! - `DetailScreen`: Full artwork, name and description of one item
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `HomeList`: Scrollable card list with selection tracking
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. For example, `HomeList` renders one
//! `ItemCard` per catalog entry. This mirrors React's component model.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! **Why:** Makes components self-contained and easy to understand. You can
//! read one file to understand how a component works, rather than jumping
//! between multiple files.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header_bar.rs    (Top app bar)
//! ├── tab_bar.rs       (Bottom navigation strip)
//! ├── item_card.rs     (Single catalog card)
//! ├── home_list.rs     (Scrollable card container)
//! └── detail.rs        (Item detail view)
//! ```

// Re-export components
pub mod detail;
pub mod header_bar;
pub mod home_list;
pub mod item_card;
pub mod tab_bar;

pub use detail::DetailScreen;
pub use header_bar::HeaderBar;
pub use home_list::{HomeList, HomeListState};
pub use tab_bar::TabBar;
