//! # Actions
//!
//! Everything that can happen in Halaman becomes an `Action`.
//! User presses Enter on a card? That's `Action::OpenDetail(id)`.
//! User presses Esc on the detail screen? That's `Action::GoBack`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the caller to run.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.
//! And debuggable: log every action, replay the exact session.

use log::warn;

use crate::core::catalog::ItemId;
use crate::core::nav::Tab;
use crate::core::state::App;

/// Everything the UI can ask the core to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the detail screen for one item. Applied even when the id
    /// does not resolve in the catalog; the detail screen then shows an
    /// empty body instead of failing.
    OpenDetail(ItemId),
    /// Leave the detail screen. A no-op when home is already showing.
    GoBack,
    /// Highlight a bottom tab. Only the home tab leads anywhere.
    SwitchTab(Tab),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: apply `action` to `state`, hand back an [`Effect`].
pub fn update(state: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenDetail(id) => {
            match state.catalog.get(id) {
                Some(item) => {
                    state.status_message = format!("Detail: {}", item.name);
                }
                None => {
                    // Navigation still happens; the detail body renders empty.
                    warn!("OpenDetail for id {} not present in catalog", id.raw());
                    state.status_message = String::from("Barang tidak ditemukan");
                }
            }
            state.nav.to_detail(id);
            Effect::None
        }
        Action::GoBack => {
            state.nav.back();
            Effect::None
        }
        Action::SwitchTab(tab) => {
            state.nav.select_tab(tab);
            if !tab.is_implemented() {
                state.status_message = format!("{} belum tersedia", tab.label());
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
