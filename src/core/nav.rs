//! # Navigation
//!
//! A deliberately small navigation model: there are exactly two
//! screens, and "history" is the single fact of which one is showing.
//! Going back from the detail screen always lands on home; going back
//! from home does nothing.

use crate::core::catalog::ItemId;

/// Which screen is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The scrollable item list.
    Home,
    /// Detail view for one item. The id is carried as-is; whether it
    /// resolves in the catalog is the renderer's problem.
    Detail(ItemId),
}

/// Entries of the bottom tab strip.
///
/// Only [`Tab::Home`] is wired to a screen; the other three are
/// placeholders for features that do not exist yet. They stay visible
/// and selectable so the strip reads like the finished product, but
/// selecting one changes nothing beyond the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Map,
    Report,
    Status,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Map, Tab::Report, Tab::Status];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Map => "Map",
            Tab::Report => "Report",
            Tab::Status => "Status",
        }
    }

    /// Whether the tab leads anywhere. Everything except home is a
    /// not-yet-implemented stub.
    pub fn is_implemented(self) -> bool {
        matches!(self, Tab::Home)
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Tab {
        match self {
            Tab::Home => Tab::Map,
            Tab::Map => Tab::Report,
            Tab::Report => Tab::Status,
            Tab::Status => Tab::Home,
        }
    }
}

/// Current navigation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nav {
    pub screen: Screen,
    pub active_tab: Tab,
}

impl Default for Nav {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            active_tab: Tab::Home,
        }
    }
}

impl Nav {
    /// Switch to the detail screen for `id`. Unconditional: the id is
    /// not checked against the catalog here.
    pub fn to_detail(&mut self, id: ItemId) {
        self.screen = Screen::Detail(id);
    }

    /// Return to home. A no-op when home is already showing.
    pub fn back(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
