//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (mobile,
//! web, etc.) in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//! nothing animates here, so the loop sleeps up to 250ms in `poll` and
//! only redraws after events or terminal resize. All pending events are
//! drained before the next draw so a burst of key presses costs one
//! frame, not one frame each.

mod assets;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::nav::{Screen, Tab};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::HomeListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub home: HomeListState,
    // UI options from config
    pub show_thumbnails: bool,
}

impl TuiState {
    pub fn new(show_thumbnails: bool) -> Self {
        Self {
            home: HomeListState::new(),
            show_thumbnails,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(catalog: Catalog, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(catalog);
    let mut tui = TuiState::new(config.show_thumbnails);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            // Scroll events go straight to the home list
            if matches!(
                tui_event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                if app.nav.screen == Screen::Home {
                    tui.home.handle_event(&tui_event);
                }
                continue;
            }

            // Per-screen key dispatch
            let action = match app.nav.screen {
                Screen::Home => handle_home_event(&tui_event, &app, &mut tui),
                Screen::Detail(_) => handle_detail_event(&tui_event),
            };

            if let Some(action) = action {
                debug!("Dispatching {:?}", action);
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Keys on the home screen. Selection movement stays inside the TUI;
/// everything else becomes an Action for the reducer.
fn handle_home_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::CursorUp => {
            tui.home.select_prev();
            None
        }
        TuiEvent::CursorDown => {
            tui.home.select_next(app.catalog.len());
            None
        }
        TuiEvent::Submit => {
            let item = app.catalog.items().get(tui.home.selected)?;
            Some(Action::OpenDetail(item.id))
        }
        TuiEvent::SelectTab(index) => Tab::ALL.get(*index).copied().map(Action::SwitchTab),
        TuiEvent::NextTab => Some(Action::SwitchTab(app.nav.active_tab.next())),
        // Back on home is the reducer's documented no-op
        TuiEvent::Back => Some(Action::GoBack),
        _ => None,
    }
}

/// Keys on the detail screen: back out or quit, nothing else.
fn handle_detail_event(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Back => Some(Action::GoBack),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_submit_opens_detail_for_selected_card() {
        let app = test_app();
        let mut tui = TuiState::new(true);
        tui.home.selected = 1;

        let action = handle_home_event(&TuiEvent::Submit, &app, &mut tui);
        assert_eq!(action, Some(Action::OpenDetail(app.catalog.items()[1].id)));
    }

    #[test]
    fn test_submit_on_empty_catalog_is_ignored() {
        let app = App::new(Catalog::new([]));
        let mut tui = TuiState::new(true);

        assert_eq!(handle_home_event(&TuiEvent::Submit, &app, &mut tui), None);
    }

    #[test]
    fn test_cursor_keys_move_selection_without_actions() {
        let app = test_app();
        let mut tui = TuiState::new(true);

        assert_eq!(
            handle_home_event(&TuiEvent::CursorDown, &app, &mut tui),
            None
        );
        assert_eq!(tui.home.selected, 1);
        assert_eq!(handle_home_event(&TuiEvent::CursorUp, &app, &mut tui), None);
        assert_eq!(tui.home.selected, 0);
    }

    #[test]
    fn test_tab_keys_map_to_switch_tab() {
        let app = test_app();
        let mut tui = TuiState::new(true);

        assert_eq!(
            handle_home_event(&TuiEvent::SelectTab(2), &app, &mut tui),
            Some(Action::SwitchTab(Tab::Report))
        );
        // Out-of-range digits fall through
        assert_eq!(
            handle_home_event(&TuiEvent::SelectTab(7), &app, &mut tui),
            None
        );
        assert_eq!(
            handle_home_event(&TuiEvent::NextTab, &app, &mut tui),
            Some(Action::SwitchTab(Tab::Map))
        );
    }

    #[test]
    fn test_detail_keys_back_and_quit_only() {
        assert_eq!(handle_detail_event(&TuiEvent::Back), Some(Action::GoBack));
        assert_eq!(handle_detail_event(&TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(handle_detail_event(&TuiEvent::CursorDown), None);
        assert_eq!(handle_detail_event(&TuiEvent::NextTab), None);
    }
}
