//! # HomeList Component
//!
//! Scrollable view of the item catalog, one card per entry.
//!
//! ## Responsibilities
//!
//! - Display the catalog as a vertical stack of `ItemCard`s
//! - Track which card is selected (keyboard navigation)
//! - Manage scrolling so the selection stays visible
//!
//! ## Architecture
//!
//! `HomeList` is a transient component (created each frame) that wraps
//! `&'a mut HomeListState` (persistent state) and the `Catalog` (props).
//!
//! Since `Component::render` takes `&mut self`, we can safely mutate the
//! state (selection clamping and scroll offset) during the render pass,
//! aligning with Ratatui's `StatefulWidget` pattern.
//!
//! Cards are fixed-height, so all scroll positions are plain multiples
//! of `CARD_HEIGHT` — no per-item layout cache is needed.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Catalog;
use crate::tui::assets;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::item_card::{CARD_HEIGHT, ItemCard};
use crate::tui::event::TuiEvent;

/// Selection and scroll state for the home list.
/// Must be persisted in the parent TuiState.
pub struct HomeListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Index of the selected card
    pub selected: usize,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for HomeListState {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            viewport_height: 0,
        }
    }

    /// Move the selection one card up and keep it visible.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selected();
    }

    /// Move the selection one card down and keep it visible.
    pub fn select_next(&mut self, item_count: usize) {
        if self.selected + 1 < item_count {
            self.selected += 1;
        }
        self.scroll_to_selected();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last card.
    pub fn clamp_scroll(&mut self, item_count: usize) {
        let total_content_height = item_count as u16 * CARD_HEIGHT;
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the viewport is shorter than a card, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let card_top = self.selected as u16 * CARD_HEIGHT;
        let card_bottom = card_top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if card_top < offset_y {
            // Selected card is above the viewport — scroll up to show its top
            self.scroll_state.set_offset(Position { x: 0, y: card_top });
        } else if card_bottom > offset_y + self.viewport_height {
            // Selected card is below the viewport — scroll down to show its bottom
            let new_y = card_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

/// EventHandler is implemented on `HomeListState` rather than `HomeList`
/// because event handling needs state that outlives the frame, and
/// `HomeList` is recreated each frame with fresh props.
impl EventHandler for HomeListState {
    type Event = (); // Scrolling is handled internally; selection events come from the loop

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// Scrollable catalog view component.
/// Created fresh each frame with references to state and data.
pub struct HomeList<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut HomeListState,
    pub catalog: &'a Catalog,
    pub show_thumbnails: bool,
}

impl<'a> HomeList<'a> {
    pub fn new(state: &'a mut HomeListState, catalog: &'a Catalog, show_thumbnails: bool) -> Self {
        Self {
            state,
            catalog,
            show_thumbnails,
        }
    }
}

impl<'a> Component for HomeList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = self.catalog.items();

        if items.is_empty() {
            let placeholder = Paragraph::new("Belum ada barang ditemukan.")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let total_height = items.len() as u16 * CARD_HEIGHT;

        // Clamp state against the current catalog and viewport
        self.state.selected = self.state.selected.min(items.len() - 1);
        self.state.viewport_height = area.height;
        self.state.clamp_scroll(items.len());

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Fixed card heights make the visible range plain arithmetic
        let scroll_offset = self.state.scroll_state.offset().y;
        let first = (scroll_offset / CARD_HEIGHT) as usize;
        let last = (scroll_offset.saturating_add(area.height).div_ceil(CARD_HEIGHT) as usize)
            .min(items.len());

        for (i, item) in items.iter().enumerate().take(last).skip(first) {
            let card_rect = Rect::new(0, i as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            let card = ItemCard::new(
                item,
                assets::resolve(item.image),
                i == self.state.selected,
                self.show_thumbnails,
            );
            scroll_view.render_widget(card, card_rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::sample_catalog;
    use crate::test_support::tiny_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(catalog: &Catalog, state: &mut HomeListState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                HomeList::new(state, catalog, true).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_all_cards_render_in_catalog_order() {
        let catalog = sample_catalog();
        let mut state = HomeListState::new();
        // Tall enough for all five cards
        let text = render_to_text(&catalog, &mut state, 60, 30);

        let mut last_pos = 0;
        for item in catalog.items() {
            let pos = text
                .find(&item.name)
                .unwrap_or_else(|| panic!("{} not rendered", item.name));
            assert!(pos > last_pos, "{} out of order", item.name);
            last_pos = pos;
        }
    }

    #[test]
    fn test_empty_catalog_shows_placeholder() {
        let catalog = Catalog::new([]);
        let mut state = HomeListState::new();
        let text = render_to_text(&catalog, &mut state, 60, 10);

        assert!(text.contains("Belum ada barang ditemukan."));
    }

    #[test]
    fn test_selection_stops_at_both_ends() {
        let mut state = HomeListState::new();
        state.viewport_height = 30;

        state.select_prev();
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.select_next(3);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_scrolls_the_viewport() {
        let mut state = HomeListState::new();
        // Viewport shows two cards, catalog has three
        state.viewport_height = 2 * CARD_HEIGHT;

        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);
        // Third card's bottom edge pulled into view
        assert_eq!(state.scroll_state.offset().y, CARD_HEIGHT);

        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let catalog = tiny_catalog();
        let mut state = HomeListState::new();
        state.scroll_state.set_offset(Position { x: 0, y: 500 });

        // Render clamps the runaway offset back to the last card
        render_to_text(&catalog, &mut state, 60, 10);
        let max_y = catalog.items().len() as u16 * CARD_HEIGHT - 10;
        assert_eq!(state.scroll_state.offset().y, max_y);
    }

    #[test]
    fn test_wheel_scrolling_moves_offset() {
        let mut state = HomeListState::new();
        state.handle_event(&TuiEvent::ScrollDown);
        state.handle_event(&TuiEvent::ScrollDown);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.scroll_state.offset().y, 1);
    }
}
