//! # HeaderBar Component
//!
//! Top app bar showing the current screen title and notifications.
//!
//! ## Responsibilities
//!
//! - Display the screen title ("HALAMAN" on home, "Detail Barang" on detail)
//! - Display status messages (e.g., "Detail: Tumbler Hijau")
//! - Show the key hints for the current screen, right-aligned
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! HeaderBar is purely presentational—it receives all data as props and has no
//! internal state. This makes it trivial to test and reason about:
//!
//! ```rust,ignore
//! let header = HeaderBar {
//!     title: "HALAMAN".to_string(),
//!     status: "Detail: Tumbler Hijau".to_string(),
//!     hint: "Esc kembali",
//! };
//! header.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! The props come from different sources:
//! - `title`: derived from the current `Screen`
//! - `status`: Core App state (set by the reducer)
//! - `hint`: TUI state (what the keys do on this screen)
//!
//! The HeaderBar doesn't care where they come from—it just renders what it's
//! given.
//!
//! ## Conditional Formatting
//!
//! 1. **With status**: `" HALAMAN | Detail: Tumbler Hijau"`
//! 2. **Default**: `" HALAMAN"`
//!
//! The hint stays pinned to the right edge in both cases.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Backdrop color shared by the header and the bottom tab strip.
pub const BAR_BG: Color = Color::Rgb(0x62, 0x00, 0xEE);

/// Top app bar component showing title, status, and key hints.
pub struct HeaderBar {
    /// Screen title (e.g., "HALAMAN")
    pub title: String,
    /// Status message (e.g., "Detail: Tumbler Hijau")
    pub status: String,
    /// Key hints for the current screen
    pub hint: &'static str,
}

impl HeaderBar {
    pub fn new(title: String, status: String, hint: &'static str) -> Self {
        Self { title, status, hint }
    }
}

impl Component for HeaderBar {
    /// Render the header as a single purple line.
    ///
    /// The area is split so the hint can be right-aligned without ever
    /// overwriting the title: title and status take what's left after
    /// the hint's exact width is reserved.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(BAR_BG).fg(Color::White);

        let hint_width = UnicodeWidthStr::width(self.hint) as u16 + 1;
        let [title_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

        let mut spans = vec![Span::styled(
            format!(" {}", self.title),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), title_area);
        frame.render_widget(
            Paragraph::new(self.hint)
                .alignment(Alignment::Right)
                .style(bar_style.add_modifier(Modifier::DIM)),
            hint_area,
        );
    }
}
