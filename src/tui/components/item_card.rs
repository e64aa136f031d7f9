use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::Item;
use crate::tui::assets::{Artwork, THUMB_COLS};

/// Fixed height of one card: 2 border rows + 3 content rows.
pub const CARD_HEIGHT: u16 = 5;

/// Horizontal padding (per side) between the border and card content.
const CONTENT_PAD_H: u16 = 1;
/// Description lines shown below the name row.
const PREVIEW_LINES: usize = 2;

/// Label on the per-card action, mirroring the "view" button on each row.
const ACTION_LABEL: &str = "Lihat ▸";

/// One entry of the home list: thumbnail, name, a short description
/// preview and the view action.
///
/// # Design
///
/// `ItemCard` is a **transient component**: created fresh each frame for
/// each visible catalog entry. Selection is a prop—the parent `HomeList`
/// tracks which index is selected persistently.
///
/// Cards are fixed-height ([`CARD_HEIGHT`]), which keeps the scroll math
/// in `HomeList` to plain arithmetic.
#[derive(Clone, Copy)]
pub struct ItemCard<'a> {
    pub item: &'a Item,
    /// Resolved artwork; `None` leaves the thumbnail slot empty.
    pub artwork: Option<&'static Artwork>,
    pub is_selected: bool,
    pub show_thumbnail: bool,
}

impl<'a> ItemCard<'a> {
    pub fn new(
        item: &'a Item,
        artwork: Option<&'static Artwork>,
        is_selected: bool,
        show_thumbnail: bool,
    ) -> Self {
        Self {
            item,
            artwork,
            is_selected,
            show_thumbnail,
        }
    }
}

/// Wrap `description` to `width` and keep at most `max_lines` lines,
/// marking a cut with a trailing "...".
///
/// The wrapping options match Ratatui's `Paragraph` so the preview reads
/// the same as the full text would at this width.
fn preview(description: &str, width: u16, max_lines: usize) -> Vec<String> {
    let content = description.trim();
    if content.is_empty() || width == 0 {
        return Vec::new();
    }

    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    let lines = textwrap::wrap(content, options);

    let mut out: Vec<String> = lines
        .iter()
        .take(max_lines)
        .map(|line| line.to_string())
        .collect();

    if lines.len() > max_lines
        && let Some(last) = out.last_mut()
    {
        let keep = truncate_to_width(last, width.saturating_sub(3) as usize).len();
        last.truncate(keep);
        last.push_str("...");
    }

    out
}

/// Longest prefix of `text` that fits in `max_width` display cells.
fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (byte_index, ch) in text.char_indices() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + char_width > max_width {
            return &text[..byte_index];
        }
        used += char_width;
    }
    text
}

impl<'a> Widget for ItemCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let accent = self.artwork.map_or(Color::Gray, |art| art.accent);

        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Thumbnail column on the left, text column on the right
        let text_area = if self.show_thumbnail {
            let [thumb_area, text_area] =
                Layout::horizontal([Constraint::Length(THUMB_COLS + 1), Constraint::Min(0)])
                    .areas(inner);

            if let Some(art) = self.artwork {
                let lines: Vec<Line> = art.thumb.iter().map(|row| Line::from(*row)).collect();
                Paragraph::new(lines)
                    .style(Style::default().fg(art.accent))
                    .render(thumb_area, buf);
            }
            text_area
        } else {
            inner
        };
        if text_area.width == 0 {
            return;
        }

        // Name row with the action label pinned right
        let name_row = Rect { height: 1, ..text_area };
        let action_width = UnicodeWidthStr::width(ACTION_LABEL) as u16;
        let [name_area, action_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(action_width)])
                .areas(name_row);

        Paragraph::new(Span::styled(
            self.item.name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .render(name_area, buf);

        let action_style = if self.is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        Paragraph::new(Span::styled(ACTION_LABEL, action_style)).render(action_area, buf);

        // Description preview under the name
        let preview_area = Rect {
            y: text_area.y + 1,
            height: text_area.height.saturating_sub(1),
            ..text_area
        };
        let lines: Vec<Line> = preview(&self.item.description, preview_area.width, PREVIEW_LINES)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .render(preview_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ImageRef;
    use crate::core::catalog::sample_catalog;
    use crate::tui::assets;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    // ==========================================================================
    // preview tests
    // ==========================================================================

    #[test]
    fn preview_empty_description_is_empty() {
        assert!(preview("", 30, PREVIEW_LINES).is_empty());
        assert!(preview("   ", 30, PREVIEW_LINES).is_empty());
    }

    #[test]
    fn preview_zero_width_is_empty() {
        assert!(preview("Ukuran 38", 0, PREVIEW_LINES).is_empty());
    }

    #[test]
    fn preview_short_text_is_untouched() {
        let lines = preview("Ukuran 38", 30, PREVIEW_LINES);
        assert_eq!(lines, vec!["Ukuran 38".to_string()]);
    }

    #[test]
    fn preview_long_text_is_cut_with_ellipsis() {
        let text = "Terakhir kali saya memakai tumbler ini adalah sekitar jam \
                    12.50 di FEB, selepas sholat dhuhr dan hendak menuju kelas.";
        let lines = preview(text, 20, PREVIEW_LINES);

        assert_eq!(lines.len(), PREVIEW_LINES);
        assert!(lines[1].ends_with("..."));
        // Never wider than the column it goes into
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 20);
        }
    }

    #[test]
    fn preview_exact_fit_gets_no_ellipsis() {
        // Wraps to exactly two lines at width 10
        let lines = preview("satu dua tiga empat", 10, PREVIEW_LINES);
        assert_eq!(lines.len(), 2);
        assert!(!lines[1].ends_with("..."));
    }

    #[test]
    fn truncate_to_width_cuts_at_char_boundary() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
        assert_eq!(truncate_to_width("hi", 5), "hi");
        assert_eq!(truncate_to_width("", 5), "");
    }

    // ==========================================================================
    // render tests
    // ==========================================================================

    fn render_card(card: ItemCard, width: u16) -> String {
        let backend = TestBackend::new(width, CARD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(card, f.area());
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
    fn card_shows_name_action_and_preview() {
        let catalog = sample_catalog();
        let item = &catalog.items()[0];
        let card = ItemCard::new(item, assets::resolve(item.image), false, true);

        let text = render_card(card, 50);
        assert!(text.contains("Tumbler Hijau"));
        assert!(text.contains("Lihat"));
        assert!(text.contains("Terakhir"));
    }

    #[test]
    fn card_without_artwork_still_renders() {
        let catalog = sample_catalog();
        let item = &catalog.items()[0];
        assert!(assets::resolve(ImageRef::new("missing")).is_none());

        let card = ItemCard::new(item, None, false, true);
        let text = render_card(card, 50);
        assert!(text.contains("Tumbler Hijau"));
    }

    #[test]
    fn card_survives_narrow_area() {
        let catalog = sample_catalog();
        let item = &catalog.items()[1];
        let card = ItemCard::new(item, assets::resolve(item.image), true, true);
        render_card(card, 12);
    }
}
