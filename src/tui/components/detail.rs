use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::catalog::Item;
use crate::tui::assets::Artwork;
use crate::tui::component::Component;

/// Detail view for one catalog item: full artwork, name, full description.
///
/// `item` is `None` when the navigation target does not resolve in the
/// catalog. The body then stays empty — the surrounding chrome (header,
/// back hint) is still drawn by the caller, so the user can leave again.
pub struct DetailScreen<'a> {
    pub item: Option<&'a Item>,
    pub artwork: Option<&'static Artwork>,
}

impl<'a> DetailScreen<'a> {
    pub fn new(item: Option<&'a Item>, artwork: Option<&'static Artwork>) -> Self {
        Self { item, artwork }
    }
}

impl<'a> Component for DetailScreen<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(item) = self.item else {
            // Unresolved item: leave the body blank
            return;
        };

        let art_lines: Vec<Line> = self
            .artwork
            .map(|art| art.full.iter().map(|row| Line::from(*row)).collect())
            .unwrap_or_default();
        let art_height = art_lines.len() as u16;

        let [art_area, name_area, description_area] = Layout::vertical([
            Constraint::Length(if art_height > 0 { art_height + 1 } else { 0 }),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .areas(area);

        if let Some(art) = self.artwork {
            frame.render_widget(
                Paragraph::new(art_lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(art.accent)),
                art_area,
            );
        }

        frame.render_widget(
            Paragraph::new(item.name.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            name_area,
        );

        let description_area = description_area.inner(Margin {
            horizontal: 2,
            vertical: 0,
        });
        frame.render_widget(
            Paragraph::new(item.description.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::Gray)),
            description_area,
        );
    }
}
