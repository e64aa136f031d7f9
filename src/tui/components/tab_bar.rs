//! # TabBar Component
//!
//! Bottom navigation strip with the four app areas. Only Home is wired
//! up; Map, Report and Status are visible placeholders and render
//! dimmed so nobody mistakes them for working destinations.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::nav::Tab;
use crate::tui::component::Component;
use crate::tui::components::header_bar::BAR_BG;

/// Bottom tab strip component. Stateless: the active tab is a prop.
pub struct TabBar {
    pub active: Tab,
}

impl TabBar {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(BAR_BG).fg(Color::White);
        frame.render_widget(Paragraph::new("").style(bar_style), area);

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (index, tab) in Tab::ALL.into_iter().enumerate() {
            let label = format!("{} {}", index + 1, tab.label());

            let style = if tab == self.active {
                bar_style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
            } else if tab.is_implemented() {
                bar_style
            } else {
                bar_style.add_modifier(Modifier::DIM)
            };

            frame.render_widget(
                Paragraph::new(label).alignment(Alignment::Center).style(style),
                columns[index],
            );
        }
    }
}
