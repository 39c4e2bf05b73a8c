//! # Result View Component
//!
//! Shows a `ResultPanel` under the menu until the user presses a key.
//! Error panels are drawn in red.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::panel::ResultPanel;
use crate::tui::component::Component;

pub struct ResultView<'a> {
    panel: &'a ResultPanel,
}

impl<'a> ResultView<'a> {
    pub fn new(panel: &'a ResultPanel) -> Self {
        Self { panel }
    }
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.panel.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let lines: Vec<Line> = self
            .panel
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.panel.title)),
            );

        frame.render_widget(paragraph, area);
    }
}
