use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use crate::ui::wizard::PanelContent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// Body of one demo panel: its key and a validation prompt.
pub struct DemoPanel {
    pub key: u32,
    pub validated: bool,
}

impl PanelContent for DemoPanel {
    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let status = if self.validated {
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(STATUS_OK)),
                Span::styled(
                    format!("Panel {} validated", self.key),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("[v] ", Style::default().fg(MUTED_TEXT)),
                Span::styled(
                    format!("Validate Panel {}", self.key),
                    Style::default().fg(HEADER_TEXT),
                ),
            ])
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Panel with key: {}", self.key),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            status,
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
