use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::wizard::step_label;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let wizard = app.wizard();

        let (indicator, state_text) = if wizard.is_open() {
            ("🟢", "Open")
        } else {
            ("⚪", "Closed")
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, Style::default().fg(STATUS_OK)),
            Span::styled("  ", text_style),
            Span::styled(app.config().modal.title.clone(), Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(state_text, text_style),
        ];

        if wizard.is_open() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Step {}", step_label(wizard)),
                text_style,
            ));
            if wizard.has_completed() {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Completed", Style::default().fg(STATUS_OK)));
            }
        }

        if let Some(error) = app.last_error() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
