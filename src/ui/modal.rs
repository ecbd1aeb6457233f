//! Presentational modal container.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use crate::ui::animation::Phase;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};

/// A centered, bordered box that fades in and out.
///
/// Holds no state: whether anything is drawn depends only on the
/// [`Phase`] handed in, which the caller derives from its open flag.
pub struct Modal<'a> {
    title: Option<&'a str>,
    width: u16,
    height: u16,
    phase: Phase,
}

impl<'a> Modal<'a> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            title: None,
            width,
            height,
            phase: Phase::Hidden,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn is_drawn(&self) -> bool {
        self.phase.is_drawn()
    }

    /// Draw the container centered in `area` and hand its inner area to
    /// `body`. Draws nothing once fully hidden.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, body: impl FnOnce(&mut Frame<'_>, Rect)) {
        if !self.is_drawn() {
            return;
        }

        let outer = centered_rect_by_size(area, self.width, self.height);
        frame.render_widget(Clear, outer);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        if let Some(title) = self.title {
            block = block
                .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
                .title_alignment(Alignment::Center);
        }

        let inner = block.inner(outer);
        frame.render_widget(block, outer);
        body(frame, inner);

        if self.phase.pose().is_some_and(|pose| pose.is_faint()) {
            frame
                .buffer_mut()
                .set_style(outer, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
