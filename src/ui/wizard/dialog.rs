//! Rendering for the multi-part modal.

use std::time::Instant;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::modal::Modal;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

use super::controller::MultiPartModal;
use super::descriptor::PanelKey;
use super::panel::{AnimatedPanel, PanelContent};
use super::transitions::WizardTransitions;

/// Rows reserved under the panels for the navigation bar.
const NAV_HEIGHT: u16 = 2;

/// Render the wizard inside `modal`, centered in `area`.
///
/// `content_for` supplies the body of each panel; it is only called for
/// panels that are currently drawn.
pub fn render_multi_part_modal<K, C, F>(
    frame: &mut Frame<'_>,
    area: Rect,
    modal: Modal<'_>,
    wizard: &MultiPartModal<K>,
    transitions: &WizardTransitions<K>,
    now: Instant,
    content_for: F,
) where
    K: PanelKey,
    C: PanelContent,
    F: Fn(&K) -> C,
{
    let modal = modal.phase(transitions.modal_phase(now));
    modal.render(frame, area, |frame, inner| {
        let panels_area = Rect {
            height: inner.height.saturating_sub(NAV_HEIGHT),
            ..inner
        };
        let nav_area = Rect {
            y: inner.y + panels_area.height,
            height: inner.height - panels_area.height,
            ..inner
        };

        let mut drawn: Vec<_> = wizard
            .panel_views()
            .into_iter()
            .map(|view| {
                let phase = transitions.panel_phase(&view.key, now);
                (view.key, phase)
            })
            .filter(|(_, phase)| phase.is_drawn())
            .collect();
        // Leaving panels sit above the one coming in.
        drawn.sort_by_key(|(_, phase)| phase.layer());

        for (key, phase) in drawn {
            let content = content_for(&key);
            AnimatedPanel::new(&content, phase).render(frame, panels_area);
        }

        frame.render_widget(nav_bar(wizard), nav_area);
    });
}

/// Step counter such as "2/5", based on declaration order.
pub fn step_label<K: PanelKey>(wizard: &MultiPartModal<K>) -> String {
    let position = wizard
        .panels()
        .keys()
        .position(|key| key == wizard.current_panel())
        .map(|index| index + 1)
        .unwrap_or(0);
    format!("{}/{}", position, wizard.panels().len())
}

fn nav_bar<K: PanelKey>(wizard: &MultiPartModal<K>) -> Paragraph<'static> {
    let dismiss_style = Style::default().fg(HEADER_TEXT);
    let advance_style = if wizard.can_advance() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", wizard.dismiss_label()), dismiss_style),
        Span::raw("    "),
        Span::styled(format!(" {} ", wizard.advance_label()), advance_style),
    ];
    if wizard.has_completed() {
        spans.push(Span::styled("  ✓", Style::default().fg(STATUS_OK)));
    }

    Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Right)
}
