use crate::ui::app::App;
use crate::ui::demo_panel::DemoPanel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::modal::Modal;
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT};
use crate::ui::wizard::{render_multi_part_modal, step_label};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::time::Instant;

pub fn draw(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    draw_activity(frame, app, body);
    frame.render_widget(
        Footer::new().widget(footer, app.wizard().is_open()),
        footer,
    );

    let modal_config = &app.config().modal;
    let title = format!("{} · {}", modal_config.title, step_label(app.wizard()));
    render_multi_part_modal(
        frame,
        body,
        Modal::new(modal_config.width, modal_config.height).title(&title),
        app.wizard(),
        app.transitions(),
        now,
        |key| DemoPanel {
            key: *key,
            validated: app.is_validated(*key),
        },
    );
}

/// Most recent host activity, newest at the bottom.
fn draw_activity(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default()
        .title(" Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let visible = block.inner(area).height as usize;

    let lines: Vec<Line> = if app.activity().len() == 0 {
        vec![Line::styled(
            "Press 'o' to open the modal.",
            Style::default().fg(MUTED_TEXT),
        )]
    } else {
        let mut recent: Vec<Line> = app
            .activity()
            .rev()
            .take(visible)
            .map(|line| Line::from(line.to_string()))
            .collect();
        recent.reverse();
        recent
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
