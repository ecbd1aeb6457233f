//! Panel decorator: draws arbitrary panel content with animated visibility.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use crate::ui::animation::{AnimationSpec, Phase};

/// Anything that can be shown as the body of a wizard panel.
///
/// Implementors only see the area they draw into; visibility, animation and
/// button labels stay with the wizard.
pub trait PanelContent {
    fn render(&self, frame: &mut Frame<'_>, area: Rect);
}

impl<T: PanelContent + ?Sized> PanelContent for Box<T> {
    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        (**self).render(frame, area);
    }
}

/// Per-panel props derived by the wizard on every frame.
///
/// `None` animations are suppressed: the change happens instantly.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView<K> {
    pub key: K,
    pub is_visible: bool,
    pub enter: Option<AnimationSpec>,
    pub leave: Option<AnimationSpec>,
}

/// Wraps a [`PanelContent`] with the visibility protocol.
pub struct AnimatedPanel<'a, C: ?Sized> {
    content: &'a C,
    phase: Phase,
}

impl<'a, C: PanelContent + ?Sized> AnimatedPanel<'a, C> {
    pub fn new(content: &'a C, phase: Phase) -> Self {
        Self { content, phase }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        match self.phase {
            Phase::Hidden => {}
            Phase::Shown => self.content.render(frame, area),
            Phase::Entering(pose) | Phase::Leaving(pose) => {
                let target = shifted(area, pose.offset_x);
                if target.width == 0 {
                    return;
                }
                self.content.render(frame, target);
                if pose.is_faint() {
                    frame
                        .buffer_mut()
                        .set_style(target, Style::default().add_modifier(Modifier::DIM));
                }
            }
        }
    }
}

/// Move `area` horizontally by `dx` cells, clipping to the original bounds.
fn shifted(area: Rect, dx: i16) -> Rect {
    let shift = dx.unsigned_abs().min(area.width);
    if dx >= 0 {
        Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        }
    } else {
        Rect {
            width: area.width - shift,
            ..area
        }
    }
}
