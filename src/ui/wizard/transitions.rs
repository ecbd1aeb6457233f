//! Bridges wizard state to the animation trackers.

use std::time::{Duration, Instant};

use crate::ui::animation::{AnimationSpec, Phase, TransitionTracker};

use super::controller::MultiPartModal;
use super::descriptor::PanelKey;

/// Animation bookkeeping for one multi-part modal: the container fade plus
/// one track per panel.
#[derive(Debug, Clone)]
pub struct WizardTransitions<K> {
    modal: TransitionTracker<()>,
    panels: TransitionTracker<K>,
    fade_in: AnimationSpec,
    fade_out: AnimationSpec,
    was_open: bool,
}

impl<K: PanelKey> WizardTransitions<K> {
    pub fn new(fade_in: Duration, fade_out: Duration) -> Self {
        Self {
            modal: TransitionTracker::new(),
            panels: TransitionTracker::new(),
            fade_in: AnimationSpec::fade(fade_in),
            fade_out: AnimationSpec::fade(fade_out),
            was_open: false,
        }
    }

    /// Record the wizard's current visibility. Call after every state
    /// change, before drawing.
    pub fn sync(&mut self, wizard: &MultiPartModal<K>, now: Instant) {
        let is_open = wizard.is_open();
        if is_open && !self.was_open {
            // Panels remount with the container.
            self.panels.clear();
        }
        self.was_open = is_open;

        self.modal
            .observe(&(), is_open, Some(self.fade_in), Some(self.fade_out), now);
        for view in wizard.panel_views() {
            self.panels
                .observe(&view.key, view.is_visible, view.enter, view.leave, now);
        }
    }

    pub fn modal_phase(&self, now: Instant) -> Phase {
        self.modal.phase(&(), now)
    }

    pub fn panel_phase(&self, key: &K, now: Instant) -> Phase {
        self.panels.phase(key, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.modal.is_animating(now) || self.panels.is_animating(now)
    }
}
