//! The multi-part modal controller.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::descriptor::{Callback, PanelKey};
use super::error::WizardError;
use super::intent::{WizardEffect, WizardIntent};
use super::panel::PanelView;
use super::panel_set::PanelSet;
use super::reducer::{WizardContext, WizardReducer};
use super::state::WizardState;

/// Label shown on the dismiss button unless configured otherwise.
pub const DEFAULT_DISMISS_LABEL: &str = "Dismiss";

/// Host-side configuration of a multi-part modal.
#[derive(Clone)]
pub struct WizardConfig<K> {
    initial_panel: K,
    is_open: bool,
    dismiss_label: String,
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    on_dismiss: Option<Callback>,
    on_complete: Option<Callback>,
}

impl<K: PanelKey> WizardConfig<K> {
    pub fn new(initial_panel: K) -> Self {
        Self {
            initial_panel,
            is_open: false,
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            on_open: None,
            on_close: None,
            on_dismiss: None,
            on_complete: None,
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = label.into();
        self
    }

    pub fn on_open(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_open = Some(Arc::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(callback));
        self
    }

    pub fn on_dismiss(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(callback));
        self
    }

    pub fn on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(callback));
        self
    }
}

struct HostCallbacks {
    on_open: Option<Callback>,
    on_close: Option<Callback>,
    on_dismiss: Option<Callback>,
    on_complete: Option<Callback>,
}

fn fire(callback: &Option<Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}

/// Stateful controller over an ordered set of panels.
///
/// Every mutation goes through [`WizardReducer`]; the effects it returns are
/// run here, synchronously and in order, so callbacks have all fired by the
/// time the caller draws the next frame.
pub struct MultiPartModal<K: PanelKey> {
    context: WizardContext<K>,
    state: WizardState<K>,
    dismiss_label: String,
    callbacks: HostCallbacks,
}

impl<K: PanelKey> MultiPartModal<K> {
    /// Build the controller. When `config` starts open this fires `on_open`
    /// and the initial panel's `on_enter`, as a mount would.
    pub fn new(config: WizardConfig<K>, panels: PanelSet<K>) -> Result<Self, WizardError> {
        let context = WizardContext::new(panels, config.initial_panel)?;
        let state = context.initial_state(false)?;
        let mut modal = Self {
            context,
            state,
            dismiss_label: config.dismiss_label,
            callbacks: HostCallbacks {
                on_open: config.on_open,
                on_close: config.on_close,
                on_dismiss: config.on_dismiss,
                on_complete: config.on_complete,
            },
        };
        if config.is_open {
            modal.dispatch(WizardIntent::Open)?;
        }
        Ok(modal)
    }

    pub fn state(&self) -> &WizardState<K> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn current_panel(&self) -> &K {
        &self.state.current_panel
    }

    pub fn advance_label(&self) -> &str {
        &self.state.advance_label
    }

    pub fn dismiss_label(&self) -> &str {
        &self.dismiss_label
    }

    pub fn has_completed(&self) -> bool {
        self.state.has_completed
    }

    pub fn panels(&self) -> &PanelSet<K> {
        &self.context.panels
    }

    /// Whether an advance request would currently do anything.
    pub fn can_advance(&self) -> bool {
        self.state.is_open
            && !self.state.has_completed
            && self
                .context
                .panels
                .get(&self.state.current_panel)
                .map(|panel| panel.can_advance())
                .unwrap_or(false)
    }

    /// React to the host's open flag. Only transitions have effects.
    pub fn set_open(&mut self, is_open: bool) -> Result<(), WizardError> {
        let intent = if is_open {
            WizardIntent::Open
        } else {
            WizardIntent::Close
        };
        self.dispatch(intent)
    }

    pub fn advance(&mut self) -> Result<(), WizardError> {
        self.dispatch(WizardIntent::Advance)
    }

    pub fn dismiss(&mut self) -> Result<(), WizardError> {
        self.dispatch(WizardIntent::Dismiss)
    }

    /// Flip a panel's advance gate, typically after validating its input.
    pub fn set_can_advance(&mut self, key: &K, can_advance: bool) -> Result<(), WizardError> {
        self.context.panels.set_can_advance(key, can_advance)
    }

    /// Swap in a new panel set. The initial and current panels must both
    /// exist in it; otherwise the old set is kept.
    pub fn replace_panels(&mut self, panels: PanelSet<K>) -> Result<(), WizardError> {
        let current = panels.get(&self.state.current_panel)?;
        let advance_label = current.advance_label().to_string();
        self.context = WizardContext::new(panels, self.context.initial_panel.clone())?;
        self.state.advance_label = advance_label;
        Ok(())
    }

    /// Visibility and animation props for every panel, in declaration order.
    ///
    /// The initial panel never animates in and a panel without a successor
    /// never animates out.
    pub fn panel_views(&self) -> Vec<PanelView<K>> {
        self.context
            .panels
            .iter()
            .map(|panel| PanelView {
                key: panel.key().clone(),
                is_visible: self.state.is_on(panel.key()),
                enter: (panel.key() != &self.context.initial_panel).then(|| panel.enter()),
                leave: (!panel.is_terminal()).then(|| panel.leave()),
            })
            .collect()
    }

    fn dispatch(&mut self, intent: WizardIntent) -> Result<(), WizardError> {
        let transition = WizardReducer::reduce(&self.state, intent, &self.context)
            .inspect_err(|err| tracing::warn!(?intent, error = %err, "Wizard intent rejected"))?;

        if transition.state != self.state {
            tracing::debug!(
                ?intent,
                from = ?self.state.current_panel,
                to = ?transition.state.current_panel,
                open = transition.state.is_open,
                completed = transition.state.has_completed,
                "Wizard state changed"
            );
        }
        self.state = transition.state;

        for effect in transition.effects {
            self.run_effect(effect);
        }
        Ok(())
    }

    fn run_effect(&self, effect: WizardEffect<K>) {
        match effect {
            WizardEffect::Opened => fire(&self.callbacks.on_open),
            WizardEffect::Closed => fire(&self.callbacks.on_close),
            WizardEffect::Dismissed => fire(&self.callbacks.on_dismiss),
            WizardEffect::Completed => fire(&self.callbacks.on_complete),
            WizardEffect::EnteredPanel(key) => {
                if let Ok(panel) = self.context.panels.get(&key) {
                    panel.fire_enter();
                }
            }
            WizardEffect::LeftPanel(key) => {
                if let Ok(panel) = self.context.panels.get(&key) {
                    panel.fire_leave();
                }
            }
        }
    }
}
