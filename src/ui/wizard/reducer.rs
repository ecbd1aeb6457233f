//! Reducer for the multi-part modal.

use std::marker::PhantomData;

use crate::ui::mvi::{Reducer, Transition};

use super::descriptor::PanelKey;
use super::error::WizardError;
use super::intent::{WizardEffect, WizardIntent};
use super::panel_set::PanelSet;
use super::state::WizardState;

/// Read-only data the reducer consults.
#[derive(Debug, Clone)]
pub struct WizardContext<K: PanelKey> {
    pub panels: PanelSet<K>,
    pub initial_panel: K,
}

impl<K: PanelKey> WizardContext<K> {
    /// Fails when `initial_panel` is not in `panels`.
    pub fn new(panels: PanelSet<K>, initial_panel: K) -> Result<Self, WizardError> {
        panels.get(&initial_panel)?;
        Ok(Self {
            panels,
            initial_panel,
        })
    }

    /// State for a freshly opened (or constructed) wizard.
    pub fn initial_state(&self, is_open: bool) -> Result<WizardState<K>, WizardError> {
        let initial = self.panels.get(&self.initial_panel)?;
        Ok(WizardState::seeded(initial, is_open))
    }
}

/// Reducer for multi-part modal state transitions.
pub struct WizardReducer<K>(PhantomData<K>);

impl<K: PanelKey> Reducer for WizardReducer<K> {
    type State = WizardState<K>;
    type Intent = WizardIntent;
    type Context = WizardContext<K>;
    type Effect = WizardEffect<K>;
    type Error = WizardError;

    fn reduce(
        state: &Self::State,
        intent: Self::Intent,
        context: &Self::Context,
    ) -> Result<Transition<Self::State, Self::Effect>, Self::Error> {
        match intent {
            WizardIntent::Open => {
                if state.is_open {
                    return Ok(Transition::unchanged(state.clone()));
                }
                let next = context.initial_state(true)?;
                let entered = next.current_panel.clone();
                Ok(Transition::new(
                    next,
                    vec![WizardEffect::Opened, WizardEffect::EnteredPanel(entered)],
                ))
            }

            WizardIntent::Close => {
                if !state.is_open {
                    return Ok(Transition::unchanged(state.clone()));
                }
                // Everything but the flag is kept until the next open.
                let next = WizardState {
                    is_open: false,
                    ..state.clone()
                };
                Ok(Transition::new(next, vec![WizardEffect::Closed]))
            }

            WizardIntent::Dismiss => {
                if !state.is_open {
                    return Ok(Transition::unchanged(state.clone()));
                }
                Ok(Transition::new(state.clone(), vec![WizardEffect::Dismissed]))
            }

            WizardIntent::Advance => advance(state, context),
        }
    }
}

fn advance<K: PanelKey>(
    state: &WizardState<K>,
    context: &WizardContext<K>,
) -> Result<Transition<WizardState<K>, WizardEffect<K>>, WizardError> {
    if !state.is_open || state.has_completed {
        return Ok(Transition::unchanged(state.clone()));
    }

    let current = context.panels.get(&state.current_panel)?;
    if !current.can_advance() {
        return Ok(Transition::unchanged(state.clone()));
    }

    let left = WizardEffect::LeftPanel(current.key().clone());

    let Some(next_key) = current.next() else {
        let next = WizardState {
            has_completed: true,
            ..state.clone()
        };
        return Ok(Transition::new(next, vec![left, WizardEffect::Completed]));
    };

    let target = context.panels.get(next_key)?;
    let mut effects = vec![left];
    // A panel pointing at itself stays put, so there is nothing to enter.
    if !state.is_on(next_key) {
        effects.push(WizardEffect::EnteredPanel(next_key.clone()));
    }

    let next = WizardState {
        current_panel: next_key.clone(),
        advance_label: target.advance_label().to_string(),
        ..state.clone()
    };
    Ok(Transition::new(next, effects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::wizard::PanelDescriptor;

    fn context() -> WizardContext<u32> {
        let panels = PanelSet::new([
            PanelDescriptor::new(1).with_next(Some(2)).with_can_advance(true),
            PanelDescriptor::new(2)
                .with_next(Some(3))
                .with_advance_label("Almost"),
            PanelDescriptor::new(3)
                .with_can_advance(true)
                .with_advance_label("Finish"),
        ])
        .unwrap();
        WizardContext::new(panels, 1).unwrap()
    }

    fn open_on(context: &WizardContext<u32>, key: u32) -> WizardState<u32> {
        let descriptor = context.panels.get(&key).unwrap();
        WizardState::seeded(descriptor, true)
    }

    #[test]
    fn context_rejects_unknown_initial_panel() {
        let panels = PanelSet::new([PanelDescriptor::new(1u32)]).unwrap();
        assert!(WizardContext::new(panels, 7).is_err());
    }

    #[test]
    fn advance_moves_to_next_and_relabels() {
        let ctx = context();
        let t = WizardReducer::reduce(&open_on(&ctx, 1), WizardIntent::Advance, &ctx).unwrap();
        assert_eq!(t.state.current_panel, 2);
        assert_eq!(t.state.advance_label, "Almost");
        assert_eq!(
            t.effects,
            vec![WizardEffect::LeftPanel(1), WizardEffect::EnteredPanel(2)]
        );
    }

    #[test]
    fn advance_blocked_by_gate_is_noop() {
        let ctx = context();
        let state = open_on(&ctx, 2);
        let t = WizardReducer::reduce(&state, WizardIntent::Advance, &ctx).unwrap();
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn advance_on_terminal_panel_completes() {
        let ctx = context();
        let t = WizardReducer::reduce(&open_on(&ctx, 3), WizardIntent::Advance, &ctx).unwrap();
        assert!(t.state.has_completed);
        assert_eq!(t.state.current_panel, 3);
        assert_eq!(
            t.effects,
            vec![WizardEffect::LeftPanel(3), WizardEffect::Completed]
        );
    }

    #[test]
    fn advance_after_completion_is_noop() {
        let ctx = context();
        let mut state = open_on(&ctx, 3);
        state.has_completed = true;
        let t = WizardReducer::reduce(&state, WizardIntent::Advance, &ctx).unwrap();
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn advance_while_closed_is_noop() {
        let ctx = context();
        let mut state = open_on(&ctx, 1);
        state.is_open = false;
        let t = WizardReducer::reduce(&state, WizardIntent::Advance, &ctx).unwrap();
        assert!(t.effects.is_empty());
    }

    #[test]
    fn advance_to_unknown_panel_fails_without_change() {
        let panels = PanelSet::new([PanelDescriptor::new(1u32)
            .with_next(Some(9))
            .with_can_advance(true)])
        .unwrap();
        let ctx = WizardContext::new(panels, 1).unwrap();
        let state = ctx.initial_state(true).unwrap();
        let err = WizardReducer::reduce(&state, WizardIntent::Advance, &ctx).unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingPanel {
                key: "9".to_string()
            }
        );
    }

    #[test]
    fn self_loop_leaves_but_does_not_reenter() {
        let panels = PanelSet::new([PanelDescriptor::new(1u32)
            .with_next(Some(1))
            .with_can_advance(true)])
        .unwrap();
        let ctx = WizardContext::new(panels, 1).unwrap();
        let state = ctx.initial_state(true).unwrap();
        let t = WizardReducer::reduce(&state, WizardIntent::Advance, &ctx).unwrap();
        assert_eq!(t.effects, vec![WizardEffect::LeftPanel(1)]);
    }

    #[test]
    fn open_resets_to_initial_panel() {
        let ctx = context();
        let mut state = open_on(&ctx, 3);
        state.has_completed = true;
        state.is_open = false;
        let t = WizardReducer::reduce(&state, WizardIntent::Open, &ctx).unwrap();
        assert!(t.state.is_open);
        assert_eq!(t.state.current_panel, 1);
        assert!(!t.state.has_completed);
        assert_eq!(
            t.effects,
            vec![WizardEffect::Opened, WizardEffect::EnteredPanel(1)]
        );
    }

    #[test]
    fn open_while_open_is_noop() {
        let ctx = context();
        let state = open_on(&ctx, 2);
        let t = WizardReducer::reduce(&state, WizardIntent::Open, &ctx).unwrap();
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn close_keeps_panel_state() {
        let ctx = context();
        let state = open_on(&ctx, 2);
        let t = WizardReducer::reduce(&state, WizardIntent::Close, &ctx).unwrap();
        assert!(!t.state.is_open);
        assert_eq!(t.state.current_panel, 2);
        assert_eq!(t.effects, vec![WizardEffect::Closed]);
    }

    #[test]
    fn dismiss_only_reports() {
        let ctx = context();
        let state = open_on(&ctx, 2);
        let t = WizardReducer::reduce(&state, WizardIntent::Dismiss, &ctx).unwrap();
        assert_eq!(t.state, state);
        assert_eq!(t.effects, vec![WizardEffect::Dismissed]);
    }
}
