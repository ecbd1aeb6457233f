//! Intents and effects for the multi-part modal.

use crate::ui::mvi::Intent;

/// Actions that can be dispatched to the multi-part modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardIntent {
    /// Host flipped `is_open` to true.
    Open,

    /// Host flipped `is_open` to false.
    Close,

    /// User asked to move past the current panel.
    Advance,

    /// User clicked the dismiss button.
    Dismiss,
}

impl Intent for WizardIntent {}

/// Callbacks a transition asks its owner to run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect<K> {
    Opened,
    Closed,
    Dismissed,
    Completed,
    EnteredPanel(K),
    LeftPanel(K),
}
