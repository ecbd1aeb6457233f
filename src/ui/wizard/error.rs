use std::fmt::Debug;
use thiserror::Error;

/// Configuration errors raised by panel lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("No panel registered for key {key}")]
    MissingPanel { key: String },

    #[error("Panel key {key} is registered more than once")]
    DuplicatePanel { key: String },

    #[error("A multi-part modal needs at least one panel")]
    EmptyPanelSet,
}

impl WizardError {
    pub(crate) fn missing<K: Debug>(key: &K) -> Self {
        Self::MissingPanel {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate<K: Debug>(key: &K) -> Self {
        Self::DuplicatePanel {
            key: format!("{key:?}"),
        }
    }
}
