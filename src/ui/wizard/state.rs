//! State of the multi-part modal.

use crate::ui::mvi::UiState;

use super::descriptor::{PanelDescriptor, PanelKey};

/// Panel-sequencing state.
///
/// `current_panel` always names a panel in the wizard's set. While closed
/// the last open session's values are kept; they are replaced on the next
/// open.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<K> {
    pub is_open: bool,
    pub current_panel: K,
    pub advance_label: String,
    pub has_completed: bool,
}

impl<K: PanelKey> UiState for WizardState<K> {}

impl<K: PanelKey> WizardState<K> {
    /// Fresh state positioned on `initial`, labelled from its descriptor.
    pub fn seeded(initial: &PanelDescriptor<K>, is_open: bool) -> Self {
        Self {
            is_open,
            current_panel: initial.key().clone(),
            advance_label: initial.advance_label().to_string(),
            has_completed: false,
        }
    }

    pub fn is_on(&self, key: &K) -> bool {
        &self.current_panel == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_takes_label_from_descriptor() {
        let panel = PanelDescriptor::new(2u32).with_advance_label("Next step");
        let state = WizardState::seeded(&panel, true);
        assert!(state.is_open);
        assert!(state.is_on(&2));
        assert_eq!(state.advance_label, "Next step");
        assert!(!state.has_completed);
    }
}
