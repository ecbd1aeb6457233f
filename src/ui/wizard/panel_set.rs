//! Ordered panel registry with keyed lookup.

use std::collections::HashMap;

use super::descriptor::{PanelDescriptor, PanelKey};
use super::error::WizardError;

/// The wizard's panels in display order, indexed by key.
///
/// The index is built once on construction; lookups never scan.
#[derive(Debug, Clone)]
pub struct PanelSet<K: PanelKey> {
    panels: Vec<PanelDescriptor<K>>,
    index: HashMap<K, usize>,
}

impl<K: PanelKey> PanelSet<K> {
    /// Build a set, rejecting empty input and duplicate keys.
    pub fn new(panels: impl IntoIterator<Item = PanelDescriptor<K>>) -> Result<Self, WizardError> {
        let panels: Vec<_> = panels.into_iter().collect();
        if panels.is_empty() {
            return Err(WizardError::EmptyPanelSet);
        }

        let mut index = HashMap::with_capacity(panels.len());
        for (position, panel) in panels.iter().enumerate() {
            if index.insert(panel.key().clone(), position).is_some() {
                return Err(WizardError::duplicate(panel.key()));
            }
        }

        Ok(Self { panels, index })
    }

    pub fn get(&self, key: &K) -> Result<&PanelDescriptor<K>, WizardError> {
        self.index
            .get(key)
            .map(|&position| &self.panels[position])
            .ok_or_else(|| WizardError::missing(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Flip the advance gate of one panel.
    pub fn set_can_advance(&mut self, key: &K, can_advance: bool) -> Result<(), WizardError> {
        let position = *self.index.get(key).ok_or_else(|| WizardError::missing(key))?;
        self.panels[position].set_can_advance(can_advance);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelDescriptor<K>> {
        self.panels.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.panels.iter().map(PanelDescriptor::key)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
