//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;
use stepmodal::ui::wizard::{
    MultiPartModal, PanelDescriptor, PanelKey, PanelSet, WizardConfig,
};

/// Records callback invocations in firing order.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends `label` when fired.
    pub fn hook(&self, label: impl Into<String>) -> impl Fn() + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        let label = label.into();
        move || calls.lock().push(label.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls.lock().iter().filter(|call| *call == label).count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

/// A panel wired to report `enter <key>` / `leave <key>`.
pub fn recorded_panel<K: PanelKey>(recorder: &Recorder, key: K, next: Option<K>) -> PanelDescriptor<K> {
    PanelDescriptor::new(key.clone())
        .with_next(next)
        .with_can_advance(true)
        .on_enter(recorder.hook(format!("enter {key:?}")))
        .on_leave(recorder.hook(format!("leave {key:?}")))
}

/// Linear chain over `keys`, every panel advanceable.
pub fn chain<K: PanelKey>(recorder: &Recorder, keys: &[K]) -> PanelSet<K> {
    let panels = keys.iter().enumerate().map(|(i, key)| {
        recorded_panel(recorder, key.clone(), keys.get(i + 1).cloned())
    });
    PanelSet::new(panels).expect("valid chain")
}

/// Host config reporting `open`, `close`, `dismiss`, `complete`.
pub fn recorded_config<K: PanelKey>(recorder: &Recorder, initial: K) -> WizardConfig<K> {
    WizardConfig::new(initial)
        .on_open(recorder.hook("open"))
        .on_close(recorder.hook("close"))
        .on_dismiss(recorder.hook("dismiss"))
        .on_complete(recorder.hook("complete"))
}

/// The `{1→2, 2→3, 3→∅}` wizard, opened on panel 1.
pub fn three_step(recorder: &Recorder) -> MultiPartModal<u32> {
    MultiPartModal::new(
        recorded_config(recorder, 1).open(true),
        chain(recorder, &[1, 2, 3]),
    )
    .expect("valid wizard")
}
