//! Panel descriptors: one configuration record per wizard step.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::ui::animation::{AnimationSpec, DEFAULT_PANEL_DURATION, DEFAULT_SLIDE_CELLS};

/// Host-supplied callback. Fired synchronously on the UI thread.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Label shown on the advance button when a panel does not set one.
pub const DEFAULT_ADVANCE_LABEL: &str = "Continue";

/// Keys identify panels. They are caller-assigned and need not be numeric
/// or contiguous.
pub trait PanelKey: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

impl<T> PanelKey for T where T: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {}

/// Describes one step of the wizard.
///
/// Immutable from the controller's point of view except for
/// [`can_advance`](Self::can_advance), which the host flips after
/// validating the panel's input.
#[derive(Clone)]
pub struct PanelDescriptor<K: PanelKey> {
    key: K,
    next: Option<K>,
    can_advance: bool,
    advance_label: String,
    enter: AnimationSpec,
    leave: AnimationSpec,
    on_enter: Option<Callback>,
    on_leave: Option<Callback>,
}

impl<K: PanelKey> PanelDescriptor<K> {
    /// A terminal panel that cannot advance yet, with default labels and
    /// animations.
    pub fn new(key: K) -> Self {
        Self {
            key,
            next: None,
            can_advance: false,
            advance_label: DEFAULT_ADVANCE_LABEL.to_string(),
            enter: AnimationSpec::panel_enter(DEFAULT_SLIDE_CELLS, DEFAULT_PANEL_DURATION),
            leave: AnimationSpec::panel_leave(DEFAULT_SLIDE_CELLS, DEFAULT_PANEL_DURATION),
            on_enter: None,
            on_leave: None,
        }
    }

    pub fn with_next(mut self, next: Option<K>) -> Self {
        self.next = next;
        self
    }

    pub fn with_can_advance(mut self, can_advance: bool) -> Self {
        self.can_advance = can_advance;
        self
    }

    pub fn with_advance_label(mut self, label: impl Into<String>) -> Self {
        self.advance_label = label.into();
        self
    }

    pub fn with_enter(mut self, spec: AnimationSpec) -> Self {
        self.enter = spec;
        self
    }

    pub fn with_leave(mut self, spec: AnimationSpec) -> Self {
        self.leave = spec;
        self
    }

    pub fn on_enter(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_enter = Some(Arc::new(callback));
        self
    }

    pub fn on_leave(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_leave = Some(Arc::new(callback));
        self
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn next(&self) -> Option<&K> {
        self.next.as_ref()
    }

    /// A panel without a successor completes the wizard when advanced.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }

    pub fn can_advance(&self) -> bool {
        self.can_advance
    }

    pub fn advance_label(&self) -> &str {
        &self.advance_label
    }

    pub fn enter(&self) -> AnimationSpec {
        self.enter
    }

    pub fn leave(&self) -> AnimationSpec {
        self.leave
    }

    pub(crate) fn set_can_advance(&mut self, can_advance: bool) {
        self.can_advance = can_advance;
    }

    pub(crate) fn fire_enter(&self) {
        if let Some(callback) = &self.on_enter {
            callback();
        }
    }

    pub(crate) fn fire_leave(&self) {
        if let Some(callback) = &self.on_leave {
            callback();
        }
    }
}

impl<K: PanelKey> fmt::Debug for PanelDescriptor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelDescriptor")
            .field("key", &self.key)
            .field("next", &self.next)
            .field("can_advance", &self.can_advance)
            .field("advance_label", &self.advance_label)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}
