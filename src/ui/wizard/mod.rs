//! Multi-part ("wizard") modal feature module.
//!
//! A fixed, ordered set of panels is shown one at a time inside a modal.
//! The host decides when the modal is open and when each panel may be
//! advanced; the controller decides which panel is current and fires the
//! lifecycle callbacks.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Panel-sequencing state
//! - `intent.rs` - Host/user actions and the effects they produce
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Owns state, runs effects (callbacks)
//! - `panel.rs` / `dialog.rs` - Rendering

mod controller;
mod descriptor;
mod dialog;
mod error;
mod intent;
mod panel;
mod panel_set;
mod reducer;
mod state;
mod transitions;

pub use controller::{MultiPartModal, WizardConfig, DEFAULT_DISMISS_LABEL};
pub use descriptor::{Callback, PanelDescriptor, PanelKey, DEFAULT_ADVANCE_LABEL};
pub use dialog::{render_multi_part_modal, step_label};
pub use error::WizardError;
pub use intent::{WizardEffect, WizardIntent};
pub use panel::{AnimatedPanel, PanelContent, PanelView};
pub use panel_set::PanelSet;
pub use reducer::{WizardContext, WizardReducer};
pub use state::WizardState;
pub use transitions::WizardTransitions;
