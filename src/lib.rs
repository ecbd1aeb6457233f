//! A multi-step ("wizard") modal dialog for terminal UIs.
//!
//! The panel-sequencing controller lives in [`ui::wizard`]; [`ui::modal`]
//! and [`ui::animation`] provide the container and transition collaborators.
//! The remaining `ui` modules host a demo application around them.

pub mod config;
pub mod logging;
pub mod ui;
