use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::animation::{DEFAULT_MODAL_FADE, DEFAULT_PANEL_DURATION, DEFAULT_SLIDE_CELLS};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub modal: ModalConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Modal container and button labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalConfig {
    /// Title drawn on the modal border.
    #[serde(default = "default_title")]
    pub title: String,
    /// Label of the dismiss button (default: "Dismiss").
    #[serde(default = "default_dismiss_label")]
    pub dismiss_label: String,
    /// Advance label for every panel but the last (default: "Continue").
    #[serde(default = "default_advance_label")]
    pub advance_label: String,
    /// Advance label for the last panel (default: "Save Now!").
    #[serde(default = "default_final_advance_label")]
    pub final_advance_label: String,
    /// Modal width in cells (default: 60).
    #[serde(default = "default_width")]
    pub width: u16,
    /// Modal height in cells (default: 14).
    #[serde(default = "default_height")]
    pub height: u16,
    /// Container fade-in in milliseconds (default: 100).
    #[serde(default = "default_fade_ms")]
    pub fade_in_ms: u64,
    /// Container fade-out in milliseconds (default: 100).
    #[serde(default = "default_fade_ms")]
    pub fade_out_ms: u64,
}

/// Panel enter/leave animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Panel enter duration in milliseconds (default: 200).
    #[serde(default = "default_panel_ms")]
    pub enter_ms: u64,
    /// Panel leave duration in milliseconds (default: 200).
    #[serde(default = "default_panel_ms")]
    pub leave_ms: u64,
    /// Horizontal slide distance in cells (default: 4).
    #[serde(default = "default_slide_cells")]
    pub slide_cells: i16,
}

/// Shape of the demo wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of panels, keyed 1..=panels (default: 5).
    #[serde(default = "default_panels")]
    pub panels: u32,
    /// Key of the panel shown on open (default: 1).
    #[serde(default = "default_initial_panel")]
    pub initial_panel: u32,
    /// Start with the modal open.
    #[serde(default)]
    pub start_open: bool,
}

/// Terminal runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 33).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Lines of host activity kept on screen (default: 200).
    #[serde(default = "default_activity_capacity")]
    pub activity_capacity: usize,
}

fn default_title() -> String {
    "Multi-part Modal".to_string()
}

fn default_dismiss_label() -> String {
    "Dismiss".to_string()
}

fn default_advance_label() -> String {
    "Continue".to_string()
}

fn default_final_advance_label() -> String {
    "Save Now!".to_string()
}

fn default_width() -> u16 {
    60
}

fn default_height() -> u16 {
    14
}

fn default_fade_ms() -> u64 {
    DEFAULT_MODAL_FADE.as_millis() as u64
}

fn default_panel_ms() -> u64 {
    DEFAULT_PANEL_DURATION.as_millis() as u64
}

fn default_slide_cells() -> i16 {
    DEFAULT_SLIDE_CELLS
}

fn default_panels() -> u32 {
    5
}

fn default_initial_panel() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    33
}

fn default_activity_capacity() -> usize {
    200
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dismiss_label: default_dismiss_label(),
            advance_label: default_advance_label(),
            final_advance_label: default_final_advance_label(),
            width: default_width(),
            height: default_height(),
            fade_in_ms: default_fade_ms(),
            fade_out_ms: default_fade_ms(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_ms: default_panel_ms(),
            leave_ms: default_panel_ms(),
            slide_cells: default_slide_cells(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            initial_panel: default_initial_panel(),
            start_open: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            activity_capacity: default_activity_capacity(),
        }
    }
}

impl ModalConfig {
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }
}

impl AnimationConfig {
    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn leave(&self) -> Duration {
        Duration::from_millis(self.leave_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
