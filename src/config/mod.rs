//! Configuration: TOML file with CLI overrides applied in `main`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationConfig, Config, DemoConfig, ModalConfig, UiConfig};
