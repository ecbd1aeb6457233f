pub mod animation;
pub mod app;
pub mod demo_panel;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod wizard;

pub use runtime::run;
