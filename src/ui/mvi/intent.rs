//! Base trait for intents (user/host actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (advance, dismiss)
/// - Host prop changes (open/close flag flips)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
