//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (login, logout, toggle)
/// - System events (hydration results, API responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
