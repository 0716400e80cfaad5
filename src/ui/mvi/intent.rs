//! Intent marker trait.

/// Marker for values a [`Reducer`](super::Reducer) accepts.
///
/// Intents are already interpreted: a raw key press becomes
/// "text changed" or "dismiss" before it reaches the reducer.
pub trait Intent: Send + 'static {}
