//! UI state marker trait.

/// Marker for component state.
///
/// Clone so reducers can take state by value, PartialEq so tests and
/// renderers can detect changes, Default for the initial mount.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
