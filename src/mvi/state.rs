//! Base trait for state in the MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to clone (cloning is how a new state is produced)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
