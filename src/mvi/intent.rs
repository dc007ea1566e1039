//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a user-originated request to change state: stepping a
/// quantity, removing a cart line, confirming an order. Intents carry
/// their arguments by value and are consumed by a reducer.
pub trait Intent: Send + 'static {}
