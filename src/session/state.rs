use crate::cart::Cart;
use crate::catalog::CatalogStore;
use crate::mvi::UiState;
use crate::session::error::SessionError;

/// Everything one browsing session owns, as a single explicit value.
///
/// Owned by the top-level app and threaded through the reducer; nothing
/// survives the process. Mutations fully replace the prior snapshot
/// before the next intent is processed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub catalog: CatalogStore,
    pub cart: Cart,
    /// True only while the order confirmation is being shown.
    pub confirmed: bool,
    /// Last-error signal; while set, the view renders the error overlay
    /// and only the dismiss intent is available.
    pub error: Option<SessionError>,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            cart: Cart::default(),
            confirmed: false,
            error: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
