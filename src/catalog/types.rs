use serde::{Deserialize, Serialize};

/// One sellable entry as supplied by the catalog data source.
///
/// Consumed read-only; session-local fields live on
/// [`CatalogItem`](crate::catalog::CatalogItem) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier, stable for the session.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Unit price. Non-negative; validated on load.
    pub price: f64,
    pub image: ImageSet,
}

/// Display variants for an entry's image.
///
/// The terminal view never renders these, but the data source supplies
/// them and the cart carries the thumbnail through to the order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub thumbnail: String,
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}
