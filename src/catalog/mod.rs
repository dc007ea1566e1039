pub mod loader;
pub mod store;
pub mod types;

pub use loader::{load_default, load_from, CatalogError};
pub use store::{CatalogItem, CatalogStore, StepAction, StoreError};
pub use types::{CatalogEntry, ImageSet};
