//! Canonical item list with session-local quantity state.

use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::types::CatalogEntry;

/// A quantity-affecting action on one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Increment,
    Decrement,
}

/// One catalog entry plus the session-local fields the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub entry: CatalogEntry,
    /// Units currently selected; 0 means "not in cart".
    pub quantity: u32,
    /// Latches true on the first successful step; controls whether the
    /// view shows the add affordance or the quantity stepper.
    pub show_stepper: bool,
    /// Presentation highlight. Computed against the pre-step quantity,
    /// so an item stepped 2→1 stays highlighted until the next intent
    /// touches it.
    pub active: bool,
}

impl CatalogItem {
    fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            quantity: 0,
            show_stepper: false,
            active: false,
        }
    }

    fn reset(&mut self) {
        self.quantity = 0;
        self.show_stepper = false;
        self.active = false;
    }
}

/// Errors raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The id does not name any catalog item. Bad input, not a bug.
    #[error("No catalog item with id '{id}'")]
    UnknownItem { id: String },

    /// The id→index table points at a missing slot. Internal
    /// inconsistency; callers surface this as an update failure.
    #[error("Catalog index out of sync for id '{id}'")]
    Desync { id: String },
}

/// Owns the catalog items and applies quantity steps by id.
///
/// Items are addressed through an id→index table built at construction,
/// so cart entries never depend on catalog ordering. Ids are expected to
/// be unique; the loader validates this before the store is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
}

impl CatalogStore {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.id.clone(), idx))
            .collect();
        let items = entries.into_iter().map(CatalogItem::new).collect();
        Self { items, index }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).and_then(|idx| self.items.get(*idx))
    }

    /// Applies a quantity step to the item with the given id.
    ///
    /// Increment adds one unit; decrement removes one with a floor of 0.
    /// The stepper flag latches on; the highlight turns on for
    /// increments and is retained after a decrement only while the
    /// pre-step quantity was above 1.
    ///
    /// Returns a clone of the entry so the cart can merge the same step
    /// without a second lookup.
    pub fn step(&mut self, id: &str, action: StepAction) -> Result<CatalogEntry, StoreError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::UnknownItem { id: id.to_string() })?;
        let item = self
            .items
            .get_mut(idx)
            .ok_or_else(|| StoreError::Desync { id: id.to_string() })?;

        let prev = item.quantity;
        item.quantity = match action {
            StepAction::Increment => prev.saturating_add(1),
            StepAction::Decrement => prev.saturating_sub(1),
        };
        item.show_stepper = true;
        item.active = action == StepAction::Increment || prev > 1;

        Ok(item.entry.clone())
    }

    /// Returns the item with the given id to baseline state.
    pub fn reset(&mut self, id: &str) -> Result<(), StoreError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| StoreError::UnknownItem { id: id.to_string() })?;
        let item = self
            .items
            .get_mut(idx)
            .ok_or_else(|| StoreError::Desync { id: id.to_string() })?;
        item.reset();
        Ok(())
    }

    /// Returns every item to baseline state (new-order bulk reset).
    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ImageSet;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            category: "Test".to_string(),
            price: 1.0,
            image: ImageSet {
                thumbnail: String::new(),
                mobile: String::new(),
                tablet: String::new(),
                desktop: String::new(),
            },
        }
    }

    #[test]
    fn default_is_empty() {
        let store = CatalogStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn index_is_keyed_by_id_not_position() {
        let store = CatalogStore::new(vec![entry("a"), entry("b"), entry("c")]);
        assert!(store.contains("c"));
        assert_eq!(store.get("b").unwrap().entry.id, "b");
        assert!(!store.contains("missing"));
    }
}
