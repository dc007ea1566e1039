//! Cart aggregation: one line per distinct item id, plus the running total.

use crate::catalog::types::CatalogEntry;
use crate::catalog::StepAction;

/// One aggregated entry in the shopping cart.
///
/// Never retained at quantity 0 — a line that reaches zero is removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// Thumbnail path carried through to the order summary.
    pub thumbnail: String,
}

impl CartLine {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            price: entry.price,
            quantity: 1,
            thumbnail: entry.image.thumbnail.clone(),
        }
    }

    /// Price × quantity for this line.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Holds the cart lines consistent with catalog quantities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines, as shown in the cart header.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lines.iter().any(|line| line.id == id)
    }

    /// Merges one quantity step into the cart.
    ///
    /// No existing line: increment creates a line at quantity 1,
    /// decrement is a no-op (cannot decrement what is not present).
    /// Existing line: the quantity moves by one, and the line is removed
    /// entirely when it reaches zero. At most one line per id.
    pub fn merge_step(&mut self, entry: &CatalogEntry, action: StepAction) {
        let Some(pos) = self.lines.iter().position(|line| line.id == entry.id) else {
            if action == StepAction::Increment {
                self.lines.push(CartLine::from_entry(entry));
            }
            return;
        };

        let new_quantity = match action {
            StepAction::Increment => self.lines[pos].quantity.saturating_add(1),
            StepAction::Decrement => self.lines[pos].quantity.saturating_sub(1),
        };

        if new_quantity == 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = new_quantity;
        }
    }

    /// Deletes the line with the given id. Unknown ids are a no-op, so
    /// removal is idempotent. Reports whether a line existed.
    pub fn remove_line(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines; 0 for an empty cart.
    /// Recomputed on every call, never cached.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
