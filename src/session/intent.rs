use crate::catalog::StepAction;
use crate::mvi::Intent;

/// The five user intents the view layer forwards into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Step the quantity of one catalog item, creating or updating its
    /// cart line. `item` is the catalog id; `None` (or an empty string)
    /// is a malformed intent and raises the invalid-operation signal.
    AddOrUpdate {
        item: Option<String>,
        action: StepAction,
    },

    /// Remove a cart line entirely and return the matching catalog item
    /// to baseline. Empty or unknown ids are a silent no-op.
    Remove { id: String },

    /// Show the order confirmation. Ignored while the cart is empty.
    ConfirmOrder,

    /// Clear the cart, reset every catalog item, drop the confirmation
    /// flag and the error signal.
    StartNewOrder,

    /// Clear the error signal and resume normal rendering.
    DismissError,
}

impl Intent for SessionIntent {}
