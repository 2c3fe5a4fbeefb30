//! Cart line model.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// One line in the visitor's order.
///
/// `name`, `price` and `image` are copied from the menu item when the line is
/// added and are not re-synced if the catalog changes later. The id is a weak
/// reference: the item may since have been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time the line was added.
    pub price: Price,
    pub quantity: u32,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl CartEntry {
    /// Whether this line and `other` describe the same `(id, variant)` pair.
    #[must_use]
    pub fn same_line(&self, other: &Self) -> bool {
        self.id == other.id && self.variant == other.variant
    }

    /// Price of the whole line.
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
