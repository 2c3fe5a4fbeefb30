//! Menu item model.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId, ProductIdError};

/// A named size or portion of an item, sold at its own price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub price: Price,
}

/// One orderable (or display-only) product.
///
/// The persisted JSON shape uses camelCase flags (`isVegetarian`, `isNew`)
/// and omits empty optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable unique key, immutable after creation.
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Base price. `0` means "not orderable online". Advisory when
    /// `variants` is non-empty.
    pub price: Price,
    /// Asset path or absolute URL. `None` renders the default image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_vegetarian: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_new: bool,
    /// When non-empty the item is sold only in one of these forms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    /// Free-text note about optional extras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<String>,
    /// A vegetarian version of the item is available too.
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_double_vegetarian: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if passes a reference
const fn is_false(value: &bool) -> bool {
    !*value
}

impl MenuItem {
    /// Create an item with the required fields and every flag unset.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            image: None,
            category,
            is_vegetarian: false,
            is_new: false,
            variants: Vec::new(),
            optional: None,
            has_double_vegetarian: false,
        }
    }

    /// Whether the item can be ordered online at all.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        self.price.is_orderable()
    }

    /// Look up a variant by name.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// The variant preselected when the item is opened: the first one.
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Unit price for the given variant selection.
    ///
    /// Returns `None` when a variant is named that the item does not offer.
    /// Items without variants ignore the selection and use the base price.
    #[must_use]
    pub fn price_for(&self, variant: Option<&str>) -> Option<Price> {
        if self.variants.is_empty() {
            return Some(self.price);
        }
        match variant {
            Some(name) => self.variant(name).map(|v| v.price),
            None => self.default_variant().map(|v| v.price),
        }
    }
}

/// Payload for creating a new item.
///
/// The id is derived from the name and the category is inferred when they are
/// not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl MenuItemDraft {
    /// Resolve the draft into a full item.
    ///
    /// `classify` is consulted only when the draft has no category.
    ///
    /// # Errors
    ///
    /// Returns an error if no id was given and the name cannot be turned
    /// into a slug.
    pub fn into_item<F>(self, classify: F) -> Result<MenuItem, ProductIdError>
    where
        F: FnOnce(&ProductId, &str) -> Category,
    {
        let id = match self.id {
            Some(id) => id,
            None => ProductId::slugify(&self.name)?,
        };
        let category = self
            .category
            .unwrap_or_else(|| classify(&id, &self.name));

        Ok(MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image.filter(|image| !image.trim().is_empty()),
            category,
            is_vegetarian: self.is_vegetarian,
            is_new: self.is_new,
            variants: self.variants,
            optional: None,
            has_double_vegetarian: false,
        })
    }
}
