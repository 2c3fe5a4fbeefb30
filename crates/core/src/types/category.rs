//! Menu sections.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A menu section used to group items for display.
///
/// Serialized in lowercase (`"brunch"`), which is also the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Breakfast,
    Brunch,
    Lunch,
    Desserts,
    Bakery,
    Coffee,
}

impl Category {
    /// Every category, in the order sections appear on the menu page.
    pub const DISPLAY_ORDER: [Self; 6] = [
        Self::Brunch,
        Self::Breakfast,
        Self::Lunch,
        Self::Desserts,
        Self::Bakery,
        Self::Coffee,
    ];

    /// The persisted lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Brunch => "brunch",
            Self::Lunch => "lunch",
            Self::Desserts => "desserts",
            Self::Bakery => "bakery",
            Self::Coffee => "coffee",
        }
    }

    /// Section heading shown above the category's items.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Breakfast => "PARA DESAYUNAR Y MERENDAR",
            Self::Brunch => "PARA BRUNCHEAR",
            Self::Lunch => "PARA ALMORZAR Y CENAR",
            Self::Desserts => "POSTRES",
            Self::Bakery => "PASTELERÍA Y PANADERÍA",
            Self::Coffee => "CAFETERÍA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl core::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DISPLAY_ORDER
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order_covers_every_category() {
        let mut seen = Category::DISPLAY_ORDER.to_vec();
        seen.sort_by_key(|c| c.as_str());
        seen.dedup();
        assert_eq!(seen.len(), 6);
        assert_eq!(Category::DISPLAY_ORDER.first(), Some(&Category::Brunch));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Desserts".parse::<Category>(), Ok(Category::Desserts));
        assert_eq!(" coffee ".parse::<Category>(), Ok(Category::Coffee));
        assert!("dinner".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Bakery).ok();
        assert_eq!(json.as_deref(), Some("\"bakery\""));
    }
}
