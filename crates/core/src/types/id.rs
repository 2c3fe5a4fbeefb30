//! Product identifier type.
//!
//! Menu items are keyed by a URL-safe slug (`"sandwich-mediterraneo"`) rather
//! than a numeric id, so the same value can appear in routes and in the
//! persisted snapshot.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// The input string is empty.
    #[error("product id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("product id contains invalid character {0:?}")]
    InvalidChar(char),
    /// The input starts or ends with a hyphen, or contains `--`.
    #[error("product id has a misplaced hyphen")]
    MisplacedHyphen,
}

/// A product identifier.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - Only lowercase ASCII letters, digits and hyphens
/// - No leading, trailing or doubled hyphen
///
/// ## Examples
///
/// ```
/// use lacapke_core::ProductId;
///
/// assert!(ProductId::parse("wrap-pollo").is_ok());
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("Wrap Pollo").is_err());
/// assert!(ProductId::parse("-wrap").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product id.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, contains characters
    /// other than `[a-z0-9-]`, or has a leading, trailing or doubled hyphen.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ProductIdError::InvalidChar(c));
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(ProductIdError::MisplacedHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Build a slug from a display name.
    ///
    /// Accented Spanish letters are folded to ASCII and every run of other
    /// characters becomes a single hyphen: `"Sándwich Mediterráneo"` becomes
    /// `"sandwich-mediterraneo"`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductIdError::Empty`] if the name has no letters or digits.
    pub fn slugify(name: &str) -> Result<Self, ProductIdError> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_hyphen = false;

        for c in name.chars().flat_map(char::to_lowercase) {
            let folded = match c {
                'á' | 'à' | 'ä' | 'â' => 'a',
                'é' | 'è' | 'ë' | 'ê' => 'e',
                'í' | 'ì' | 'ï' | 'î' => 'i',
                'ó' | 'ò' | 'ö' | 'ô' => 'o',
                'ú' | 'ù' | 'ü' | 'û' => 'u',
                'ñ' => 'n',
                'ç' => 'c',
                other => other,
            };

            if folded.is_ascii_lowercase() || folded.is_ascii_digit() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(folded);
            } else {
                pending_hyphen = true;
            }
        }

        if slug.len() > Self::MAX_LENGTH {
            slug.truncate(Self::MAX_LENGTH);
            while slug.ends_with('-') {
                slug.pop();
            }
        }

        Self::parse(&slug)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Title-case the slug words: `"wrap-pollo"` becomes `"Wrap Pollo"`.
    ///
    /// Used as a placeholder name when an editor opens an id that is not in
    /// the catalog yet.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_uppercase().to_string() + chars.as_str()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl core::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(ProductId::parse("tosti-madre").is_ok());
        assert!(ProductId::parse("wrap2").is_ok());
        assert!(ProductId::parse("a").is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(ProductId::parse(""), Err(ProductIdError::Empty));
        assert_eq!(
            ProductId::parse("Tosti"),
            Err(ProductIdError::InvalidChar('T'))
        );
        assert_eq!(
            ProductId::parse("tosti madre"),
            Err(ProductIdError::InvalidChar(' '))
        );
        assert_eq!(
            ProductId::parse("tosti--madre"),
            Err(ProductIdError::MisplacedHyphen)
        );
        assert_eq!(
            ProductId::parse("tosti-"),
            Err(ProductIdError::MisplacedHyphen)
        );
        assert!(matches!(
            ProductId::parse(&"a".repeat(65)),
            Err(ProductIdError::TooLong { max: 64 })
        ));
    }

    #[test]
    fn test_slugify_folds_accents() {
        let id = ProductId::slugify("Sándwich Mediterráneo").unwrap();
        assert_eq!(id.as_str(), "sandwich-mediterraneo");

        let id = ProductId::slugify("  Chipá Prensado!! ").unwrap();
        assert_eq!(id.as_str(), "chipa-prensado");

        let id = ProductId::slugify("Niños & Adultos").unwrap();
        assert_eq!(id.as_str(), "ninos-adultos");
    }

    #[test]
    fn test_slugify_empty_name() {
        assert_eq!(ProductId::slugify("¡¿?!"), Err(ProductIdError::Empty));
    }

    #[test]
    fn test_display_name_title_cases_words() {
        let id = ProductId::parse("torta-de-chocolate").unwrap();
        assert_eq!(id.display_name(), "Torta De Chocolate");
    }

    #[test]
    fn test_serde_rejects_invalid_id() {
        let ok: Result<ProductId, _> = serde_json::from_str("\"wrap-pollo\"");
        assert!(ok.is_ok());

        let bad: Result<ProductId, _> = serde_json::from_str("\"Wrap Pollo\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProductId::parse("querido-bowl").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"querido-bowl\"");
    }
}
