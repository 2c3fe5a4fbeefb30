//! Default category inference for new items.
//!
//! Used only when an item is created without an explicit category. Rules are
//! substring matches evaluated in order; the first rule with a keyword found
//! in the id or in the slugified name wins. This is a best-effort heuristic:
//! `"pan"` also matches `"empanada"`.

use lacapke_core::{Category, ProductId};

/// One classification rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Brunch,
        keywords: &["sandwich", "tosti", "club", "benedictino", "croissant"],
    },
    Rule {
        category: Category::Coffee,
        keywords: &["cafe", "latte"],
    },
    Rule {
        category: Category::Desserts,
        keywords: &["torta", "postre"],
    },
    Rule {
        category: Category::Bakery,
        keywords: &["pan", "croissant"],
    },
    Rule {
        category: Category::Lunch,
        keywords: &["milanesa", "ensalada", "pasta", "wrap", "curry", "burrito"],
    },
];

/// Category used when no rule matches.
pub const FALLBACK: Category = Category::Breakfast;

/// Infer a category from an item's id and display name.
#[must_use]
pub fn classify(id: &ProductId, name: &str) -> Category {
    let name_slug = ProductId::slugify(name).ok();
    let haystacks = [Some(id.as_str()), name_slug.as_ref().map(ProductId::as_str)];

    RULES
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|keyword| {
                haystacks
                    .iter()
                    .flatten()
                    .any(|haystack| haystack.contains(keyword))
            })
        })
        .map_or(FALLBACK, |rule| rule.category)
}
