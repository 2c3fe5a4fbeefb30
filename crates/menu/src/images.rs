//! Image reference resolution.
//!
//! Maps whatever image reference an item carries to one that is safe to
//! render. This is an allow-list lookup, not a reachability check: a listed
//! asset that fails to load is the renderer's problem.

use url::Url;

/// Placeholder shown when an item has no usable image.
pub const DEFAULT_IMAGE: &str = "/default-product-icon.png";

/// Bundled assets known to exist.
const KNOWN_IMAGES: &[&str] = &[
    "/sandwich-mediterraneo.jpg",
    "/club-sandwich.jpg",
    "/tosti-madre.jpg",
    "/toston-de-palta.jpg",
    "/el-benedictino.jpg",
    "/tosti-espinaca-champis-new.png",
    "/croissant-con-helado-new.png",
    "/me-lo-merezco.jpg",
    "/querido-bowl.jpg",
    "/chipa-prensado.jpg",
    "/fosforito-la-capke.png",
    "/fosforito-clasico.png",
    "/burrito-champis.png",
    "/chicken-pasta.png",
    "/ensalada-salmon.png",
    "/fiery-noodle-feast.png",
    "/savory-shrimp-pasta.png",
    "/porcion-papas.png",
    "/fried-plantain.png",
    "/milanesa-berenjena-new.jpg",
    "/milanesa-papas-new.jpg",
    "/wrap-pollo.png",
    "/vegetable-curry.png",
    "/default-product-icon.png",
    "/placeholder.svg",
];

/// Assets that were replaced; any reference containing the first string
/// renders the second. Checked before the allow-list.
const REPLACED_IMAGES: &[(&str, &str)] =
    &[("croissant-con-helado", "/croissant-con-helado-new.png")];

/// Resolve an optional image reference to a renderable one.
///
/// Rules, in order:
/// 1. missing or blank -> [`DEFAULT_IMAGE`]
/// 2. a replaced asset -> its replacement
/// 3. a known bundled asset -> unchanged
/// 4. an absolute `http`/`https` URL -> unchanged
/// 5. anything else -> [`DEFAULT_IMAGE`]
#[must_use]
pub fn resolve_image(image: Option<&str>) -> &str {
    let Some(image) = image.filter(|s| !s.trim().is_empty()) else {
        return DEFAULT_IMAGE;
    };

    if let Some((_, replacement)) = REPLACED_IMAGES
        .iter()
        .find(|(needle, _)| image.contains(needle))
    {
        return replacement;
    }

    if KNOWN_IMAGES.contains(&image) || is_absolute_http_url(image) {
        return image;
    }

    tracing::debug!(image, "Unknown image reference, using default");
    DEFAULT_IMAGE
}

fn is_absolute_http_url(image: &str) -> bool {
    Url::parse(image).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
