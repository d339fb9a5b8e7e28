//! Business-type catalog: the fixed key → display-phrase mapping used for
//! prompt phrasing and the `/api/business-types` listing.

/// Label used for any key not present in the catalog.
pub const GENERIC_LABEL: &str = "business";

/// Ordered catalog entries. Process-lifetime, never mutated.
pub const BUSINESS_TYPES: &[(&str, &str)] = &[
    ("restaurant", "restaurant"),
    ("auto-repair", "auto repair shop"),
    ("beauty-salon", "beauty salon"),
    ("dental", "dental practice"),
    ("real-estate", "real estate agency"),
    ("retail", "retail store"),
    ("healthcare", "healthcare practice"),
    ("other", GENERIC_LABEL),
];

/// Returns the display phrase for a business-type key, falling back to "business".
pub fn display_name(key: &str) -> &'static str {
    BUSINESS_TYPES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(GENERIC_LABEL)
}

/// Catalog keys in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    BUSINESS_TYPES.iter().map(|(k, _)| *k)
}
