//! Color strings and the canonical color combinations.
//!
//! The ordering pipeline buckets cards by identity strings over the WUBRG
//! alphabet. This module owns the normalization rules and the two fixed
//! combination orders everything downstream indexes into.

use log::warn;

/// The five color symbols in canonical order.
pub const COLOR_ORDER: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// All 32 color combinations in enumeration order: size ascending,
/// WUBRG-lexicographic within a size. Bucket indices derive from this.
pub const COLOR_COMBINATIONS: [&str; 32] = [
    "",
    "W", "U", "B", "R", "G",
    "WU", "WB", "WR", "WG", "UB", "UR", "UG", "BR", "BG", "RG",
    "WUB", "WUR", "WUG", "WBR", "WBG", "WRG", "UBR", "UBG", "URG", "BRG",
    "WUBR", "WUBG", "WURG", "WBRG", "UBRG",
    "WUBRG",
];

/// The same 32 combinations in set-review order, which groups by adjacency
/// on the color wheel. Land sections are re-sorted by this order.
pub const SET_REVIEW_COMBINATIONS: [&str; 32] = [
    "",
    "W", "U", "B", "R", "G",
    // allied pairs, clockwise from white
    "WU", "UB", "BR", "RG", "WG",
    // enemy pairs
    "WB", "UR", "BG", "WR", "UG",
    // shards: three consecutive wheel colors
    "WUB", "UBR", "BRG", "WRG", "WUG",
    // wedges: a color plus its two enemies
    "WBR", "URG", "WBG", "WUR", "UBG",
    // four colors, ordered by the absent color
    "UBRG", "WBRG", "WURG", "WUBG", "WUBR",
    "WUBRG",
];

/// Scrub a cost or color string down to its color symbols.
///
/// Uppercases, strips braces, digits and the X/C generic symbols, then keeps
/// only WUBRG characters in their input order, duplicates included. `None`
/// and purely generic costs come back empty; a non-empty input that loses
/// everything is logged since it usually means bad upstream data.
pub fn color_string(text: Option<&str>) -> String {
    let Some(text) = text else {
        warn!("Invalid color string provided: `None`. Converting to ''.");
        return String::new();
    };
    let scrubbed: String = text
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '0'..='9' | '{' | '}' | 'X' | 'C'))
        .collect();
    if scrubbed.is_empty() {
        return String::new();
    }
    let colors: String = scrubbed.chars().filter(|c| COLOR_ORDER.contains(c)).collect();
    if colors.is_empty() {
        warn!("Invalid color string provided: '{text}'. No color values could be found.");
    }
    colors
}

/// Canonical color identity of a cost or color string: each WUBRG symbol at
/// most once, in WUBRG order, whatever the input order was.
pub fn color_identity(text: Option<&str>) -> String {
    let colors = color_string(text);
    COLOR_ORDER
        .iter()
        .copied()
        .filter(|c| colors.contains(*c))
        .collect()
}

/// Collapse a Scryfall color array (e.g. `["G", "U"]`) into an identity.
pub fn identity_from_colors(colors: &[String]) -> String {
    color_identity(Some(&colors.concat()))
}

/// Bucket position of an identity in enumeration order.
pub fn combination_index(identity: &str) -> Option<usize> {
    COLOR_COMBINATIONS.iter().position(|c| *c == identity)
}

/// Position of an identity in the set-review wheel order. Strings that are
/// no canonical combination sort after every known one.
pub fn wheel_index(identity: &str) -> usize {
    SET_REVIEW_COMBINATIONS
        .iter()
        .position(|c| *c == identity)
        .unwrap_or(SET_REVIEW_COMBINATIONS.len())
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
