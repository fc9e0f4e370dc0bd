//! Game concepts: cards, colors, type vocabularies and the review
//! ordering rules.

pub mod card;
pub mod card_types;
pub mod colors;
pub mod ordering;

pub use card::{Card, Layout, Rarity};
pub use colors::{color_identity, COLOR_COMBINATIONS, SET_REVIEW_COMBINATIONS};
pub use ordering::{build_set_review, SPECIAL_GUESTS};
