//! Set review document generator.
//!
//! Pools card data from Scryfall, orders the pool by the set review
//! rules, and writes two slide decks plus a grades spreadsheet per
//! expansion.

pub mod cache;
pub mod cards;
pub mod config;
pub mod documents;
pub mod error;
pub mod images;
pub mod review;
pub mod scryfall;

// Re-export commonly used items
pub use cache::CardCache;
pub use cards::{build_set_review, Card, Layout, Rarity};
pub use config::ReviewConfig;
pub use error::{Result, ReviewError};
pub use images::ImageCache;
pub use review::SetReview;
pub use scryfall::{ScryfallCard, ScryfallClient};
