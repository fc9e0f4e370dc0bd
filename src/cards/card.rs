//! The card model the whole pipeline works on.
//!
//! A [`Card`] is derived once from its raw Scryfall record and never
//! mutated afterwards. All the face handling happens here: downstream
//! code only ever sees one logical front identity plus an optional back
//! image.

use log::{debug, warn};

use crate::cards::card_types;
use crate::cards::colors::{color_identity, identity_from_colors};
use crate::scryfall::{ImageUris, ScryfallCard};

/// Card rarity. Rares and mythics merge into one bucket everywhere
/// downstream; the distinction only matters when slicing a set into its
/// two review days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    /// Parse a Scryfall rarity string.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "mythic" => Some(Rarity::Mythic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Mythic => "mythic",
        }
    }
}

/// Scryfall layout tag, reduced to the values face handling cares about.
/// Everything else behaves like a plain single-faced card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Normal,
    Split,
    Aftermath,
    Adventure,
    Flip,
    Transform,
    ModalDfc,
    Meld,
}

impl Layout {
    pub fn parse(value: &str) -> Self {
        match value {
            "split" => Layout::Split,
            "aftermath" => Layout::Aftermath,
            "adventure" => Layout::Adventure,
            "flip" => Layout::Flip,
            "transform" => Layout::Transform,
            "modal_dfc" => Layout::ModalDfc,
            "meld" => Layout::Meld,
            _ => Layout::Normal,
        }
    }

    /// Split-family cards read sideways; their portrait scans need a
    /// quarter turn at render time.
    pub fn is_landscape(&self) -> bool {
        matches!(self, Layout::Split | Layout::Aftermath)
    }
}

/// One card of the review pool.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub expansion: String,
    pub number: String,
    pub rarity: Rarity,
    /// Combined name, faces joined with `//` for multi-faced cards
    pub full_name: String,
    /// Display name: the full name for split-family cards, the front
    /// face's name for every other multi-faced layout
    pub name: String,
    pub mana_cost: String,
    pub cmc: u32,
    pub colors: String,
    pub color_identity: String,
    /// Identity derived from the printed mana cost alone, independent of
    /// the official color identity. Color bucketing runs on this.
    pub casting_identity: String,
    pub type_line: String,
    pub supertypes: Vec<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub layout: Layout,
    /// Whether the front scan needs a quarter turn at render time
    pub needs_rotation: bool,
    pub front_image: Option<String>,
    pub back_image: Option<String>,
}

impl Card {
    /// Build a card from a raw Scryfall record.
    pub fn from_record(record: &ScryfallCard) -> Self {
        let faces = record.card_faces.as_deref().unwrap_or(&[]);
        let front_face = faces.first();
        let back_face = faces.get(1);

        let full_name = record.name.clone();
        let layout = Layout::parse(record.layout.as_deref().unwrap_or("normal"));
        let name = match front_face {
            Some(face) if !layout.is_landscape() => face.name.clone(),
            _ => full_name.clone(),
        };

        let rarity = Rarity::parse(&record.rarity).unwrap_or_else(|| {
            warn!("Unknown rarity '{}' on '{}', treating as common", record.rarity, full_name);
            Rarity::Common
        });

        // Mana cost and colors are routinely absent (lands), so their
        // fallbacks stay quiet; the other fields log before defaulting.
        let mana_cost = record
            .mana_cost
            .clone()
            .or_else(|| front_face.and_then(|f| f.mana_cost.clone()))
            .unwrap_or_default();
        let cmc = record.cmc.unwrap_or_else(|| {
            debug!("'cmc' is empty for card '{name}'");
            0.0
        });
        let color_source = record
            .colors
            .clone()
            .or_else(|| front_face.and_then(|f| f.colors.clone()))
            .unwrap_or_default();
        let identity_source = record.color_identity.clone().unwrap_or_else(|| {
            debug!("'color_identity' is empty for card '{name}'");
            Vec::new()
        });
        let type_line = record
            .type_line
            .clone()
            .or_else(|| front_face.and_then(|f| f.type_line.clone()))
            .unwrap_or_else(|| {
                debug!("'type_line' is empty for card '{name}'");
                String::new()
            });

        let words: Vec<&str> = type_line
            .split_whitespace()
            .filter(|word| *word != "—" && *word != "//")
            .collect();
        let types = match_vocabulary(&words, card_types::TYPES);
        let needs_rotation = layout.is_landscape() || types.iter().any(|t| t == "Battle");

        Card {
            id: record.id.clone(),
            expansion: record.set.to_uppercase(),
            number: record.collector_number.clone(),
            rarity,
            casting_identity: color_identity(Some(&mana_cost)),
            mana_cost,
            cmc: cmc.round() as u32,
            colors: identity_from_colors(&color_source),
            color_identity: identity_from_colors(&identity_source),
            supertypes: match_vocabulary(&words, card_types::SUPERTYPES),
            subtypes: words
                .iter()
                .filter(|word| card_types::is_subtype(word))
                .map(|word| (*word).to_string())
                .collect(),
            types,
            type_line,
            layout,
            needs_rotation,
            front_image: best_image(record.image_uris.as_ref())
                .or_else(|| best_image(front_face.and_then(|f| f.image_uris.as_ref()))),
            back_image: best_image(back_face.and_then(|f| f.image_uris.as_ref())),
            full_name,
            name,
        }
    }

    /// Shortened link to the card's Scryfall page.
    pub fn card_url(&self) -> String {
        format!(
            "https://scryfall.com/card/{}/{}",
            self.expansion.to_lowercase(),
            self.number
        )
    }

    pub fn is_land(&self) -> bool {
        self.types.iter().any(|t| t == "Land")
    }

    /// Leading numeric part of the collector number ("123a" becomes 123);
    /// fully non-numeric numbers sort last.
    pub(crate) fn collector_index(&self) -> u32 {
        let digits: String = self
            .number
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(u32::MAX)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {}) [{}]",
            self.full_name,
            self.expansion,
            self.number,
            self.rarity.as_str()
        )
    }
}

/// Words of a type line that appear in a vocabulary, deduplicated, input
/// order kept.
fn match_vocabulary(words: &[&str], vocabulary: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in words {
        if vocabulary.contains(word) && !found.iter().any(|f| f == word) {
            found.push((*word).to_string());
        }
    }
    found
}

/// The highest resolution image available for a card or card face.
fn best_image(uris: Option<&ImageUris>) -> Option<String> {
    let uris = uris?;
    uris.large
        .clone()
        .or_else(|| uris.border_crop.clone())
        .or_else(|| uris.normal.clone())
        .or_else(|| uris.small.clone())
        .or_else(|| uris.art_crop.clone())
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
