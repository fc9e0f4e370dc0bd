//! The in-memory card pool for one run.
//!
//! Created empty, filled by batch fetches, then read read-only by the
//! ordering and document code. Nothing is ever removed.

use std::collections::HashMap;

use crate::cards::card::Card;
use crate::error::Result;
use crate::scryfall::ScryfallClient;

/// Names that never enter the pool, however often a query returns them.
const BASIC_LAND_NAMES: [&str; 12] = [
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
    "Snow-Covered Wastes",
];

/// Session-scoped card pool.
///
/// Cards are keyed by full name; multi-faced cards are additionally
/// reachable through their front-face name via the alias table, so each
/// card is stored exactly once.
#[derive(Debug, Default)]
pub struct CardCache {
    cards: HashMap<String, Card>,
    aliases: HashMap<String, String>,
}

impl CardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool populated with one search per query.
    pub fn from_queries(client: &ScryfallClient, queries: &[String]) -> Result<Self> {
        let mut cache = Self::new();
        for query in queries {
            cache.populate_by_query(client, query)?;
        }
        Ok(cache)
    }

    /// Pool populated with the full card list of each expansion.
    pub fn from_expansions(client: &ScryfallClient, expansions: &[String]) -> Result<Self> {
        let mut cache = Self::new();
        for expansion in expansions {
            cache.populate_by_expansion(client, expansion)?;
        }
        Ok(cache)
    }

    /// Run a Scryfall search and pool every returned card. Returns how
    /// many cards were new.
    pub fn populate_by_query(&mut self, client: &ScryfallClient, query: &str) -> Result<usize> {
        let records = client.search(query)?;
        let mut added = 0;
        for record in &records {
            if self.insert(Card::from_record(record), false) {
                added += 1;
            }
        }
        log::info!(
            "Query '{}' added {} cards to the pool ({} total)",
            query,
            added,
            self.len()
        );
        Ok(added)
    }

    /// Pool every card printed in an expansion.
    pub fn populate_by_expansion(&mut self, client: &ScryfallClient, expansion: &str) -> Result<usize> {
        self.populate_by_query(client, &format!("e:{}", expansion.to_lowercase()))
    }

    /// Insert one card. Basic lands never enter the pool, and an existing
    /// entry is kept unless `overwrite` is set. Returns whether the pool
    /// changed.
    pub fn insert(&mut self, card: Card, overwrite: bool) -> bool {
        if BASIC_LAND_NAMES.contains(&card.full_name.as_str()) {
            log::debug!("Skipping basic land '{}'", card.full_name);
            return false;
        }
        if self.cards.contains_key(&card.full_name) && !overwrite {
            return false;
        }

        log::debug!("Adding '{}' to the pool", card.full_name);
        if card.name != card.full_name {
            self.aliases.insert(card.name.clone(), card.full_name.clone());
        }
        self.cards.insert(card.full_name.clone(), card);
        true
    }

    /// Look a card up by full or front-face name.
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.cards.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|full_name| self.cards.get(full_name))
        })
    }

    /// Look a card up by name, asking Scryfall's fuzzy match on a pool
    /// miss and pooling the result.
    pub fn lookup(&mut self, client: &ScryfallClient, name: &str) -> Result<Card> {
        if let Some(card) = self.get(name) {
            return Ok(card.clone());
        }
        log::debug!("Pool miss for '{name}', asking Scryfall");
        let record = client.card_named(name)?;
        let card = Card::from_record(&record);
        self.insert(card.clone(), false);
        Ok(card)
    }

    /// Look up a specific printing. A pooled card only counts when its
    /// expansion matches; otherwise the printing is fetched by set code
    /// and collector number.
    pub fn lookup_by_printing(
        &mut self,
        client: &ScryfallClient,
        name: &str,
        expansion: &str,
        number: &str,
    ) -> Result<Card> {
        if let Some(card) = self.get(name) {
            if card.expansion.eq_ignore_ascii_case(expansion) {
                return Ok(card.clone());
            }
        }
        let record = client.card_by_number(expansion, number)?;
        let card = Card::from_record(&record);
        self.insert(card.clone(), false);
        Ok(card)
    }

    /// Deterministic snapshot of the pool: every card exactly once, in
    /// (expansion, collector number, name) order. The ordering pipeline
    /// runs over this, which pins down its stable-sort tie-breaks.
    pub fn card_list(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.values().cloned().collect();
        cards.sort_by(|a, b| {
            (a.expansion.as_str(), a.collector_index(), a.number.as_str(), a.name.as_str()).cmp(&(
                b.expansion.as_str(),
                b.collector_index(),
                b.number.as_str(),
                b.name.as_str(),
            ))
        });
        cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
