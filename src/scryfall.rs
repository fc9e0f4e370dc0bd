//! Blocking client for the public Scryfall API.
//!
//! Covers the three lookups the generator needs (full-text search with
//! pagination, fuzzy name lookup, exact printing lookup) plus raw image
//! downloads. Every request is followed by the short delay Scryfall asks
//! integrations to keep.

use std::thread;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, ReviewError};

/// Base URL of the public Scryfall API.
pub const SCRYFALL_API: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "set_review/0.1";

/// Scryfall asks integrations to stay well under 10 requests per second.
const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Raw card record as served by Scryfall. Only the fields the review
/// pipeline reads are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub set: String,
    pub collector_number: String,
    pub rarity: String,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Option<Vec<String>>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// Multi-faced cards carry their costs and images per face
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

/// One face of a multi-faced card
#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Available image URIs for a card or card face
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

/// Scryfall API error payload
#[derive(Debug, Deserialize)]
pub struct ScryfallErrorBody {
    pub code: String,
    pub details: String,
}

/// One page of a `/cards/search` response
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_page: Option<String>,
    data: Vec<ScryfallCard>,
}

/// Blocking Scryfall client.
pub struct ScryfallClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScryfallClient {
    pub fn new() -> Self {
        Self::with_base_url(SCRYFALL_API)
    }

    /// Client against a different endpoint; tests point this at a mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        log::debug!("GET {url}");
        let response = self.client.get(url).header("User-Agent", USER_AGENT).send()?;
        thread::sleep(REQUEST_DELAY);
        Ok(response)
    }

    /// Run a full-text search, following pagination until the last page.
    /// Returns the records of every page in response order.
    pub fn search(&self, query: &str) -> Result<Vec<ScryfallCard>> {
        let mut url = format!(
            "{}/cards/search?format=json&order=set&q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        let mut cards = Vec::new();
        loop {
            let response = self.get(&url)?;
            if !response.status().is_success() {
                return Err(api_error(response, &format!("search '{query}'")));
            }
            let page: SearchPage = response.json()?;
            cards.extend(page.data);
            match page.next_page {
                Some(next) if page.has_more => url = next,
                _ => break,
            }
        }
        log::info!("Search '{}' returned {} cards", query, cards.len());
        Ok(cards)
    }

    /// Fuzzy name lookup via `/cards/named`.
    pub fn card_named(&self, name: &str) -> Result<ScryfallCard> {
        let url = format!(
            "{}/cards/named?fuzzy={}",
            self.base_url,
            urlencoding::encode(name)
        );
        let response = self.get(&url)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            log::warn!("Could not find card for '{url}'");
            return Err(ReviewError::CardNotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(api_error(response, &format!("named lookup '{name}'")));
        }
        Ok(response.json()?)
    }

    /// Exact printing lookup by set code and collector number.
    pub fn card_by_number(&self, expansion: &str, number: &str) -> Result<ScryfallCard> {
        let url = format!("{}/cards/{}/{}", self.base_url, expansion.to_lowercase(), number);
        let response = self.get(&url)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            log::warn!("Could not find card for '{url}'");
            return Err(ReviewError::CardNotFound(format!("{expansion}/{number}")));
        }
        if !response.status().is_success() {
            return Err(api_error(response, &format!("printing lookup {expansion}/{number}")));
        }
        Ok(response.json()?)
    }

    /// Download raw image bytes from an absolute URL.
    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url)?;
        if !response.status().is_success() {
            return Err(ReviewError::HttpStatus(response.status()));
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Map a failed response to an error, preferring Scryfall's own payload.
fn api_error(response: reqwest::blocking::Response, context: &str) -> ReviewError {
    let status = response.status();
    match response.json::<ScryfallErrorBody>() {
        Ok(body) => ReviewError::ApiResponse {
            code: body.code,
            details: body.details,
        },
        Err(_) => {
            log::warn!("Scryfall returned {status} for {context} with an unreadable body");
            ReviewError::HttpStatus(status)
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
