//! Card image retrieval and slide compositing.
//!
//! Raw face scans come from Scryfall and land in a persistent disk cache;
//! `slide_image` turns a pooled card into the single picture its slide
//! shows (rotated for landscape cards, faces merged for double-faced ones).

use image::{imageops, DynamicImage, Rgba, RgbaImage};

use crate::cards::card::Card;
use crate::error::{ReviewError, Result};
use crate::scryfall::ScryfallClient;

/// Persistent cache for card face scans, stored as files in the cache
/// directory and keyed by Scryfall card id plus face.
pub struct ImageCache {
    cache_dir: std::path::PathBuf,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    /// Create an image cache in the user's cache directory
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("set_review")
            .join("images");
        log::info!("Image cache directory: {:?}", cache_dir);
        Self::at(cache_dir)
    }

    /// Create an image cache in a caller-chosen directory
    pub fn at(cache_dir: std::path::PathBuf) -> Self {
        // Create directory if needed
        if let Err(e) = std::fs::create_dir_all(&cache_dir) {
            log::warn!("Failed to create image cache directory: {}", e);
        }
        Self { cache_dir }
    }

    /// Generate a filename from card id and face
    fn filename(card_id: &str, face: &str) -> String {
        format!("{}_{}.jpg", card_id, face)
    }

    /// Get the full path for a cached scan
    fn path(&self, card_id: &str, face: &str) -> std::path::PathBuf {
        self.cache_dir.join(Self::filename(card_id, face))
    }

    /// Check if a scan is cached
    pub fn contains(&self, card_id: &str, face: &str) -> bool {
        self.path(card_id, face).exists()
    }

    /// Get a cached scan
    pub fn get(&self, card_id: &str, face: &str) -> Option<Vec<u8>> {
        let path = self.path(card_id, face);
        match std::fs::read(&path) {
            Ok(bytes) => {
                log::debug!("Image cache hit for {}/{}", card_id, face);
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Store a scan in the cache
    pub fn insert(&self, card_id: &str, face: &str, bytes: &[u8]) {
        let path = self.path(card_id, face);
        if let Err(e) = std::fs::write(&path, bytes) {
            log::warn!("Failed to cache image: {}", e);
        } else {
            log::debug!("Cached image for {}/{}", card_id, face);
        }
    }
}

/// Fetch one face scan, checking the cache first.
pub fn fetch_face_image(
    client: &ScryfallClient,
    cache: &ImageCache,
    card_id: &str,
    face: &str,
    url: &str,
) -> Result<Vec<u8>> {
    if let Some(bytes) = cache.get(card_id, face) {
        return Ok(bytes);
    }

    log::info!("Image cache miss for {}/{}, fetching from Scryfall", card_id, face);
    let bytes = client.fetch_image(url)?;
    cache.insert(card_id, face, &bytes);
    Ok(bytes)
}

/// Build the picture a card's slide shows.
///
/// Single-faced cards render as their front scan. Scans are always
/// portrait, so landscape cards get a quarter turn into reading
/// orientation. Cards with a second scan render both faces side by side.
pub fn slide_image(client: &ScryfallClient, cache: &ImageCache, card: &Card) -> Result<DynamicImage> {
    let front_url = card
        .front_image
        .as_deref()
        .ok_or_else(|| ReviewError::NoImageAvailable(card.name.clone()))?;

    let bytes = fetch_face_image(client, cache, &card.id, "front", front_url)?;
    let mut front = image::load_from_memory(&bytes)?;
    if card.needs_rotation {
        front = front.rotate90();
    }

    let back_url = match card.back_image.as_deref() {
        Some(url) => url,
        None => return Ok(front),
    };
    let bytes = fetch_face_image(client, cache, &card.id, "back", back_url)?;
    let back = image::load_from_memory(&bytes)?;
    Ok(merge_faces(&front, &back))
}

/// Place two face scans side by side on a white canvas, each centered
/// vertically.
pub fn merge_faces(left: &DynamicImage, right: &DynamicImage) -> DynamicImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, left, 0, i64::from((height - left.height()) / 2));
    imageops::overlay(
        &mut canvas,
        right,
        i64::from(left.width()),
        i64::from((height - right.height()) / 2),
    );
    DynamicImage::ImageRgba8(canvas)
}
