//! One set review: the two ordered card lists and the documents built
//! from them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::CardCache;
use crate::cards::card::Card;
use crate::cards::ordering::build_set_review;
use crate::documents::slides::SlideDeck;
use crate::documents::spreadsheet::write_grade_sheet;
use crate::error::Result;
use crate::images::{slide_image, ImageCache};
use crate::scryfall::ScryfallClient;

/// The ordered review for one expansion, ready to be written out.
pub struct SetReview {
    expansion: String,
    day_one: Vec<Card>,
    day_two: Vec<Card>,
}

impl SetReview {
    /// Order the pooled cards into the day-one and day-two lists.
    pub fn build(cache: &CardCache, expansion: &str, bonus_sheet: Option<&str>) -> Self {
        let expansion = expansion.to_uppercase();
        let (day_one, day_two) = build_set_review(cache, &expansion, bonus_sheet);
        log::info!(
            "Review for {} holds {} day-one and {} day-two cards",
            expansion,
            day_one.len(),
            day_two.len()
        );
        Self {
            expansion,
            day_one,
            day_two,
        }
    }

    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    pub fn day_one(&self) -> &[Card] {
        &self.day_one
    }

    pub fn day_two(&self) -> &[Card] {
        &self.day_two
    }

    /// Every reviewed card in document order, day one first.
    pub fn card_list(&self) -> Vec<&Card> {
        self.day_one.iter().chain(self.day_two.iter()).collect()
    }

    /// Documents for one review land in a per-expansion directory.
    pub fn output_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.expansion)
    }

    /// Write both slide decks. Returns the day-one and day-two paths.
    pub fn generate_decks(
        &self,
        client: &ScryfallClient,
        images: &ImageCache,
        output_dir: &Path,
    ) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(output_dir)?;
        let day_one = self.write_deck(client, images, output_dir, "Commons and Uncommons", &self.day_one)?;
        let day_two = self.write_deck(client, images, output_dir, "Rares and Mythics", &self.day_two)?;
        Ok((day_one, day_two))
    }

    fn write_deck(
        &self,
        client: &ScryfallClient,
        images: &ImageCache,
        output_dir: &Path,
        title: &str,
        cards: &[Card],
    ) -> Result<PathBuf> {
        let mut deck = SlideDeck::new();
        for card in cards {
            log::debug!("Rendering slide for '{}'", card.name);
            let image = slide_image(client, images, card)?;
            deck.add_image(&image)?;
        }

        let path = output_dir.join(format!("{} - {}.pptx", self.expansion, title));
        deck.save(&path)?;
        log::info!("Created '{}' with {} slides", path.display(), deck.len());
        Ok(path)
    }

    /// Write the grade sheet covering both days. Returns its path.
    pub fn generate_grade_sheet(&self, reviewers: &[String], output_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;
        let cards = [self.day_one.as_slice(), self.day_two.as_slice()].concat();

        let path = output_dir.join(format!("{} - Grades.xlsx", self.expansion));
        write_grade_sheet(&path, &cards, reviewers)?;
        log::info!("Created '{}' with {} rows", path.display(), cards.len());
        Ok(path)
    }
}

#[cfg(test)]
#[path = "review_tests.rs"]
mod tests;
