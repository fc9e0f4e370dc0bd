//! The review ordering rules.
//!
//! A pool is partitioned by rarity, then by casting-identity bucket, and
//! the buckets are stitched into the two linear sequences the review
//! documents follow. Day one fronts the cards new players most need to
//! evaluate (signposts, colorless, lands); day two leads with the flashy
//! multicolor rares instead.

use log::warn;

use crate::cache::CardCache;
use crate::cards::card::{Card, Rarity};
use crate::cards::colors::{combination_index, wheel_index, COLOR_COMBINATIONS};

/// Expansion code of the special-guest reprints appended to the end of
/// every day-two sequence.
pub const SPECIAL_GUESTS: &str = "SPG";

/// Bucket layout produced by [`split_by_color`]: lands, nonland
/// colorless, the five single colors, then the multicolor combinations.
const SINGLE_START: usize = 2;
const MULTI_START: usize = 7;

/// Strictly alternate two equal-length lists.
///
/// # Panics
/// Panics when the lengths differ. The sequencers only ever weave the
/// fixed-size bucket lists, so a mismatch is a programming error, not a
/// data condition.
pub fn weave<T>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    assert_eq!(left.len(), right.len(), "weave requires equal-length lists");
    left.into_iter()
        .zip(right)
        .flat_map(|(a, b)| [a, b])
        .collect()
}

fn flatten(lists: Vec<Vec<Card>>) -> Vec<Card> {
    lists.into_iter().flatten().collect()
}

/// Partition a card list into the four rarity groups, input order kept.
pub fn split_by_rarity(cards: Vec<Card>) -> (Vec<Card>, Vec<Card>, Vec<Card>, Vec<Card>) {
    let mut commons = Vec::new();
    let mut uncommons = Vec::new();
    let mut rares = Vec::new();
    let mut mythics = Vec::new();
    for card in cards {
        match card.rarity {
            Rarity::Common => commons.push(card),
            Rarity::Uncommon => uncommons.push(card),
            Rarity::Rare => rares.push(card),
            Rarity::Mythic => mythics.push(card),
        }
    }
    (commons, uncommons, rares, mythics)
}

/// Split one rarity group into its 33 color buckets: lands, nonland
/// colorless, the five single colors, then the multicolor combinations in
/// enumeration order. Every bucket is stably sorted by ascending mana
/// value, so equal costs keep their input order.
pub fn split_by_color(cards: Vec<Card>) -> Vec<Vec<Card>> {
    let mut buckets: Vec<Vec<Card>> = vec![Vec::new(); COLOR_COMBINATIONS.len()];
    for card in cards {
        let index = match combination_index(&card.casting_identity) {
            Some(index) => index,
            None => {
                warn!(
                    "Unrecognized casting identity '{}' on '{}', bucketing as colorless",
                    card.casting_identity, card.name
                );
                0
            }
        };
        buckets[index].push(card);
    }
    for bucket in &mut buckets {
        bucket.sort_by_key(|card| card.cmc);
    }

    let colorless = buckets.remove(0);
    let (lands, nonlands): (Vec<Card>, Vec<Card>) =
        colorless.into_iter().partition(|card| card.is_land());
    let mut result = vec![lands, nonlands];
    result.extend(buckets);
    result
}

/// Re-sort a land bucket by the wheel position of its official color
/// identity. Lands carry no mana cost, so the text-box identity is the
/// only color signal they have.
fn wheel_sort(mut lands: Vec<Card>) -> Vec<Card> {
    lands.sort_by_key(|card| wheel_index(&card.color_identity));
    lands
}

/// Day-one sequence over the commons and uncommons of one set: signpost
/// multicolor buckets woven common/uncommon, the colorless buckets, the
/// land buckets re-sorted along the color wheel, then the single-color
/// buckets woven per color.
pub fn day_one_order(commons: Vec<Card>, uncommons: Vec<Card>) -> Vec<Card> {
    let mut common_buckets = split_by_color(commons);
    let mut uncommon_buckets = split_by_color(uncommons);

    let signposts = flatten(weave(
        common_buckets.split_off(MULTI_START),
        uncommon_buckets.split_off(MULTI_START),
    ));
    let singles = flatten(weave(
        common_buckets.split_off(SINGLE_START),
        uncommon_buckets.split_off(SINGLE_START),
    ));
    // Two buckets remain per rarity: lands at index 0, colorless at 1.
    let colorless_commons = common_buckets.pop().unwrap_or_default();
    let land_commons = common_buckets.pop().unwrap_or_default();
    let colorless_uncommons = uncommon_buckets.pop().unwrap_or_default();
    let land_uncommons = uncommon_buckets.pop().unwrap_or_default();

    let mut sequence = signposts;
    sequence.extend(colorless_commons);
    sequence.extend(colorless_uncommons);
    sequence.extend(wheel_sort(land_commons));
    sequence.extend(wheel_sort(land_uncommons));
    sequence.extend(singles);
    sequence
}

/// Day-two sequence over one mixed pool: multicolor buckets first, then
/// the single colors, with colorless and lands closing the deck.
pub fn day_two_order(cards: Vec<Card>) -> Vec<Card> {
    let mut buckets = split_by_color(cards);

    let multicolor = buckets.split_off(MULTI_START);
    let singles = buckets.split_off(SINGLE_START);
    let colorless = buckets.pop().unwrap_or_default();
    let lands = buckets.pop().unwrap_or_default();

    let mut sequence = flatten(multicolor);
    sequence.extend(flatten(singles));
    sequence.extend(colorless);
    sequence.extend(lands);
    sequence
}

/// Bonus-sheet sequence: the day-one ordering of the pool's commons and
/// uncommons, followed by the day-two ordering of its rares and mythics.
pub fn bonus_sheet_order(cards: Vec<Card>) -> Vec<Card> {
    let (commons, uncommons, rares, mythics) = split_by_rarity(cards);
    let mut sequence = day_one_order(commons, uncommons);
    let mut rares_and_mythics = rares;
    rares_and_mythics.extend(mythics);
    sequence.extend(day_two_order(rares_and_mythics));
    sequence
}

/// Build the two review sequences for an expansion from a populated pool.
///
/// Day one holds the primary expansion's commons and uncommons. Day two
/// starts with the primary rares and mythics, then appends the bonus
/// sheet (when one is configured), then whatever else the pool holds, and
/// closes with the special-guest reprints. The three trailing groups each
/// follow the bonus-sheet ordering whatever their rarity mix is.
pub fn build_set_review(
    cache: &CardCache,
    expansion: &str,
    bonus_sheet: Option<&str>,
) -> (Vec<Card>, Vec<Card>) {
    let expansion = expansion.to_uppercase();
    let bonus = bonus_sheet.map(str::to_uppercase);

    let mut primary = Vec::new();
    let mut bonus_cards = Vec::new();
    let mut special_guests = Vec::new();
    let mut leftovers = Vec::new();
    for card in cache.card_list() {
        if card.expansion == expansion {
            primary.push(card);
        } else if card.expansion == SPECIAL_GUESTS {
            // Checked before the bonus code so the reprints stay in their
            // own closing group even when the bonus sheet names SPG.
            special_guests.push(card);
        } else if Some(&card.expansion) == bonus.as_ref() {
            bonus_cards.push(card);
        } else {
            leftovers.push(card);
        }
    }

    let (commons, uncommons, rares, mythics) = split_by_rarity(primary);
    let day_one = day_one_order(commons, uncommons);

    let mut rares_and_mythics = rares;
    rares_and_mythics.extend(mythics);
    let mut day_two = day_two_order(rares_and_mythics);
    day_two.extend(bonus_sheet_order(bonus_cards));
    day_two.extend(bonus_sheet_order(leftovers));
    day_two.extend(bonus_sheet_order(special_guests));

    (day_one, day_two)
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
