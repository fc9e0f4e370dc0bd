use serde_json::json;

use super::*;
use crate::scryfall::ScryfallCard;

fn record(value: serde_json::Value) -> ScryfallCard {
    serde_json::from_value(value).unwrap()
}

mod rarity_tests {
    use super::*;

    #[test]
    fn parses_the_four_rarities() {
        assert_eq!(Rarity::parse("common"), Some(Rarity::Common));
        assert_eq!(Rarity::parse("uncommon"), Some(Rarity::Uncommon));
        assert_eq!(Rarity::parse("rare"), Some(Rarity::Rare));
        assert_eq!(Rarity::parse("mythic"), Some(Rarity::Mythic));
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Rarity::parse("Mythic"), Some(Rarity::Mythic));
    }

    #[test]
    fn unknown_rarity_is_none() {
        assert_eq!(Rarity::parse("special"), None);
        assert_eq!(Rarity::parse(""), None);
    }

    #[test]
    fn as_str_round_trips() {
        for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Mythic] {
            assert_eq!(Rarity::parse(rarity.as_str()), Some(rarity));
        }
    }
}

mod layout_tests {
    use super::*;

    #[test]
    fn split_family_is_landscape() {
        assert!(Layout::parse("split").is_landscape());
        assert!(Layout::parse("aftermath").is_landscape());
    }

    #[test]
    fn portrait_layouts_are_not() {
        assert!(!Layout::parse("normal").is_landscape());
        assert!(!Layout::parse("transform").is_landscape());
        assert!(!Layout::parse("adventure").is_landscape());
    }

    #[test]
    fn unknown_layouts_fall_back_to_normal() {
        assert_eq!(Layout::parse("planar"), Layout::Normal);
        assert_eq!(Layout::parse(""), Layout::Normal);
    }
}

mod single_faced_tests {
    use super::*;

    fn bear() -> Card {
        Card::from_record(&record(json!({
            "id": "uuid-1",
            "name": "Runeclaw Bear",
            "set": "m15",
            "collector_number": "200",
            "rarity": "common",
            "layout": "normal",
            "mana_cost": "{1}{G}",
            "cmc": 2.0,
            "colors": ["G"],
            "color_identity": ["G"],
            "type_line": "Creature — Bear",
            "image_uris": {
                "small": "https://cards.example/small.jpg",
                "normal": "https://cards.example/normal.jpg",
                "large": "https://cards.example/large.jpg"
            }
        })))
    }

    #[test]
    fn derives_the_basic_facets() {
        let card = bear();
        assert_eq!(card.name, "Runeclaw Bear");
        assert_eq!(card.full_name, "Runeclaw Bear");
        assert_eq!(card.expansion, "M15");
        assert_eq!(card.number, "200");
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.cmc, 2);
        assert_eq!(card.casting_identity, "G");
        assert_eq!(card.layout, Layout::Normal);
        assert!(!card.needs_rotation);
    }

    #[test]
    fn splits_the_type_line() {
        let card = bear();
        assert!(card.supertypes.is_empty());
        assert_eq!(card.types, vec!["Creature"]);
        assert_eq!(card.subtypes, vec!["Bear"]);
    }

    #[test]
    fn prefers_the_largest_image() {
        let card = bear();
        assert_eq!(card.front_image.as_deref(), Some("https://cards.example/large.jpg"));
        assert!(card.back_image.is_none());
    }

    #[test]
    fn builds_the_short_scryfall_link() {
        assert_eq!(bear().card_url(), "https://scryfall.com/card/m15/200");
    }

    #[test]
    fn unknown_rarity_defaults_to_common() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-2",
            "name": "Promo Oddity",
            "set": "tst",
            "collector_number": "1",
            "rarity": "special",
            "layout": "normal",
            "mana_cost": "{W}",
            "cmc": 1.0,
            "color_identity": ["W"],
            "type_line": "Instant"
        })));
        assert_eq!(card.rarity, Rarity::Common);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-3",
            "name": "Mystery Object",
            "set": "tst",
            "collector_number": "7",
            "rarity": "rare"
        })));
        assert_eq!(card.mana_cost, "");
        assert_eq!(card.cmc, 0);
        assert_eq!(card.casting_identity, "");
        assert_eq!(card.type_line, "");
        assert!(card.types.is_empty());
        assert!(card.front_image.is_none());
    }
}

mod land_tests {
    use super::*;

    #[test]
    fn lands_are_colorless_by_cost_but_keep_their_identity() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-4",
            "name": "Lush Oasis",
            "set": "tst",
            "collector_number": "260",
            "rarity": "uncommon",
            "layout": "normal",
            "cmc": 0.0,
            "colors": [],
            "color_identity": ["G", "W"],
            "type_line": "Land — Desert"
        })));
        assert!(card.is_land());
        assert_eq!(card.casting_identity, "");
        assert_eq!(card.color_identity, "WG");
        assert_eq!(card.subtypes, vec!["Desert"]);
    }

    #[test]
    fn basic_land_supertype_is_recognized() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-5",
            "name": "Snow-Covered Forest",
            "set": "tst",
            "collector_number": "270",
            "rarity": "common",
            "layout": "normal",
            "cmc": 0.0,
            "color_identity": ["G"],
            "type_line": "Basic Snow Land — Forest"
        })));
        assert_eq!(card.supertypes, vec!["Basic", "Snow"]);
        assert_eq!(card.types, vec!["Land"]);
        assert_eq!(card.subtypes, vec!["Forest"]);
    }
}

mod multi_faced_tests {
    use super::*;

    fn split_card() -> Card {
        Card::from_record(&record(json!({
            "id": "uuid-6",
            "name": "Refuse // Cooperate",
            "set": "hou",
            "collector_number": "155",
            "rarity": "uncommon",
            "layout": "split",
            "mana_cost": "{2}{R} // {2}{U}",
            "cmc": 6.0,
            "colors": ["R", "U"],
            "color_identity": ["R", "U"],
            "type_line": "Instant // Instant",
            "image_uris": { "large": "https://cards.example/split.jpg" },
            "card_faces": [
                { "name": "Refuse", "mana_cost": "{2}{R}", "type_line": "Instant" },
                { "name": "Cooperate", "mana_cost": "{2}{U}", "type_line": "Instant" }
            ]
        })))
    }

    #[test]
    fn split_cards_display_the_full_name() {
        let card = split_card();
        assert_eq!(card.name, "Refuse // Cooperate");
        assert_eq!(card.full_name, "Refuse // Cooperate");
    }

    #[test]
    fn split_cards_need_rotation_and_share_one_scan() {
        let card = split_card();
        assert!(card.needs_rotation);
        assert_eq!(card.front_image.as_deref(), Some("https://cards.example/split.jpg"));
        assert!(card.back_image.is_none());
    }

    #[test]
    fn split_cards_cast_with_both_halves() {
        assert_eq!(split_card().casting_identity, "UR");
    }

    fn transform_card() -> Card {
        Card::from_record(&record(json!({
            "id": "uuid-7",
            "name": "Delver of Secrets // Insectile Aberration",
            "set": "isd",
            "collector_number": "51",
            "rarity": "common",
            "layout": "transform",
            "cmc": 1.0,
            "color_identity": ["U"],
            "card_faces": [
                {
                    "name": "Delver of Secrets",
                    "mana_cost": "{U}",
                    "type_line": "Creature — Human Wizard",
                    "colors": ["U"],
                    "image_uris": { "large": "https://cards.example/front.jpg" }
                },
                {
                    "name": "Insectile Aberration",
                    "mana_cost": "",
                    "type_line": "Creature — Human Insect",
                    "colors": ["U"],
                    "image_uris": { "large": "https://cards.example/back.jpg" }
                }
            ]
        })))
    }

    #[test]
    fn transform_cards_display_the_front_name() {
        let card = transform_card();
        assert_eq!(card.name, "Delver of Secrets");
        assert_eq!(card.full_name, "Delver of Secrets // Insectile Aberration");
    }

    #[test]
    fn transform_cards_carry_both_images_unrotated() {
        let card = transform_card();
        assert_eq!(card.front_image.as_deref(), Some("https://cards.example/front.jpg"));
        assert_eq!(card.back_image.as_deref(), Some("https://cards.example/back.jpg"));
        assert!(!card.needs_rotation);
    }

    #[test]
    fn transform_cards_take_cost_facets_from_the_front() {
        let card = transform_card();
        assert_eq!(card.mana_cost, "{U}");
        assert_eq!(card.casting_identity, "U");
        assert_eq!(card.type_line, "Creature — Human Wizard");
    }

    #[test]
    fn battles_need_rotation() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-8",
            "name": "Invasion of Kaladesh // Aetherwing, Golden-Scale Flagship",
            "set": "mom",
            "collector_number": "225",
            "rarity": "uncommon",
            "layout": "transform",
            "cmc": 3.0,
            "color_identity": ["U"],
            "card_faces": [
                {
                    "name": "Invasion of Kaladesh",
                    "mana_cost": "{2}{U}",
                    "type_line": "Battle — Siege",
                    "colors": ["U"],
                    "image_uris": { "large": "https://cards.example/battle.jpg" }
                },
                {
                    "name": "Aetherwing, Golden-Scale Flagship",
                    "mana_cost": "",
                    "type_line": "Artifact — Vehicle",
                    "colors": [],
                    "image_uris": { "large": "https://cards.example/vehicle.jpg" }
                }
            ]
        })));
        assert!(card.needs_rotation);
        assert_eq!(card.types, vec!["Battle"]);
        assert_eq!(card.subtypes, vec!["Siege"]);
    }

    #[test]
    fn adventure_cards_use_the_creature_face() {
        let card = Card::from_record(&record(json!({
            "id": "uuid-9",
            "name": "Bonecrusher Giant // Stomp",
            "set": "eld",
            "collector_number": "115",
            "rarity": "rare",
            "layout": "adventure",
            "mana_cost": "{2}{R}",
            "cmc": 3.0,
            "colors": ["R"],
            "color_identity": ["R"],
            "type_line": "Creature — Giant // Instant — Adventure",
            "image_uris": { "large": "https://cards.example/giant.jpg" },
            "card_faces": [
                { "name": "Bonecrusher Giant", "mana_cost": "{2}{R}", "type_line": "Creature — Giant" },
                { "name": "Stomp", "mana_cost": "{1}{R}", "type_line": "Instant — Adventure" }
            ]
        })));
        assert_eq!(card.name, "Bonecrusher Giant");
        assert!(!card.needs_rotation);
        assert!(card.back_image.is_none());
        assert_eq!(card.types, vec!["Creature", "Instant"]);
        assert_eq!(card.subtypes, vec!["Giant", "Adventure"]);
    }
}

mod collector_index_tests {
    use super::*;

    fn with_number(number: &str) -> Card {
        Card::from_record(&record(json!({
            "id": "uuid-10",
            "name": "Numbered",
            "set": "tst",
            "collector_number": number,
            "rarity": "common",
            "layout": "normal",
            "mana_cost": "{1}",
            "cmc": 1.0,
            "color_identity": [],
            "type_line": "Artifact"
        })))
    }

    #[test]
    fn takes_the_leading_digits() {
        assert_eq!(with_number("42").collector_index(), 42);
        assert_eq!(with_number("123a").collector_index(), 123);
    }

    #[test]
    fn non_numeric_numbers_sort_last() {
        assert!(with_number("A07").collector_index() > with_number("999").collector_index());
    }
}
