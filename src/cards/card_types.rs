//! Type-line vocabularies, taken from the comprehensive rules.
//!
//! Type lines are split on whitespace and matched against these lists;
//! anything on a type line that is no supertype and no card type is
//! expected to show up in one of the subtype lists.

/// Supertypes, CR 205.4a.
pub const SUPERTYPES: &[&str] = &["Basic", "Legendary", "Snow", "World", "Host"];

/// Card types, CR 205.2a. "Tribal" kept alongside its newer name.
pub const TYPES: &[&str] = &[
    "Land", "Creature", "Artifact", "Enchantment", "Planeswalker",
    "Instant", "Sorcery", "Tribal", "Kindred", "Battle",
];

/// Land subtypes, CR 205.3i.
pub const LAND_SUBTYPES: &[&str] = &[
    "Plains", "Island", "Swamp", "Mountain", "Forest",
    "Cave", "Desert", "Gate", "Lair", "Locus",
    "Sphere", "Urza's", "Mine", "Power-Plant", "Tower",
];

/// Creature subtypes, CR 205.3m.
pub const CREATURE_SUBTYPES: &[&str] = &[
    "Advisor", "Aetherborn", "Ally", "Angel", "Antelope", "Ape", "Archer", "Archon",
    "Armadillo", "Army", "Artificer", "Assassin", "Assembly-Worker", "Atog", "Aurochs",
    "Avatar", "Azra", "Badger", "Barbarian", "Bard", "Basilisk", "Bat", "Bear", "Beast",
    "Beeble", "Beholder", "Berserker", "Bird", "Blinkmoth", "Boar", "Bringer", "Brushwagg",
    "Camarid", "Camel", "Capybara", "Caribou", "Carrier", "Cat", "Centaur", "Cephalid",
    "Chimera", "Citizen", "Cleric", "Cockatrice", "Construct", "Coward", "Coyote", "Crab",
    "Crocodile", "Cyclops", "Dauthi", "Demigod", "Demon", "Deserter", "Detective", "Devil",
    "Dinosaur", "Djinn", "Dog", "Dragon", "Drake", "Dreadnought", "Drone", "Druid", "Dryad",
    "Dwarf", "Efreet", "Egg", "Elder", "Eldrazi", "Elemental", "Elephant", "Elf", "Elk",
    "Eye", "Faerie", "Ferret", "Fish", "Flagbearer", "Fox", "Fractal", "Frog", "Fungus",
    "Gargoyle", "Germ", "Giant", "Gith", "Gnoll", "Gnome", "Goat", "Goblin", "God", "Golem",
    "Gorgon", "Graveborn", "Gremlin", "Griffin", "Hag", "Halfling", "Hamster", "Harpy",
    "Hellion", "Hippo", "Hippogriff", "Homarid", "Homunculus", "Horror", "Horse", "Human",
    "Hydra", "Hyena", "Illusion", "Imp", "Incarnation", "Inkling", "Insect", "Jackal",
    "Jellyfish", "Juggernaut", "Kavu", "Kirin", "Kithkin", "Knight", "Kobold", "Kor",
    "Kraken", "Lamia", "Lammasu", "Leech", "Leviathan", "Lhurgoyf", "Licid", "Lizard",
    "Manticore", "Masticore", "Mercenary", "Merfolk", "Metathran", "Minion", "Minotaur",
    "Mite", "Mole", "Monger", "Mongoose", "Monk", "Monkey", "Moonfolk", "Mount", "Mouse",
    "Mutant", "Myr", "Mystic", "Naga", "Nautilus", "Nephilim", "Nightmare", "Nightstalker",
    "Ninja", "Noble", "Noggle", "Nomad", "Nymph", "Octopus", "Ogre", "Ooze", "Orb", "Orc",
    "Orgg", "Otter", "Ouphe", "Ox", "Oyster", "Pangolin", "Peasant", "Pegasus", "Pentavite",
    "Pest", "Phelddagrif", "Phoenix", "Phyrexian", "Pilot", "Pincher", "Pirate", "Plant",
    "Praetor", "Prism", "Processor", "Rabbit", "Raccoon", "Ranger", "Rat", "Rebel",
    "Reflection", "Rhino", "Rigger", "Rogue", "Sable", "Salamander", "Samurai", "Sand",
    "Saproling", "Satyr", "Scarecrow", "Scion", "Scorpion", "Scout", "Sculpture", "Serf",
    "Serpent", "Servo", "Shade", "Shaman", "Shapeshifter", "Shark", "Sheep", "Siren",
    "Skeleton", "Slith", "Sliver", "Slug", "Snail", "Snake", "Soldier", "Soltari", "Spawn",
    "Specter", "Spellshaper", "Sphinx", "Spider", "Spike", "Spirit", "Splinter", "Sponge",
    "Squid", "Squirrel", "Starfish", "Surrakar", "Survivor", "Tentacle", "Tetravite",
    "Thalakos", "Thopter", "Thrull", "Tiefling", "Treefolk", "Trilobite", "Triskelavite",
    "Troll", "Turtle", "Unicorn", "Vampire", "Varmint", "Vedalken", "Viashino", "Volver",
    "Wall", "Walrus", "Warlock", "Warrior", "Weird", "Werewolf", "Whale", "Wizard", "Wolf",
    "Wolverine", "Wombat", "Worm", "Wraith", "Wurm", "Yeti", "Zombie", "Zubera",
];

/// Artifact subtypes, CR 205.3g.
pub const ARTIFACT_SUBTYPES: &[&str] = &[
    "Blood", "Clue", "Contraption", "Equipment", "Food",
    "Gold", "Fortification", "Powerstone", "Treasure", "Vehicle",
];

/// Enchantment subtypes, CR 205.3h.
pub const ENCHANTMENT_SUBTYPES: &[&str] = &[
    "Aura", "Cartouche", "Case", "Curse", "Rune",
    "Background", "Class", "Saga", "Shard", "Shrine",
];

/// Planeswalker subtypes, CR 205.3j.
pub const PLANESWALKER_SUBTYPES: &[&str] = &[
    "Ajani", "Aminatou", "Angrath", "Arlinn", "Ashiok", "Bahamut", "Basri", "Bolas", "Calix",
    "Chandra", "Dack", "Dakkon", "Daretti", "Davriel", "Dihada", "Domri", "Dovin", "Ellywick",
    "Elspeth", "Estrid", "Freyalise", "Garruk", "Gideon", "Grist", "Huatli", "Jace", "Jaya",
    "Jeska", "Kaito", "Karn", "Kasmina", "Kaya", "Kiora", "Koth", "Liliana", "Lolth", "Lukka",
    "Minsc", "Mordenkainen", "Nahiri", "Narset", "Niko", "Nissa", "Nixilis", "Quintorius",
    "Oko", "Ral", "Rowan", "Saheeli", "Samut", "Sarkhan", "Serra", "Sorin", "Szat", "Tamiyo",
    "Tasha", "Teferi", "Teyo", "Tezzeret", "Tibalt", "Tyvar", "Ugin", "Urza", "Venser",
    "Vivien", "Vraska", "Will", "Windgrace", "Wrenn", "Xenagos", "Yanggu", "Yanling", "Zariel",
];

/// Spell subtypes, CR 205.3k.
pub const SPELL_SUBTYPES: &[&str] = &["Adventure", "Arcane", "Chorus", "Trap", "Lesson"];

/// Battle subtypes.
pub const BATTLE_SUBTYPES: &[&str] = &["Siege"];

/// Membership test against the combined subtype vocabulary.
pub fn is_subtype(word: &str) -> bool {
    LAND_SUBTYPES.contains(&word)
        || CREATURE_SUBTYPES.contains(&word)
        || ARTIFACT_SUBTYPES.contains(&word)
        || ENCHANTMENT_SUBTYPES.contains(&word)
        || PLANESWALKER_SUBTYPES.contains(&word)
        || SPELL_SUBTYPES.contains(&word)
        || BATTLE_SUBTYPES.contains(&word)
}
