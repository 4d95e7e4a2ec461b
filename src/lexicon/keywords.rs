//! Per-class keyword lists and descriptions.

use crate::domain::Ecosystem;

/// Literal keywords that count as a direct mention of a class.
pub const fn class_keywords(ecosystem: Ecosystem) -> &'static [&'static str] {
    match ecosystem {
        Ecosystem::Arctic => &[
            "arctic", "ice", "icy", "snow", "snowy", "cold", "freezing", "frozen", "polar",
            "tundra", "glacier", "iceberg", "icebergs", "winter", "frost", "blizzard", "seal",
            "seals", "penguin", "penguins",
        ],
        Ecosystem::Desert => &[
            "desert", "sand", "sandy", "dry", "hot", "cactus", "cacti", "dune", "dunes", "heat",
            "arid", "oasis", "sun", "sunny", "camel", "camels", "lizard", "lizards", "scorpion",
            "drought",
        ],
        Ecosystem::Forest => &[
            "forest", "forests", "tree", "trees", "woods", "wood", "leaves", "leaf", "branches",
            "branch", "bark", "canopy", "jungle", "rainforest", "moss", "oak", "pine", "acorns",
            "mushrooms", "logs",
        ],
        Ecosystem::Grassland => &[
            "grassland", "grass", "grasses", "meadow", "meadows", "prairie", "savanna", "field",
            "fields", "plains", "flowers", "flower", "nectar", "pollen", "bushes", "garden",
            "seeds", "clover",
        ],
        Ecosystem::Ocean => &[
            "ocean", "sea", "water", "waves", "marine", "fish", "coral", "reef", "salt", "salty",
            "beach", "shore", "swim", "swimming", "whale", "whales", "dolphins", "seaweed",
            "tide", "shells",
        ],
    }
}

/// Short natural-language description of a class, embedded for the
/// similarity path.
pub const fn class_description(ecosystem: Ecosystem) -> &'static str {
    match ecosystem {
        Ecosystem::Arctic => {
            "The arctic is a freezing cold place covered in ice and snow, with polar bears, seals \
             and long winters on the frozen tundra."
        }
        Ecosystem::Desert => {
            "The desert is a hot, dry and sandy place with cactus plants, dunes, very little \
             rain and strong sun."
        }
        Ecosystem::Forest => {
            "The forest is full of tall trees with leaves and branches, moss, mushrooms and \
             shady woods where many animals make their homes."
        }
        Ecosystem::Grassland => {
            "The grassland is a wide open meadow or prairie with grass, flowers, seeds and \
             plenty of sunshine for grazing animals and insects."
        }
        Ecosystem::Ocean => {
            "The ocean is a huge body of salty water with waves, fish, whales, coral reefs and \
             sea creatures that swim."
        }
    }
}
