//! Relevant nouns for each animal the activity can be about.

/// Nouns relevant to one animal, grouped the way the activity asks about them.
#[derive(Debug, Clone, Copy)]
pub struct EntityNouns {
    /// Canonical entity name.
    pub name: &'static str,
    /// Other spellings that select this entity.
    pub aliases: &'static [&'static str],
    pub food: &'static [&'static str],
    pub shelter: &'static [&'static str],
    pub threats: &'static [&'static str],
    pub needs: &'static [&'static str],
}

impl EntityNouns {
    /// Every noun across all categories.
    pub fn all_nouns(&self) -> impl Iterator<Item = &'static str> {
        self.food
            .iter()
            .chain(self.shelter)
            .chain(self.threats)
            .chain(self.needs)
            .copied()
    }

    /// Whether `label` names this entity.
    pub fn answers_to(&self, label: &str) -> bool {
        self.name == label || self.aliases.contains(&label)
    }
}

pub const ENTITIES: &[EntityNouns] = &[
    EntityNouns {
        name: "bees",
        aliases: &["bee", "honeybee", "honeybees"],
        food: &["flowers", "nectar", "pollen", "honey", "clover", "blossoms"],
        shelter: &["hive", "hives", "honeycomb", "trees", "garden", "meadow"],
        threats: &["birds", "bears", "pesticides", "rain", "wind"],
        needs: &["sun", "sunshine", "water", "warmth", "plants"],
    },
    EntityNouns {
        name: "polar bears",
        aliases: &["polar bear", "polarbear", "polarbears"],
        food: &["seals", "fish", "whales", "walrus", "birds"],
        shelter: &["ice", "snow", "den", "dens", "iceberg", "caves"],
        threats: &["heat", "melting", "hunters", "pollution"],
        needs: &["cold", "fur", "fat", "ocean", "water"],
    },
    EntityNouns {
        name: "camels",
        aliases: &["camel", "dromedary", "dromedaries"],
        food: &["cactus", "plants", "dates", "grass", "leaves", "seeds"],
        shelter: &["sand", "dunes", "oasis", "rocks", "shade"],
        threats: &["storms", "sandstorms", "snakes", "cold"],
        needs: &["water", "hump", "heat", "sun"],
    },
    EntityNouns {
        name: "dolphins",
        aliases: &["dolphin"],
        food: &["fish", "squid", "shrimp", "crabs"],
        shelter: &["ocean", "sea", "waves", "reef", "coral", "water"],
        threats: &["sharks", "nets", "pollution", "boats"],
        needs: &["air", "salt", "friends", "pod"],
    },
    EntityNouns {
        name: "deer",
        aliases: &["deers", "fawn", "fawns"],
        food: &["grass", "leaves", "acorns", "berries", "bark", "mushrooms"],
        shelter: &["forest", "trees", "woods", "bushes", "meadow"],
        threats: &["wolves", "hunters", "bears", "winter"],
        needs: &["water", "shade", "space", "moss"],
    },
];
