//! Curated word relationships, grouped by ecosystem theme.

/// Seed word and the words it is directly related to.
pub type Relation = (&'static str, &'static [&'static str]);

pub const RELATIONS: &[Relation] = &[
    // forest
    ("tree", &["trees", "forest", "woods", "leaves", "branches", "bark", "canopy", "wood"]),
    ("trees", &["tree", "forest", "woods", "leaves", "branches", "canopy"]),
    ("forest", &["trees", "woods", "jungle", "canopy", "moss"]),
    ("woods", &["forest", "trees"]),
    ("leaves", &["tree", "trees", "branches"]),
    ("branches", &["tree", "trees", "leaves"]),
    ("jungle", &["forest", "rainforest", "canopy", "vines"]),
    ("hive", &["trees", "branches", "honey"]),
    ("nest", &["trees", "branches"]),
    // water
    ("water", &["ocean", "sea", "river", "lake", "waves", "swim"]),
    ("ocean", &["sea", "water", "waves", "marine", "whale", "coral"]),
    ("sea", &["ocean", "water", "waves", "salt", "beach"]),
    ("fish", &["water", "ocean", "sea", "swim"]),
    ("swim", &["water", "ocean", "sea", "fish"]),
    ("river", &["water", "lake", "fish"]),
    ("lake", &["water", "river", "fish"]),
    ("waves", &["ocean", "sea", "beach"]),
    ("beach", &["sea", "waves", "shore"]),
    // grassland
    ("grass", &["meadow", "prairie", "savanna", "field", "plains"]),
    ("meadow", &["grass", "flowers", "field"]),
    ("flowers", &["meadow", "garden", "nectar", "pollen"]),
    ("field", &["grass", "meadow", "farm"]),
    ("savanna", &["grass", "plains", "grassland"]),
    ("prairie", &["grass", "plains"]),
    ("nectar", &["flowers", "pollen"]),
    ("pollen", &["flowers", "nectar"]),
    // cold
    ("snow", &["ice", "cold", "winter", "frost", "arctic"]),
    ("ice", &["snow", "cold", "frozen", "glacier", "arctic"]),
    ("cold", &["snow", "ice", "freezing", "winter", "frost"]),
    ("arctic", &["ice", "snow", "polar", "tundra"]),
    ("polar", &["arctic", "ice", "snow"]),
    ("winter", &["snow", "cold", "frost"]),
    ("tundra", &["arctic", "cold", "frozen"]),
    // desert
    ("desert", &["sand", "dunes", "dry", "hot", "cactus"]),
    ("sand", &["desert", "dunes", "dry"]),
    ("hot", &["sun", "heat", "desert", "warm"]),
    ("dry", &["desert", "sand", "arid"]),
    ("cactus", &["desert", "dry", "sand"]),
    ("sun", &["hot", "heat", "sunny", "warm"]),
    ("dunes", &["sand", "desert"]),
];
