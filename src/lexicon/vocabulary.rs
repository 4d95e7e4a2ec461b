//! Token category lists used by concept extraction.

/// Habitat and climate trait words.
pub const HABITAT_TRAITS: &[&str] = &[
    "cold", "hot", "warm", "wet", "dry", "sandy", "icy", "snowy", "rainy", "sunny", "windy",
    "frozen", "salty", "shady", "water", "ocean", "sea", "forest", "desert", "trees", "grass",
    "ice", "snow", "sand", "mountains", "river", "lake", "meadow", "jungle", "tundra",
];

/// Verbs describing how an animal relates to something.
pub const RELATIONSHIP_VERBS: &[&str] = &[
    "live", "lives", "eat", "eats", "drink", "drinks", "need", "needs", "like", "likes", "love",
    "loves", "hate", "hates", "hunt", "hunts", "swim", "swims", "fly", "flies", "build",
    "builds", "make", "makes", "find", "finds", "hide", "hides", "sleep", "sleeps", "dig",
    "digs", "avoid", "avoids", "collect", "collects", "dislike", "dislikes",
];

/// Words that never count as concepts.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "an", "in", "on", "at", "to", "of", "for", "is", "are", "was", "were", "be",
    "it", "its", "they", "them", "their", "there", "this", "that", "these", "those", "with",
    "from", "very", "really", "do", "does", "did", "dont", "doesnt", "not", "no", "can", "cant",
    "also", "too", "so", "but", "or", "because", "when", "where", "what", "have", "has", "some",
    "all", "lots", "lot", "much", "many", "more", "get", "gets", "go", "goes", "like", "just",
    "about", "out", "into", "over", "under", "by", "if", "then", "than", "only", "who", "which",
    "will", "would", "could", "should", "my", "our", "your", "we", "you", "he", "she", "his",
    "her", "him", "me", "i", "am", "been", "being", "never", "always", "often", "sometimes",
    "think", "know", "every", "any", "other",
];

/// Nouns the noun heuristic accepts regardless of shape.
pub const KNOWN_NOUNS: &[&str] = &[
    "animal", "animals", "food", "home", "homes", "plant", "plants", "place", "places", "baby",
    "babies", "family", "friends", "air", "sky", "ground", "rock", "rocks", "sun", "rain",
    "weather", "nest", "nests", "cave", "caves", "hole", "holes", "mud", "dirt", "soil",
];

/// Suffixes that mark a token as noun-like.
pub const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "ism", "ist", "age",
    "ure",
];

/// Suffixes that mark a token as a verb, adverb or participle.
pub const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify", "ly"];
