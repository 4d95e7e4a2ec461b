//! Sentiment indicator phrases.
//!
//! Phrases are written in normalized form: lowercase, apostrophes removed,
//! single spaces between words. They are matched on whole tokens.

/// Cues that a word is absent, scarce or disliked.
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "not", "no", "never", "dont", "doesnt", "didnt", "cant", "cannot", "wont", "isnt", "arent",
    "wasnt", "werent", "do not", "does not", "did not", "can not", "without", "hate", "hates",
    "dislike", "dislikes", "avoid", "avoids", "afraid of", "scared of", "lack", "lacks",
    "lack of", "missing", "few", "scarce", "rare", "rarely", "hardly", "none", "nothing",
    "empty", "bad for", "run away", "stay away",
];

/// Cues that a word is present, eaten, lived in or liked.
pub const POSITIVE_INDICATORS: &[&str] = &[
    "live", "lives", "living", "love", "loves", "like", "likes", "enjoy", "enjoys", "eat",
    "eats", "drink", "drinks", "need", "needs", "find", "finds", "have", "has", "there is",
    "there are", "lots of", "plenty of", "full of", "many", "home", "happy", "good", "great",
    "best", "play", "plays",
];

/// Single tokens that open a negation scope.
pub const NEGATION_CUES: &[&str] = &[
    "not", "no", "never", "dont", "doesnt", "didnt", "cant", "cannot", "wont", "isnt", "arent",
    "wasnt", "werent", "without",
];

/// Verbs that, following the entity and preceding a word, mark it as absent
/// or disliked.
pub const NEGATIVE_PATTERN_VERBS: &[&str] = &[
    "dont", "doesnt", "didnt", "do not", "does not", "cant", "cannot", "never", "hate", "hates",
    "dislike", "dislikes", "avoid", "avoids", "are afraid of", "is afraid of",
];

/// Quantifiers that, directly before a word, mark it as scarce.
pub const SCARCITY_QUANTIFIERS: &[&str] = &["no", "not", "without", "few", "lack of", "hardly any"];

/// Adjectives that, after a word, mark it as scarce.
pub const SCARCITY_ADJECTIVES: &[&str] = &["scarce", "rare", "missing", "gone", "hard to find"];

/// Verbs that, following the entity and preceding a word, mark it as
/// present or liked.
pub const POSITIVE_PATTERN_VERBS: &[&str] = &[
    "live", "lives", "love", "loves", "like", "likes", "eat", "eats", "drink", "drinks", "need",
    "needs", "find", "finds", "build", "builds", "make", "makes",
];

/// Quantifiers that, directly before a word, mark it as plentiful.
pub const ABUNDANCE_QUANTIFIERS: &[&str] = &["lots of", "plenty of", "full of", "many", "a lot of"];
