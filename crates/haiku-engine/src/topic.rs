//! Topic classification over fixed keyword tables.
//!
//! Each topic owns static vocabulary: keywords for classification, two
//! filler tiers for deficit closing, nouns that pad every word pool, an
//! optional banned set, and optional seasonal "kigo" phrases. The tables are
//! immutable configuration, never runtime state.

/// Closed set of topics. Declaration order is the classification tie-break:
/// first declared wins on equal scores.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Topic {
    Beach,
    Forest,
    Mountain,
    Snow,
    City,
    Generic,
}

/// Static vocabulary owned by one topic.
#[derive(Debug)]
pub struct TopicVocab {
    /// Classification signal; scored +2 per exact token match, +1 per
    /// substring hit.
    pub keywords: &'static [&'static str],
    /// One-syllable fillers (tier f1).
    pub fillers_one: &'static [&'static str],
    /// Two-syllable fillers (tier f2).
    pub fillers_two: &'static [&'static str],
    /// Nouns appended to every pool built under this topic.
    pub nouns: &'static [&'static str],
    /// Imagery words excluded from pools under this topic.
    pub banned: &'static [&'static str],
    /// Multi-word seasonal phrases, one of which may be prepended to a pool.
    pub kigo: &'static [&'static str],
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Beach,
        Topic::Forest,
        Topic::Mountain,
        Topic::Snow,
        Topic::City,
        Topic::Generic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Beach => "beach",
            Topic::Forest => "forest",
            Topic::Mountain => "mountain",
            Topic::Snow => "snow",
            Topic::City => "city",
            Topic::Generic => "generic",
        }
    }

    pub fn vocab(self) -> &'static TopicVocab {
        match self {
            Topic::Beach => &BEACH,
            Topic::Forest => &FOREST,
            Topic::Mountain => &MOUNTAIN,
            Topic::Snow => &SNOW,
            Topic::City => &CITY,
            Topic::Generic => &GENERIC,
        }
    }
}

static BEACH: TopicVocab = TopicVocab {
    keywords: &[
        "beach", "ocean", "sea", "sand", "wave", "waves", "shore", "tide", "surf", "salt",
        "gull", "coast",
    ],
    fillers_one: &["soft", "warm", "wet", "blue", "bright", "calm"],
    fillers_two: &["golden", "gentle", "shining", "drifting"],
    nouns: &[
        "sand", "foam", "tide", "shore", "gull", "wave", "salt", "sun", "shell", "breeze",
        "ocean", "horizon",
    ],
    banned: &[
        "snow", "ice", "winter", "icicle", "frost", "drifts", "white", "hush",
    ],
    kigo: &["summer salt air", "long warm light"],
};

static FOREST: TopicVocab = TopicVocab {
    keywords: &[
        "forest", "tree", "trees", "pine", "moss", "fern", "leaf", "leaves", "woods", "grove",
        "root", "bark",
    ],
    fillers_one: &["green", "deep", "dark", "still", "cool"],
    fillers_two: &["mossy", "shaded", "hidden", "leafy"],
    nouns: &[
        "pine", "moss", "fern", "leaf", "root", "bark", "shade", "bird", "creek", "cedar",
        "canopy",
    ],
    banned: &[],
    kigo: &["new green leaves", "slow autumn dusk"],
};

static MOUNTAIN: TopicVocab = TopicVocab {
    keywords: &[
        "mountain", "peak", "summit", "ridge", "cliff", "stone", "trail", "slope", "alpine",
        "valley",
    ],
    fillers_one: &["high", "steep", "gray", "vast", "cold"],
    fillers_two: &["rocky", "misty", "distant", "silent"],
    nouns: &[
        "peak", "stone", "ridge", "trail", "cliff", "pass", "summit", "valley", "boulder",
        "granite",
    ],
    banned: &[],
    kigo: &["thin autumn air", "first light on stone"],
};

static SNOW: TopicVocab = TopicVocab {
    keywords: &[
        "snow", "ice", "winter", "frost", "icicle", "blizzard", "sleet", "frozen", "flake",
    ],
    fillers_one: &["cold", "still", "pale", "soft", "hushed"],
    fillers_two: &["frozen", "silver", "drifting", "icy"],
    nouns: &[
        "snow", "ice", "frost", "flake", "drift", "field", "pine", "sky", "silence", "winter",
    ],
    banned: &[],
    kigo: &["first snow at dusk", "long white silence"],
};

static CITY: TopicVocab = TopicVocab {
    keywords: &[
        "city", "street", "streets", "neon", "train", "subway", "traffic", "tower", "sidewalk",
        "crowd",
    ],
    fillers_one: &["loud", "fast", "bright", "gray", "late"],
    fillers_two: &["neon", "glowing", "restless", "humming"],
    nouns: &[
        "street", "train", "light", "glass", "crowd", "window", "signal", "tower", "siren",
        "rain",
    ],
    banned: &[],
    kigo: &["rain on neon signs", "late trains going home"],
};

static GENERIC: TopicVocab = TopicVocab {
    keywords: &[],
    fillers_one: &["soft", "slow", "small", "still", "clear"],
    fillers_two: &["fading", "gentle", "little", "passing"],
    nouns: &[
        "light", "sky", "wind", "rain", "moon", "cloud", "river", "morning", "shadow",
        "evening",
    ],
    banned: &[],
    kigo: &["one long slow breath", "small hours of light"],
};

/// Score every topic against lowercased input tokens and return the winner.
///
/// Per keyword: +2 when it appears as an exact token, +1 more when any token
/// contains it as a substring (an exact match therefore scores 3). Strictly
/// higher scores win; a best score of zero falls back to [`Topic::Generic`].
pub fn classify(tokens: &[String]) -> Topic {
    let mut best = Topic::Generic;
    let mut best_score = 0usize;
    for topic in Topic::ALL {
        let mut score = 0usize;
        for keyword in topic.vocab().keywords {
            if tokens.iter().any(|t| t == keyword) {
                score += 2;
            }
            if tokens.iter().any(|t| t.contains(keyword)) {
                score += 1;
            }
        }
        if score > best_score {
            best_score = score;
            best = topic;
        }
    }
    if best_score == 0 { Topic::Generic } else { best }
}
