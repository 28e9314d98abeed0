//! Tokenizer, part-of-speech tagger, and syllable oracle.
//!
//! A [`Lexicon`] answers three questions for the composition engine: how does
//! a text split into tokens, what word class does each token belong to, and
//! how many syllables does a word carry. Answers come from an optional
//! on-disk word table first and from rule heuristics second, so the engine
//! works out of the box and improves when a curated table is supplied.
//!
//! The word table is a plain text file, one entry per line:
//!
//! ```text
//! # word  tag  breakdown
//! ocean   nn   o/cean
//! gentle  jj   gen/tle
//! ```
//!
//! A missing file is treated as an empty table, the same way missing
//! exception lists are tolerated by classic morphology loaders.
//!
//! # Example
//! ```no_run
//! use haiku_lexicon::Lexicon;
//!
//! # fn main() -> anyhow::Result<()> {
//! let lex = Lexicon::load("lexicon.txt")?;
//! assert_eq!(lex.syllable_count("ocean"), 2);
//! let tokens = lex.tokenize("The waves crashed.");
//! let tags = lex.tag_tokens(&tokens);
//! assert_eq!(tokens.len(), tags.len());
//! # Ok(()) }
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use haiku_types::breakdown_segments;
use tracing::info;

/// One curated word-table entry.
#[derive(Clone, Debug)]
struct Entry {
    tag: String,
    breakdown: String,
}

/// Word table plus rule heuristics for tagging and syllable counting.
pub struct Lexicon {
    entries: HashMap<String, Entry>,
}

impl Lexicon {
    /// A lexicon with no curated entries; every answer is heuristic.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load a word table from `path`. A missing file yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::empty());
        }
        let file =
            File::open(path).with_context(|| format!("open lexicon file {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut entries = HashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line =
                line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut parts = trimmed.split_whitespace();
            let (Some(word), Some(tag), Some(breakdown)) =
                (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };
            entries.insert(
                word.to_lowercase(),
                Entry {
                    tag: tag.to_lowercase(),
                    breakdown: breakdown.to_string(),
                },
            );
        }
        info!("loaded {} lexicon entries", entries.len());
        Ok(Self { entries })
    }

    /// Number of curated entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no curated entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split text into tokens: whitespace-delimited, punctuation trimmed
    /// from both ends, original casing preserved.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|raw| {
                let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            })
            .collect()
    }

    /// Tag each token with a Penn-style tag string, aligned 1:1 with input.
    pub fn tag_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| self.tag(t)).collect()
    }

    /// Tag a single token: word table first, then the function-word list,
    /// then suffix rules, defaulting to `nn` for unknown open-class words.
    pub fn tag(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(entry) = self.entries.get(&lower) {
            return entry.tag.clone();
        }
        if let Some(tag) = function_word_tag(&lower) {
            return tag.to_string();
        }
        for (suffix, tag) in TAG_SUFFIX_RULES {
            if lower.len() > suffix.len() && lower.ends_with(suffix) {
                return (*tag).to_string();
            }
        }
        "nn".to_string()
    }

    /// Syllable count for a word. Zero means uncountable: the word has no
    /// alphabetic character, or no vowel group the heuristic can see.
    pub fn syllable_count(&self, word: &str) -> usize {
        if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            return 0;
        }
        let lower = word.trim().to_lowercase();
        if let Some(entry) = self.entries.get(&lower) {
            return breakdown_segments(&entry.breakdown).max(1);
        }
        heuristic_syllables(&lower)
    }

    /// Curated syllable breakdown for a word, if the table has one.
    pub fn breakdown(&self, word: &str) -> Option<&str> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(|e| e.breakdown.as_str())
    }
}

/// Closed-class words the suffix rules would mislabel.
fn function_word_tag(lower: &str) -> Option<&'static str> {
    let tag = match lower {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "each" | "every" => "dt",
        "of" | "in" | "on" | "at" | "by" | "with" | "under" | "over" | "through" | "near"
        | "from" | "to" | "into" | "onto" | "above" | "below" | "beneath" | "across" => "in",
        "and" | "or" | "but" | "nor" | "so" | "yet" => "cc",
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her" | "us"
        | "them" => "prp",
        "my" | "your" | "his" | "its" | "our" | "their" => "prp$",
        "is" | "are" | "was" | "were" | "be" | "been" | "am" | "do" | "does" | "did" | "have"
        | "has" | "had" | "will" | "would" | "can" | "could" | "should" | "must" => "vb",
        "not" | "no" | "never" | "very" | "too" | "then" | "there" | "here" | "when" | "while" => {
            "rb"
        }
        _ => return None,
    };
    Some(tag)
}

/// Suffix rules for open-class words, checked in declaration order.
const TAG_SUFFIX_RULES: &[(&str, &str)] = &[
    ("tion", "nn"),
    ("sion", "nn"),
    ("ment", "nn"),
    ("ness", "nn"),
    ("ship", "nn"),
    ("ance", "nn"),
    ("ence", "nn"),
    ("ity", "nn"),
    ("ism", "nn"),
    ("ful", "jj"),
    ("ous", "jj"),
    ("ive", "jj"),
    ("less", "jj"),
    ("able", "jj"),
    ("ible", "jj"),
    ("ly", "rb"),
    ("ing", "vbg"),
    ("ed", "vbd"),
    ("ize", "vb"),
    ("ise", "vb"),
];

/// Endings where a trailing `es` is voiced and keeps its syllable.
const VOICED_ES: &[&str] = &["ses", "zes", "xes", "ches", "shes", "ces", "ges", "les"];

/// Vowel-group syllable estimate for words outside the table.
///
/// Counts runs of `aeiouy`, then drops one count for a silent `e`, `es`, or
/// `ed` ending. Returns zero when no vowel group exists at all; callers
/// treat such words as uncountable.
fn heuristic_syllables(lower: &str) -> usize {
    let letters: String = lower.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let mut count = 0usize;
    let mut in_group = false;
    for c in letters.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_group {
            count += 1;
        }
        in_group = is_vowel;
    }
    if count <= 1 {
        return count;
    }
    if letters.ends_with('e') && !letters.ends_with("le") {
        count -= 1;
    } else if letters.ends_with("es") && !VOICED_ES.iter().any(|s| letters.ends_with(s)) {
        count -= 1;
    } else if letters.ends_with("ed") && !letters.ends_with("ted") && !letters.ends_with("ded") {
        count -= 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_and_trims_punctuation() {
        let lex = Lexicon::empty();
        let tokens = lex.tokenize("The waves, crashed -- loudly! (twice)");
        assert_eq!(tokens, ["The", "waves", "crashed", "loudly", "twice"]);
        assert!(lex.tokenize("  ...  ").is_empty());
    }

    #[test]
    fn tags_function_words_and_suffixes() {
        let lex = Lexicon::empty();
        assert_eq!(lex.tag("the"), "dt");
        assert_eq!(lex.tag("under"), "in");
        assert_eq!(lex.tag("crashed"), "vbd");
        assert_eq!(lex.tag("softly"), "rb");
        assert_eq!(lex.tag("peaceful"), "jj");
        // Unknown open-class words default to noun.
        assert_eq!(lex.tag("sand"), "nn");
        assert_eq!(lex.tag("sky"), "nn");
    }

    #[test]
    fn counts_syllables_heuristically() {
        let lex = Lexicon::empty();
        assert_eq!(lex.syllable_count("sand"), 1);
        assert_eq!(lex.syllable_count("ocean"), 2);
        assert_eq!(lex.syllable_count("under"), 2);
        assert_eq!(lex.syllable_count("evening"), 3);
        // Silent endings.
        assert_eq!(lex.syllable_count("tide"), 1);
        assert_eq!(lex.syllable_count("waves"), 1);
        assert_eq!(lex.syllable_count("crashed"), 1);
        // Voiced endings keep the syllable.
        assert_eq!(lex.syllable_count("gentle"), 2);
        assert_eq!(lex.syllable_count("houses"), 2);
        assert_eq!(lex.syllable_count("wanted"), 2);
    }

    #[test]
    fn uncountable_words_yield_zero() {
        let lex = Lexicon::empty();
        assert_eq!(lex.syllable_count("123"), 0);
        assert_eq!(lex.syllable_count("--"), 0);
        assert_eq!(lex.syllable_count(""), 0);
        // Alphabetic but vowel-free.
        assert_eq!(lex.syllable_count("shh"), 0);
    }

    #[test]
    fn table_entries_override_heuristics() {
        let mut entries = HashMap::new();
        entries.insert(
            "quiet".to_string(),
            Entry {
                tag: "jj".to_string(),
                breakdown: "qui/et".to_string(),
            },
        );
        let lex = Lexicon { entries };
        assert_eq!(lex.syllable_count("quiet"), 2);
        assert_eq!(lex.syllable_count("Quiet"), 2);
        assert_eq!(lex.tag("quiet"), "jj");
        assert_eq!(lex.breakdown("quiet"), Some("qui/et"));
    }
}
