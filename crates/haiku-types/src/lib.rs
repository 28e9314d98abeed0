//! Shared types for the haiku composition pipeline.
//!
//! The tagger speaks Penn-Treebank-style tag strings (`NN`, `NNS`, `JJ`,
//! `VBD`, ...). [`Pos`] collapses those to the four word classes the engine
//! cares about, matching on the tag prefix case-insensitively. Syllable
//! breakdowns travel as segment-delimited strings (`"o/cean"`); the segment
//! count is the syllable count, with a floor of one for any non-empty
//! breakdown.
//!
//! ```rust
//! use haiku_types::{Pos, breakdown_segments};
//!
//! assert_eq!(Pos::from_penn_tag("NNS"), Some(Pos::Noun));
//! assert_eq!(Pos::from_penn_tag("jj"), Some(Pos::Adj));
//! assert_eq!(breakdown_segments("o/cean"), 2);
//! ```

use std::fmt;

/// Separator between syllable segments in a breakdown string.
pub const BREAKDOWN_SEP: char = '/';

/// Word class derived from a Penn-Treebank-style tag prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Collapse a Penn-style tag to a word class by prefix, ignoring case.
    ///
    /// `NN`, `NNS`, `NNP` map to nouns; `JJ`, `JJR`, `JJS` to adjectives;
    /// `VB*` to verbs; `RB*` to adverbs. Anything else is `None`.
    pub fn from_penn_tag(tag: &str) -> Option<Self> {
        let lower = tag.trim().to_ascii_lowercase();
        if lower.starts_with("nn") {
            Some(Pos::Noun)
        } else if lower.starts_with("jj") {
            Some(Pos::Adj)
        } else if lower.starts_with("vb") {
            Some(Pos::Verb)
        } else if lower.starts_with("rb") {
            Some(Pos::Adv)
        } else {
            None
        }
    }

    /// True for the word classes the imagery extractor keeps.
    pub fn is_imagery(self) -> bool {
        matches!(self, Pos::Noun | Pos::Adj)
    }

    /// Canonical bare tag emitted by the heuristic tagger.
    pub fn to_tag(self) -> &'static str {
        match self {
            Pos::Noun => "nn",
            Pos::Verb => "vb",
            Pos::Adj => "jj",
            Pos::Adv => "rb",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        })
    }
}

/// Count the segments of a syllable breakdown string.
///
/// Empty breakdowns count zero; any non-empty breakdown counts at least one
/// even if it contains no separator.
pub fn breakdown_segments(breakdown: &str) -> usize {
    let trimmed = breakdown.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed
        .split(BREAKDOWN_SEP)
        .filter(|seg| !seg.is_empty())
        .count()
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_penn_tags_by_prefix() {
        assert_eq!(Pos::from_penn_tag("NN"), Some(Pos::Noun));
        assert_eq!(Pos::from_penn_tag("NNPS"), Some(Pos::Noun));
        assert_eq!(Pos::from_penn_tag("jjr"), Some(Pos::Adj));
        assert_eq!(Pos::from_penn_tag("VBG"), Some(Pos::Verb));
        assert_eq!(Pos::from_penn_tag("RBR"), Some(Pos::Adv));
        assert_eq!(Pos::from_penn_tag("DT"), None);
        assert_eq!(Pos::from_penn_tag(""), None);
    }

    #[test]
    fn imagery_classes_are_nouns_and_adjectives() {
        assert!(Pos::Noun.is_imagery());
        assert!(Pos::Adj.is_imagery());
        assert!(!Pos::Verb.is_imagery());
        assert!(!Pos::Adv.is_imagery());
    }

    #[test]
    fn counts_breakdown_segments() {
        assert_eq!(breakdown_segments(""), 0);
        assert_eq!(breakdown_segments("   "), 0);
        assert_eq!(breakdown_segments("sand"), 1);
        assert_eq!(breakdown_segments("o/cean"), 2);
        assert_eq!(breakdown_segments("e/ve/ning"), 3);
        // Stray separators never drop the floor below one.
        assert_eq!(breakdown_segments("/a/"), 1);
    }
}
