//! The seam between the engine and whatever linguistic service backs it.
//!
//! The engine never reads a dictionary itself; it asks a [`Linguist`] for
//! tokens, tags, and syllable counts, the way a morphology pass asks a
//! caller-provided predicate whether a lemma exists. Tests substitute fakes
//! with fixed counts.

use haiku_lexicon::Lexicon;

/// Tokenization, tagging, and syllable counting for the engine.
///
/// Tags are Penn-style strings aligned 1:1 with tokens. A syllable count of
/// zero marks a word as uncountable; such words are never placed in a line.
pub trait Linguist {
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn tag_tokens(&self, tokens: &[String]) -> Vec<String>;
    fn syllable_count(&self, word: &str) -> usize;
}

impl Linguist for Lexicon {
    fn tokenize(&self, text: &str) -> Vec<String> {
        Lexicon::tokenize(self, text)
    }

    fn tag_tokens(&self, tokens: &[String]) -> Vec<String> {
        Lexicon::tag_tokens(self, tokens)
    }

    fn syllable_count(&self, word: &str) -> usize {
        Lexicon::syllable_count(self, word)
    }
}
