//! Haiku assembly: pool, three packed lines, layered fallbacks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::linguist::Linguist;
use crate::packer::{pack_exact, pack_natural};
use crate::pool::{build_pool, extract_imagery};
use crate::topic::Topic;

/// Per-line syllable target and minimum word count.
pub const LINE_TARGETS: [(usize, usize); 3] = [(5, 3), (7, 4), (5, 3)];

/// A composed haiku with its provenance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Haiku {
    pub lines: [String; 3],
    pub syllables: [usize; 3],
    pub topic: Topic,
    pub seed: u32,
    /// True when every line came through the natural or exact packer; false
    /// when the loose fallback ran and the 5-7-5 pattern may be missed.
    pub exact: bool,
}

impl Haiku {
    /// The three lines joined by single newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Derive the three candidate seeds for one generate or regenerate action.
///
/// `regen` is the caller's monotonically increasing regeneration counter;
/// round zero starts at the base seed itself. Distinct rounds and candidate
/// slots land on distinct seeds for any base.
pub fn candidate_seeds(base: u32, regen: u32) -> [u32; 3] {
    let stride = regen.wrapping_mul(3);
    [0u32, 1, 2].map(|slot| {
        base.wrapping_add(stride.wrapping_add(slot).wrapping_mul(0x9e37_79b9))
    })
}

/// Deterministic haiku composition over a [`Linguist`].
pub struct Composer<L: Linguist> {
    linguist: L,
}

impl<L: Linguist> Composer<L> {
    pub fn new(linguist: L) -> Self {
        Self { linguist }
    }

    pub fn linguist(&self) -> &L {
        &self.linguist
    }

    /// Compose one haiku. Pure in `(text, seed)`: the same pair always
    /// yields the same result.
    ///
    /// Builds the pool, packs each target line natural-first then exact.
    /// If any line fails both packers, all three are discarded and the loose
    /// fallback assembles best-effort lines from the imagery words alone;
    /// those may miss the 5-7-5 pattern, flagged by `exact == false`.
    pub fn compose(&self, text: &str, seed: u32) -> Haiku {
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let (pool, topic) = build_pool(&self.linguist, text, &mut rng);

        let lines = match self.strict_lines(&pool, topic, &mut rng) {
            Some(lines) => lines,
            None => {
                debug!(topic = topic.name(), "strict packing failed, composing loose lines");
                let imagery = extract_imagery(&self.linguist, text);
                return self.finish(
                    LINE_TARGETS.map(|(target, _)| self.loose_line(&imagery, target)),
                    topic,
                    seed,
                    false,
                );
            }
        };
        self.finish(lines, topic, seed, true)
    }

    /// Compose the three candidates for one generate/regenerate action.
    pub fn candidates(&self, text: &str, base_seed: u32, regen: u32) -> [Haiku; 3] {
        candidate_seeds(base_seed, regen).map(|seed| self.compose(text, seed))
    }

    /// Recompute per-line syllable counts for a haiku string. Missing lines
    /// count zero. Diagnostic only; never used during packing.
    pub fn count_575(&self, haiku: &str) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for (slot, line) in haiku.split('\n').take(3).enumerate() {
            counts[slot] = line
                .split_whitespace()
                .map(|w| self.linguist.syllable_count(w))
                .sum();
        }
        counts
    }

    fn strict_lines<R: Rng>(
        &self,
        pool: &[String],
        topic: Topic,
        rng: &mut R,
    ) -> Option<[Vec<String>; 3]> {
        let mut lines: Vec<Vec<String>> = Vec::with_capacity(3);
        for (target, min_words) in LINE_TARGETS {
            let line = pack_natural(&self.linguist, pool, target, min_words, rng)
                .or_else(|| pack_exact(&self.linguist, pool, target, topic, rng))?;
            lines.push(line);
        }
        lines.try_into().ok()
    }

    /// Degraded mode: walk the imagery words in original order, take any
    /// countable word that still fits, stop early on an exact hit. No
    /// randomness, no glue, no exactness guarantee.
    fn loose_line(&self, imagery: &[String], target: usize) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        let mut syllables = 0usize;
        for word in imagery {
            let count = self.linguist.syllable_count(word);
            if count == 0 {
                continue;
            }
            if syllables + count <= target {
                syllables += count;
                words.push(word.clone());
                if syllables == target {
                    break;
                }
            }
        }
        words
    }

    fn finish(&self, lines: [Vec<String>; 3], topic: Topic, seed: u32, exact: bool) -> Haiku {
        let syllables = [0usize, 1, 2].map(|i| {
            lines[i]
                .iter()
                .map(|w| self.linguist.syllable_count(w))
                .sum()
        });
        Haiku {
            lines: lines.map(|words| words.join(" ")),
            syllables,
            topic,
            seed,
            exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::is_glue;
    use haiku_lexicon::Lexicon;

    const BEACH_TEXT: &str = "the waves crashed on the warm sand under a bright sky";

    fn composer() -> Composer<Lexicon> {
        Composer::new(Lexicon::empty())
    }

    #[test]
    fn composition_is_deterministic() {
        let composer = composer();
        let a = composer.compose(BEACH_TEXT, 3);
        let b = composer.compose(BEACH_TEXT, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn beach_text_composes_an_exact_beach_haiku() {
        let composer = composer();
        let haiku = composer.compose(BEACH_TEXT, 3);
        assert_eq!(haiku.topic, Topic::Beach);
        assert!(haiku.exact, "strict packing should succeed for beach text");
        assert_eq!(haiku.syllables, [5, 7, 5]);
        assert_eq!(composer.count_575(&haiku.text()), [5, 7, 5]);
        let banned = Topic::Beach.vocab().banned;
        for line in &haiku.lines {
            assert!(!line.is_empty());
            for word in line.split_whitespace() {
                assert!(
                    !banned.iter().any(|b| word.eq_ignore_ascii_case(b)),
                    "banned word {word} in {line}"
                );
            }
        }
    }

    #[test]
    fn empty_input_still_composes_deterministically() {
        let composer = composer();
        let a = composer.compose("", 7);
        let b = composer.compose("", 7);
        assert_eq!(a, b);
        assert_eq!(a.topic, Topic::Generic);
        // Generic topic nouns guarantee a workable pool even with no input.
        assert!(a.exact);
        assert_eq!(a.syllables, [5, 7, 5]);
    }

    #[test]
    fn distinct_seeds_generally_differ() {
        let composer = composer();
        let texts: Vec<String> = [3u32, 7, 13]
            .iter()
            .map(|seed| composer.compose(BEACH_TEXT, *seed).text())
            .collect();
        assert!(
            texts[0] != texts[1] || texts[1] != texts[2],
            "all three seeds collapsed to one haiku"
        );
        for text in &texts {
            assert_eq!(composer.count_575(text), [5, 7, 5]);
        }
    }

    #[test]
    fn no_consecutive_glue_in_strict_lines() {
        let composer = composer();
        for seed in 0..10u32 {
            let haiku = composer.compose(BEACH_TEXT, seed);
            if !haiku.exact {
                continue;
            }
            for line in &haiku.lines {
                let words: Vec<&str> = line.split_whitespace().collect();
                for pair in words.windows(2) {
                    assert!(
                        !(is_glue(pair[0]) && is_glue(pair[1])),
                        "consecutive glue in {line}"
                    );
                }
            }
        }
    }

    #[test]
    fn count_575_pads_missing_lines_with_zero() {
        let composer = composer();
        assert_eq!(composer.count_575("warm sand"), [2, 0, 0]);
        assert_eq!(composer.count_575(""), [0, 0, 0]);
        assert_eq!(composer.count_575("sand\nfoam and tide\nsun"), [1, 3, 1]);
    }

    #[test]
    fn candidate_seeds_are_distinct_across_slots_and_rounds() {
        let round0 = candidate_seeds(42, 0);
        let round1 = candidate_seeds(42, 1);
        assert_eq!(round0[0], 42);
        let mut all: Vec<u32> = round0.into_iter().chain(round1).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn candidates_compose_three_haikus() {
        let composer = composer();
        let candidates = composer.candidates(BEACH_TEXT, 42, 0);
        assert_eq!(candidates.len(), 3);
        for haiku in &candidates {
            assert_eq!(haiku.topic, Topic::Beach);
            assert_eq!(composer.count_575(&haiku.text()), haiku.syllables);
        }
    }
}
