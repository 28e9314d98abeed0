//! Line packing: fill an exact syllable budget from a word pool.
//!
//! Two strategies, tried in order by the composer. The natural packer is
//! randomized local search biased toward sentence-like lines (glue words
//! interspersed, short words favored, bounded glue ratio). The exact packer
//! is a deterministic greedy sweep with per-attempt rotation, closing any
//! remaining deficit from the topic's filler tiers. Both terminate purely
//! through attempt and step ceilings.

use rand::Rng;

use crate::linguist::Linguist;
use crate::topic::Topic;

/// Articles and prepositions the natural packer may weave between imagery
/// words. Membership in this list is what makes a token "glue".
pub const GLUE_WORDS: &[&str] = &[
    "a", "the", "of", "in", "on", "at", "and", "to", "by", "with", "near", "under", "over",
    "through",
];

const NATURAL_ATTEMPTS: usize = 36;
const NATURAL_STEPS: usize = 160;
const GLUE_PROB: f64 = 0.42;
const EXACT_ATTEMPTS: usize = 6;

/// True when the token is in the fixed glue-word list, ignoring case.
pub fn is_glue(word: &str) -> bool {
    GLUE_WORDS.iter().any(|g| word.eq_ignore_ascii_case(g))
}

/// A word paired with its syllable count, the unit both packers work over.
#[derive(Clone, Debug)]
struct Counted {
    word: String,
    count: usize,
}

fn counted<L: Linguist>(linguist: &L, words: impl Iterator<Item = String>) -> Vec<Counted> {
    words
        .map(|word| {
            let count = linguist.syllable_count(&word);
            Counted { word, count }
        })
        .collect()
}

/// Pack a line of exactly `target` syllables, biased toward natural phrasing.
///
/// Up to 36 independent attempts, each growing a line for at most 160 steps.
/// Every step draws whether to try a glue word (probability 0.42, never as
/// the first word, never twice in a row), filters the chosen source to words
/// that still fit the budget, falls back to the other source when empty, and
/// picks uniformly among the shortest fitting tier (one-syllable words
/// first, then two). An attempt succeeds only when the total is exact and
/// the line passes the naturalness constraints: at least `min_words` words,
/// imagery count at least `ceil(min_words * 0.6)`, glue count at most
/// `ceil(words * 0.5)`.
pub fn pack_natural<L: Linguist, R: Rng>(
    linguist: &L,
    pool: &[String],
    target: usize,
    min_words: usize,
    rng: &mut R,
) -> Option<Vec<String>> {
    let mut imagery = counted(linguist, pool.iter().cloned());
    imagery.sort_by_key(|c| c.count);
    let mut glue = counted(linguist, GLUE_WORDS.iter().map(|w| w.to_string()));
    glue.sort_by_key(|c| c.count);

    let min_imagery = (min_words as f64 * 0.6).ceil() as usize;

    for _ in 0..NATURAL_ATTEMPTS {
        let mut words: Vec<String> = Vec::new();
        let mut syllables = 0usize;
        let mut last_was_glue = false;

        for _ in 0..NATURAL_STEPS {
            if syllables == target {
                break;
            }
            let try_glue = !words.is_empty() && !last_was_glue && rng.gen_bool(GLUE_PROB);
            let (first, second) = if try_glue {
                (&glue, &imagery)
            } else {
                (&imagery, &glue)
            };
            let budget = target - syllables;
            let pick = choose_fitting(first, budget, rng)
                .or_else(|| choose_fitting(second, budget, rng));
            let Some(chosen) = pick else {
                break;
            };
            syllables += chosen.count;
            last_was_glue = is_glue(&chosen.word);
            words.push(chosen.word);
        }

        if syllables != target {
            continue;
        }
        let word_count = words.len();
        let glue_count = words.iter().filter(|w| is_glue(w)).count();
        let imagery_count = word_count - glue_count;
        let max_glue = (word_count as f64 * 0.5).ceil() as usize;
        if word_count >= min_words && imagery_count >= min_imagery && glue_count <= max_glue {
            return Some(words);
        }
    }
    None
}

/// Uniform seeded pick among fitting words, preferring one-syllable words,
/// then two, then anything that fits.
fn choose_fitting<R: Rng>(source: &[Counted], budget: usize, rng: &mut R) -> Option<Counted> {
    let fitting: Vec<&Counted> = source
        .iter()
        .filter(|c| c.count > 0 && c.count <= budget)
        .collect();
    if fitting.is_empty() {
        return None;
    }
    for tier in [1usize, 2] {
        let tiered: Vec<&&Counted> = fitting.iter().filter(|c| c.count == tier).collect();
        if !tiered.is_empty() {
            return Some((*tiered[rng.gen_range(0..tiered.len())]).clone());
        }
    }
    Some(fitting[rng.gen_range(0..fitting.len())].clone())
}

/// Exact-fit fallback: greedy sweeps over a rotated pool, deficit closed
/// from the topic fillers.
///
/// Up to 6 attempts. Each rotates the pool by `attempt * 3` plus a random
/// jitter, makes two greedy passes taking any unused word that fits, then
/// tries to close a remaining deficit with a single filler: one whose count
/// equals the deficit exactly, otherwise one two-syllable filler when the
/// deficit allows, otherwise one one-syllable filler. No combination of
/// multiple fillers is attempted; an attempt left short simply fails and the
/// loop retries with a different rotation.
pub fn pack_exact<L: Linguist, R: Rng>(
    linguist: &L,
    pool: &[String],
    target: usize,
    topic: Topic,
    rng: &mut R,
) -> Option<Vec<String>> {
    let entries = counted(linguist, pool.iter().cloned());
    let vocab = topic.vocab();
    let fillers = counted(
        linguist,
        vocab
            .fillers_one
            .iter()
            .chain(vocab.fillers_two)
            .map(|w| w.to_string()),
    );

    for attempt in 0..EXACT_ATTEMPTS {
        let jitter = rng.gen_range(0..3usize);
        let shift = if entries.is_empty() {
            0
        } else {
            (attempt * 3 + jitter) % entries.len()
        };

        let mut used = vec![false; entries.len()];
        let mut words: Vec<String> = Vec::new();
        let mut syllables = 0usize;

        'passes: for _ in 0..2 {
            for offset in 0..entries.len() {
                let idx = (offset + shift) % entries.len();
                if used[idx] {
                    continue;
                }
                let entry = &entries[idx];
                if entry.count > 0 && syllables + entry.count <= target {
                    used[idx] = true;
                    syllables += entry.count;
                    words.push(entry.word.clone());
                    if syllables == target {
                        break 'passes;
                    }
                }
            }
        }

        if syllables < target {
            let need = target - syllables;
            if let Some(filler) = fillers.iter().find(|f| f.count == need) {
                syllables += filler.count;
                words.push(filler.word.clone());
            } else if need >= 2 {
                if let Some(filler) = fillers.iter().find(|f| f.count == 2) {
                    syllables += filler.count;
                    words.push(filler.word.clone());
                }
            } else if let Some(filler) = fillers.iter().find(|f| f.count == 1) {
                syllables += filler.count;
                words.push(filler.word.clone());
            }
        }

        if syllables == target {
            return Some(words);
        }
    }
    None
}
