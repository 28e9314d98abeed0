//! Imagery extraction and word-pool assembly.

use std::collections::HashSet;

use haiku_types::Pos;
use rand::Rng;

use crate::linguist::Linguist;
use crate::topic::{Topic, classify};

/// Tokens never treated as imagery even when tagged noun or adjective.
const IMAGERY_STOPLIST: &[&str] = &["other", "another"];

/// Pull the imagery words out of raw text: tokens tagged noun or adjective,
/// minus the stoplist. Original order and duplicates are preserved;
/// deduplication happens during pool assembly.
pub fn extract_imagery<L: Linguist>(linguist: &L, text: &str) -> Vec<String> {
    let tokens = linguist.tokenize(text);
    let tags = linguist.tag_tokens(&tokens);
    tokens
        .into_iter()
        .zip(tags)
        .filter_map(|(token, tag)| {
            let lower = token.to_lowercase();
            let keep = Pos::from_penn_tag(&tag).is_some_and(Pos::is_imagery)
                && !IMAGERY_STOPLIST.contains(&lower.as_str());
            keep.then_some(token)
        })
        .collect()
}

/// Build the word pool for one composition.
///
/// Classifies the topic over lowercased whitespace tokens, filters imagery
/// through the topic's banned set, appends the topic nouns (always, so short
/// input still yields a workable pool), deduplicates case-insensitively
/// keeping the first casing, and with probability 0.5 prepends the tokens of
/// one randomly chosen kigo phrase. Kigo tokens are deliberately not
/// deduplicated against the rest of the pool.
pub fn build_pool<L: Linguist, R: Rng>(
    linguist: &L,
    text: &str,
    rng: &mut R,
) -> (Vec<String>, Topic) {
    let raw: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let topic = classify(&raw);
    let vocab = topic.vocab();
    let banned: HashSet<String> = vocab.banned.iter().map(|w| w.to_lowercase()).collect();

    let mut candidates: Vec<String> = extract_imagery(linguist, text)
        .into_iter()
        .filter(|w| !banned.contains(&w.to_lowercase()))
        .collect();
    candidates.extend(vocab.nouns.iter().map(|w| w.to_string()));

    let mut seen = HashSet::new();
    let mut pool: Vec<String> = Vec::with_capacity(candidates.len());
    for word in candidates {
        if seen.insert(word.to_lowercase()) {
            pool.push(word);
        }
    }

    if !vocab.kigo.is_empty() && rng.gen_bool(0.5) {
        let phrase = vocab.kigo[rng.gen_range(0..vocab.kigo.len())];
        let mut with_kigo: Vec<String> =
            phrase.split_whitespace().map(str::to_string).collect();
        with_kigo.append(&mut pool);
        pool = with_kigo;
    }

    (pool, topic)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use haiku_lexicon::Lexicon;

    #[test]
    fn extracts_nouns_and_adjectives_in_order() {
        let lex = Lexicon::empty();
        let imagery = extract_imagery(&lex, "The waves crashed on the warm sand");
        assert_eq!(imagery, ["waves", "warm", "sand"]);
    }

    #[test]
    fn stoplist_words_are_dropped() {
        let lex = Lexicon::empty();
        let imagery = extract_imagery(&lex, "another shore and other tides");
        assert!(!imagery.iter().any(|w| w == "another" || w == "other"));
        assert!(imagery.contains(&"shore".to_string()));
    }

    #[test]
    fn pool_is_nonempty_even_without_imagery() {
        let lex = Lexicon::empty();
        let mut rng = StdRng::seed_from_u64(1);
        let (pool, topic) = build_pool(&lex, "", &mut rng);
        assert_eq!(topic, Topic::Generic);
        assert!(!pool.is_empty());
    }

    #[test]
    fn banned_imagery_never_enters_a_beach_pool() {
        let lex = Lexicon::empty();
        let mut rng = StdRng::seed_from_u64(1);
        let text = "white frost on the sand near the winter waves";
        let (pool, topic) = build_pool(&lex, text, &mut rng);
        assert_eq!(topic, Topic::Beach);
        for banned in Topic::Beach.vocab().banned {
            assert!(
                !pool.iter().any(|w| w.eq_ignore_ascii_case(banned)),
                "banned word {banned} leaked into pool"
            );
        }
        assert!(pool.iter().any(|w| w == "sand"));
    }

    #[test]
    fn pool_dedupes_case_insensitively_keeping_first_casing() {
        let lex = Lexicon::empty();
        let mut rng = StdRng::seed_from_u64(7);
        let (pool, _) = build_pool(&lex, "Sand sand SAND dune", &mut rng);
        let sands: Vec<&String> = pool
            .iter()
            .filter(|w| w.eq_ignore_ascii_case("sand"))
            .collect();
        // Kigo tokens may coincide, but the deduplicated body keeps one entry
        // with the first-seen casing.
        assert!(sands.contains(&&"Sand".to_string()));
    }

    #[test]
    fn pool_build_is_deterministic_per_seed() {
        let lex = Lexicon::empty();
        let text = "moss on the forest floor";
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(build_pool(&lex, text, &mut a).0, build_pool(&lex, text, &mut b).0);
    }
}
