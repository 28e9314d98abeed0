//! Turn free-form text into strict 5-7-5 haiku candidates.
//!
//! The pipeline is one-way: raw text becomes tokens and tags, imagery words
//! and a topic fall out of those, a word pool is assembled, and three lines
//! are packed against exact syllable budgets. Packing is randomized local
//! search with hard attempt ceilings; a composer call is a pure function of
//! `(text, seed)`.
//!
//! ```no_run
//! use haiku_engine::Composer;
//! use haiku_lexicon::Lexicon;
//!
//! let composer = Composer::new(Lexicon::empty());
//! let haiku = composer.compose("the waves crashed on the warm sand", 3);
//! println!("{}", haiku.text());
//! ```

pub mod compose;
pub mod linguist;
pub mod packer;
pub mod pool;
pub mod topic;

pub use compose::{Composer, Haiku, LINE_TARGETS, candidate_seeds};
pub use linguist::Linguist;
pub use packer::{GLUE_WORDS, is_glue};
pub use pool::{build_pool, extract_imagery};
pub use topic::{Topic, TopicVocab, classify};
