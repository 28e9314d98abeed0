use std::io::Write;

use haiku_lexicon::Lexicon;
use tempfile::NamedTempFile;

#[test]
fn loads_word_table_and_skips_comments() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "# word  tag  breakdown").unwrap();
    writeln!(file, "ocean   nn   o/cean").unwrap();
    writeln!(file, "quiet   jj   qui/et").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "malformed-line").unwrap();
    writeln!(file, "evening nn   eve/ning").unwrap();

    let lex = Lexicon::load(file.path()).expect("load lexicon");
    assert_eq!(lex.len(), 3);
    assert_eq!(lex.syllable_count("ocean"), 2);
    assert_eq!(lex.syllable_count("quiet"), 2);
    // Table entry wins over the three-group heuristic guess.
    assert_eq!(lex.syllable_count("evening"), 2);
    assert_eq!(lex.tag("quiet"), "jj");
}

#[test]
fn missing_file_is_an_empty_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let lex = Lexicon::load(dir.path().join("absent.txt")).expect("load missing");
    assert!(lex.is_empty());
    // Heuristics still answer.
    assert_eq!(lex.syllable_count("ocean"), 2);
}

#[test]
fn lookup_is_case_insensitive() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "Ocean nn o/cean").unwrap();
    let lex = Lexicon::load(file.path()).expect("load lexicon");
    assert_eq!(lex.syllable_count("OCEAN"), 2);
    assert_eq!(lex.breakdown("ocean"), Some("o/cean"));
}
