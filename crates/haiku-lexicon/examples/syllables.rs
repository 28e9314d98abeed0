use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use haiku_lexicon::Lexicon;
use haiku_types::Pos;

fn main() -> Result<()> {
    let mut args = env::args().skip(1).peekable();
    let table: Option<PathBuf> = match args.peek().map(String::as_str) {
        Some("--table") => {
            args.next();
            Some(
                args.next()
                    .map(PathBuf::from)
                    .context("--table requires a path")?,
            )
        }
        _ => None,
    };

    let words: Vec<String> = args.collect();
    if words.is_empty() {
        bail!("usage: cargo run -p haiku-lexicon --example syllables -- [--table <path>] <word>...");
    }

    let lex = match &table {
        Some(path) => Lexicon::load(path)
            .with_context(|| format!("loading word table from {}", path.display()))?,
        None => Lexicon::empty(),
    };

    for word in words {
        let tag = lex.tag(&word);
        let count = lex.syllable_count(&word);
        let class = Pos::from_penn_tag(&tag)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "other".to_string());
        match lex.breakdown(&word) {
            Some(b) => println!("{word:<16} {tag:<5} {class:<6} {count}  ({b})"),
            None => println!("{word:<16} {tag:<5} {class:<6} {count}"),
        }
    }

    Ok(())
}
