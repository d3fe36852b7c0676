//! lettercross - CLI
//!
//! Cross-references word lists loaded from a manifest to find anagrams and
//! letter-pattern matches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lettercross::{
    collection::{Collection, DatasetRef},
    core::{Alternation, LetterSet},
    output::{
        print_anagram_reports, print_manifest_report, print_matches, print_unique_combination,
        print_word_anagrams,
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lettercross",
    about = "Cross-references word lists for anagrams and letter-pattern matches",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Manifest listing datasets as "<name>: <sourceFileStem>" lines
    #[arg(short, long, global = true, default_value = "datasets/datasets.txt")]
    manifest: PathBuf,

    /// Directory holding the dataset source files
    #[arg(short, long, global = true, default_value = "datasets")]
    data_dir: PathBuf,

    /// Limit searches to these datasets (names or ordinals)
    #[arg(short, long, global = true)]
    only: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find anagram pairs across all datasets in scope
    Anagrams {
        /// Also report pairs whose normalized values are identical
        #[arg(short, long)]
        trivial: bool,
    },

    /// Find anagrams of a single word across the collection
    Word {
        /// The word to search for
        word: String,

        /// Also report matches identical to the word itself
        #[arg(short, long)]
        trivial: bool,
    },

    /// Entries sharing no letters with the given ones
    NonOverlapping {
        /// Letters to avoid
        #[arg(default_value = "mackerel")]
        letters: String,

        /// Report every match, not just datasets with a unique one
        #[arg(short, long)]
        all: bool,

        /// Collapse multi-entry results to the longest entry
        #[arg(short, long)]
        longest: bool,
    },

    /// Entries whose letters alternate between two sets
    Alternating {
        /// "vowels", "hands", or an explicit letter set
        #[arg(default_value = "vowels")]
        mode: String,

        /// Report every match, not just datasets with a unique one
        #[arg(short, long)]
        all: bool,

        /// Collapse multi-entry results to the longest entry
        #[arg(short, long)]
        longest: bool,
    },

    /// Entries containing every one of the given letters
    ContainsAll {
        /// Required letters
        #[arg(default_value = "aeiou")]
        letters: String,

        /// Report every match, not just datasets with a unique one
        #[arg(short, long)]
        all: bool,

        /// Collapse multi-entry results to the longest entry
        #[arg(short, long)]
        longest: bool,
    },

    /// Entries built only from the given letters
    ContainsOnly {
        /// Allowed letters
        #[arg(default_value = "qwertyuiop")]
        letters: String,

        /// Report every match, not just datasets with a unique one
        #[arg(short, long)]
        all: bool,

        /// Collapse multi-entry results to the longest entry
        #[arg(short, long)]
        longest: bool,
    },

    /// Entries of one dataset containing a substring
    Contains {
        /// Dataset to search
        dataset: String,

        /// Substring to look for
        text: String,
    },

    /// Unique matches for every arrangement of n distinct letters
    Combos {
        /// Dataset to search
        dataset: String,

        /// Arrangement length
        #[arg(short = 'n', long, default_value = "2")]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut coll = Collection::new("datasets");
    let report = coll
        .load_manifest(&cli.manifest, &cli.data_dir)
        .with_context(|| format!("loading manifest {}", cli.manifest.display()))?;
    print_manifest_report(&report);

    if !cli.only.is_empty() {
        let selection: Vec<DatasetRef> = cli
            .only
            .iter()
            .map(|s| {
                s.parse::<usize>()
                    .map_or(DatasetRef::Name(s.as_str()), DatasetRef::Ordinal)
            })
            .collect();
        coll.include_only(selection)?;
    }

    match cli.command {
        Commands::Anagrams { trivial } => run_anagrams(&coll, trivial),
        Commands::Word { word, trivial } => run_word(&mut coll, &word, trivial),
        Commands::NonOverlapping {
            letters,
            all,
            longest,
        } => {
            let results = coll.find_non_overlapping(LetterSet::from_text(&letters), !all, longest);
            print_matches(&results);
        }
        Commands::Alternating { mode, all, longest } => {
            let results = coll.find_alternating(parse_alternation(&mode), !all, longest);
            print_matches(&results);
        }
        Commands::ContainsAll {
            letters,
            all,
            longest,
        } => {
            let results = coll.find_contains_all(LetterSet::from_text(&letters), !all, longest);
            print_matches(&results);
        }
        Commands::ContainsOnly {
            letters,
            all,
            longest,
        } => {
            let results = coll.find_contains_only(LetterSet::from_text(&letters), !all, longest);
            print_matches(&results);
        }
        Commands::Contains { dataset, text } => run_contains(&coll, &dataset, &text)?,
        Commands::Combos { dataset, length } => run_combos(&coll, &dataset, length)?,
    }
    Ok(())
}

/// Map a mode argument to an alternation split
///
/// Anything other than the two built-in names is treated as an explicit
/// letter set against its complement.
fn parse_alternation(mode: &str) -> Alternation {
    match mode {
        "vowels" | "v" => Alternation::VowelConsonant,
        "hands" | "k" => Alternation::TypingHands,
        custom => Alternation::Custom(LetterSet::from_text(custom)),
    }
}

fn run_anagrams(coll: &Collection, trivial: bool) {
    let reports = coll.find_all_anagrams(trivial);
    print_anagram_reports(&reports);
}

fn run_word(coll: &mut Collection, word: &str, trivial: bool) {
    let matches = coll.find_word_anagrams(word, trivial);
    print_word_anagrams(word, &matches);
}

fn run_contains(coll: &Collection, dataset: &str, text: &str) -> Result<()> {
    let ds = coll.get(dataset)?;
    let results = vec![(ds.name().to_string(), ds.contains(text))];
    print_matches(&results);
    Ok(())
}

fn run_combos(coll: &Collection, dataset: &str, length: usize) -> Result<()> {
    let ds = coll.get(dataset)?;
    for (combo, entry) in ds.unique_combinations(length) {
        print_unique_combination(&combo, entry);
    }
    Ok(())
}
