//! Terminal output formatting
//!
//! Renders search results with ruled headings and color, one block per
//! dataset pairing or per match list.

use crate::collection::{AnagramReport, ManifestReport, WordAnagram};
use crate::core::Entry;
use colored::Colorize;

/// Print a ruled heading
pub fn print_heading(text: &str) {
    let rule = "─".repeat(text.chars().count().max(20));
    println!("{}", rule.cyan());
    println!("{}", text.bright_yellow().bold());
    println!("{}", rule.cyan());
}

/// Print the outcome of a manifest load, warning about missing sources
pub fn print_manifest_report(report: &ManifestReport) {
    println!("Loaded {} datasets", report.loaded);
    for name in &report.missing {
        eprintln!(
            "{} dataset {} has no source file; loaded empty",
            "warning:".yellow().bold(),
            name
        );
    }
}

/// Print pairwise anagram reports, one block per dataset pairing
pub fn print_anagram_reports(reports: &[AnagramReport]) {
    if reports.is_empty() {
        println!("{}", "No anagram pairs found".dimmed());
        return;
    }
    for report in reports {
        print_heading(&format!("{} and {}", report.dataset_a, report.dataset_b));
        for (x, y) in &report.pairs {
            println!("{} {} {}", x.display(), "<->".cyan(), y.display());
        }
        println!();
    }
}

/// Print the anagrams found for a single queried word
pub fn print_word_anagrams(word: &str, matches: &[WordAnagram]) {
    if matches.is_empty() {
        println!("No anagrams of {} found", word.bright_yellow().bold());
        return;
    }
    print_heading(&format!("Anagrams of {word}"));
    for found in matches {
        println!(
            "{}: {}",
            found.dataset.green(),
            found.entry.display().bright_yellow()
        );
    }
}

/// Print per-dataset match lists from a scope-wide search
pub fn print_matches(results: &[(String, Vec<&Entry>)]) {
    if results.is_empty() {
        println!("{}", "No matches".dimmed());
        return;
    }
    for (dataset, entries) in results {
        let rendered: Vec<&str> = entries.iter().map(|e| e.display()).collect();
        println!("{}: {}", dataset.green(), rendered.join(", "));
    }
}

/// Print one unique-combination hit
pub fn print_unique_combination(combo: &str, entry: &Entry) {
    println!(
        "{}: {}",
        combo.to_uppercase().cyan().bold(),
        entry.display()
    );
}
