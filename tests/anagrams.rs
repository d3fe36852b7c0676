//! End-to-end tests over file-backed collections
//!
//! Builds a small data directory on disk, loads a collection through its
//! manifest, and exercises the search surface the way the CLI does.

use lettercross::collection::{Collection, CollectionError, canonical_key};
use lettercross::core::LetterSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("country_list.txt"),
        "Iran\nChad\nNepal\nSão Tomé and Príncipe\n",
    )
    .unwrap();
    fs::write(dir.path().join("periodic_table.txt"), "Iron\nNeon\nTin\n").unwrap();
    fs::write(dir.path().join("common_words.txt"), "rain\nplane\nnori\n").unwrap();
    fs::write(dir.path().join("fish.txt"), "mackerel\nherring\n").unwrap();
    let manifest = dir.path().join("datasets.txt");
    fs::write(
        &manifest,
        "countries: country_list\n\
         elements: periodic_table\n\
         words: common_words\n\
         fish: fish\n\
         ghosts: nowhere\n",
    )
    .unwrap();
    (dir, manifest)
}

fn load_fixture() -> (TempDir, Collection) {
    let (dir, manifest) = write_fixture();
    let mut coll = Collection::new("atlas");
    let report = coll.load_manifest(&manifest, dir.path()).unwrap();
    assert_eq!(report.loaded, 4);
    assert_eq!(report.missing, ["ghosts"]);
    (dir, coll)
}

#[test]
fn manifest_load_names_ordinals_and_normalization() {
    let (_dir, coll) = load_fixture();

    // Dataset named from the manifest, not the file stem
    assert!(coll.get("country_list").is_err());
    let countries = coll.get("countries").unwrap();
    assert_eq!(countries.len(), 4);

    // Ordinals follow manifest order, 1-based
    assert_eq!(coll.get(1).unwrap().name(), "countries");
    assert_eq!(coll.get(2).unwrap().name(), "elements");
    assert_eq!(coll.get(5).unwrap().name(), "ghosts");
    assert!(matches!(
        coll.get(6),
        Err(CollectionError::OrdinalNotFound(6))
    ));

    // Values are normalized, display forms untouched
    let sao_tome = &countries.entries()[3];
    assert_eq!(sao_tome.value(), "saotomeandprincipe");
    assert_eq!(sao_tome.display(), "São Tomé and Príncipe");
}

#[test]
fn cross_dataset_anagrams_by_ordinal() {
    let (_dir, coll) = load_fixture();

    // countries is ordinal 1, words is ordinal 3
    let pairs = coll.find_anagrams(1, 3, false).unwrap();
    let values: Vec<(&str, &str)> = pairs.iter().map(|(x, y)| (x.value(), y.value())).collect();
    assert_eq!(values, [("iran", "rain"), ("nepal", "plane")]);

    // Same search by name
    let by_name = coll.find_anagrams("countries", "words", false).unwrap();
    assert_eq!(by_name.len(), pairs.len());
}

#[test]
fn scope_wide_anagram_discovery() {
    let (_dir, coll) = load_fixture();

    let reports = coll.find_all_anagrams(false);
    let pairings: Vec<(&str, &str)> = reports
        .iter()
        .map(|r| (r.dataset_a.as_str(), r.dataset_b.as_str()))
        .collect();
    // iran-rain and nepal-plane, iron-nori; nothing else matches
    assert_eq!(pairings, [("countries", "words"), ("elements", "words")]);
}

#[test]
fn word_query_leaves_file_backed_collection_intact() {
    let (_dir, mut coll) = load_fixture();
    let before = coll.dataset_names().len();

    let matches = coll.find_word_anagrams("rain", false);
    let found: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.dataset.as_str(), m.entry.display()))
        .collect();
    assert_eq!(found, [("countries", "Iran")]);

    let none = coll.find_word_anagrams("qqqq", false);
    assert!(none.is_empty());

    assert_eq!(coll.dataset_names().len(), before);
}

#[test]
fn pairwise_and_index_agree_on_fixture() {
    let (_dir, mut coll) = load_fixture();

    let mut pairwise: Vec<(String, String)> = coll
        .find_anagrams("countries", "words", false)
        .unwrap()
        .iter()
        .map(|(x, y)| (x.value().to_string(), y.value().to_string()))
        .collect();
    pairwise.sort();

    let indexed = coll.anagram_pairs(false);
    let mut from_index: Vec<(String, String)> = indexed
        .get(&("countries".to_string(), "words".to_string()))
        .map(|pairs| {
            pairs
                .iter()
                .map(|(x, y)| (x.value().to_string(), y.value().to_string()))
                .collect()
        })
        .unwrap_or_default();
    from_index.sort();

    assert_eq!(pairwise, from_index);
}

#[test]
fn scope_narrowing_changes_search_results() {
    let (_dir, mut coll) = load_fixture();

    let letters = LetterSet::from_text("mackerel");
    let everywhere = coll.find_non_overlapping(letters, false, false);
    assert!(everywhere.iter().any(|(name, _)| name == "elements"));

    coll.include_only(["fish"]).unwrap();
    let narrowed = coll.find_non_overlapping(letters, false, false);
    assert!(narrowed.iter().all(|(name, _)| name == "fish"));

    coll.include_all();
    assert_eq!(coll.scope().len(), 5);
}

#[test]
fn canonical_keys_match_across_loaded_data() {
    let (_dir, coll) = load_fixture();
    let iran = &coll.get("countries").unwrap().entries()[0];
    assert_eq!(canonical_key(iran.value()), canonical_key("rain"));
}
