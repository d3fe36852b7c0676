//! Collections of datasets
//!
//! A [`Collection`] owns many named datasets, tracks which of them are in
//! the active search scope, and lazily maintains the anagram index that
//! accelerates cross-dataset anagram discovery.

mod index;
mod search;
mod selector;

pub use index::{AnagramIndex, EntryLoc, canonical_key};
pub use search::{AnagramReport, WordAnagram};
pub use selector::{CollectionError, DatasetRef};

use crate::core::{Dataset, NormalizeOptions};
use crate::loader;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a bulk manifest load
#[derive(Debug, Default)]
pub struct ManifestReport {
    /// Datasets loaded with a readable source file
    pub loaded: usize,
    /// Datasets whose source file was absent; they were loaded empty
    pub missing: Vec<String>,
}

/// A named aggregate of datasets with scope control and an anagram index
///
/// Scope (the set of datasets multi-dataset searches consult) is
/// `included - excluded`; both default to "everything included, nothing
/// excluded". The anagram index covers *all* loaded datasets regardless of
/// scope, is built on first use, and is rebuilt wholesale after any change
/// to dataset membership or contents.
pub struct Collection {
    name: String,
    datasets: Vec<Dataset>,
    /// Names by 1-based ordinal, assigned at manifest load in file order
    ordinals: Vec<String>,
    included: BTreeSet<String>,
    excluded: BTreeSet<String>,
    index: Option<AnagramIndex>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datasets: Vec::new(),
            ordinals: Vec::new(),
            included: BTreeSet::new(),
            excluded: BTreeSet::new(),
            index: None,
        }
    }

    /// The collection's label
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of loaded datasets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether no datasets are loaded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Iterate all loaded datasets in insertion order
    pub fn datasets(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    /// Names of all loaded datasets in insertion order
    #[must_use]
    pub fn dataset_names(&self) -> Vec<&str> {
        self.datasets.iter().map(Dataset::name).collect()
    }

    /// Resolve a selector to a position in the dataset list
    fn position(&self, selector: DatasetRef<'_>) -> Result<usize, CollectionError> {
        match selector {
            DatasetRef::Name(name) => self
                .datasets
                .iter()
                .position(|d| d.name() == name)
                .ok_or_else(|| CollectionError::DatasetNotFound(name.to_string())),
            DatasetRef::Ordinal(n) => {
                let name = n
                    .checked_sub(1)
                    .and_then(|i| self.ordinals.get(i))
                    .ok_or(CollectionError::OrdinalNotFound(n))?;
                self.datasets
                    .iter()
                    .position(|d| d.name() == name)
                    .ok_or_else(|| CollectionError::DatasetNotFound(name.clone()))
            }
        }
    }

    /// Look up a dataset by name or manifest ordinal
    ///
    /// # Errors
    /// Returns a not-found error for unknown names or ordinals; the
    /// collection is unchanged.
    ///
    /// # Examples
    /// ```
    /// use lettercross::collection::Collection;
    ///
    /// let mut coll = Collection::new("atlas");
    /// coll.add_dataset_from_lines("countries", ["Chad", "Iran"]);
    /// assert_eq!(coll.get("countries").unwrap().len(), 2);
    /// assert!(coll.get("oceans").is_err());
    /// ```
    pub fn get<'a>(
        &self,
        selector: impl Into<DatasetRef<'a>>,
    ) -> Result<&Dataset, CollectionError> {
        let pos = self.position(selector.into())?;
        Ok(&self.datasets[pos])
    }

    /// Insert a dataset, replacing any existing dataset with the same name
    ///
    /// The dataset joins the included scope; a previous exclusion by the
    /// same name is lifted.
    fn insert(&mut self, dataset: Dataset) {
        let name = dataset.name().to_string();
        if let Some(pos) = self.datasets.iter().position(|d| d.name() == name) {
            self.datasets[pos] = dataset;
        } else {
            self.datasets.push(dataset);
        }
        self.excluded.remove(&name);
        self.included.insert(name);
        self.index = None;
    }

    /// Load a dataset from a source file and insert it
    ///
    /// Returns the number of entries loaded. A missing source file is
    /// non-fatal: the dataset is still inserted, empty, and a
    /// `SourceMissing` error reports the condition so the caller can
    /// continue.
    ///
    /// # Errors
    /// `SourceMissing` when the file is absent (dataset inserted empty);
    /// `Io` for any other read failure (nothing inserted).
    pub fn add_dataset(&mut self, name: &str, source: &Path) -> Result<usize, CollectionError> {
        match loader::read_lines(source) {
            Ok(lines) => {
                let count = lines.len();
                self.insert(Dataset::from_lines(name, lines));
                Ok(count)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.insert(Dataset::new(name));
                Err(CollectionError::SourceMissing(source.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Insert an in-memory dataset built from the given lines
    pub fn add_dataset_from_lines<I, S>(&mut self, name: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(Dataset::from_lines(name, lines));
    }

    /// Remove a dataset by name, returning it
    ///
    /// The name is scrubbed from both scope sets and the anagram index is
    /// invalidated.
    ///
    /// # Errors
    /// `DatasetNotFound` if no dataset has this name.
    pub fn remove_dataset(&mut self, name: &str) -> Result<Dataset, CollectionError> {
        let pos = self.position(DatasetRef::Name(name))?;
        let dataset = self.datasets.remove(pos);
        self.included.remove(name);
        self.excluded.remove(name);
        self.index = None;
        Ok(dataset)
    }

    /// Normalize every dataset
    pub fn normalize(&mut self, options: &NormalizeOptions) {
        for dataset in &mut self.datasets {
            dataset.normalize(options);
        }
        self.index = None;
    }

    /// Normalize one dataset
    ///
    /// # Errors
    /// Not-found errors for unknown selectors; nothing is changed.
    pub fn normalize_dataset<'a>(
        &mut self,
        selector: impl Into<DatasetRef<'a>>,
        options: &NormalizeOptions,
    ) -> Result<(), CollectionError> {
        let pos = self.position(selector.into())?;
        self.datasets[pos].normalize(options);
        self.index = None;
        Ok(())
    }

    /// Resolve each selector to a dataset name, failing on the first unknown
    fn resolve_names<'a, I>(&self, selection: I) -> Result<Vec<String>, CollectionError>
    where
        I: IntoIterator,
        I::Item: Into<DatasetRef<'a>>,
    {
        selection
            .into_iter()
            .map(|sel| self.get(sel).map(|d| d.name().to_string()))
            .collect()
    }

    /// Narrow the included set to exactly this selection
    ///
    /// # Errors
    /// Unknown selectors leave the scope untouched.
    pub fn include_only<'a, I>(&mut self, selection: I) -> Result<(), CollectionError>
    where
        I: IntoIterator,
        I::Item: Into<DatasetRef<'a>>,
    {
        let names = self.resolve_names(selection)?;
        self.included = names.into_iter().collect();
        Ok(())
    }

    /// Add this selection to the included set
    ///
    /// # Errors
    /// Unknown selectors leave the scope untouched.
    pub fn include<'a, I>(&mut self, selection: I) -> Result<(), CollectionError>
    where
        I: IntoIterator,
        I::Item: Into<DatasetRef<'a>>,
    {
        let names = self.resolve_names(selection)?;
        self.included.extend(names);
        Ok(())
    }

    /// Add this selection to the excluded set
    ///
    /// # Errors
    /// Unknown selectors leave the scope untouched.
    pub fn exclude<'a, I>(&mut self, selection: I) -> Result<(), CollectionError>
    where
        I: IntoIterator,
        I::Item: Into<DatasetRef<'a>>,
    {
        let names = self.resolve_names(selection)?;
        self.excluded.extend(names);
        Ok(())
    }

    /// Reset the scope: everything included, nothing excluded
    pub fn include_all(&mut self) {
        self.included = self.datasets.iter().map(|d| d.name().to_string()).collect();
        self.excluded.clear();
    }

    /// The active search scope: included minus excluded, sorted by name
    #[must_use]
    pub fn scope(&self) -> Vec<&Dataset> {
        self.included
            .iter()
            .filter(|name| !self.excluded.contains(*name))
            .filter_map(|name| self.datasets.iter().find(|d| d.name() == name))
            .collect()
    }

    /// Bulk-load datasets from a manifest file
    ///
    /// Replaces all current datasets. Each `<name>: <sourceFileStem>` line
    /// creates one dataset loaded from `<data_dir>/<stem>.txt`; ordinals are
    /// assigned in file order; every dataset is normalized with default
    /// options and included in scope. Missing source files are collected in
    /// the report rather than aborting the load.
    ///
    /// # Errors
    /// Returns an error if the manifest itself cannot be read, or on a
    /// non-missing I/O failure while reading a source.
    pub fn load_manifest(
        &mut self,
        manifest: &Path,
        data_dir: &Path,
    ) -> Result<ManifestReport, CollectionError> {
        let text = fs::read_to_string(manifest)?;
        let lines = loader::parse_manifest(&text);

        self.datasets.clear();
        self.ordinals.clear();
        self.included.clear();
        self.excluded.clear();
        self.index = None;

        let mut report = ManifestReport::default();
        for line in lines {
            let path = loader::source_path(data_dir, &line.stem);
            match self.add_dataset(&line.name, &path) {
                Ok(_) => report.loaded += 1,
                Err(CollectionError::SourceMissing(_)) => report.missing.push(line.name.clone()),
                Err(err) => return Err(err),
            }
            self.ordinals.push(line.name);
        }
        self.normalize(&NormalizeOptions::default());
        Ok(report)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collection {} with {} datasets",
            self.name.to_uppercase(),
            self.datasets.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Collection {
        let mut coll = Collection::new("atlas");
        coll.add_dataset_from_lines("countries", ["Chad", "Iran", "Mali"]);
        coll.add_dataset_from_lines("elements", ["Iron", "Neon"]);
        coll
    }

    #[test]
    fn get_by_name() {
        let coll = sample();
        assert_eq!(coll.get("elements").unwrap().len(), 2);
    }

    #[test]
    fn get_unknown_name_is_nonfatal() {
        let coll = sample();
        assert!(matches!(
            coll.get("oceans"),
            Err(CollectionError::DatasetNotFound(_))
        ));
        assert_eq!(coll.len(), 2);
    }

    #[test]
    fn get_unknown_ordinal() {
        let coll = sample();
        // No manifest was loaded, so no ordinals exist
        assert!(matches!(
            coll.get(1),
            Err(CollectionError::OrdinalNotFound(1))
        ));
    }

    #[test]
    fn scope_defaults_to_everything() {
        let coll = sample();
        let names: Vec<&str> = coll.scope().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["countries", "elements"]);
    }

    #[test]
    fn exclude_narrows_scope() {
        let mut coll = sample();
        coll.exclude(["elements"]).unwrap();
        let names: Vec<&str> = coll.scope().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["countries"]);
    }

    #[test]
    fn include_only_narrows_scope() {
        let mut coll = sample();
        coll.include_only(["elements"]).unwrap();
        let names: Vec<&str> = coll.scope().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["elements"]);
    }

    #[test]
    fn include_all_resets_scope() {
        let mut coll = sample();
        coll.exclude(["countries"]).unwrap();
        coll.include_all();
        assert_eq!(coll.scope().len(), 2);
    }

    #[test]
    fn unknown_selector_leaves_scope_untouched() {
        let mut coll = sample();
        assert!(coll.include_only(["countries", "oceans"]).is_err());
        assert_eq!(coll.scope().len(), 2);
    }

    #[test]
    fn readding_excluded_dataset_reincludes_it() {
        let mut coll = sample();
        coll.exclude(["elements"]).unwrap();
        coll.add_dataset_from_lines("elements", ["Gold"]);
        let names: Vec<&str> = coll.scope().iter().map(|d| d.name()).collect();
        assert_eq!(names, ["countries", "elements"]);
        assert_eq!(coll.get("elements").unwrap().len(), 1);
    }

    #[test]
    fn remove_scrubs_scope() {
        let mut coll = sample();
        coll.exclude(["elements"]).unwrap();
        let removed = coll.remove_dataset("elements").unwrap();
        assert_eq!(removed.name(), "elements");
        assert_eq!(coll.len(), 1);
        assert!(coll.get("elements").is_err());
    }

    #[test]
    fn add_dataset_missing_source_loads_empty() {
        let mut coll = Collection::new("atlas");
        let err = coll
            .add_dataset("ghosts", Path::new("no/such/ghosts.txt"))
            .unwrap_err();
        assert!(matches!(err, CollectionError::SourceMissing(_)));
        // The dataset exists, empty, and the caller can continue
        assert!(coll.get("ghosts").unwrap().is_empty());
    }

    #[test]
    fn load_manifest_assigns_ordinals_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("periodic_table.txt")).unwrap();
        write!(file, "Iron\nNeon\n").unwrap();
        let manifest = dir.path().join("datasets.txt");
        fs::write(&manifest, "elements: periodic_table\n").unwrap();

        let mut coll = Collection::new("atlas");
        let report = coll.load_manifest(&manifest, dir.path()).unwrap();
        assert_eq!(report.loaded, 1);
        assert!(report.missing.is_empty());

        // Named from the manifest, sourced from the stem, ordinal 1
        let elements = coll.get("elements").unwrap();
        assert_eq!(elements.entries()[0].value(), "iron");
        assert_eq!(coll.get(1).unwrap().name(), "elements");
    }

    #[test]
    fn load_manifest_reports_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("datasets.txt");
        fs::write(&manifest, "ghosts: nowhere\n").unwrap();

        let mut coll = Collection::new("atlas");
        let report = coll.load_manifest(&manifest, dir.path()).unwrap();
        assert_eq!(report.loaded, 0);
        assert_eq!(report.missing, ["ghosts"]);
        assert!(coll.get("ghosts").unwrap().is_empty());
    }

    #[test]
    fn display_summarizes() {
        let coll = sample();
        assert_eq!(coll.to_string(), "Collection ATLAS with 2 datasets");
    }
}
