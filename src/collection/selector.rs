//! Dataset selectors and collection errors
//!
//! Datasets can be addressed by name or by the 1-based ordinal assigned at
//! manifest load. Both forms resolve through one lookup on the collection.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A reference to a dataset by name or by manifest ordinal
///
/// Call sites usually pass a `&str` or a `usize` directly; both convert.
///
/// # Examples
/// ```
/// use lettercross::collection::DatasetRef;
///
/// let by_name: DatasetRef = "elements".into();
/// let by_ordinal: DatasetRef = 2.into();
/// assert_eq!(by_name, DatasetRef::Name("elements"));
/// assert_eq!(by_ordinal, DatasetRef::Ordinal(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetRef<'a> {
    /// Address by unique dataset name
    Name(&'a str),
    /// Address by 1-based manifest ordinal
    Ordinal(usize),
}

impl<'a> From<&'a str> for DatasetRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for DatasetRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for DatasetRef<'_> {
    fn from(ordinal: usize) -> Self {
        Self::Ordinal(ordinal)
    }
}

impl fmt::Display for DatasetRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "\"{name}\""),
            Self::Ordinal(n) => write!(f, "#{n}"),
        }
    }
}

/// Error type for collection operations
///
/// Not-found conditions are non-fatal: the collection is left unchanged and
/// the caller can continue.
#[derive(Debug)]
pub enum CollectionError {
    /// No loaded dataset with this name
    DatasetNotFound(String),
    /// No loaded dataset with this manifest ordinal
    OrdinalNotFound(usize),
    /// A dataset source file is absent; the dataset was loaded empty
    SourceMissing(PathBuf),
    /// Any other I/O failure while reading a source or manifest
    Io(io::Error),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetNotFound(name) => {
                write!(f, "No loaded dataset with name \"{name}\"")
            }
            Self::OrdinalNotFound(n) => write!(f, "No loaded dataset with number {n}"),
            Self::SourceMissing(path) => {
                write!(f, "Dataset source {} not found", path.display())
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CollectionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
