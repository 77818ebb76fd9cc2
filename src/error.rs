//! Error taxonomy
//!
//! Two failure families exist: the question feed (read/parse/validate)
//! and the story document (read/extract). Neither is ever fatal and
//! neither surfaces as UI text; callers log and degrade to an empty
//! region.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Question feed failures. Any of these leaves the store empty.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read question feed {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("question feed {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("question {index} is invalid: {reason}")]
    InvalidRecord {
        index: usize,
        #[source]
        reason: InvalidQuestion,
    },
}

/// Per-record validation failures, checked once at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidQuestion {
    #[error("options list is empty")]
    NoOptions,
    #[error("correct index {correct} is out of range for {len} options")]
    CorrectOutOfRange { correct: usize, len: usize },
    #[error("options mix image references and plain text")]
    MixedOptions,
}

/// Story document failures. Scoped to a single extraction call.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("failed to read story document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("story document {path} has no element of class \"{class}\"")]
    FragmentMissing { path: PathBuf, class: &'static str },
}
