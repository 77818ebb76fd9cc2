use std::fs;
use std::path::Path;

use crate::error::FeedError;
use crate::models::{Question, QuestionRecord};

/// Load and validate the question feed.
///
/// The feed is an ordered JSON array; order is preserved verbatim. Any
/// failure (unreadable file, bad JSON, invalid record) rejects the
/// whole feed so the caller falls back to an empty store.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, FeedError> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<QuestionRecord> =
        serde_json::from_str(&content).map_err(|source| FeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::from_record(record)
                .map_err(|reason| FeedError::InvalidRecord { index, reason })
        })
        .collect()
}
