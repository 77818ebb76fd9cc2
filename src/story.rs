//! Story document loading
//!
//! The narrative lives in a markup document holding one element of
//! class `start` and one of class `end`. The inner markup of the
//! requested element is taken verbatim; the document is trusted input
//! and nothing is sanitized.

use std::fs;
use std::path::Path;

use crate::error::StoryError;

/// Class of the fragment shown before the first question.
pub const START_CLASS: &str = "start";
/// Class of the fragment shown on completion.
pub const END_CLASS: &str = "end";

/// Read the story document and extract one fragment by class.
pub fn load_fragment(path: &Path, class: &'static str) -> Result<String, StoryError> {
    let content = fs::read_to_string(path).map_err(|source| StoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    extract_fragment(&content, class).ok_or(StoryError::FragmentMissing {
        path: path.to_path_buf(),
        class,
    })
}

/// Inner markup of the first element carrying `class`, verbatim.
pub fn extract_fragment(doc: &str, class: &str) -> Option<String> {
    let mut search = 0;
    while let Some(rel) = doc[search..].find('<') {
        let tag_start = search + rel;
        let tag_end = tag_start + doc[tag_start..].find('>')?;
        let tag = &doc[tag_start + 1..tag_end];
        search = tag_end + 1;

        if tag.starts_with('/') || tag.starts_with('!') {
            continue;
        }
        let name = tag_name(tag);
        if name.is_empty() || tag.ends_with('/') {
            continue;
        }
        if has_class(tag, class) {
            return inner_markup(doc, search, name);
        }
    }
    None
}

/// Element name of an opening tag body (the text between `<` and `>`).
fn tag_name(tag: &str) -> &str {
    tag.split(|c: char| c.is_ascii_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}

fn has_class(tag: &str, class: &str) -> bool {
    let Some(idx) = tag.find("class=") else {
        return false;
    };
    let rest = &tag[idx + "class=".len()..];
    let Some(quote) = rest.chars().next() else {
        return false;
    };
    if quote != '"' && quote != '\'' {
        return false;
    }
    let rest = &rest[1..];
    let Some(end) = rest.find(quote) else {
        return false;
    };
    rest[..end].split_whitespace().any(|token| token == class)
}

/// Content between `body_start` and the matching close of `name`,
/// tracking nesting of same-named elements.
fn inner_markup(doc: &str, body_start: usize, name: &str) -> Option<String> {
    let mut depth = 1usize;
    let mut pos = body_start;

    while let Some(rel) = doc[pos..].find('<') {
        let tag_start = pos + rel;
        let tag_end = tag_start + doc[tag_start..].find('>')?;
        let tag = &doc[tag_start + 1..tag_end];
        pos = tag_end + 1;

        if let Some(rest) = tag.strip_prefix('/') {
            if rest.trim() == name {
                depth -= 1;
                if depth == 0 {
                    return Some(doc[body_start..tag_start].to_string());
                }
            }
        } else if tag_name(tag) == name && !tag.ends_with('/') {
            depth += 1;
        }
    }
    None
}
