use serde::Deserialize;

use crate::error::InvalidQuestion;

/// File suffixes that mark an option as an image reference.
/// Matches what the feed actually ships; anything else is plain text.
const IMAGE_SUFFIXES: [&str; 2] = [".png", ".jpg"];

/// Raw feed record, field names exactly as the JSON feed spells them.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    #[serde(rename = "secondImg", default)]
    pub second_img: Option<String>,
}

/// Answer options, tagged once at load time.
///
/// The text/image distinction is decided by suffix when the record is
/// validated, never re-derived at render time. Mixed lists are rejected
/// outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOptions {
    Text(Vec<String>),
    Image(Vec<String>),
}

impl AnswerOptions {
    pub fn entries(&self) -> &[String] {
        match self {
            AnswerOptions::Text(entries) | AnswerOptions::Image(entries) => entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn is_images(&self) -> bool {
        matches!(self, AnswerOptions::Image(_))
    }
}

/// A validated quiz question. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: AnswerOptions,
    pub correct: usize,
    pub second_image: Option<String>,
}

fn is_image_ref(option: &str) -> bool {
    let lower = option.to_ascii_lowercase();
    IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

impl Question {
    /// Validate a raw record and tag its options.
    pub fn from_record(record: QuestionRecord) -> Result<Self, InvalidQuestion> {
        if record.options.is_empty() {
            return Err(InvalidQuestion::NoOptions);
        }
        if record.correct >= record.options.len() {
            return Err(InvalidQuestion::CorrectOutOfRange {
                correct: record.correct,
                len: record.options.len(),
            });
        }

        let image_count = record.options.iter().filter(|o| is_image_ref(o)).count();
        let options = if image_count == record.options.len() {
            AnswerOptions::Image(record.options)
        } else if image_count == 0 {
            AnswerOptions::Text(record.options)
        } else {
            return Err(InvalidQuestion::MixedOptions);
        };

        Ok(Self {
            prompt: record.prompt,
            options,
            correct: record.correct,
            second_image: record.second_img,
        })
    }

    /// True when `index` names the correct option.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}
