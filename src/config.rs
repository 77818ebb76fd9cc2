//! Asset locations
//!
//! An optional `quiz.toml` names the assets directory and the two data
//! documents. It is looked up in the working directory first, then in
//! the per-user data directory (~/.local/share/storyquiz/). A missing
//! or unreadable config is never fatal; defaults apply.

use std::path::PathBuf;
use std::{env, fs};

use log::warn;
use serde::Deserialize;

/// Illustration shown alongside the story while the quiz is running.
pub const ART_STORY: &str = "assets/story/3.png";
/// Illustration shown on the completion screen.
pub const ART_COMPLETE: &str = "assets/story/2.png";

const CONFIG_FILE: &str = "quiz.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub assets_dir: PathBuf,
    pub questions_file: String,
    pub story_file: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            questions_file: "questions.json".to_string(),
            story_file: "story.html".to_string(),
        }
    }
}

impl QuizConfig {
    pub fn questions_path(&self) -> PathBuf {
        self.assets_dir.join(&self.questions_file)
    }

    pub fn story_path(&self) -> PathBuf {
        self.assets_dir.join(&self.story_file)
    }
}

/// Candidate config locations, in lookup order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE));
    }
    if let Some(data_dir) = dirs::data_dir() {
        paths.push(data_dir.join("storyquiz").join(CONFIG_FILE));
    }
    paths
}

/// Load the config, falling back to defaults on any failure.
pub fn load() -> QuizConfig {
    for path in candidate_paths() {
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(err) => warn!("ignoring bad config {}: {}", path.display(), err),
            },
            Err(err) => warn!("ignoring unreadable config {}: {}", path.display(), err),
        }
    }
    QuizConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = QuizConfig::default();
        assert_eq!(config.questions_path(), PathBuf::from("assets/questions.json"));
        assert_eq!(config.story_path(), PathBuf::from("assets/story.html"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: QuizConfig = toml::from_str("assets_dir = \"data\"").unwrap();
        assert_eq!(config.questions_path(), PathBuf::from("data/questions.json"));
        assert_eq!(config.story_path(), PathBuf::from("data/story.html"));
    }
}
