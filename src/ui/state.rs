//! App state (Model)
//!
//! One value owns the whole quiz: the immutable question list, the
//! navigation cursor, answer feedback and the effects queued for the
//! event loop. All mutation goes through `dispatch`.

use crate::cues::Cue;
use crate::models::Question;

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the question at `current_index`.
    Question,
    /// Past the last question; end narrative and restart control shown.
    Completed,
}

/// Feedback for the last submitted answer on the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub selected: usize,
    pub correct: bool,
}

/// Application state.
pub struct App {
    pub questions: Vec<Question>,
    pub phase: Phase,
    pub current_index: usize,
    pub highlighted: usize,
    pub feedback: Option<Feedback>,
    pub advance_unlocked: bool,
    pub story_start: Option<String>,
    pub story_end: Option<String>, // cached after the first completion
    pending_cue: Option<Cue>,
    wants_end_story: bool,
}

impl App {
    pub fn new(questions: Vec<Question>, story_start: Option<String>) -> Self {
        Self {
            questions,
            phase: Phase::Question,
            current_index: 0,
            highlighted: 0,
            feedback: None,
            advance_unlocked: false,
            story_start,
            story_end: None,
            pending_cue: None,
            wants_end_story: false,
        }
    }

    /// The question under the cursor, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Question => self.questions.get(self.current_index),
            Phase::Completed => None,
        }
    }

    // ============ effect queue (drained by the event loop) ============

    pub(crate) fn queue_cue(&mut self, cue: Cue) {
        self.pending_cue = Some(cue);
    }

    pub fn take_cue(&mut self) -> Option<Cue> {
        self.pending_cue.take()
    }

    pub(crate) fn request_end_story(&mut self) {
        self.wants_end_story = true;
    }

    pub fn take_end_story_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_end_story)
    }

    pub fn set_end_story(&mut self, markup: String) {
        self.story_end = Some(markup);
    }
}
