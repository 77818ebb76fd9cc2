//! Update logic (Dispatch)
//!
//! The quiz state machine: ShowingQuestion(i) -> ... -> Completed,
//! with restart back to question 0. Every transition into a question
//! clears answer feedback so nothing stale survives a question change.

use crate::cues::Cue;

use super::actions::Action;
use super::state::{App, Feedback, Phase};

impl App {
    /// Core dispatch; returns true when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveHighlightUp => self.move_highlight_up(),
            Action::MoveHighlightDown => self.move_highlight_down(),
            Action::SubmitAnswer => self.submit_answer(),
            Action::Advance => self.advance(),
            Action::JumpTo(index) => self.jump_to(index),
            Action::Restart => self.restart(),
        }
        false
    }

    // ============ option highlight ============

    fn move_highlight_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    fn move_highlight_down(&mut self) {
        if let Some(question) = self.current_question() {
            if self.highlighted + 1 < question.options.len() {
                self.highlighted += 1;
            }
        }
    }

    // ============ answer evaluation ============

    /// Evaluate the highlighted option against the model. The rendered
    /// control never carries the truth; the question record does.
    fn submit_answer(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };

        let correct = question.is_correct(self.highlighted);
        self.feedback = Some(Feedback {
            selected: self.highlighted,
            correct,
        });
        self.advance_unlocked = correct;
        self.queue_cue(if correct { Cue::Points } else { Cue::Fail });
    }

    // ============ navigation ============

    /// Enter a question: move the cursor and clear all answer state.
    fn enter_question(&mut self, index: usize) {
        self.phase = Phase::Question;
        self.current_index = index;
        self.highlighted = 0;
        self.feedback = None;
        self.advance_unlocked = false;
    }

    /// The advance control. Only effective after a correct answer.
    fn advance(&mut self) {
        if self.phase != Phase::Question || !self.advance_unlocked {
            return;
        }
        if self.current_index + 1 >= self.questions.len() {
            self.complete();
        } else {
            self.enter_question(self.current_index + 1);
        }
    }

    /// Index strip jump; not gated on a correct answer.
    fn jump_to(&mut self, index: usize) {
        if self.phase == Phase::Question && index < self.questions.len() {
            self.enter_question(index);
        }
    }

    fn complete(&mut self) {
        self.phase = Phase::Completed;
        self.feedback = None;
        self.advance_unlocked = false;
        self.queue_cue(Cue::Cheers);
        // The end fragment is fetched once and cached for the session.
        if self.story_end.is_none() {
            self.request_end_story();
        }
    }

    /// Restart control: back to question 0 in its unanswered state.
    /// The cached end fragment survives; only its display is cleared
    /// (leaving the completion screen hides it).
    fn restart(&mut self) {
        if self.phase == Phase::Completed {
            self.enter_question(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, QuestionRecord};

    fn question(prompt: &str, options: &[&str], correct: usize) -> Question {
        Question::from_record(QuestionRecord {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
            second_img: None,
        })
        .unwrap()
    }

    fn one_question_app() -> App {
        App::new(vec![question("2+2?", &["3", "4"], 1)], None)
    }

    fn three_question_app() -> App {
        App::new(
            vec![
                question("q1", &["a", "b"], 0),
                question("q2", &["a", "b"], 1),
                question("q3", &["a", "b"], 0),
            ],
            None,
        )
    }

    #[test]
    fn test_wrong_answer_rejects_and_keeps_advance_locked() {
        let mut app = one_question_app();
        app.dispatch(Action::SubmitAnswer); // highlight is on "3"

        let feedback = app.feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.selected, 0);
        assert!(!app.advance_unlocked);
        assert_eq!(app.take_cue(), Some(Cue::Fail));

        // Advance stays a no-op until a correct answer.
        app.dispatch(Action::Advance);
        assert_eq!(app.phase, Phase::Question);
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_correct_answer_affirms_and_unlocks_advance() {
        let mut app = one_question_app();
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer);

        let feedback = app.feedback.unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.selected, 1);
        assert!(app.advance_unlocked);
        assert_eq!(app.take_cue(), Some(Cue::Points));
    }

    #[test]
    fn test_scenario_single_question_through_completion() {
        // Feed: [{prompt: "2+2?", options: ["3", "4"], correct: 1}]
        let mut app = one_question_app();

        app.dispatch(Action::SubmitAnswer);
        assert!(!app.feedback.unwrap().correct);

        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer);
        assert!(app.feedback.unwrap().correct);

        app.dispatch(Action::Advance);
        assert_eq!(app.phase, Phase::Completed);
        assert_eq!(app.take_cue(), Some(Cue::Cheers));
        assert!(app.take_end_story_request());
    }

    #[test]
    fn test_question_change_clears_stale_feedback() {
        let mut app = three_question_app();
        app.dispatch(Action::SubmitAnswer);
        assert!(app.feedback.is_some());

        app.dispatch(Action::Advance);
        assert_eq!(app.current_index, 1);
        assert!(app.feedback.is_none());
        assert!(!app.advance_unlocked);
        assert_eq!(app.highlighted, 0);
    }

    #[test]
    fn test_jump_bypasses_advance_gate_and_clears_feedback() {
        let mut app = three_question_app();
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer); // wrong on q1
        assert!(!app.advance_unlocked);

        // Index strip button "3" while on question 1.
        app.dispatch(Action::JumpTo(2));
        assert_eq!(app.current_index, 2);
        assert!(app.feedback.is_none());
        assert!(!app.advance_unlocked);
    }

    #[test]
    fn test_out_of_range_jump_is_noop() {
        let mut app = three_question_app();
        app.dispatch(Action::JumpTo(7));
        assert_eq!(app.current_index, 0);
    }

    #[test]
    fn test_end_story_fetched_once_per_session() {
        let mut app = one_question_app();
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer);
        app.dispatch(Action::Advance);

        assert!(app.take_end_story_request());
        app.set_end_story("<p>fin</p>".to_string());

        // Restart, complete again: cached fragment, no second fetch.
        app.dispatch(Action::Restart);
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer);
        app.dispatch(Action::Advance);
        assert_eq!(app.phase, Phase::Completed);
        assert!(!app.take_end_story_request());
        assert_eq!(app.story_end.as_deref(), Some("<p>fin</p>"));
    }

    #[test]
    fn test_restart_returns_to_unanswered_question_zero() {
        let mut app = one_question_app();
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::SubmitAnswer);
        app.dispatch(Action::Advance);
        assert_eq!(app.phase, Phase::Completed);

        app.dispatch(Action::Restart);
        assert_eq!(app.phase, Phase::Question);
        assert_eq!(app.current_index, 0);
        assert!(app.feedback.is_none());
        assert!(!app.advance_unlocked);
    }

    #[test]
    fn test_restart_is_noop_outside_completion() {
        let mut app = three_question_app();
        app.dispatch(Action::JumpTo(1));
        app.dispatch(Action::Restart);
        assert_eq!(app.current_index, 1);
    }

    #[test]
    fn test_empty_store_makes_navigation_noops() {
        let mut app = App::new(Vec::new(), None);
        app.dispatch(Action::SubmitAnswer);
        app.dispatch(Action::Advance);
        app.dispatch(Action::JumpTo(0));
        app.dispatch(Action::MoveHighlightDown);

        assert_eq!(app.phase, Phase::Question);
        assert_eq!(app.current_index, 0);
        assert!(app.feedback.is_none());
        assert_eq!(app.take_cue(), None);
    }

    #[test]
    fn test_highlight_stays_in_option_bounds() {
        let mut app = one_question_app();
        app.dispatch(Action::MoveHighlightUp);
        assert_eq!(app.highlighted, 0);
        app.dispatch(Action::MoveHighlightDown);
        app.dispatch(Action::MoveHighlightDown);
        assert_eq!(app.highlighted, 1);
    }

    #[test]
    fn test_quit_exits_dispatch() {
        let mut app = one_question_app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::JumpTo(0)));
    }
}
