//! Action enum (Intent)
//!
//! User interaction expressed as explicit, semantic actions.

/// User operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveHighlightUp,
    MoveHighlightDown,

    /// Submit the highlighted option to the evaluator.
    SubmitAnswer,
    /// The advance control; gated on a correct answer.
    Advance,
    /// Index strip: jump straight to a question.
    JumpTo(usize),
    /// Back to question 0; only offered on the completion screen.
    Restart,
}
