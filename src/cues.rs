//! Audio cue identifiers
//!
//! Three named cues exist; the update logic queues one per event and
//! the event loop flushes it here. Actual playback is the terminal's
//! business (a bell per trigger), so a rapidly retriggered cue always
//! restarts from the beginning.

use std::io::{self, Write};

use log::debug;

/// The three playable resources, by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Affirmative: a correct answer was selected.
    Points,
    /// Rejection: a wrong answer was selected.
    Fail,
    /// Completion: the quiz reached its end.
    Cheers,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Points => "points",
            Cue::Fail => "fail",
            Cue::Cheers => "cheers",
        }
    }
}

/// Flush one cue to the terminal.
pub fn play(cue: Cue) {
    debug!("cue: {}", cue.name());
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names_are_distinct() {
        assert_eq!(Cue::Points.name(), "points");
        assert_eq!(Cue::Fail.name(), "fail");
        assert_eq!(Cue::Cheers.name(), "cheers");
    }
}
