//! Shared view components

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::AnswerOptions;
use crate::ui::state::Feedback;

/// [component] Feedback banner, styled per verdict. Hidden while no
/// answer has been submitted.
pub fn render_banner(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let (message, color) = match feedback {
        Some(feedback) if feedback.correct => ("Good job! 👏", Color::Green),
        Some(_) => ("Try again! 💪", Color::Red),
        None => ("", Color::Reset),
    };

    let banner = Paragraph::new(message)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

/// [component] Label for one option control. Image options render as
/// labeled file references; text options as numbered buttons.
pub fn option_label(options: &AnswerOptions, index: usize, entry: &str) -> String {
    if options.is_images() {
        format!("{}. 🖼  {}", index + 1, entry)
    } else {
        format!("{}. {}", index + 1, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels_by_kind() {
        let text = AnswerOptions::Text(vec!["four".into()]);
        assert_eq!(option_label(&text, 0, "four"), "1. four");

        let images = AnswerOptions::Image(vec!["cat.png".into()]);
        assert_eq!(option_label(&images, 0, "cat.png"), "1. 🖼  cat.png");
    }
}
