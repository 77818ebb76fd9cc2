//! View layer
//!
//! Pure projection of the App state into a frame. Nothing here is a
//! source of truth: correctness lives on the question record and is
//! only shown after a selection.

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::config::{ART_COMPLETE, ART_STORY};
use crate::models::Question;

use super::state::{App, Phase};
use components::{option_label, render_banner};

/// Render the UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // index strip
            Constraint::Length(8), // narrative
            Constraint::Min(9),    // question + options
            Constraint::Length(3), // feedback banner
            Constraint::Length(3), // help
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_index_strip(frame, app, chunks[1]);
    render_story(frame, app, chunks[2]);
    render_main(frame, app, chunks[3]);
    render_banner(frame, chunks[4], app.feedback.as_ref());
    render_help(frame, app, chunks[5]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📖 Story Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// One numbered cell per question, the current one marked. The strip
/// disappears on the completion screen, as does jumping.
fn render_index_strip(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    if app.phase == Phase::Question {
        for index in 0..app.questions.len() {
            let label = format!(" {} ", index + 1);
            let style = if index == app.current_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
    }

    let strip = Paragraph::new(Line::from(spans))
        .block(Block::default().title("questions").borders(Borders::ALL));
    frame.render_widget(strip, area);
}

/// The narrative panel: start fragment while the quiz runs, end
/// fragment on completion, each with its phase illustration.
fn render_story(frame: &mut Frame, app: &App, area: Rect) {
    let (markup, art) = match app.phase {
        Phase::Question => (app.story_start.as_deref(), ART_STORY),
        // A failed end-fetch leaves the previous narrative in place.
        Phase::Completed => (
            app.story_end.as_deref().or(app.story_start.as_deref()),
            ART_COMPLETE,
        ),
    };

    let story = Paragraph::new(markup.unwrap_or_default())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!("story [{art}]"))
                .borders(Borders::ALL),
        );
    frame.render_widget(story, area);
}

fn render_main(frame: &mut Frame, app: &App, area: Rect) {
    match app.phase {
        Phase::Question => match app.current_question().cloned() {
            Some(question) => render_question(frame, app, &question, area),
            // Empty store: the region stays blank, nothing to show.
            None => frame.render_widget(Block::default().borders(Borders::ALL), area),
        },
        Phase::Completed => render_completion(frame, area),
    }
}

fn render_question(frame: &mut Frame, app: &App, question: &Question, area: Rect) {
    // Container tint follows the last answer, cleared on entry.
    let border_style = match app.feedback {
        Some(feedback) if feedback.correct => Style::default().fg(Color::Green),
        Some(_) => Style::default().fg(Color::Red),
        None => Style::default(),
    };
    let block = Block::default()
        .title("question")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(2)])
        .split(inner);

    let mut prompt_lines = vec![Line::from(question.prompt.as_str())];
    if let Some(image) = &question.second_image {
        prompt_lines.push(Line::from(Span::styled(
            format!("🖼  {image}"),
            Style::default().fg(Color::Magenta),
        )));
    }
    let prompt = Paragraph::new(prompt_lines).wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = question
        .options
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = option_label(&question.options, index, entry);
            let style = match app.feedback {
                // Only the selected control carries a verdict color;
                // siblings are always plain.
                Some(feedback) if feedback.selected == index => {
                    let color = if feedback.correct {
                        Color::Green
                    } else {
                        Color::Red
                    };
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                }
                _ => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let options = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.highlighted));
    frame.render_stateful_widget(options, chunks[1], &mut state);
}

fn render_completion(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🎉 You finished the quiz!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[r] Restart Quiz"),
    ];
    let done = Paragraph::new(text)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(done, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.phase {
        Phase::Question => {
            if app.advance_unlocked {
                "[j/k] choose  [Enter] answer  [n] next  [1-9] jump  [q] quit"
            } else {
                "[j/k] choose  [Enter] answer  [1-9] jump  [q] quit"
            }
        }
        Phase::Completed => "[r] restart  [q] quit",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
