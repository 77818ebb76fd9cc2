mod config;
mod cues;
mod error;
mod feed;
mod models;
mod story;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::prelude::*;

use crate::config::QuizConfig;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // Diagnostic channel; must be up before the terminal goes raw.
    pretty_env_logger::init();

    let cfg = config::load();

    // Feed failure degrades to an empty store, logged, no retry.
    let questions = match feed::load_questions(&cfg.questions_path()) {
        Ok(questions) => questions,
        Err(err) => {
            error!("loading questions: {err}");
            Vec::new()
        }
    };

    // The start fragment is wanted immediately; the end fragment is
    // fetched lazily on first completion.
    let story_start = match story::load_fragment(&cfg.story_path(), story::START_CLASS) {
        Ok(markup) => Some(markup),
        Err(err) => {
            error!("loading story: {err}");
            None
        }
    };

    let mut app = App::new(questions, story_start);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app, &cfg);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    cfg: &QuizConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
                drain_effects(app, cfg);
            }
        }
    }
    Ok(())
}

/// Flush the effects the update logic queued: at most one cue and, on
/// first completion, the end-fragment fetch.
fn drain_effects(app: &mut App, cfg: &QuizConfig) {
    if let Some(cue) = app.take_cue() {
        cues::play(cue);
    }

    if app.take_end_story_request() {
        match story::load_fragment(&cfg.story_path(), story::END_CLASS) {
            Ok(markup) => app.set_end_story(markup),
            // Logged per occurrence; the narrative region keeps
            // whatever it showed before.
            Err(err) => error!("loading story ending: {err}"),
        }
    }
}
