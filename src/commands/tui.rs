use crate::tui::{self, App, EventHandler, Outcome};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sift::config::Config;
use sift::error::Result;
use sift::source::load_candidates;
use std::io::{self, Stderr};
use std::path::Path;

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Interactive finder. Draws on stderr so the selection can go to stdout.
pub async fn run_tui(file: Option<&Path>, config: &Config) -> Result<()> {
    let candidates = load_candidates(file)?;
    let source_name = file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let mut stderr = io::stderr();
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(stderr, crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stderr);
    let result = match Terminal::new(backend) {
        Ok(terminal) => run_app(terminal, candidates, source_name, config).await,
        Err(e) => Err(e.into()),
    };

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;

    if let Some(selected) = result? {
        println!("{}", selected);
    }

    Ok(())
}

async fn run_app(
    mut terminal: Term,
    candidates: Vec<String>,
    source_name: String,
    config: &Config,
) -> Result<Option<String>> {
    let (w, h) = crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24));

    let mut app = App::new(
        candidates,
        config.scoring.clone(),
        config.limit,
        source_name,
        w,
        h,
    );
    let mut event_handler = EventHandler::new();

    let outcome: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| tui::draw(f, &app)) {
            break Err(e.into());
        }

        match event_handler.next().await {
            Some(event) => {
                if tui::handlers::EventHandler::handle(&event, &mut app) == Outcome::Exit {
                    break Ok(());
                }
            }
            None => break Ok(()),
        }
    };

    event_handler.stop();
    outcome.map(|()| app.selected_entry.take())
}
