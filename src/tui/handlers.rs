use super::app::App;
use super::events::Event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Quit, printing the selected candidate if any
    Exit,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle(event: &Event, app: &mut App) -> Outcome {
        match event {
            Event::Key(key) => Self::handle_key(*key, app),
            Event::Resize(w, h) => {
                app.update_terminal_size(*w as usize, *h as usize);
                Outcome::Continue
            }
            Event::Tick => Outcome::Continue,
        }
    }

    fn handle_key(key: KeyEvent, app: &mut App) -> Outcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Outcome::Exit,
                KeyCode::Char('u') => {
                    app.query_clear();
                    Outcome::Continue
                }
                KeyCode::Char('p') => {
                    app.select_up();
                    Outcome::Continue
                }
                KeyCode::Char('n') => {
                    app.select_down();
                    Outcome::Continue
                }
                _ => Outcome::Continue,
            };
        }

        match key.code {
            KeyCode::Esc => Outcome::Exit,
            KeyCode::Enter => {
                if app.select_entry().is_none() {
                    app.show_message("Nothing to select");
                    Outcome::Continue
                } else {
                    Outcome::Exit
                }
            }
            KeyCode::Up => {
                app.select_up();
                Outcome::Continue
            }
            KeyCode::Down => {
                app.select_down();
                Outcome::Continue
            }
            KeyCode::Backspace | KeyCode::Delete => {
                app.query_pop();
                Outcome::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                app.query_push(c);
                Outcome::Continue
            }
            _ => Outcome::Continue,
        }
    }
}
