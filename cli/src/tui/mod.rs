pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;
use worktrack_core::{Config, FileStore};

use crate::tui::app::{App, InputMode};

pub fn run(store: FileStore, config: Config, today: NaiveDate) -> Result<()> {
    // Load before touching the terminal so errors print normally.
    let mut app = App::new(store, config, today)?;
    info!("starting terminal ui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Left | KeyCode::Char('h') => app.move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_days(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => app.move_days(7),
            KeyCode::Char('[') | KeyCode::PageUp => app.change_month(-1),
            KeyCode::Char(']') | KeyCode::PageDown => app.change_month(1),
            KeyCode::Char('t') => app.jump_to_today(),
            KeyCode::Enter => app.open_form(),
            KeyCode::Char('r') => app.focus_requirements(),
            KeyCode::Char('a') => {
                app.focus_requirements();
                app.start_adding_requirement();
            }
            _ => {}
        },
        InputMode::Requirements => match key.code {
            KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('q') => app.exit_input_mode(),
            KeyCode::Down | KeyCode::Char('j') => app.next_requirement(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_requirement(),
            KeyCode::Char('a') => app.start_adding_requirement(),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.remove_requirement(),
            _ => {}
        },
        InputMode::EditingEntry => match key.code {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.toggle_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.focused_input().input_char(c)
            }
            KeyCode::Backspace => app.focused_input().delete_char(),
            KeyCode::Left => app.focused_input().move_cursor_left(),
            KeyCode::Right => app.focused_input().move_cursor_right(),
            _ => {}
        },
        InputMode::AddingRequirement => match key.code {
            KeyCode::Enter => app.submit_requirement(),
            KeyCode::Esc => app.focus_requirements(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.focused_input().input_char(c)
            }
            KeyCode::Backspace => app.focused_input().delete_char(),
            KeyCode::Left => app.focused_input().move_cursor_left(),
            KeyCode::Right => app.focused_input().move_cursor_right(),
            _ => {}
        },
    }
    false
}
