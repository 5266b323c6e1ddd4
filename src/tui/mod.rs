pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{HotentryError, Result};
use crate::config::ColorConfig;

use self::app::PickerApp;
pub use self::app::Selection;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Full-screen single-select list. Blocks until the user picks a line or cancels.
pub fn pick(
    label: &str,
    header: &str,
    lines: Vec<String>,
    page_size: usize,
    colors: &ColorConfig,
) -> Result<Selection> {
    let mut picker = PickerApp::new(label.to_string(), header.to_string(), lines, page_size);

    let mut terminal = setup_terminal().map_err(prompt_error)?;
    let result = run_picker(&mut terminal, &mut picker, colors);
    restore_terminal(&mut terminal).map_err(prompt_error)?;

    result.map_err(prompt_error)?;
    Ok(picker.outcome.unwrap_or(Selection::Cancelled))
}

fn prompt_error(e: HotentryError) -> HotentryError {
    match e {
        HotentryError::Prompt(_) => e,
        other => HotentryError::Prompt(other.to_string()),
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_picker(terminal: &mut Tui, picker: &mut PickerApp, colors: &ColorConfig) -> Result<()> {
    let event_handler = EventHandler::new(Duration::from_millis(100));

    while !picker.is_done() {
        terminal.draw(|frame| layout::render(frame, picker, colors))?;

        if let AppEvent::Key(key) = event_handler.next()? {
            match Action::from(key) {
                Action::Cancel => picker.cancel(),
                Action::MoveUp => picker.move_up(),
                Action::MoveDown => picker.move_down(),
                Action::NextPage => picker.next_page(),
                Action::PrevPage => picker.prev_page(),
                Action::Select => picker.choose(),
                Action::None => {}
            }
        }
    }

    Ok(())
}
