//! Terminal setup and teardown.
//!
//! Raw mode plus alternate screen, restored on exit and on panic. The
//! teardown helpers never panic so they are safe from the panic hook.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Enter TUI mode and build the terminal.
pub fn setup() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Restore the terminal to normal mode. Safe to call multiple times.
pub fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    leave_tui_mode(&mut io::stdout());
    let _ = terminal.show_cursor();
}

/// Leave TUI mode on an arbitrary writer, ignoring all errors.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before printing the
/// panic, so the report is readable.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}
