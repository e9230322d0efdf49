//! Manual-entry toolbar: the session id input field.
//!
//! The field is always focused while the toolbar is visible; shared-link
//! mode hides the toolbar entirely instead of unfocusing it.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Render the session id input with a bottom-right hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.is_loading() {
        "loading..."
    } else {
        "Enter to load \u{00b7} Esc to quit"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title("Session")
        .title_bottom(
            Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))).right_aligned(),
        );

    let mut content = app.input.clone();
    content.push('\u{2588}'); // Block cursor

    let input = Paragraph::new(Line::from(Span::styled(
        content,
        Style::default().fg(COLOR_ACCENT),
    )))
    .block(block);

    frame.render_widget(input, area);
}
