//! UI rendering.

pub mod chart;
pub mod theme;
pub mod toolbar;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};

/// Render the whole frame: toolbar (unless hidden) above the chart area.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let body = if app.toolbar_visible {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
        toolbar::render(frame, chunks[0], app);
        chunks[1]
    } else {
        area
    };

    match (&app.chart, app.screen) {
        (Some(spec), Screen::Loaded) => chart::render(frame, body, spec, &app.plot_options),
        _ => render_placeholder(frame, body, app),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.is_loading() {
        "Loading session..."
    } else {
        "No session loaded"
    };
    let placeholder = Paragraph::new(Line::from(text))
        .style(Style::default().fg(theme::COLOR_DIM))
        .centered();

    // Vertically center the one-line message
    let line = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(placeholder, line);
}
