//! UI rendering functions for the task review TUI
//!
//! The screen is a header, an input pane next to the results pane, and a
//! footer with key hints. The status banner and the expanded card are drawn
//! as overlays on top.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

// Module declarations
mod components;
mod header_footer;
mod input_view;
mod notifications;
mod results_view;

// Re-export public functions
pub use components::{centered_rect, priority_color};
pub use header_footer::{render_footer, render_header};
pub use input_view::render_input_pane;
pub use notifications::render_notifications;
pub use results_view::{render_expanded_card, render_results};

/// Main UI rendering function - orchestrates all view rendering
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_input_pane(f, body[0], app);
    render_results(f, body[1], app);

    render_footer(f, chunks[2], app);

    if app.expanded_card.is_some() {
        render_expanded_card(f, chunks[1], app);
    }

    // Banner goes last so it stays visible over everything else
    render_notifications(f, app, chunks[1]);
}
