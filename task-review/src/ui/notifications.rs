//! Status banner rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::commands::NotificationLevel;
use crate::app::App;

/// Render the active banner as an overlay at the bottom of `area`
pub fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = app.notifications.get_active() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    let banner_area = chunks[1];

    let (color, icon) = match notification.level {
        NotificationLevel::Error => (Color::Red, "✗"),
        NotificationLevel::Warning => (Color::Yellow, "⚠"),
    };

    let text = Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::White),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    f.render_widget(Clear, banner_area);
    f.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        banner_area,
    );
}
