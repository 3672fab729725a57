//! Task JSON editor and strategy selector

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use task_review_sdk::Strategy;

use crate::app::{App, Focus};

const INPUT_HINT: &str = "Paste a JSON array of tasks here";

pub fn render_input_pane(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_strategy_selector(f, chunks[0], app);
    render_editor(f, chunks[1], app);
}

fn render_strategy_selector(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, strategy) in Strategy::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *strategy == app.strategy {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", strategy.label()), style));
    }

    let selector = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Strategy "));
    f.render_widget(selector, area);
}

fn render_editor(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Tasks JSON ");

    let inner_height = area.height.saturating_sub(2);
    let (line, column) = app.input.cursor_position();
    let scroll = (line as u16).saturating_sub(inner_height.saturating_sub(1));

    let editor = if app.input.text().is_empty() {
        Paragraph::new(Span::styled(
            INPUT_HINT,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.input.text()).scroll((scroll, 0))
    };
    f.render_widget(editor.block(block), area);

    if focused {
        let x = area.x + 1 + column as u16;
        let y = area.y + 1 + (line as u16).saturating_sub(scroll);
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
