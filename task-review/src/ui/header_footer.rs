//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!("Task Review v{}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(app.settings.api_base.clone(), Style::default().fg(Color::Cyan)),
    ];

    let in_flight = app.requests.in_flight();
    if in_flight > 0 {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            format!("⟳ {} request{} in flight", in_flight, if in_flight == 1 { "" } else { "s" }),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    } else if let Some(updated) = app.last_updated {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            format!("Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().add_modifier(Modifier::BOLD));

    let footer_text = match app.focus {
        Focus::Input => Line::from(vec![
            Span::styled(
                "TYPE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" or paste JSON  "),
            key("[Ctrl+R]"),
            Span::raw(" Analyze  "),
            key("[Ctrl+S]"),
            Span::raw(" Suggest  "),
            key("[Ctrl+T]"),
            Span::raw(" Strategy  "),
            key("[Esc]"),
            Span::raw(" Done  "),
            key("[Ctrl+C]"),
            Span::raw(" Quit"),
        ]),
        Focus::Results => Line::from(vec![
            key("[A]"),
            Span::raw(" Analyze  "),
            key("[S]"),
            Span::raw(" Suggest  "),
            key("[Tab]"),
            Span::raw(" Strategy  "),
            key("[↑↓/jk]"),
            Span::raw(" Navigate  "),
            key("[Enter]"),
            Span::raw(" Details  "),
            key("[E]"),
            Span::raw(" Edit  "),
            key("[C]"),
            Span::raw(" Clear  "),
            key("[X]"),
            Span::raw(" Dismiss  "),
            key("[Q]"),
            Span::raw(" Quit"),
        ]),
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
