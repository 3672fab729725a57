//! Results pane and the expanded card overlay

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use task_review_sdk::{AnalysisMeta, ResultsView, TaskCard, NO_TASKS_PLACEHOLDER};

use super::{centered_rect, priority_color};
use crate::app::{App, Focus};

const NO_RESULTS_HINT: &str = "Press A to analyze or S to get suggestions.";

pub fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.focus == Focus::Results {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = match &app.review {
        Some(review) => format!(" {} ", review.kind.title()),
        None => " Results ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let Some(review) = &app.review else {
        let hint = Paragraph::new(Span::styled(
            NO_RESULTS_HINT,
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let meta = review.meta.as_ref().map(meta_lines).unwrap_or_default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(meta.len() as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    if !meta.is_empty() {
        f.render_widget(Paragraph::new(meta), chunks[0]);
    }

    match &review.view {
        ResultsView::Placeholder => {
            let placeholder = Paragraph::new(Span::styled(
                NO_TASKS_PLACEHOLDER,
                Style::default().fg(Color::Gray),
            ));
            f.render_widget(placeholder, chunks[1]);
        }
        ResultsView::Cards(cards) => {
            let items: Vec<ListItem> = cards
                .iter()
                .enumerate()
                .map(|(i, card)| card_item(card, i == app.selected_card))
                .collect();
            let mut state = ListState::default().with_selected(Some(app.selected_card));
            f.render_stateful_widget(List::new(items), chunks[1], &mut state);
        }
    }
}

fn card_item(card: &TaskCard, selected: bool) -> ListItem<'static> {
    let color = priority_color(card.priority);
    let marker = if selected { "▶ " } else { "  " };
    let heading_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("[{}]", card.priority.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(card.heading.clone(), heading_style),
            Span::raw("  "),
            Span::styled(card.score_text.clone(), Style::default().fg(color)),
        ]),
        Line::from(format!("    {}", card.due_line)),
    ];
    if !card.explanation.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", card.explanation),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("    {}", card.details_line),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn meta_lines(meta: &AnalysisMeta) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut summary = Vec::new();
    if let Some(weights) = meta.weights.as_ref().filter(|w| !w.is_empty()) {
        summary.push(format!("Weights: {}", weights));
    }
    if let Some(horizon) = meta.horizon_days {
        summary.push(format!("Horizon: {} days", horizon));
    }
    if !summary.is_empty() {
        lines.push(Line::from(Span::styled(
            summary.join("   "),
            Style::default().fg(Color::Cyan),
        )));
    }

    for cycle in &meta.cycles {
        lines.push(Line::from(Span::styled(
            format!("⚠ Cycle: {}", cycle.join(" -> ")),
            Style::default().fg(Color::Yellow),
        )));
    }

    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

/// Detail popup for the card opened with Enter
pub fn render_expanded_card(f: &mut Frame, area: Rect, app: &App) {
    let Some(card) = app
        .expanded_card
        .and_then(|idx| app.review.as_ref()?.view.cards().get(idx))
    else {
        return;
    };

    let popup_area = centered_rect(80, 80, area);
    let color = priority_color(card.priority);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", card.priority.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                card.heading.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    let due = match card.due_hint(Local::now().date_naive()) {
        Some(hint) => format!("{} ({})", card.due_line, hint),
        None => card.due_line.clone(),
    };
    lines.push(Line::from(due));

    if !card.explanation.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(card.explanation.clone()));
    }

    lines.push(Line::from(""));
    for (label, value) in card.detail_rows() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ]));
    }

    if let Some(raw) = &card.task.raw {
        if let Ok(json) = serde_json::to_string_pretty(raw) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Task",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                json.lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray)))),
            );
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" Details [Esc] Close "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
