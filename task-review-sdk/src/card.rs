//! Turning scored tasks into display cards
//!
//! The priority table here is the only classification the client does on
//! its own; everything else is formatting of what the service returned.

use chrono::NaiveDate;
use serde_json::Value;

use crate::types::ScoredTask;

/// Shown instead of cards when there is nothing to render
pub const NO_TASKS_PLACEHOLDER: &str = "No tasks to show.";

pub const HIGH_PRIORITY_MIN_SCORE: f64 = 0.75;
pub const MEDIUM_PRIORITY_MIN_SCORE: f64 = 0.45;

/// Visual priority tier of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Classify a score. Lower bounds are inclusive; a missing or NaN score is low.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= HIGH_PRIORITY_MIN_SCORE => Priority::High,
            Some(s) if s >= MEDIUM_PRIORITY_MIN_SCORE => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// One rendered task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub priority: Priority,
    pub heading: String,
    pub due_line: String,
    pub score_text: String,
    pub explanation: String,
    pub details_line: String,
    pub task: ScoredTask,
}

impl TaskCard {
    pub fn from_task(task: &ScoredTask) -> Self {
        let details = task.details.clone().unwrap_or_default();

        Self {
            priority: Priority::from_score(task.score),
            heading: heading_for(task),
            due_line: match due_date_of(task) {
                Some(due) => format!("Due: {}", due),
                None => "No due date".to_string(),
            },
            score_text: match task.score {
                Some(score) if score.is_finite() => format!("{}%", (score * 100.0).round()),
                _ => "n/a".to_string(),
            },
            explanation: first_non_empty([
                task.explanation.as_deref(),
                task.suggestion_reason.as_deref(),
            ])
            .unwrap_or_default()
            .to_string(),
            details_line: format!(
                "Details: importance {}, effort {}, dependents {}",
                format_metric(details.importance_norm),
                format_metric(details.effort_score),
                details
                    .dependents
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
            task: task.clone(),
        }
    }

    /// Relative description of the due date, when it parses as `YYYY-MM-DD`
    pub fn due_hint(&self, today: NaiveDate) -> Option<String> {
        let due = due_date_of(&self.task)?;
        let due = NaiveDate::parse_from_str(due.trim(), "%Y-%m-%d").ok()?;
        let days = (due - today).num_days();
        Some(match days {
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            d if d > 1 => format!("due in {} days", d),
            -1 => "overdue by 1 day".to_string(),
            d => format!("overdue by {} days", -d),
        })
    }

    /// Every metric the service reported, for the expanded card view
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let details = self.task.details.clone().unwrap_or_default();
        vec![
            ("Score", self.score_text.clone()),
            ("Urgency", format_metric(details.urgency)),
            ("Importance", format_metric(details.importance_norm)),
            ("Effort (quick win)", format_metric(details.effort_score)),
            ("Dependency impact", format_metric(details.dependencies_norm)),
            (
                "Dependents",
                details
                    .dependents
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
            (
                "Days to due",
                details
                    .days_to_due
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
        ]
    }
}

/// What the results pane shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsView {
    #[default]
    Placeholder,
    Cards(Vec<TaskCard>),
}

impl ResultsView {
    pub fn cards(&self) -> &[TaskCard] {
        match self {
            ResultsView::Placeholder => &[],
            ResultsView::Cards(cards) => cards,
        }
    }

    /// Plain-text rendering used outside the terminal UI
    pub fn to_text(&self) -> String {
        match self {
            ResultsView::Placeholder => NO_TASKS_PLACEHOLDER.to_string(),
            ResultsView::Cards(cards) => cards
                .iter()
                .map(|card| {
                    let mut lines = vec![
                        format!("[{}] {} ({})", card.priority.label(), card.heading, card.score_text),
                        format!("  {}", card.due_line),
                    ];
                    if !card.explanation.is_empty() {
                        lines.push(format!("  {}", card.explanation));
                    }
                    lines.push(format!("  {}", card.details_line));
                    lines.join("\n")
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// Render a response's task list: the placeholder when empty or absent,
/// otherwise one card per task in response order.
pub fn render_tasks(tasks: Option<&[ScoredTask]>) -> ResultsView {
    match tasks {
        Some(tasks) if !tasks.is_empty() => {
            ResultsView::Cards(tasks.iter().map(TaskCard::from_task).collect())
        }
        _ => ResultsView::Placeholder,
    }
}

fn heading_for(task: &ScoredTask) -> String {
    let raw_title = task.raw.as_ref().and_then(|raw| raw.title.as_deref());
    if let Some(title) = first_non_empty([task.title.as_deref(), raw_title]) {
        return title.to_string();
    }
    match &task.id {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => "Untitled task".to_string(),
        Some(other) => other.to_string(),
    }
}

fn due_date_of(task: &ScoredTask) -> Option<&str> {
    task.raw
        .as_ref()
        .and_then(|raw| raw.due_date.as_deref())
        .filter(|due| !due.is_empty())
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

fn format_metric(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawTask, ScoreDetails};
    use serde_json::json;

    fn scored(score: Option<f64>) -> ScoredTask {
        ScoredTask {
            id: Some(json!("t1")),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn test_priority_boundaries() {
        assert_eq!(Priority::from_score(Some(0.75)), Priority::High);
        assert_eq!(Priority::from_score(Some(0.749999)), Priority::Medium);
        assert_eq!(Priority::from_score(Some(0.45)), Priority::Medium);
        assert_eq!(Priority::from_score(Some(0.449999)), Priority::Low);
        assert_eq!(Priority::from_score(Some(1.0)), Priority::High);
        assert_eq!(Priority::from_score(Some(0.0)), Priority::Low);
    }

    #[test]
    fn test_missing_or_nan_score_is_low() {
        assert_eq!(Priority::from_score(None), Priority::Low);
        assert_eq!(Priority::from_score(Some(f64::NAN)), Priority::Low);
        assert_eq!(TaskCard::from_task(&scored(None)).score_text, "n/a");
    }

    #[test]
    fn test_empty_or_absent_tasks_render_placeholder() {
        assert_eq!(render_tasks(None), ResultsView::Placeholder);
        let view = render_tasks(Some(&[][..]));
        assert_eq!(view, ResultsView::Placeholder);
        assert!(view.cards().is_empty());
        assert_eq!(view.to_text(), "No tasks to show.");
    }

    #[test]
    fn test_cards_keep_response_order() {
        let tasks = vec![scored(Some(0.2)), scored(Some(0.9))];
        let view = render_tasks(Some(&tasks));
        let priorities: Vec<Priority> = view.cards().iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![Priority::Low, Priority::High]);
    }

    #[test]
    fn test_heading_falls_back_through_title_raw_title_and_id() {
        let mut task = scored(Some(0.5));
        task.title = Some("Direct".into());
        task.raw = Some(RawTask {
            title: Some("Raw".into()),
            ..Default::default()
        });
        assert_eq!(TaskCard::from_task(&task).heading, "Direct");

        task.title = Some(String::new());
        assert_eq!(TaskCard::from_task(&task).heading, "Raw");

        task.raw = None;
        assert_eq!(TaskCard::from_task(&task).heading, "t1");

        task.id = Some(json!(7));
        assert_eq!(TaskCard::from_task(&task).heading, "7");

        task.id = None;
        assert_eq!(TaskCard::from_task(&task).heading, "Untitled task");
    }

    #[test]
    fn test_card_text_fields() {
        let task = ScoredTask {
            id: Some(json!("a")),
            title: Some("Fix bug".into()),
            score: Some(0.8235),
            explanation: None,
            suggestion_reason: Some("High importance".into()),
            raw: Some(RawTask {
                due_date: Some("2025-03-01".into()),
                ..Default::default()
            }),
            details: Some(ScoreDetails {
                importance_norm: Some(1.0),
                effort_score: Some(0.5),
                dependents: Some(2),
                ..Default::default()
            }),
        };
        let card = TaskCard::from_task(&task);
        assert_eq!(card.priority, Priority::High);
        assert_eq!(card.score_text, "82%");
        assert_eq!(card.due_line, "Due: 2025-03-01");
        assert_eq!(card.explanation, "High importance");
        assert_eq!(card.details_line, "Details: importance 1, effort 0.5, dependents 2");
    }

    #[test]
    fn test_missing_details_and_due_date() {
        let card = TaskCard::from_task(&scored(Some(0.5)));
        assert_eq!(card.due_line, "No due date");
        assert_eq!(card.explanation, "");
        assert_eq!(card.details_line, "Details: importance n/a, effort n/a, dependents n/a");
    }

    #[test]
    fn test_due_hint_relative_to_today() {
        let mut task = scored(Some(0.5));
        task.raw = Some(RawTask {
            due_date: Some("2025-03-10".into()),
            ..Default::default()
        });
        let card = TaskCard::from_task(&task);
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        assert_eq!(card.due_hint(day(10)).as_deref(), Some("due today"));
        assert_eq!(card.due_hint(day(7)).as_deref(), Some("due in 3 days"));
        assert_eq!(card.due_hint(day(11)).as_deref(), Some("overdue by 1 day"));

        task.raw = Some(RawTask {
            due_date: Some("next week".into()),
            ..Default::default()
        });
        assert_eq!(TaskCard::from_task(&task).due_hint(day(1)), None);
    }
}
