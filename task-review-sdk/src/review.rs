//! The two user actions: analyze and suggest
//!
//! Each action validates the raw input first and only then talks to the
//! service, so input errors never cost a request.

use serde_json::Value;
use tracing::info;

use crate::api::TaskReviewApi;
use crate::card::{render_tasks, ResultsView};
use crate::error::ReviewError;
use crate::input::parse_task_input;
use crate::types::{AnalysisMeta, AnalyzeRequest, Strategy, SuggestRequest, Task, Weights};

/// Which action produced a review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewKind {
    Analysis,
    Suggestion(Strategy),
}

impl ReviewKind {
    pub fn title(&self) -> String {
        match self {
            ReviewKind::Analysis => "Analysis".to_string(),
            ReviewKind::Suggestion(strategy) => format!("Suggestions ({})", strategy),
        }
    }
}

/// A successful action, ready to display
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub kind: ReviewKind,
    pub view: ResultsView,
    pub meta: Option<AnalysisMeta>,
    /// The service's response body, unchanged
    pub response: Value,
}

/// Options that travel with a suggest request
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestOptions {
    pub strategy: Strategy,
    pub top: Option<usize>,
}

/// Validate `raw_text` and score the tasks it contains
pub async fn submit_for_analysis<A>(
    api: &A,
    raw_text: &str,
    weights: Option<&Weights>,
) -> Result<Review, ReviewError>
where
    A: TaskReviewApi + ?Sized,
{
    let tasks = parse_task_input(raw_text)?;
    analyze_tasks(api, tasks, weights).await
}

/// Validate `raw_text` and ask for suggestions under a strategy
pub async fn submit_for_suggestion<A>(
    api: &A,
    raw_text: &str,
    options: SuggestOptions,
) -> Result<Review, ReviewError>
where
    A: TaskReviewApi + ?Sized,
{
    let tasks = parse_task_input(raw_text)?;
    suggest_tasks(api, tasks, options).await
}

/// Score already-validated tasks
pub async fn analyze_tasks<A>(
    api: &A,
    tasks: Vec<Task>,
    weights: Option<&Weights>,
) -> Result<Review, ReviewError>
where
    A: TaskReviewApi + ?Sized,
{
    let request = AnalyzeRequest {
        tasks,
        weights: weights.filter(|w| !w.is_empty()).cloned(),
    };
    let response = api.analyze(&request).await?;

    info!(
        submitted = request.tasks.len(),
        returned = response.tasks.as_ref().map(Vec::len).unwrap_or(0),
        "analysis complete"
    );

    Ok(Review {
        kind: ReviewKind::Analysis,
        view: render_tasks(response.tasks.as_deref()),
        meta: response.meta,
        response: response.body,
    })
}

/// Ask for suggestions on already-validated tasks.
///
/// A success without a `suggestions` key is reported as
/// [`ReviewError::EmptyResult`]; an empty list is a valid, empty result.
pub async fn suggest_tasks<A>(
    api: &A,
    tasks: Vec<Task>,
    options: SuggestOptions,
) -> Result<Review, ReviewError>
where
    A: TaskReviewApi + ?Sized,
{
    let request = SuggestRequest {
        tasks,
        strategy: options.strategy,
        top: options.top,
    };
    let response = api.suggest(&request).await?;
    let suggestions = response.suggestions.ok_or(ReviewError::EmptyResult)?;

    info!(
        submitted = request.tasks.len(),
        returned = suggestions.len(),
        strategy = %options.strategy,
        "suggestions received"
    );

    Ok(Review {
        kind: ReviewKind::Suggestion(options.strategy),
        view: render_tasks(Some(&suggestions)),
        meta: response.meta,
        response: response.body,
    })
}
