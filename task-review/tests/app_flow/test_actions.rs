//! Submitting from the app and applying the outcome

use super::common::*;
use std::sync::Arc;
use std::time::Duration;
use task_review::app::commands::AppEvent;
use task_review::config::RenderPolicy;
use task_review_sdk::{
    AnalysisMeta, ResultsView, ReviewError, ReviewKind, Strategy, TaskReviewApi,
};

#[tokio::test]
async fn test_invalid_input_shows_banner_without_request() {
    let api = Arc::new(FakeApi::default());

    for (input, expected) in [
        ("   ", "Paste tasks JSON into the textarea."),
        ("{\"id\": 1}", "JSON must be an array of tasks."),
    ] {
        let mut app = app_with(api.clone(), RenderPolicy::LatestRequest).with_input(input);
        app.submit_for_analysis();
        assert_eq!(banner(&app).as_deref(), Some(expected));
        assert!(!app.is_loading());
    }

    let mut app = app_with(api.clone(), RenderPolicy::LatestRequest).with_input("[1, 2");
    app.submit_for_suggestion();
    assert!(banner(&app).unwrap().starts_with("Invalid JSON: "));

    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_analysis_renders_cards() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("Fix login", 0.9), scored("Tidy docs", 0.2)]),
        ..Default::default()
    });
    let mut app = app_with(api.clone(), RenderPolicy::LatestRequest).with_input("[{}, {}]");

    app.submit_for_analysis();
    assert!(app.is_loading());
    settle(&mut app).await;

    let review = app.review.as_ref().unwrap();
    assert_eq!(review.kind, ReviewKind::Analysis);
    let headings: Vec<_> = review.view.cards().iter().map(|c| c.heading.as_str()).collect();
    assert_eq!(headings, ["Fix login", "Tidy docs"]);
    assert!(app.last_updated.is_some());
    assert!(banner(&app).is_none());
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn test_suggest_uses_selected_strategy() {
    let api = Arc::new(FakeApi {
        suggestions: Some(vec![scored("Ship release", 0.5)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");
    app.next_strategy();
    assert_eq!(app.strategy, Strategy::Fastest);

    app.submit_for_suggestion();
    settle(&mut app).await;

    let review = app.review.as_ref().unwrap();
    assert_eq!(review.kind, ReviewKind::Suggestion(Strategy::Fastest));
    assert_eq!(review.view.cards().len(), 1);
}

#[tokio::test]
async fn test_missing_suggestions_reports_empty_result() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");

    app.submit_for_suggestion();
    settle(&mut app).await;

    assert!(app.review.is_none());
    assert_eq!(banner(&app).as_deref(), Some("No suggestions returned"));
}

#[tokio::test]
async fn test_empty_suggestions_render_placeholder() {
    let api = Arc::new(FakeApi {
        suggestions: Some(Vec::new()),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[]");

    app.submit_for_suggestion();
    settle(&mut app).await;

    assert_eq!(app.review.as_ref().unwrap().view, ResultsView::Placeholder);
    assert!(banner(&app).is_none());
}

#[tokio::test]
async fn test_api_error_message_is_shown_and_results_kept() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("Fix login", 0.9)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");
    app.submit_for_analysis();
    settle(&mut app).await;

    let failing: Arc<dyn TaskReviewApi> = Arc::new(FakeApi {
        api_error: Some((429, "rate limited".to_string())),
        ..Default::default()
    });
    app.api = failing;
    app.submit_for_analysis();
    settle(&mut app).await;

    assert_eq!(banner(&app).as_deref(), Some("rate limited"));
    assert_eq!(app.review.as_ref().unwrap().view.cards().len(), 1);
}

#[tokio::test]
async fn test_stale_response_is_dropped_by_default() {
    let api = Arc::new(FakeApi {
        analyze_delay: Some(Duration::from_millis(100)),
        tasks: Some(vec![scored("From analyze", 0.9)]),
        suggestions: Some(vec![scored("From suggest", 0.5)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");

    app.submit_for_analysis();
    app.submit_for_suggestion();
    settle(&mut app).await;

    let review = app.review.as_ref().unwrap();
    assert_eq!(review.kind, ReviewKind::Suggestion(Strategy::Smart));
    assert_eq!(review.view.cards()[0].heading, "From suggest");
}

#[tokio::test]
async fn test_last_response_policy_lets_late_response_win() {
    let api = Arc::new(FakeApi {
        analyze_delay: Some(Duration::from_millis(100)),
        tasks: Some(vec![scored("From analyze", 0.9)]),
        suggestions: Some(vec![scored("From suggest", 0.5)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LastResponse).with_input("[{}]");

    app.submit_for_analysis();
    app.submit_for_suggestion();
    settle(&mut app).await;

    let review = app.review.as_ref().unwrap();
    assert_eq!(review.kind, ReviewKind::Analysis);
    assert_eq!(review.view.cards()[0].heading, "From analyze");
}

#[tokio::test]
async fn test_stale_error_does_not_replace_banner() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api, RenderPolicy::LatestRequest);

    let stale = app.requests.issue();
    let latest = app.requests.issue();
    app.handle_event(AppEvent::ReviewFinished {
        request_id: latest,
        result: Err(ReviewError::Network("connection refused".to_string())),
    });
    app.handle_event(AppEvent::ReviewFinished {
        request_id: stale,
        result: Err(ReviewError::EmptyResult),
    });

    assert_eq!(
        banner(&app).as_deref(),
        Some("Network error: connection refused")
    );
    assert!(!app.is_loading());
}

#[tokio::test]
async fn test_dependency_cycles_raise_warning() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("a", 0.5)]),
        meta: Some(AnalysisMeta {
            cycles: vec![vec!["1".to_string(), "2".to_string(), "1".to_string()]],
            ..Default::default()
        }),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");

    app.submit_for_analysis();
    settle(&mut app).await;

    assert_eq!(
        banner(&app).as_deref(),
        Some("Dependency cycle detected: 1 -> 2 -> 1")
    );
}
