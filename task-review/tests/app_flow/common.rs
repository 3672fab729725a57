//! Shared fixtures for app tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use task_review::app::App;
use task_review::config::{AppSettings, RenderPolicy};
use task_review_sdk::{
    async_trait, AnalysisMeta, AnalyzeRequest, AnalyzeResponse, ReviewError, ScoredTask,
    SuggestRequest, SuggestResponse, TaskReviewApi,
};

/// Canned service used in place of the HTTP client
#[derive(Default)]
pub struct FakeApi {
    pub calls: AtomicUsize,
    pub analyze_delay: Option<Duration>,
    pub suggest_delay: Option<Duration>,
    pub tasks: Option<Vec<ScoredTask>>,
    pub suggestions: Option<Vec<ScoredTask>>,
    pub meta: Option<AnalysisMeta>,
    /// Respond with an API error carrying this status and message
    pub api_error: Option<(u16, String)>,
}

impl FakeApi {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn failure(&self) -> Option<ReviewError> {
        self.api_error
            .as_ref()
            .map(|(status, message)| ReviewError::Api {
                status: *status,
                message: message.clone(),
                details: None,
            })
    }
}

#[async_trait]
impl TaskReviewApi for FakeApi {
    async fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalyzeResponse, ReviewError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.analyze_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failure() {
            return Err(err);
        }
        Ok(AnalyzeResponse {
            tasks: self.tasks.clone(),
            meta: self.meta.clone(),
            ..Default::default()
        })
    }

    async fn suggest(&self, _request: &SuggestRequest) -> Result<SuggestResponse, ReviewError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.suggest_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.failure() {
            return Err(err);
        }
        Ok(SuggestResponse {
            suggestions: self.suggestions.clone(),
            meta: self.meta.clone(),
            ..Default::default()
        })
    }
}

pub fn scored(title: &str, score: f64) -> ScoredTask {
    ScoredTask {
        title: Some(title.to_string()),
        score: Some(score),
        ..Default::default()
    }
}

pub fn settings(policy: RenderPolicy) -> AppSettings {
    AppSettings {
        api_base: "http://localhost:8000".to_string(),
        render_policy: policy,
        ..Default::default()
    }
}

/// Build an app on the current runtime
pub fn app_with(api: Arc<FakeApi>, policy: RenderPolicy) -> App {
    App::new(api, settings(policy), tokio::runtime::Handle::current())
}

/// Let background requests finish and apply their results
pub async fn settle(app: &mut App) {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.poll_events();
        if !app.is_loading() {
            return;
        }
    }
    panic!("requests did not finish");
}

pub fn banner(app: &App) -> Option<String> {
    app.notifications
        .get_active()
        .map(|notification| notification.message.clone())
}
