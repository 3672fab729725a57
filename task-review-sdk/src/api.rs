//! HTTP access to the task analysis service

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ReviewError, API_ERROR_FALLBACK};
use crate::types::{
    AnalyzeRequest, AnalyzeResponse, ApiErrorBody, ResponseBody, SuggestMethod, SuggestRequest,
    SuggestResponse,
};

pub const ANALYZE_PATH: &str = "/api/tasks/analyze/";
pub const SUGGEST_PATH: &str = "/api/tasks/suggest/";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Operations the client needs from the analysis service
#[async_trait]
pub trait TaskReviewApi: Send + Sync {
    /// Score every task
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ReviewError>;

    /// Pick the tasks to work on next under a strategy
    async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse, ReviewError>;
}

/// Connection settings for [`HttpTaskReviewApi`]
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub suggest_method: SuggestMethod,
    /// No timeout when `None`; the network stack's defaults apply
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            suggest_method: SuggestMethod::Get,
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// `reqwest` implementation of [`TaskReviewApi`]
#[derive(Debug, Clone)]
pub struct HttpTaskReviewApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTaskReviewApi {
    pub fn new(config: ApiConfig) -> Result<Self, ReviewError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and decode the success body, mapping failures onto the
    /// error taxonomy. Non-success bodies are read for their `error` field.
    async fn send<T: DeserializeOwned + ResponseBody>(
        &self,
        builder: RequestBuilder,
        operation: &'static str,
    ) -> Result<T, ReviewError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, operation, "sending request");

        let response = builder
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                warn!(%request_id, operation, error = %e, "request failed");
                ReviewError::from(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let parsed: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
            let message = parsed
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| API_ERROR_FALLBACK.to_string());
            warn!(
                %request_id,
                operation,
                status = status.as_u16(),
                %message,
                "service returned an error"
            );
            return Err(ReviewError::Api {
                status: status.as_u16(),
                message,
                details: parsed.details,
            });
        }

        debug!(%request_id, operation, status = status.as_u16(), bytes = body.len(), "response received");
        let invalid = |e: serde_json::Error| {
            warn!(%request_id, operation, error = %e, "undecodable response body");
            ReviewError::Network(format!("invalid response body: {}", e))
        };
        let value: Value = serde_json::from_slice(&body).map_err(invalid)?;
        let mut decoded = T::deserialize(&value).map_err(invalid)?;
        decoded.set_body(value);
        Ok(decoded)
    }
}

#[async_trait]
impl TaskReviewApi for HttpTaskReviewApi {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ReviewError> {
        let builder = self.client.post(self.url(ANALYZE_PATH)).json(request);
        self.send(builder, "analyze").await
    }

    async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse, ReviewError> {
        let url = self.url(SUGGEST_PATH);
        let builder = match self.config.suggest_method {
            SuggestMethod::Get => self.client.get(url),
            SuggestMethod::Post => self.client.post(url),
        };

        let mut query = vec![("strategy", request.strategy.as_str().to_string())];
        if let Some(top) = request.top {
            query.push(("top", top.to_string()));
        }

        self.send(builder.query(&query).json(request), "suggest").await
    }
}
