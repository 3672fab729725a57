//! Wire types for the task analysis service
//!
//! Response shapes are trusted as-is from the service, so every field the
//! client reads is modelled as an `Option`. Missing fields, and fields whose
//! value has an unexpected type, deserialize to `None`; unknown fields are
//! ignored. One malformed field never rejects the rest of a response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A caller-supplied task. Only the surrounding array is validated.
pub type Task = Value;

/// A task annotated by the service with a score and explanation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub suggestion_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawTask>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub details: Option<ScoreDetails>,
}

/// The task as echoed back by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-factor metrics behind a score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub importance_norm: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub effort_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dependents: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dependencies_norm: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub days_to_due: Option<i64>,
}

/// Scoring factor weights
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub urgency: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub effort: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<f64>,
}

impl Weights {
    pub fn is_empty(&self) -> bool {
        self.urgency.is_none()
            && self.importance.is_none()
            && self.effort.is_none()
            && self.dependencies.is_none()
    }
}

impl FromStr for Weights {
    type Err = String;

    /// Parses `urgency=0.3,importance=0.4` style lists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut weights = Weights::default();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected key=value, got '{}'", pair))?;
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight for '{}': '{}'", key.trim(), value.trim()))?;
            let slot = match key.trim() {
                "urgency" => &mut weights.urgency,
                "importance" => &mut weights.importance,
                "effort" => &mut weights.effort,
                "dependencies" => &mut weights.dependencies,
                other => return Err(format!("unknown weight '{}'", other)),
            };
            *slot = Some(value);
        }
        Ok(weights)
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            ("urgency", self.urgency),
            ("importance", self.importance),
            ("effort", self.effort),
            ("dependencies", self.dependencies),
        ]
        .iter()
        .filter_map(|(name, value)| value.map(|v| format!("{} {:.2}", name, v)))
        .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Metadata returned next to the scored tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMeta {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    #[serde(default, deserialize_with = "lenient_cycles")]
    pub cycles: Vec<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub horizon_days: Option<i64>,
}

/// Ranking mode for the suggest endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Smart,
    Fastest,
    HighImpact,
    Deadline,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Smart,
        Strategy::Fastest,
        Strategy::HighImpact,
        Strategy::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Smart => "smart",
            Strategy::Fastest => "fastest",
            Strategy::HighImpact => "highimpact",
            Strategy::Deadline => "deadline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Smart => "Smart balance",
            Strategy::Fastest => "Fastest wins",
            Strategy::HighImpact => "High impact",
            Strategy::Deadline => "Deadline driven",
        }
    }

    /// Next strategy in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous strategy in selector order, wrapping around
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown strategy '{}' (expected one of: smart, fastest, highimpact, deadline)",
                    s
                )
            })
    }
}

/// HTTP method used for the suggest call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestMethod {
    /// JSON body carried on a GET request
    #[default]
    Get,
    Post,
}

impl FromStr for SuggestMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(SuggestMethod::Get),
            "post" => Ok(SuggestMethod::Post),
            other => Err(format!("unknown suggest method '{}' (expected get or post)", other)),
        }
    }
}

impl fmt::Display for SuggestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestMethod::Get => f.write_str("GET"),
            SuggestMethod::Post => f.write_str("POST"),
        }
    }
}

/// Body of the analyze call
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub tasks: Vec<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
}

/// Body of the suggest call.
///
/// `top` travels as a query parameter, never in the body.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    pub tasks: Vec<Task>,
    pub strategy: Strategy,
    #[serde(skip)]
    pub top: Option<usize>,
}

/// Successful analyze response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, deserialize_with = "lenient_tasks")]
    pub tasks: Option<Vec<ScoredTask>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub meta: Option<AnalysisMeta>,
    /// The body exactly as the service sent it
    #[serde(skip)]
    pub body: Value,
}

/// Successful suggest response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default, deserialize_with = "lenient_tasks")]
    pub suggestions: Option<Vec<ScoredTask>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub meta: Option<AnalysisMeta>,
    /// The body exactly as the service sent it
    #[serde(skip)]
    pub body: Value,
}

/// Success bodies that keep a copy of the JSON they were decoded from
pub trait ResponseBody {
    fn set_body(&mut self, body: Value);
}

impl ResponseBody for AnalyzeResponse {
    fn set_body(&mut self, body: Value) {
        self.body = body;
    }
}

impl ResponseBody for SuggestResponse {
    fn set_body(&mut self, body: Value) {
        self.body = body;
    }
}

/// Error body returned with a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

/// Decode a field, treating a value of the wrong type like a missing one
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decode a task list element by element. A non-array is treated as missing;
/// an element that is not an object becomes an empty task so positions hold.
fn lenient_tasks<'de, D>(deserializer: D) -> Result<Option<Vec<ScoredTask>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| ScoredTask::deserialize(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Cycles list task ids; numeric ids are kept as their decimal text
fn lenient_cycles<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(cycles) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(cycles
        .into_iter()
        .filter_map(|cycle| match cycle {
            Value::Array(ids) => Some(
                ids.into_iter()
                    .map(|id| match id {
                        Value::String(id) => id,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        })
        .collect())
}
