//! Non-interactive `analyze` and `suggest` subcommands

use anyhow::{Context, Result};
use std::process::ExitCode;
use task_review_sdk::{
    submit_for_analysis, submit_for_suggestion, HttpTaskReviewApi, Review, SuggestOptions,
};
use tracing::warn;

use crate::cli::{AnalyzeArgs, ConnectionArgs, SuggestArgs};
use crate::config::read_input;

pub async fn run_analyze(connection: &ConnectionArgs, args: &AnalyzeArgs) -> Result<ExitCode> {
    let api = HttpTaskReviewApi::new(connection.api_config())
        .context("Failed to build HTTP client")?;
    let raw = read_input(&args.file)?;

    let outcome = submit_for_analysis(&api, &raw, args.weights.as_ref()).await;
    Ok(report(outcome, args.json))
}

pub async fn run_suggest(connection: &ConnectionArgs, args: &SuggestArgs) -> Result<ExitCode> {
    let api = HttpTaskReviewApi::new(connection.api_config())
        .context("Failed to build HTTP client")?;
    let raw = read_input(&args.file)?;

    let options = SuggestOptions {
        strategy: args.strategy,
        top: args.top,
    };
    let outcome = submit_for_suggestion(&api, &raw, options).await;
    Ok(report(outcome, args.json))
}

fn report(outcome: Result<Review, task_review_sdk::ReviewError>, as_json: bool) -> ExitCode {
    match outcome {
        Ok(review) => {
            if as_json {
                println!("{}", review_json(&review));
            } else {
                println!("{}", review.kind.title());
                println!();
                println!("{}", review.view.to_text());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(kind = e.kind(), "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// The service's response body, pretty-printed
pub fn review_json(review: &Review) -> String {
    serde_json::to_string_pretty(&review.response).unwrap_or_else(|_| review.response.to_string())
}
