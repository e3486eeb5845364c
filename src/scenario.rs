//! The end-to-end labelling check.
//!
//! A run walks a fixed sequence of stages:
//!
//! ```text
//! ResolveSubmitEndpoint → CallSubmit → WaitFixedDelay → ExtractId
//!     → ResolveLabelEndpoint → CallLabel → AssertLabels → done
//! ```
//!
//! The first failing stage ends the run. There is no retry and no polling:
//! the labeller gets one fixed delay and one lookup.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::info;

use crate::consts::{
    EXPECTED_LABELS, GET_IMAGE_LABEL_OUTPUT, GET_IMAGE_LABEL_STACK, LABEL_DELAY,
    LABEL_QUERY_PARAM, SAMPLE_IMAGE_URL, SUBMIT_IMAGE_OUTPUT, SUBMIT_IMAGE_STACK,
    SUBMIT_QUERY_PARAM,
};
use crate::endpoint::EndpointCaller;
use crate::error::{CheckError, Result};
use crate::spinner::Countdown;
use crate::stack::{self, StackOutputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveSubmitEndpoint,
    CallSubmit,
    WaitFixedDelay,
    ExtractId,
    ResolveLabelEndpoint,
    CallLabel,
    AssertLabels,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ResolveSubmitEndpoint => "resolve submit endpoint",
            Stage::CallSubmit => "call submit endpoint",
            Stage::WaitFixedDelay => "wait for labelling",
            Stage::ExtractId => "extract image id",
            Stage::ResolveLabelEndpoint => "resolve label endpoint",
            Stage::CallLabel => "call label endpoint",
            Stage::AssertLabels => "assert labels",
        };
        f.write_str(name)
    }
}

/// The stage a run stopped at, and why.
#[derive(Debug, Error)]
#[error("{stage} failed")]
pub struct ScenarioFailure {
    pub stage: Stage,
    #[source]
    pub error: CheckError,
}

/// Everything a run needs to know, passed in explicitly.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Cloud region the stacks live in. Empty means the SDK default.
    pub region: String,
    pub submit_stack: String,
    pub submit_output: String,
    pub label_stack: String,
    pub label_output: String,
    pub image_url: String,
    pub delay: Duration,
    pub expected_labels: Vec<String>,
    /// Draw a countdown on stderr during the delay.
    pub show_countdown: bool,
}

impl ScenarioConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            submit_stack: SUBMIT_IMAGE_STACK.to_string(),
            submit_output: SUBMIT_IMAGE_OUTPUT.to_string(),
            label_stack: GET_IMAGE_LABEL_STACK.to_string(),
            label_output: GET_IMAGE_LABEL_OUTPUT.to_string(),
            image_url: SAMPLE_IMAGE_URL.to_string(),
            delay: LABEL_DELAY,
            expected_labels: EXPECTED_LABELS.iter().map(|l| l.to_string()).collect(),
            show_countdown: false,
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::new("")
    }
}

/// What a passing run observed.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub submit_response: String,
    pub image_id: String,
    pub label_response: String,
    pub elapsed: Duration,
}

/// Pull the image id out of a submit response.
///
/// Splits on `:`, keeps the second segment and trims quotes, the closing
/// brace and whitespace from both ends. Only the first field of a JSON
/// object comes out clean.
pub fn extract_image_id(submit_response: &str) -> Result<String> {
    let segment = submit_response
        .split(':')
        .nth(1)
        .ok_or_else(|| CheckError::Parse(submit_response.to_string()))?;
    Ok(segment
        .trim_matches(|c: char| c == '"' || c == '}' || c.is_whitespace())
        .to_string())
}

/// Check that every expected label occurs in the response, in order.
/// The first one missing is reported.
pub fn assert_labels<S: AsRef<str>>(label_response: &str, expected: &[S]) -> Result<()> {
    for label in expected {
        let label: &str = label.as_ref();
        if !label_response.contains(label) {
            return Err(CheckError::Assertion(label.to_string()));
        }
    }
    Ok(())
}

/// Give the labeller its fixed time. Never returns early.
pub async fn wait_fixed_delay(delay: Duration, show_countdown: bool) {
    let countdown = show_countdown.then(|| Countdown::start("waiting for labels", delay));
    tokio::time::sleep(delay).await;
    if let Some(countdown) = countdown {
        countdown.stop().await;
    }
}

/// Wires a stack provider and an HTTP caller to one configuration.
pub struct Scenario {
    stacks: Box<dyn StackOutputs>,
    caller: EndpointCaller,
    config: ScenarioConfig,
}

impl Scenario {
    pub fn new(stacks: Box<dyn StackOutputs>, config: ScenarioConfig) -> Self {
        Self {
            stacks,
            caller: EndpointCaller::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    async fn stage<T>(
        stage: Stage,
        work: impl Future<Output = Result<T>>,
    ) -> std::result::Result<T, ScenarioFailure> {
        info!(%stage, "stage started");
        work.await.map_err(|error| ScenarioFailure { stage, error })
    }

    /// Run every stage once, in order.
    pub async fn run(&self) -> std::result::Result<ScenarioReport, ScenarioFailure> {
        let started = Instant::now();
        let config = &self.config;

        let submit_endpoint = Self::stage(
            Stage::ResolveSubmitEndpoint,
            stack::resolve(
                self.stacks.as_ref(),
                &config.submit_stack,
                &config.submit_output,
            ),
        )
        .await?;

        let submit_response = Self::stage(
            Stage::CallSubmit,
            self.caller
                .call(&submit_endpoint, SUBMIT_QUERY_PARAM, &config.image_url),
        )
        .await?;
        info!(%submit_response, "image submitted");

        Self::stage(Stage::WaitFixedDelay, async {
            wait_fixed_delay(config.delay, config.show_countdown).await;
            Ok(())
        })
        .await?;

        let image_id = Self::stage(Stage::ExtractId, async {
            extract_image_id(&submit_response)
        })
        .await?;
        info!(%image_id, "image id extracted");

        let label_endpoint = Self::stage(
            Stage::ResolveLabelEndpoint,
            stack::resolve(
                self.stacks.as_ref(),
                &config.label_stack,
                &config.label_output,
            ),
        )
        .await?;

        let label_response = Self::stage(
            Stage::CallLabel,
            self.caller
                .call(&label_endpoint, LABEL_QUERY_PARAM, &image_id),
        )
        .await?;
        info!(%label_response, "labels fetched");

        Self::stage(Stage::AssertLabels, async {
            assert_labels(&label_response, config.expected_labels.as_slice())
        })
        .await?;

        Ok(ScenarioReport {
            submit_response,
            image_id,
            label_response,
            elapsed: started.elapsed(),
        })
    }
}
