use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;

use super::{StackOutput, StackOutputs};

/// Stacks known up front. Used by tests and offline runs.
///
/// A JSON fixture maps stack names to ordered output lists:
///
/// ```json
/// { "OpenDevOpsSubmitImage": [{ "key": "SubmitImageAPI", "value": "http://..." }] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedStacks {
    stacks: HashMap<String, Vec<StackOutput>>,
}

impl FixedStacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a stack and its outputs.
    pub fn with_stack(mut self, name: impl Into<String>, outputs: Vec<StackOutput>) -> Self {
        self.stacks.insert(name.into(), outputs);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let stacks = serde_json::from_str(json).context("invalid stack fixture")?;
        Ok(Self { stacks })
    }
}

#[async_trait]
impl StackOutputs for FixedStacks {
    async fn outputs(&self, stack: &str) -> Result<Vec<StackOutput>> {
        self.stacks
            .get(stack)
            .cloned()
            .ok_or_else(|| anyhow!("Stack with id {stack} does not exist"))
    }
}
