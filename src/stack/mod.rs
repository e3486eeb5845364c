pub mod cloudformation;
pub mod fixed;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// One key/value output published by a deployed stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
}

impl StackOutput {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Where stack outputs come from. Could be CloudFormation or a fixture.
#[async_trait]
pub trait StackOutputs: Send + Sync {
    /// Outputs of the named stack, in the order the stack reports them.
    async fn outputs(&self, stack: &str) -> Result<Vec<StackOutput>>;
}

/// First output whose key equals `key`.
pub fn find_output<'a>(outputs: &'a [StackOutput], key: &str) -> Option<&'a str> {
    outputs
        .iter()
        .find(|output| output.key == key)
        .map(|output| output.value.as_str())
}

/// Resolve one output value of a deployed stack.
///
/// Provider failures are returned as [`CheckError::StackProvider`] with the
/// provider's error untouched; a stack without the key yields
/// [`CheckError::Lookup`].
pub async fn resolve(
    provider: &dyn StackOutputs,
    stack: &str,
    key: &str,
) -> Result<String, CheckError> {
    let outputs = provider.outputs(stack).await?;
    find_output(&outputs, key)
        .map(str::to_string)
        .ok_or_else(|| CheckError::Lookup {
            stack: stack.to_string(),
            key: key.to_string(),
        })
}
