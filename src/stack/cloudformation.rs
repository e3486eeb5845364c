use anyhow::{Result, bail};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::config::Region;

use super::{StackOutput, StackOutputs};

/// Reads stack outputs through CloudFormation `DescribeStacks`.
pub struct CloudFormationStacks {
    client: Client,
}

impl CloudFormationStacks {
    /// Build a client for `region`. An empty region falls back to the SDK's
    /// default chain (`AWS_REGION`, profile, IMDS).
    pub async fn connect(region: &str) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if !region.is_empty() {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;
        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl StackOutputs for CloudFormationStacks {
    async fn outputs(&self, stack: &str) -> Result<Vec<StackOutput>> {
        let response = self
            .client
            .describe_stacks()
            .stack_name(stack)
            .send()
            .await?;

        // DescribeStacks by name returns exactly one stack
        let Some(described) = response.stacks().first() else {
            bail!("stack not found: {stack}");
        };

        Ok(described
            .outputs()
            .iter()
            .filter_map(|output| {
                Some(StackOutput::new(output.output_key()?, output.output_value()?))
            })
            .collect())
    }
}
