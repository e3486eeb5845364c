use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use labelcheck::banner::{print_banner, print_report};
use labelcheck::scenario::{Scenario, ScenarioConfig};
use labelcheck::stack::cloudformation::CloudFormationStacks;

#[derive(Parser)]
#[command(
    name = "labelcheck",
    version,
    about = "Submit an image, wait, and check the labels it gets."
)]
struct Cli {
    /// AWS region the image stacks are deployed in
    #[arg(long, default_value = "")]
    aws_region: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "labelcheck=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ScenarioConfig {
        show_countdown: true,
        ..ScenarioConfig::new(cli.aws_region)
    };
    let stacks = CloudFormationStacks::connect(&config.region).await;
    let scenario = Scenario::new(Box::new(stacks), config);
    print_banner(scenario.config());

    match scenario.run().await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(failure) => {
            error!(stage = %failure.stage, error = %failure.error, "scenario failed");
            Err(failure.into())
        }
    }
}
