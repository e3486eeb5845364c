//! Run header and outcome display for the CLI.

use crate::scenario::{ScenarioConfig, ScenarioReport};

fn region_label(region: &str) -> &str {
    if region.is_empty() { "(sdk default)" } else { region }
}

/// Print what is about to be checked.
pub fn print_banner(config: &ScenarioConfig) {
    println!(
        r#"
   labelcheck {}

   region    {}
   submit    {} / {}
   label     {} / {}
   image     {}
   wait      {}s
   expect    {}
"#,
        env!("CARGO_PKG_VERSION"),
        region_label(&config.region),
        config.submit_stack,
        config.submit_output,
        config.label_stack,
        config.label_output,
        config.image_url,
        config.delay.as_secs(),
        config.expected_labels.join(", "),
    );
}

/// Print the outcome of a passing run.
pub fn print_report(report: &ScenarioReport) {
    println!("image id  {}", report.image_id);
    println!("labels    {}", report.label_response.trim());
    println!("passed in {:.1}s", report.elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn region_label_empty_falls_back() {
        assert_eq!(region_label(""), "(sdk default)");
        assert_eq!(region_label("us-east-1"), "us-east-1");
    }

    #[test]
    fn print_banner_does_not_panic() {
        print_banner(&ScenarioConfig::new("us-east-1"));
        print_banner(&ScenarioConfig::default());
    }

    #[test]
    fn print_report_does_not_panic() {
        print_report(&ScenarioReport {
            submit_response: r#"{"imageId":"abc-123"}"#.to_string(),
            image_id: "abc-123".to_string(),
            label_response: "[\"French bulldog\",\"pug\",\"bull mastiff\"]\n".to_string(),
            elapsed: Duration::from_millis(30_250),
        });
    }
}
