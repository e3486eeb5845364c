//! Error taxonomy for a scenario run.
//!
//! Every variant aborts the run at the point it is raised. Nothing is
//! retried or recovered.

use thiserror::Error;

/// A failure raised by one of the scenario's steps.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The stack exists but has no output with the requested key.
    #[error("unable to find key: {key} (stack {stack})")]
    Lookup { stack: String, key: String },

    /// The stack provider itself failed (missing stack, auth, network).
    #[error(transparent)]
    StackProvider(#[from] anyhow::Error),

    /// The GET request could not be sent or its body could not be read.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The submit response has no `:` to split the image id from.
    #[error("malformed submit response, no ':' separator: {0:?}")]
    Parse(String),

    /// The label response is missing an expected label.
    #[error("label response does not contain \"{0}\"")]
    Assertion(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_names_the_missing_key() {
        let err = CheckError::Lookup {
            stack: "OpenDevOpsSubmitImage".to_string(),
            key: "SubmitImageAPI".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to find key: SubmitImageAPI (stack OpenDevOpsSubmitImage)"
        );
    }

    #[test]
    fn assertion_names_the_label() {
        let err = CheckError::Assertion("pug".to_string());
        assert_eq!(err.to_string(), "label response does not contain \"pug\"");
    }

    #[test]
    fn parse_quotes_the_offending_text() {
        let err = CheckError::Parse("no separator".to_string());
        assert!(err.to_string().contains("\"no separator\""));
    }

    #[test]
    fn provider_error_passes_through_unchanged() {
        let err = CheckError::from(anyhow::anyhow!("Stack with id Missing does not exist"));
        assert_eq!(err.to_string(), "Stack with id Missing does not exist");
    }
}
