use labelcheck::error::CheckError;
use labelcheck::stack::fixed::FixedStacks;
use labelcheck::stack::{StackOutput, StackOutputs, resolve};

const FIXTURE: &str = r#"{
    "OpenDevOpsSubmitImage": [
        { "key": "SubmitImageAPI", "value": "https://abc.execute-api.us-east-1.amazonaws.com/prod/submit" },
        { "key": "ImageBucket", "value": "opendevops-images" }
    ],
    "OpenDevOpsGetImageLabel": [
        { "key": "GetImageLabelAPI", "value": "https://def.execute-api.us-east-1.amazonaws.com/prod/label" }
    ]
}"#;

#[tokio::test]
async fn resolve_returns_exact_value() {
    let stacks = FixedStacks::from_json(FIXTURE).unwrap();
    let value = resolve(&stacks, "OpenDevOpsSubmitImage", "SubmitImageAPI")
        .await
        .unwrap();
    assert_eq!(
        value,
        "https://abc.execute-api.us-east-1.amazonaws.com/prod/submit"
    );
}

#[tokio::test]
async fn resolve_missing_key_is_lookup_error() {
    let stacks = FixedStacks::from_json(FIXTURE).unwrap();
    let err = resolve(&stacks, "OpenDevOpsGetImageLabel", "SubmitImageAPI")
        .await
        .unwrap_err();
    match err {
        CheckError::Lookup { stack, key } => {
            assert_eq!(stack, "OpenDevOpsGetImageLabel");
            assert_eq!(key, "SubmitImageAPI");
        }
        other => panic!("expected Lookup, got {other:?}"),
    }
}

#[tokio::test]
async fn resolve_missing_stack_propagates_provider_error() {
    let stacks = FixedStacks::new();
    let err = resolve(&stacks, "Nope", "SubmitImageAPI").await.unwrap_err();
    assert!(matches!(err, CheckError::StackProvider(_)));
    assert_eq!(err.to_string(), "Stack with id Nope does not exist");
}

#[tokio::test]
async fn fixture_preserves_output_order() {
    let stacks = FixedStacks::from_json(FIXTURE).unwrap();
    let outputs = stacks.outputs("OpenDevOpsSubmitImage").await.unwrap();
    let keys: Vec<&str> = outputs.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["SubmitImageAPI", "ImageBucket"]);
}

#[tokio::test]
async fn with_stack_replaces_existing() {
    let stacks = FixedStacks::new()
        .with_stack("S", vec![StackOutput::new("K", "old")])
        .with_stack("S", vec![StackOutput::new("K", "new")]);
    assert_eq!(resolve(&stacks, "S", "K").await.unwrap(), "new");
}

#[test]
fn invalid_fixture_is_rejected() {
    let err = FixedStacks::from_json(r#"{"S": "not a list"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid stack fixture"));
}
