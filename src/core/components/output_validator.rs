//! Default OutputValidator implementation

use serde::Deserialize;

use super::OutputValidator;

/// Syntactic checks for the languages that can be verified in-process
pub struct DefaultOutputValidator;

impl DefaultOutputValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultOutputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputValidator for DefaultOutputValidator {
    fn validate(&self, code: &str, language: &str) -> bool {
        validate_output(code, language)
    }
}

/// Check generated code for the given language tag.
///
/// Languages without a checker always pass.
pub fn validate_output(code: &str, language: &str) -> bool {
    match language {
        "yaml" => validate_yaml(code),
        "json" => validate_json(code),
        "terraform" => validate_terraform(code),
        _ => true,
    }
}

fn validate_yaml(code: &str) -> bool {
    // multi-document streams are common in Kubernetes manifests
    serde_yaml::Deserializer::from_str(code)
        .all(|document| serde_yaml::Value::deserialize(document).is_ok())
}

fn validate_json(code: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(code).is_ok()
}

fn validate_terraform(code: &str) -> bool {
    let lowered = code.to_lowercase();
    ["resource", "provider"]
        .iter()
        .all(|block| lowered.contains(block))
}
