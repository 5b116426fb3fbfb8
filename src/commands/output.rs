//! Terminal rendering of generation responses

use crate::core::{Artifact, ArtifactDetails, GeneratorResponse, OutputValidator};
use crate::error::Result;

const RULE_WIDTH: usize = 60;

/// Header line, artifact attributes, then the code itself
pub fn render_artifact(artifact: &Artifact) -> String {
    let mut output = vec![
        "─".repeat(RULE_WIDTH),
        format!("📄 {} [{}]", artifact.description, artifact.language),
    ];

    match &artifact.details {
        ArtifactDetails::Infrastructure {
            provider,
            resource_type,
        } => output.push(format!("   provider: {provider}, resource type: {resource_type}")),
        ArtifactDetails::Configuration {
            format,
            environment,
        } => output.push(format!("   format: {format}, environment: {environment}")),
        ArtifactDetails::Pipeline { platform, stages } => {
            if stages.is_empty() {
                output.push(format!("   platform: {platform}"));
            } else {
                output.push(format!(
                    "   platform: {platform}, stages: {}",
                    stages.join(" → ")
                ));
            }
        }
        ArtifactDetails::Utility => {}
    }

    output.push("─".repeat(RULE_WIDTH));
    output.push(artifact.code.trim_end().to_string());
    output.push("─".repeat(RULE_WIDTH));
    output.join("\n")
}

pub fn display_response(response: &GeneratorResponse) {
    for artifact in &response.artifacts {
        println!("{}", render_artifact(artifact));
    }
    println!("✅ {}", response.message);
}

pub fn print_json(response: &GeneratorResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

/// Warnings for artifacts that fail the validator's syntactic check
pub fn validation_warnings(
    validator: &dyn OutputValidator,
    response: &GeneratorResponse,
) -> Vec<String> {
    response
        .artifacts
        .iter()
        .filter(|artifact| !validator.validate(&artifact.code, &artifact.language))
        .map(|artifact| {
            format!(
                "Generated {} output does not look like valid {}; review it before use",
                artifact.tag(),
                artifact.language
            )
        })
        .collect()
}
