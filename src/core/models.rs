//! Generation inputs and the result record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::GenerationFailure;
use crate::templates::Category;

pub const DEFAULT_PROVIDER: &str = "aws";
pub const DEFAULT_RESOURCE_TYPE: &str = "general";
pub const DEFAULT_ENVIRONMENT: &str = "development";
/// Placeholder for cross-category context the caller did not pass
pub const NOT_PROVIDED: &str = "Not provided";

/// Named parameters for one generate call.
///
/// `type_key` is the category's sub-selector (template_type, config_type,
/// platform or utility_type). Fields a category does not read are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub type_key: Option<String>,
    pub provider: Option<String>,
    pub resource_type: Option<String>,
    pub environment: Option<String>,
    /// Description of a previously generated infrastructure artifact
    pub iac_description: Option<String>,
    /// Description of a previously generated configuration artifact
    pub config_description: Option<String>,
}

impl GenerationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_key: impl Into<String>) -> Self {
        self.type_key = Some(type_key.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_iac_description(mut self, description: impl Into<String>) -> Self {
        self.iac_description = Some(description.into());
        self
    }

    pub fn with_config_description(mut self, description: impl Into<String>) -> Self {
        self.config_description = Some(description.into());
        self
    }

    pub fn provider_or_default(&self) -> &str {
        self.provider.as_deref().unwrap_or(DEFAULT_PROVIDER)
    }

    pub fn resource_type_or_default(&self) -> &str {
        self.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE)
    }

    pub fn environment_or_default(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    pub fn iac_description_or_default(&self) -> &str {
        self.iac_description.as_deref().unwrap_or(NOT_PROVIDED)
    }

    pub fn config_description_or_default(&self) -> &str {
        self.config_description.as_deref().unwrap_or(NOT_PROVIDED)
    }
}

/// Category-specific attributes of an artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ArtifactDetails {
    #[serde(rename = "iac")]
    Infrastructure {
        provider: String,
        resource_type: String,
    },
    #[serde(rename = "config")]
    Configuration { format: String, environment: String },
    #[serde(rename = "pipeline")]
    Pipeline {
        platform: String,
        stages: Vec<String>,
    },
    #[serde(rename = "utility")]
    Utility,
}

impl ArtifactDetails {
    pub fn category(&self) -> Category {
        match self {
            ArtifactDetails::Infrastructure { .. } => Category::Infrastructure,
            ArtifactDetails::Configuration { .. } => Category::Configuration,
            ArtifactDetails::Pipeline { .. } => Category::Pipeline,
            ArtifactDetails::Utility => Category::Utility,
        }
    }
}

/// One generated output unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub code: String,
    pub language: String,
    pub description: String,
    #[serde(flatten)]
    pub details: ArtifactDetails,
}

impl Artifact {
    /// `iac`, `config`, `pipeline` or `utility`
    pub fn tag(&self) -> &'static str {
        self.details.category().artifact_tag()
    }

    /// File name used when the artifact is saved: `{tag}.{language}`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.tag(), self.language)
    }
}

/// Envelope returned by every generate call.
///
/// Either `success` with exactly one artifact, or a failure with none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorResponse {
    pub success: bool,
    pub message: String,
    pub artifacts: Vec<Artifact>,
    /// Set when the backend call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<GenerationFailure>,
    pub metadata: BTreeMap<String, String>,
}

impl GeneratorResponse {
    pub fn succeeded(message: impl Into<String>, artifact: Artifact) -> Self {
        Self {
            success: true,
            message: message.into(),
            artifacts: vec![artifact],
            failure: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            artifacts: Vec::new(),
            failure: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_failure(mut self, failure: GenerationFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The single artifact of a successful response
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifacts.first()
    }
}
