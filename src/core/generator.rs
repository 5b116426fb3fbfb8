//! Category-parameterized generator
//!
//! One `Generator` per category: look up the template for the resolved type key,
//! fill it, call the text generator once, and shape the text into a response.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::components::TextGenerator;
use super::models::{Artifact, ArtifactDetails, GenerationParameters, GeneratorResponse};
use super::stages::extract_stages;
use crate::error::Result;
use crate::settings::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, Settings};
use crate::templates::{self, Category};

/// Placeholder values handed to the template renderer
#[derive(Debug, Serialize)]
struct PromptContext<'a> {
    requirements: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iac_description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_description: Option<&'a str>,
}

#[derive(Clone)]
pub struct Generator {
    category: Category,
    client: Arc<dyn TextGenerator>,
    model: String,
    temperature: f32,
}

impl Generator {
    pub fn new(category: Category, client: Arc<dyn TextGenerator>) -> Self {
        Self {
            category,
            client,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn infrastructure(client: Arc<dyn TextGenerator>) -> Self {
        Self::new(Category::Infrastructure, client)
    }

    pub fn configuration(client: Arc<dyn TextGenerator>) -> Self {
        Self::new(Category::Configuration, client)
    }

    pub fn pipeline(client: Arc<dyn TextGenerator>) -> Self {
        Self::new(Category::Pipeline, client)
    }

    pub fn utility(client: Arc<dyn TextGenerator>) -> Self {
        Self::new(Category::Utility, client)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_model(settings.model.clone())
            .with_temperature(settings.temperature)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate one artifact from `description`.
    ///
    /// Unsupported type keys and backend failures come back as an unsuccessful
    /// response. `Err` is reserved for a template that references a placeholder
    /// this generator does not supply.
    pub async fn generate(
        &self,
        description: &str,
        params: &GenerationParameters,
    ) -> Result<GeneratorResponse> {
        let category = self.category;
        let type_key = params
            .type_key
            .as_deref()
            .unwrap_or_else(|| category.default_type());

        let Some(template) = category.lookup(type_key) else {
            warn!("Unsupported {category} type: {type_key}");
            return Ok(self.tagged(
                GeneratorResponse::failed(category.unsupported_message(type_key)),
                type_key,
            ));
        };

        let prompt = templates::render(template, &self.prompt_context(description, params))?;
        debug!(
            "Rendered {category}/{type_key} prompt ({} bytes)",
            prompt.len()
        );

        let code = match self
            .client
            .complete(&prompt, &self.model, self.temperature)
            .await
        {
            Ok(code) => code,
            Err(failure) => {
                warn!("Generation of {category}/{type_key} failed: {failure}");
                let message = format!("Error generating {}: {failure}", category.noun());
                return Ok(self.tagged(
                    GeneratorResponse::failed(message).with_failure(failure),
                    type_key,
                ));
            }
        };

        let artifact = self.shape_artifact(code, type_key, params);
        info!("Generated {category}/{type_key} ({})", artifact.language);

        Ok(self.tagged(
            GeneratorResponse::succeeded(
                format!("Successfully generated {}", category.noun()),
                artifact,
            ),
            type_key,
        ))
    }

    /// Only the fields the category's templates reference are supplied.
    fn prompt_context<'a>(
        &self,
        description: &'a str,
        params: &'a GenerationParameters,
    ) -> PromptContext<'a> {
        let mut context = PromptContext {
            requirements: description,
            provider: None,
            resource_type: None,
            environment: None,
            iac_description: None,
            config_description: None,
        };

        match self.category {
            Category::Infrastructure => {
                context.provider = Some(params.provider_or_default());
                context.resource_type = Some(params.resource_type_or_default());
            }
            Category::Configuration => {
                context.iac_description = Some(params.iac_description_or_default());
                context.environment = Some(params.environment_or_default());
            }
            Category::Pipeline => {
                context.iac_description = Some(params.iac_description_or_default());
                context.config_description = Some(params.config_description_or_default());
            }
            Category::Utility => {}
        }

        context
    }

    fn shape_artifact(&self, code: String, type_key: &str, params: &GenerationParameters) -> Artifact {
        let category = self.category;
        let language = category.language_for(type_key).to_string();

        let (description, details) = match category {
            Category::Infrastructure => {
                let provider = params.provider_or_default();
                (
                    format!("Generated {type_key} code for {provider}"),
                    ArtifactDetails::Infrastructure {
                        provider: provider.to_string(),
                        resource_type: params.resource_type_or_default().to_string(),
                    },
                )
            }
            Category::Configuration => {
                let environment = params.environment_or_default();
                let format = category.format_for(type_key).unwrap_or(language.as_str());
                (
                    format!("Generated {type_key} configuration for {environment}"),
                    ArtifactDetails::Configuration {
                        format: format.to_string(),
                        environment: environment.to_string(),
                    },
                )
            }
            Category::Pipeline => {
                let stages = if category.profile().extracts_stages {
                    extract_stages(&code)
                } else {
                    Vec::new()
                };
                (
                    format!("Generated {type_key} pipeline"),
                    ArtifactDetails::Pipeline {
                        platform: type_key.to_string(),
                        stages,
                    },
                )
            }
            Category::Utility => (
                format!("Generated {type_key} utility"),
                ArtifactDetails::Utility,
            ),
        };

        Artifact {
            code,
            language,
            description,
            details,
        }
    }

    fn tagged(&self, response: GeneratorResponse, type_key: &str) -> GeneratorResponse {
        response
            .with_metadata("category", self.category.as_str())
            .with_metadata("type", type_key)
            .with_metadata("model", self.model.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GenerationFailure;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every prompt and answers with a fixed reply
    struct RecordingGenerator {
        reply: std::result::Result<String, GenerationFailure>,
        prompts: Mutex<Vec<(String, String, f32)>>,
    }

    impl RecordingGenerator {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(failure: GenerationFailure) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(failure),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().unwrap().0.clone()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn complete(
            &self,
            prompt: &str,
            model: &str,
            temperature: f32,
        ) -> std::result::Result<String, GenerationFailure> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), model.to_string(), temperature));
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_infrastructure_defaults() {
        let stub = RecordingGenerator::replying("resource \"aws_s3_bucket\" \"b\" {}");
        let generator = Generator::infrastructure(stub.clone());

        let response = generator
            .generate("Create an S3 bucket", &GenerationParameters::new())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Successfully generated IaC");
        let artifact = response.artifact().unwrap();
        assert_eq!(artifact.language, "terraform");
        assert_eq!(artifact.description, "Generated terraform code for aws");
        assert_eq!(
            artifact.details,
            ArtifactDetails::Infrastructure {
                provider: "aws".to_string(),
                resource_type: "general".to_string(),
            }
        );

        let prompt = stub.last_prompt();
        assert!(prompt.contains("Create an S3 bucket"));
        assert!(prompt.contains("Provider: aws"));
        assert!(prompt.contains("Resource Type: general"));
    }

    #[tokio::test]
    async fn test_model_and_temperature_are_forwarded() {
        let stub = RecordingGenerator::replying("kubectl get pods");
        let generator = Generator::utility(stub.clone())
            .with_model("deepseek-coder")
            .with_temperature(0.3);

        generator
            .generate("list pods", &GenerationParameters::new().with_type("kubectl"))
            .await
            .unwrap();

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts[0].1, "deepseek-coder");
        assert_eq!(prompts[0].2, 0.3);
    }

    #[tokio::test]
    async fn test_configuration_context_defaults() {
        let stub = RecordingGenerator::replying("apiVersion: v1");
        let generator = Generator::configuration(stub.clone());

        let response = generator
            .generate("redis cache", &GenerationParameters::new())
            .await
            .unwrap();

        let artifact = response.artifact().unwrap();
        assert_eq!(artifact.description, "Generated kubernetes configuration for development");
        assert_eq!(
            artifact.details,
            ArtifactDetails::Configuration {
                format: "yaml".to_string(),
                environment: "development".to_string(),
            }
        );
        assert!(stub.last_prompt().contains("Infrastructure: Not provided"));
    }

    #[tokio::test]
    async fn test_pipeline_uses_upstream_descriptions() {
        let stub = RecordingGenerator::replying("stage('Build') {}");
        let generator = Generator::pipeline(stub.clone());
        let params = GenerationParameters::new()
            .with_type("jenkins")
            .with_iac_description("Generated terraform code for aws")
            .with_config_description("Generated docker configuration for staging");

        let response = generator.generate("python app", &params).await.unwrap();

        let prompt = stub.last_prompt();
        assert!(prompt.contains("Infrastructure: Generated terraform code for aws"));
        assert!(prompt.contains("Configuration: Generated docker configuration for staging"));

        let artifact = response.artifact().unwrap();
        assert_eq!(artifact.language, "groovy");
        assert_eq!(
            artifact.details,
            ArtifactDetails::Pipeline {
                platform: "jenkins".to_string(),
                stages: vec!["Build".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_unsupported_type_skips_backend() {
        let stub = RecordingGenerator::replying("unused");
        let generator = Generator::pipeline(stub.clone());

        let response = generator
            .generate("anything", &GenerationParameters::new().with_type("circleci"))
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Pipeline platform circleci not supported");
        assert!(response.artifacts.is_empty());
        assert!(response.failure.is_none());
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_response() {
        let stub = RecordingGenerator::failing(GenerationFailure::connection("connection refused"));
        let generator = Generator::configuration(stub);

        let response = generator
            .generate("web app", &GenerationParameters::new().with_type("docker"))
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(
            response.message,
            "Error generating configuration: connection failure: connection refused"
        );
        assert!(response.artifacts.is_empty());
        assert_eq!(
            response.failure,
            Some(GenerationFailure::connection("connection refused"))
        );
    }

    #[tokio::test]
    async fn test_whitespace_description_passes_through() {
        let stub = RecordingGenerator::replying("#!/bin/bash");
        let generator = Generator::utility(stub.clone());

        let response = generator
            .generate("   ", &GenerationParameters::new())
            .await
            .unwrap();

        assert!(response.success);
        assert!(stub.last_prompt().contains("Requirements:    \n"));
    }

    #[tokio::test]
    async fn test_metadata() {
        let stub = RecordingGenerator::replying("db.users.find()");
        let generator = Generator::utility(stub).with_model("llama3");

        let response = generator
            .generate("find users", &GenerationParameters::new().with_type("mongo_query"))
            .await
            .unwrap();

        assert_eq!(response.metadata["category"], "utility");
        assert_eq!(response.metadata["type"], "mongo_query");
        assert_eq!(response.metadata["model"], "llama3");
    }
}
