//! Integration tests for aiiac library functionality
//!
//! These tests drive the generators through the public API without invoking
//! the CLI binary. The backend is either an in-process stub or a mockito server.

use aiiac::core::{ContainerBuilder, ServiceContainer};
use aiiac::utils::save_artifacts;
use aiiac::{
    ArtifactDetails, Category, FailureKind, GenerationFailure, GenerationParameters, Generator,
    Settings, TextGenerator,
};
use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;

const STUB_OUTPUT: &str = "stages:\n  - stage: Build\n  - stage: Deploy\n";

/// Always answers with the same text
struct FixedGenerator(&'static str);

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn complete(
        &self,
        _prompt: &str,
        _model: &str,
        _temperature: f32,
    ) -> Result<String, GenerationFailure> {
        Ok(self.0.to_string())
    }
}

/// Always fails like an unreachable service
struct UnreachableGenerator;

#[async_trait]
impl TextGenerator for UnreachableGenerator {
    async fn complete(
        &self,
        _prompt: &str,
        _model: &str,
        _temperature: f32,
    ) -> Result<String, GenerationFailure> {
        Err(GenerationFailure::connection("connection refused"))
    }
}

fn stub() -> Arc<dyn TextGenerator> {
    Arc::new(FixedGenerator(STUB_OUTPUT))
}

#[tokio::test]
async fn test_every_supported_type_generates() {
    for category in Category::all() {
        let generator = Generator::new(category, stub());
        for key in category.type_keys() {
            let params = GenerationParameters::new().with_type(key);
            let response = generator.generate("a small service", &params).await.unwrap();

            assert!(response.success, "{category}/{key}: {}", response.message);
            assert_eq!(response.artifacts.len(), 1);
            let artifact = &response.artifacts[0];
            assert_eq!(artifact.code, STUB_OUTPUT);
            assert_eq!(artifact.language, category.language_for(key));
            assert_eq!(artifact.details.category(), category);
        }
    }
}

#[tokio::test]
async fn test_unsupported_type_names_the_key() {
    for category in Category::all() {
        let generator = Generator::new(category, stub());
        let params = GenerationParameters::new().with_type("cobol");
        let response = generator.generate("anything", &params).await.unwrap();

        assert!(!response.success);
        assert!(response.artifacts.is_empty());
        assert!(response.failure.is_none());
        assert!(
            response.message.contains("cobol"),
            "message should name the key: {}",
            response.message
        );
    }
}

#[tokio::test]
async fn test_backend_failure_is_reported_per_category() {
    for category in Category::all() {
        let generator = Generator::new(category, Arc::new(UnreachableGenerator));
        let response = generator
            .generate("anything", &GenerationParameters::new())
            .await
            .unwrap();

        assert!(!response.success);
        assert!(response.artifacts.is_empty());
        assert!(response.message.starts_with("Error generating"));
        assert_eq!(
            response.failure.as_ref().map(|f| f.kind),
            Some(FailureKind::Connection)
        );
    }
}

#[tokio::test]
async fn test_pipeline_stages_are_extracted() {
    let generator = Generator::pipeline(stub());
    let params = GenerationParameters::new().with_type("gitlab");
    let response = generator.generate("build and deploy", &params).await.unwrap();

    assert!(response.success, "{}", response.message);
    match &response.artifact().unwrap().details {
        ArtifactDetails::Pipeline { platform, stages } => {
            assert_eq!(platform, "gitlab");
            assert_eq!(stages, &vec!["Build".to_string(), "Deploy".to_string()]);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[tokio::test]
async fn test_generation_is_deterministic_for_a_fixed_backend() {
    let generator = Generator::configuration(stub());
    let params = GenerationParameters::new()
        .with_type("docker")
        .with_environment("staging");

    let first = generator.generate("redis cache", &params).await.unwrap();
    let second = generator.generate("redis cache", &params).await.unwrap();
    assert!(first.success, "{}", first.message);
    assert_eq!(first.metadata.get("type").map(String::as_str), Some("docker"));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generators_share_one_backend_concurrently() {
    let client = stub();
    let infra = Generator::infrastructure(client.clone());
    let config = Generator::configuration(client.clone());
    let pipeline = Generator::pipeline(client.clone());
    let utility = Generator::utility(client);
    let params = GenerationParameters::new();

    let (a, b, c, d) = tokio::join!(
        infra.generate("vpc", &params),
        config.generate("ingress", &params),
        pipeline.generate("ci", &params),
        utility.generate("scan", &params),
    );

    for response in [a, b, c, d] {
        assert!(response.unwrap().success);
    }
}

fn container_for(server: &mockito::ServerGuard) -> ServiceContainer {
    let settings = Settings {
        base_url: server.url(),
        model: "llama3".to_string(),
        ..Settings::default()
    };
    ContainerBuilder::new().settings(settings).build().unwrap()
}

#[tokio::test]
async fn test_end_to_end_against_ollama_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "llama3",
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"provider \"aws\" {}\nresource \"aws_s3_bucket\" \"b\" {}","done":true}"#)
        .create_async()
        .await;

    let container = container_for(&server);
    let generator = container.generator(Category::Infrastructure).unwrap();
    let params = GenerationParameters::new()
        .with_type("terraform")
        .with_provider("aws");
    let response = generator.generate("an S3 bucket", &params).await.unwrap();

    mock.assert_async().await;
    assert!(response.success);
    assert_eq!(response.metadata.get("model").map(String::as_str), Some("llama3"));

    let artifact = response.artifact().unwrap();
    assert_eq!(artifact.language, "terraform");
    assert_eq!(artifact.description, "Generated terraform code for aws");
    let validator = container.get_output_validator().unwrap();
    assert!(validator.validate(&artifact.code, &artifact.language));
}

#[tokio::test]
async fn test_end_to_end_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body("model not loaded")
        .create_async()
        .await;

    let container = container_for(&server);
    let generator = container.generator(Category::Utility).unwrap();
    let response = generator
        .generate("list pods", &GenerationParameters::new().with_type("kubectl"))
        .await
        .unwrap();

    assert!(!response.success);
    assert!(response.message.starts_with("Error generating utility"));
    assert_eq!(
        response.failure.as_ref().map(|f| f.kind),
        Some(FailureKind::Status)
    );
}

#[tokio::test]
async fn test_saved_artifact_matches_generated_code() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::pipeline(stub());
    let response = generator
        .generate("ci", &GenerationParameters::new().with_type("gitlab"))
        .await
        .unwrap();

    let written = save_artifacts(&response, temp_dir.path()).unwrap();
    assert_eq!(written, vec![temp_dir.path().join("pipeline.yaml")]);
    assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), STUB_OUTPUT);
}
