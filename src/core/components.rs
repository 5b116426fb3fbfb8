//! 核心复用组件定义
//!
//! Trait seams for the pieces a generator talks to, plus their default
//! implementations.

pub mod ollama_client;
pub mod output_validator;

pub use ollama_client::OllamaClient;
pub use output_validator::{DefaultOutputValidator, validate_output};

use async_trait::async_trait;

use super::error::GenerationFailure;

// ============================================================================
// 1. 文本生成组件 (TextGenerator)
// ============================================================================

/// Request/response text generation.
///
/// One request per call, no retries, no streaming. Every failure mode is
/// reported as a `GenerationFailure`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
    ) -> Result<String, GenerationFailure>;
}

// ============================================================================
// 2. 输出校验组件 (OutputValidator)
// ============================================================================

/// Cheap syntactic check of generated code
pub trait OutputValidator: Send + Sync {
    /// `true` when `code` looks well-formed for `language`
    fn validate(&self, code: &str, language: &str) -> bool;
}
