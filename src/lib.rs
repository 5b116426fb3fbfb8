//! AIIAC Library
//!
//! 提供 AI 驱动的基础设施代码生成核心功能模块

pub mod commands;
pub mod core;
pub mod error;
pub mod settings;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    Artifact, ArtifactDetails, FailureKind, GenerationFailure, GenerationParameters, Generator,
    GeneratorResponse, OllamaClient, TextGenerator,
};
pub use crate::error::{AiiacError, Result};
pub use crate::settings::Settings;
pub use crate::templates::Category;
