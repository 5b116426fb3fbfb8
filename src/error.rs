//! 统一的CLI错误类型系统
//!
//! Business outcomes of a generation (unsupported type, backend failure) are not
//! errors; they travel inside `GeneratorResponse`. This type covers the rest:
//! caller contract violations, configuration problems and system failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiiacError {
    // === 系统级错误 ===
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // === 配置相关错误 ===
    #[error("Configuration error: {0}")]
    Configuration(String),

    // === 模板错误 ===
    /// A template referenced a placeholder the generator did not supply.
    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl AiiacError {
    /// 将字符串转换为配置错误
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// 检查是否为配置相关错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// 检查是否为网络相关错误
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// 获取用户友好的错误提示
    pub fn user_hint(&self) -> Option<&str> {
        match self {
            Self::Configuration(_) => {
                Some("💡 Check aiiac.toml and the AIIAC_* environment variables")
            }
            Self::Network(_) => Some("💡 Make sure the generation backend is running (ollama serve)"),
            Self::Template(_) => Some("💡 A prompt template is missing a parameter; this is a bug"),
            _ => None,
        }
    }
}

/// CLI特定的Result类型
pub type Result<T> = std::result::Result<T, AiiacError>;
