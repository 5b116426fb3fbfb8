//! 依赖注入容器
//!
//! Holds the shared components and hands out generators configured from the
//! loaded settings.

use anyhow::Result;
use std::sync::Arc;

use super::components::*;
use super::generator::Generator;
use super::models::GeneratorResponse;
use crate::settings::Settings;
use crate::templates::Category;

/// 组件类型枚举
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum ComponentType {
    TextGenerator,
    OutputValidator,
}

/// 服务容器
pub struct ServiceContainer {
    settings: Settings,
    text_generator: Option<Arc<dyn TextGenerator>>,
    output_validator: Option<Arc<dyn OutputValidator>>,
}

impl ServiceContainer {
    /// 创建新的服务容器
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            text_generator: None,
            output_validator: None,
        }
    }

    /// 注册组件
    pub fn register_text_generator(mut self, component: Arc<dyn TextGenerator>) -> Self {
        self.text_generator = Some(component);
        self
    }

    pub fn register_output_validator(mut self, component: Arc<dyn OutputValidator>) -> Self {
        self.output_validator = Some(component);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 获取组件
    pub fn get_text_generator(&self) -> Result<Arc<dyn TextGenerator>> {
        self.text_generator
            .clone()
            .ok_or_else(|| anyhow::anyhow!("TextGenerator not registered"))
    }

    pub fn get_output_validator(&self) -> Result<Arc<dyn OutputValidator>> {
        self.output_validator
            .clone()
            .ok_or_else(|| anyhow::anyhow!("OutputValidator not registered"))
    }

    /// Generator for `category` using the registered text generator and the
    /// configured model and temperature
    pub fn generator(&self, category: Category) -> Result<Generator> {
        Ok(Generator::new(category, self.get_text_generator()?).with_settings(&self.settings))
    }

    /// 验证所有必需的组件是否已注册
    pub fn validate(&self, required_components: &[ComponentType]) -> Result<()> {
        for component_type in required_components {
            match component_type {
                ComponentType::TextGenerator => {
                    if self.text_generator.is_none() {
                        return Err(anyhow::anyhow!(
                            "TextGenerator is required but not registered"
                        ));
                    }
                }
                ComponentType::OutputValidator => {
                    if self.output_validator.is_none() {
                        return Err(anyhow::anyhow!(
                            "OutputValidator is required but not registered"
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// 容器构建器
pub struct ContainerBuilder {
    settings: Settings,
}

impl ContainerBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// 构建容器: Ollama client + default validator
    pub fn build(self) -> Result<ServiceContainer> {
        let client = OllamaClient::from_settings(&self.settings)?;
        tracing::debug!("Using generation backend at {}", client.base_url());

        Ok(ServiceContainer::new(self.settings)
            .register_text_generator(Arc::new(client))
            .register_output_validator(Arc::new(DefaultOutputValidator::new())))
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 命令执行上下文
pub struct CommandContext {
    pub container: Arc<ServiceContainer>,
    pub working_dir: std::path::PathBuf,
    /// Print responses as JSON instead of formatted text
    pub json_output: bool,
}

/// 命令结果
#[derive(Debug, Clone)]
pub enum CommandResult {
    Success(String),
    Generation(GeneratorResponse),
}

/// 命令接口
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// 执行命令
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult>;

    /// 获取所需的组件类型
    fn required_components(&self) -> Vec<ComponentType>;

    /// 命令名称
    fn name(&self) -> &str;

    /// 命令描述
    fn description(&self) -> &str;
}
