//! Configuration generation command

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::run_generation;
use crate::core::{Command, CommandContext, CommandResult, ComponentType, GenerationParameters};
use crate::templates::Category;

#[derive(Args, Debug, Clone)]
#[command(about = "Generate configuration files")]
pub struct ConfigCommand {
    /// What the configuration should cover
    pub description: String,

    /// Configuration type
    #[arg(short = 't', long = "type", default_value = "kubernetes")]
    pub config_type: String,

    /// Target environment; prompts say "development" when omitted (pass `-e dev` for the short name)
    #[arg(short, long)]
    pub env: Option<String>,

    /// Description of the infrastructure this configuration targets
    #[arg(long)]
    pub infrastructure: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn parameters(&self) -> GenerationParameters {
        let mut params = GenerationParameters::new().with_type(&self.config_type);
        if let Some(env) = &self.env {
            params = params.with_environment(env);
        }
        if let Some(infrastructure) = &self.infrastructure {
            params = params.with_iac_description(infrastructure);
        }
        params
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult> {
        info!("🚀 Generating {} configuration", self.config_type);
        run_generation(
            context,
            Category::Configuration,
            &self.description,
            &self.parameters(),
            self.output.as_deref(),
        )
        .await
    }

    fn required_components(&self) -> Vec<ComponentType> {
        vec![ComponentType::TextGenerator, ComponentType::OutputValidator]
    }

    fn name(&self) -> &str {
        "config"
    }

    fn description(&self) -> &str {
        "Generate configuration files"
    }
}
