//! CI/CD pipeline generation command

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::run_generation;
use crate::core::{Command, CommandContext, CommandResult, ComponentType, GenerationParameters};
use crate::templates::Category;

#[derive(Args, Debug, Clone)]
#[command(about = "Generate CI/CD pipeline")]
pub struct PipelineCommand {
    /// What the pipeline should do
    pub description: String,

    /// CI/CD platform
    #[arg(short, long, default_value = "github")]
    pub platform: String,

    /// Description of the infrastructure the pipeline deploys
    #[arg(long)]
    pub infrastructure: Option<String>,

    /// Description of the configuration the pipeline ships
    #[arg(long)]
    pub configuration: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PipelineCommand {
    pub fn parameters(&self) -> GenerationParameters {
        let mut params = GenerationParameters::new().with_type(&self.platform);
        if let Some(infrastructure) = &self.infrastructure {
            params = params.with_iac_description(infrastructure);
        }
        if let Some(configuration) = &self.configuration {
            params = params.with_config_description(configuration);
        }
        params
    }
}

#[async_trait]
impl Command for PipelineCommand {
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult> {
        info!("🚀 Generating {} pipeline", self.platform);
        run_generation(
            context,
            Category::Pipeline,
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
        "pipeline"
    }

    fn description(&self) -> &str {
        "Generate CI/CD pipeline"
    }
}
