//! Infrastructure generation command

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::run_generation;
use crate::core::{Command, CommandContext, CommandResult, ComponentType, GenerationParameters};
use crate::templates::Category;

#[derive(Args, Debug, Clone)]
#[command(about = "Create infrastructure code from description")]
pub struct CreateCommand {
    /// What the infrastructure should contain
    pub description: String,

    /// Cloud provider
    #[arg(short, long, default_value = "aws")]
    pub cloud: String,

    /// IaC type
    #[arg(short = 't', long = "type", default_value = "terraform")]
    pub template_type: String,

    /// Resource category passed to the prompt (e.g. storage, compute)
    #[arg(long)]
    pub resource_type: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CreateCommand {
    pub fn parameters(&self) -> GenerationParameters {
        let mut params = GenerationParameters::new()
            .with_type(&self.template_type)
            .with_provider(&self.cloud);
        if let Some(resource_type) = &self.resource_type {
            params = params.with_resource_type(resource_type);
        }
        params
    }
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult> {
        info!(
            "🚀 Generating {} infrastructure for {}",
            self.template_type, self.cloud
        );
        run_generation(
            context,
            Category::Infrastructure,
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
        "create"
    }

    fn description(&self) -> &str {
        "Create infrastructure code from description"
    }
}
