//! Utility code generation command

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::run_generation;
use crate::core::{Command, CommandContext, CommandResult, ComponentType, GenerationParameters};
use crate::templates::Category;

#[derive(Args, Debug, Clone)]
#[command(about = "Generate utility code")]
pub struct UtilCommand {
    /// Utility type (network_scanner, kubectl, mongo_query)
    #[arg(value_name = "TYPE")]
    pub utility_type: String,

    /// What the utility should do
    pub description: String,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[async_trait]
impl Command for UtilCommand {
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult> {
        info!("🚀 Generating {} utility", self.utility_type);
        let params = GenerationParameters::new().with_type(&self.utility_type);
        run_generation(
            context,
            Category::Utility,
            &self.description,
            &params,
            self.output.as_deref(),
        )
        .await
    }

    fn required_components(&self) -> Vec<ComponentType> {
        vec![ComponentType::TextGenerator, ComponentType::OutputValidator]
    }

    fn name(&self) -> &str {
        "util"
    }

    fn description(&self) -> &str {
        "Generate utility code"
    }
}
