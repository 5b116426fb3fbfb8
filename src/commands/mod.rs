//! Command implementations for aiiac

pub mod config;
pub mod create;
pub mod list;
pub mod output;
pub mod pipeline;
pub mod util;

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use crate::core::{CommandContext, CommandResult, GenerationParameters};
use crate::templates::Category;
use crate::utils::save_artifacts;

pub use config::ConfigCommand;
pub use create::CreateCommand;
pub use list::ListCommand;
pub use pipeline::PipelineCommand;
pub use util::UtilCommand;

/// Shared body of the four generation commands: generate, check, print, save.
///
/// Unsuccessful responses are returned untouched; reporting them is the
/// caller's job.
pub(crate) async fn run_generation(
    context: &CommandContext,
    category: Category,
    description: &str,
    params: &GenerationParameters,
    output_dir: Option<&Path>,
) -> Result<CommandResult> {
    let generator = context.container.generator(category)?;
    let response = generator.generate(description, params).await?;

    if context.json_output {
        output::print_json(&response)?;
    }

    if !response.success {
        return Ok(CommandResult::Generation(response));
    }

    let validator = context.container.get_output_validator()?;
    for warning in output::validation_warnings(validator.as_ref(), &response) {
        warn!("{warning}");
        if !context.json_output {
            eprintln!("⚠️  {warning}");
        }
    }

    if !context.json_output {
        output::display_response(&response);
    }

    if let Some(dir) = output_dir {
        let dir = context.working_dir.join(dir);
        for path in save_artifacts(&response, &dir)? {
            if !context.json_output {
                println!("💾 Saved to: {}", path.display());
            }
        }
    }

    Ok(CommandResult::Generation(response))
}
