//! AIIAC - AI 驱动的基础设施代码生成工具
//!
//! Describe infrastructure, configuration, pipelines or small utilities in
//! natural language and let a local language model write them.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use aiiac::commands::{ConfigCommand, CreateCommand, ListCommand, PipelineCommand, UtilCommand};
use aiiac::core::{Command, CommandContext, CommandResult, ContainerBuilder, ErrorReporter};
use aiiac::error::AiiacError;
use aiiac::settings::Settings;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AIIAC_GIT_HASH"),
    " ",
    env!("AIIAC_GIT_DATE"),
    ")"
);

/// AIIAC - AI Infrastructure as Code
#[derive(Parser, Debug)]
#[command(name = "aiiac")]
#[command(about = "AI-powered Infrastructure as Code generator", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
struct Cli {
    /// Settings file (defaults to ./aiiac.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the Ollama service
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Model used for generation
    #[arg(long, global = true)]
    model: Option<String>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create infrastructure code from description
    Create(CreateCommand),

    /// Generate configuration files
    Config(ConfigCommand),

    /// Generate CI/CD pipeline
    Pipeline(PipelineCommand),

    /// Generate utility code
    Util(UtilCommand),

    /// List available generators and templates
    List(ListCommand),
}

impl Commands {
    fn as_command(&self) -> &dyn Command {
        match self {
            Commands::Create(cmd) => cmd,
            Commands::Config(cmd) => cmd,
            Commands::Pipeline(cmd) => cmd,
            Commands::Util(cmd) => cmd,
            Commands::List(cmd) => cmd,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志: RUST_LOG wins, otherwise warn (debug with --verbose)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    let json_output = cli.json;
    match run(cli).await {
        Ok(CommandResult::Success(msg)) => {
            if msg != "Help displayed" {
                println!("{msg}");
            }
        }
        Ok(CommandResult::Generation(response)) => {
            if !response.success {
                if !json_output {
                    eprintln!(
                        "{}",
                        ErrorReporter::format_failed_generation(
                            &response.message,
                            response.failure.as_ref()
                        )
                    );
                }
                std::process::exit(1);
            }
        }
        Err(e) => {
            // 统一的错误处理
            if let Some(cli_error) = e.downcast_ref::<AiiacError>() {
                eprintln!("{}", ErrorReporter::format_error(cli_error));
            } else {
                eprintln!("❌ Error: {e:#}");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<CommandResult> {
    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, "Effective settings");

    let container = ContainerBuilder::new().settings(settings).build()?;
    let context = CommandContext {
        container: Arc::new(container),
        working_dir: std::env::current_dir()?,
        json_output: cli.json,
    };

    let command = cli.command.as_command();
    context.container.validate(&command.required_components())?;
    tracing::debug!("Executing command: {}", command.name());
    command.execute(&context).await
}

/// Settings from files and environment, with CLI flags applied last
fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(apply_overrides(settings, cli)?)
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> aiiac::Result<Settings> {
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(model) = &cli.model {
        settings.model = model.clone();
    }
    settings.validate()?;
    Ok(settings)
}
