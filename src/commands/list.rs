//! List available generators and their types

use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::core::{Command, CommandContext, CommandResult, ComponentType};
use crate::templates::Category;
use crate::utils::to_title_case;

#[derive(Args, Debug, Clone, Default)]
#[command(about = "List available generators and templates")]
pub struct ListCommand {}

impl ListCommand {
    /// One block per category; `*` marks the default type
    pub fn render_table() -> String {
        let mut output = vec![
            format!("{:<16} {:<18} {:<12} {}", "Category", "Type", "Language", "Format"),
            "=".repeat(56),
        ];

        for category in Category::all() {
            let mut name = to_title_case(category.as_str());
            for key in category.type_keys() {
                let marker = if key == category.default_type() { "*" } else { "" };
                output.push(format!(
                    "{:<16} {:<18} {:<12} {}",
                    name,
                    format!("{key}{marker}"),
                    category.language_for(key),
                    category.format_for(key).unwrap_or("-")
                ));
                name.clear();
            }
        }

        output.push(String::new());
        output.push("* default type for the category".to_string());
        output.join("\n")
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<CommandResult> {
        if context.json_output {
            let listing: serde_json::Map<String, serde_json::Value> = Category::all()
                .into_iter()
                .map(|category| {
                    let types: Vec<_> = category.type_keys().collect();
                    (
                        category.as_str().to_string(),
                        serde_json::json!({
                            "default": category.default_type(),
                            "types": types,
                        }),
                    )
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        } else {
            println!("{}", Self::render_table());
        }

        Ok(CommandResult::Success("Help displayed".to_string()))
    }

    fn required_components(&self) -> Vec<ComponentType> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "List available generators and templates"
    }
}
