//! Prompt template registry
//!
//! Each category owns a closed table of `type key -> template`, plus the tables
//! that derive an artifact's language and format tags from the same key. Templates
//! use handlebars placeholders and are rendered in strict mode, so a placeholder
//! the generator does not supply is a render error rather than an empty string.

mod configuration;
mod infrastructure;
mod pipeline;
mod utility;

use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;
use std::fmt;

/// Top-level generation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Infrastructure,
    Configuration,
    Pipeline,
    Utility,
}

/// Static per-category tables.
#[derive(Debug)]
pub struct CategoryProfile {
    pub default_type: &'static str,
    pub templates: &'static [(&'static str, &'static str)],
    pub languages: &'static [(&'static str, &'static str)],
    pub default_language: &'static str,
    /// Empty for categories without a format tag.
    pub formats: &'static [(&'static str, &'static str)],
    pub default_format: Option<&'static str>,
    /// Scan generated text for stage names
    pub extracts_stages: bool,
}

impl Category {
    pub fn all() -> [Category; 4] {
        [
            Category::Infrastructure,
            Category::Configuration,
            Category::Pipeline,
            Category::Utility,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Infrastructure => "infrastructure",
            Category::Configuration => "configuration",
            Category::Pipeline => "pipeline",
            Category::Utility => "utility",
        }
    }

    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::Infrastructure => &infrastructure::PROFILE,
            Category::Configuration => &configuration::PROFILE,
            Category::Pipeline => &pipeline::PROFILE,
            Category::Utility => &utility::PROFILE,
        }
    }

    /// Tag stored on artifacts, also used as the file stem when saving
    pub fn artifact_tag(&self) -> &'static str {
        match self {
            Category::Infrastructure => "iac",
            Category::Configuration => "config",
            Category::Pipeline => "pipeline",
            Category::Utility => "utility",
        }
    }

    /// Noun used in result messages ("Successfully generated IaC")
    pub fn noun(&self) -> &'static str {
        match self {
            Category::Infrastructure => "IaC",
            Category::Configuration => "configuration",
            Category::Pipeline => "pipeline",
            Category::Utility => "utility",
        }
    }

    pub fn unsupported_message(&self, type_key: &str) -> String {
        match self {
            Category::Infrastructure => format!("Template type {type_key} not supported"),
            Category::Configuration => format!("Configuration type {type_key} not supported"),
            Category::Pipeline => format!("Pipeline platform {type_key} not supported"),
            Category::Utility => format!("Utility type {type_key} not supported"),
        }
    }

    pub fn default_type(&self) -> &'static str {
        self.profile().default_type
    }

    pub fn type_keys(&self) -> impl Iterator<Item = &'static str> {
        self.profile().templates.iter().map(|(key, _)| *key)
    }

    /// Template for `type_key`, or `None` when the category does not support it.
    pub fn lookup(&self, type_key: &str) -> Option<&'static str> {
        find(self.profile().templates, type_key)
    }

    /// Language tag for `type_key`; unlisted keys get the category fallback.
    pub fn language_for(&self, type_key: &str) -> &'static str {
        let profile = self.profile();
        find(profile.languages, type_key).unwrap_or(profile.default_language)
    }

    /// Format tag for `type_key`; `None` for categories that carry no format.
    pub fn format_for(&self, type_key: &str) -> Option<&'static str> {
        let profile = self.profile();
        find(profile.formats, type_key).or(profile.default_format)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// Fill a template's placeholders from `context`.
///
/// Values are inserted verbatim (no HTML escaping). Any placeholder missing
/// from `context` fails the render.
pub fn render<T: Serialize>(template: &str, context: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);

    Ok(handlebars.render_template(template, context)?)
}
