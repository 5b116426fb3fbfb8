use super::CategoryProfile;

const TERRAFORM: &str = r#"Generate Terraform code for the following infrastructure:
Requirements:
{{requirements}}

Provider: {{provider}}
Resource Type: {{resource_type}}

Include:
- Resource configurations
- Variables
- Outputs
- Provider configuration
"#;

pub(super) static PROFILE: CategoryProfile = CategoryProfile {
    default_type: "terraform",
    templates: &[("terraform", TERRAFORM)],
    // the language tag is the IaC tool itself
    languages: &[("terraform", "terraform")],
    default_language: "hcl",
    formats: &[],
    default_format: None,
    extracts_stages: false,
};
