use super::CategoryProfile;

const KUBERNETES: &str = r#"Generate Kubernetes configuration for:
Requirements: {{requirements}}
Infrastructure: {{iac_description}}
Environment: {{environment}}

Include:
- ConfigMaps
- Secrets (templates)
- Resource limits
- Environment variables
"#;

const DOCKER: &str = r#"Generate Docker configuration for:
Requirements: {{requirements}}
Environment: {{environment}}

Include:
- Dockerfile
- Docker Compose
- Environment settings
- Volume mappings
"#;

const TERRAFORM_VARS: &str = r#"Generate Terraform variables for:
Requirements: {{requirements}}
Environment: {{environment}}

Include:
- Variable definitions
- Default values
- Environment-specific values
"#;

pub(super) static PROFILE: CategoryProfile = CategoryProfile {
    default_type: "kubernetes",
    templates: &[
        ("kubernetes", KUBERNETES),
        ("docker", DOCKER),
        ("terraform_vars", TERRAFORM_VARS),
    ],
    languages: &[
        ("kubernetes", "yaml"),
        ("docker", "dockerfile"),
        ("terraform_vars", "hcl"),
    ],
    default_language: "yaml",
    formats: &[
        ("kubernetes", "yaml"),
        ("docker", "compose"),
        ("terraform_vars", "tfvars"),
    ],
    default_format: Some("yaml"),
    extracts_stages: false,
};
