use super::CategoryProfile;

const GITHUB: &str = r#"Generate GitHub Actions workflow for:
Requirements: {{requirements}}
Infrastructure: {{iac_description}}
Configuration: {{config_description}}

Include:
- CI/CD stages
- Testing
- Security scanning
- Infrastructure deployment
- Application deployment
"#;

const GITLAB: &str = r#"Generate GitLab CI pipeline for:
Requirements: {{requirements}}
Infrastructure: {{iac_description}}
Configuration: {{config_description}}

Include:
- CI/CD stages
- Testing
- Security scanning
- Infrastructure deployment
- Application deployment
"#;

const JENKINS: &str = r#"Generate Jenkinsfile for:
Requirements: {{requirements}}
Infrastructure: {{iac_description}}
Configuration: {{config_description}}

Include:
- Pipeline stages
- Testing
- Security scanning
- Infrastructure deployment
- Application deployment
"#;

pub(super) static PROFILE: CategoryProfile = CategoryProfile {
    default_type: "github",
    templates: &[("github", GITHUB), ("gitlab", GITLAB), ("jenkins", JENKINS)],
    languages: &[("github", "yaml"), ("gitlab", "yaml"), ("jenkins", "groovy")],
    default_language: "yaml",
    formats: &[],
    default_format: None,
    extracts_stages: true,
};
