use super::CategoryProfile;

const NETWORK_SCANNER: &str = r#"Generate a Python network scanner that:
Requirements: {{requirements}}

Include:
- Port scanning
- Error handling
- Security best practices
- Documentation
"#;

const KUBECTL: &str = r#"Generate kubectl commands for:
Requirements: {{requirements}}

Include:
- Command explanation
- Required permissions
- Example usage
"#;

const MONGO_QUERY: &str = r#"Generate MongoDB query for:
Requirements: {{requirements}}

Include:
- Query explanation
- Index recommendations
- Performance considerations
"#;

pub(super) static PROFILE: CategoryProfile = CategoryProfile {
    default_type: "network_scanner",
    templates: &[
        ("network_scanner", NETWORK_SCANNER),
        ("kubectl", KUBECTL),
        ("mongo_query", MONGO_QUERY),
    ],
    languages: &[
        ("network_scanner", "python"),
        ("kubectl", "bash"),
        ("mongo_query", "mongodb"),
    ],
    default_language: "text",
    formats: &[],
    default_format: None,
    extracts_stages: false,
};
