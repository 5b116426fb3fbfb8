//! Stage-name scan over generated pipeline text
//!
//! A best-effort heuristic, not a parser. Per line (case-insensitive):
//! `stage:` takes the rest of the line; otherwise `stage(` takes the text up to
//! the next `)`. Results keep line order and are not deduplicated.

const STAGE_KEY: &str = "stage:";
const STAGE_CALL: &str = "stage(";

pub fn extract_stages(text: &str) -> Vec<String> {
    let mut stages = Vec::new();

    for line in text.lines() {
        // ASCII lowering keeps byte offsets aligned with `line`
        let lowered = line.to_ascii_lowercase();

        if let Some(pos) = lowered.find(STAGE_KEY) {
            let rest = &line[pos + STAGE_KEY.len()..];
            stages.push(strip_quotes(rest.trim()).to_string());
        } else if let Some(pos) = lowered.find(STAGE_CALL) {
            let rest = &line[pos + STAGE_CALL.len()..];
            let inner = rest.find(')').map_or(rest, |end| &rest[..end]);
            stages.push(strip_quotes(inner).to_string());
        }
    }

    stages
}

/// Remove one layer of enclosing quote characters.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_patterns_in_line_order() {
        let text = "jobs:\n  stage: \"build\"\nstage(\"deploy\") {\n}";
        assert_eq!(extract_stages(text), vec!["build", "deploy"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(extract_stages("name: CI\non: [push]\njobs: {}").is_empty());
        assert!(extract_stages("").is_empty());
    }

    #[test]
    fn test_gitlab_job_stages() {
        let text = r#"stages:
  - build
  - test

build-job:
  stage: build
  script: make

test-job:
  stage: test
  script: make test

lint-job:
  stage: test
"#;
        // `stages:` is not a match; duplicates are kept
        assert_eq!(extract_stages(text), vec!["build", "test", "test"]);
    }

    #[test]
    fn test_jenkinsfile_single_quotes() {
        let text = r#"pipeline {
    agent any
    stages {
        stage('Checkout') {
            steps { checkout scm }
        }
        Stage('Terraform Plan') {
            steps { sh 'terraform plan' }
        }
    }
}"#;
        assert_eq!(extract_stages(text), vec!["Checkout", "Terraform Plan"]);
    }

    #[test]
    fn test_case_insensitive_key() {
        assert_eq!(extract_stages("  STAGE: 'Release'"), vec!["Release"]);
    }

    #[test]
    fn test_colon_pattern_wins_on_shared_line() {
        assert_eq!(extract_stages("stage: a # stage(b)"), vec!["a # stage(b)"]);
    }

    #[test]
    fn test_first_closing_paren_and_unclosed_call() {
        assert_eq!(extract_stages("stage(\"x (y)\")"), vec!["x (y"]);
        assert_eq!(extract_stages("stage('open"), vec!["open"]);
    }

    #[test]
    fn test_empty_entries_are_kept() {
        assert_eq!(extract_stages("stage:\nstage()"), vec!["", ""]);
    }

    #[test]
    fn test_only_one_quote_layer_removed() {
        assert_eq!(extract_stages("stage: \"'nested'\""), vec!["'nested'"]);
    }
}
