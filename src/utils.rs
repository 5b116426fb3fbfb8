//! Utility functions for aiiac

use crate::core::GeneratorResponse;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert a type key or category name to Title Case using heck crate
pub fn to_title_case(input: &str) -> String {
    heck::AsTitleCase(input).to_string()
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        debug!("Creating directory: {}", path.display());
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write every artifact of `response` to `{dir}/{tag}.{language}`.
///
/// Existing files are overwritten. Returns the written paths in artifact order.
pub fn save_artifacts(response: &GeneratorResponse, dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir_exists(dir)?;

    let mut written = Vec::with_capacity(response.artifacts.len());
    for artifact in &response.artifacts {
        let path = dir.join(artifact.file_name());
        std::fs::write(&path, &artifact.code)?;
        info!("Saved {} artifact to {}", artifact.tag(), path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Artifact, ArtifactDetails};
    use tempfile::TempDir;

    fn utility_response() -> GeneratorResponse {
        GeneratorResponse::succeeded(
            "Successfully generated utility",
            Artifact {
                code: "kubectl get pods -A".to_string(),
                language: "bash".to_string(),
                description: "Generated kubectl utility".to_string(),
                details: ArtifactDetails::Utility,
            },
        )
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("network_scanner"), "Network Scanner");
        assert_eq!(to_title_case("infrastructure"), "Infrastructure");
    }

    #[test]
    fn test_save_artifacts_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested/out");

        let written = save_artifacts(&utility_response(), &out).unwrap();

        assert_eq!(written, vec![out.join("utility.bash")]);
        let saved = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(saved, "kubectl get pods -A");
    }

    #[test]
    fn test_save_failed_response_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let response = GeneratorResponse::failed("Utility type awk not supported");

        let written = save_artifacts(&response, temp_dir.path()).unwrap();
        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
