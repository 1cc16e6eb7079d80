//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();
    log::debug!("resolved {} file(s)", files.len());

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("one.txt");
        fs::write(&file, "x").unwrap();

        let files = resolve_patterns(&[file.display().to_string()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("one.txt");
        fs::write(&file, "x").unwrap();

        let exact = file.display().to_string();
        let wildcard = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[exact, wildcard]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_no_matches() {
        let result = resolve_patterns(&["/nonexistent/*.txt".to_string()]);
        assert!(result.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = resolve_patterns(&["[invalid".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid file pattern"));
    }
}
