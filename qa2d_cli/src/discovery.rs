//! Input discovery for `qa2d convert`

use qa2d_engine::BatchError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const INPUT_EXTENSION: &str = "jsonl";

/// A single file is taken as-is; a directory is walked for `*.jsonl` files
pub fn discover_inputs(path: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(BatchError::NoInput {
            path: path.display().to_string(),
        });
    }

    let mut inputs = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| BatchError::io(path.display().to_string(), e))?;
        if entry.file_type().is_file() && is_jsonl(entry.path()) {
            inputs.push(entry.into_path());
        }
    }

    if inputs.is_empty() {
        return Err(BatchError::NoInput {
            path: path.display().to_string(),
        });
    }

    inputs.sort();
    Ok(inputs)
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discovers_nested_jsonl_files() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("dev");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("b.jsonl"), "").unwrap();
        fs::write(nested.join("a.JSONL"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let inputs = discover_inputs(dir.path()).unwrap();
        assert_eq!(inputs.len(), 2);
        assert!(inputs[0].ends_with("b.jsonl"));
        assert!(inputs[1].ends_with("dev/a.JSONL"));
    }

    #[test]
    fn test_single_file_is_taken_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("pairs.txt");
        fs::write(&file, "").unwrap();

        assert_eq!(discover_inputs(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            discover_inputs(dir.path()),
            Err(BatchError::NoInput { .. })
        ));
    }

    #[test]
    fn test_missing_path() {
        let dir = tempdir().unwrap();
        assert!(discover_inputs(&dir.path().join("absent")).is_err());
    }
}
