use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write `content` to `output_path/relative`, creating parent directories
/// and replacing any previous file.
pub fn save(output_path: &Path, relative: &Path, content: &str) -> Result<PathBuf> {
    let target = output_path.join(relative);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&target, content)
        .with_context(|| format!("Failed to write file: {}", target.display()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let path = save(dir.path(), Path::new("values-es/strings.xml"), "<resources/>\n").unwrap();

        assert_eq!(path, dir.path().join("values-es/strings.xml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<resources/>\n");
    }

    #[test]
    fn test_save_overwrites_previous_output() {
        let dir = tempdir().unwrap();
        save(dir.path(), Path::new("en.yml"), "old contents that are longer\n").unwrap();
        let path = save(dir.path(), Path::new("en.yml"), "new\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new\n");
    }

    #[test]
    fn test_save_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blocker"), "").unwrap();

        let err = save(dir.path(), Path::new("blocker/strings.xml"), "x").unwrap_err();
        assert!(format!("{:#}", err).contains("blocker"));
    }
}
