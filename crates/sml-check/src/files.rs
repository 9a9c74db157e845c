use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

pub const SML_EXTENSION: &str = "sml";

pub fn is_sml_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SML_EXTENSION)
}

/// Expand the given paths into `.sml` files.
///
/// Files named explicitly are kept whatever their extension; directories are
/// walked recursively for `*.sml`. Results are sorted per argument.
pub fn collect_sml_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path) {
                let entry = entry.with_context(|| format!("walking {}", path.display()))?;
                if entry.file_type().is_file() && is_sml_file(entry.path()) {
                    found.push(entry.into_path());
                }
            }
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            anyhow::bail!("no such file or directory: {}", path.display());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walks_directories_for_sml_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.sml"), "B { }").unwrap();
        fs::write(dir.path().join("a.sml"), "A { }").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/c.sml"), "C { }").unwrap();

        let files = collect_sml_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.sml", "b.sml", "nested/c.sml"]);
    }

    #[test]
    fn explicit_files_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("page.txt");
        fs::write(&file, "Page { }").unwrap();
        assert_eq!(collect_sml_files(&[file.clone()]).unwrap(), vec![file]);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(collect_sml_files(&[PathBuf::from("/definitely/not/here.sml")]).is_err());
    }
}
