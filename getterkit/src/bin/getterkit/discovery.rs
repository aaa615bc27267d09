//! Finds class model documents on disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expands the given paths into a sorted list of `.json` class model files.
///
/// Files are taken as given; directories are walked recursively, skipping hidden
/// entries.
pub fn discover_models(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut discovered = Vec::new();

    for path in paths {
        if path.is_file() {
            discovered.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("No such file or directory: {}", path.display());
        }

        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()))
        {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            let candidate = entry.path();
            if candidate.is_file() && candidate.extension().is_some_and(|ext| ext == "json") {
                discovered.push(candidate.to_path_buf());
            }
        }
    }

    discovered.sort();
    discovered.dedup();
    Ok(discovered)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_directories_for_json_models() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("model");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(dir.path().join(".cache")).unwrap();
        std::fs::write(nested.join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join(".cache").join("c.json"), "{}").unwrap();

        let found = discover_models(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, ["a.json", "model/b.json"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_models(&[dir.path().join("absent")]).is_err());
    }
}
