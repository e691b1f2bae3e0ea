// pathtrack_sim/src/catalog.rs

//! Discovers scenario files under a catalog directory.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scenario files keyed by a namespace built from their relative path,
/// e.g. `demos/standard_course` becomes "demos.standard_course".
#[derive(Debug, Default, Clone)]
pub struct ScenarioCatalog(pub BTreeMap<String, PathBuf>);

impl ScenarioCatalog {
    /// Walks `root` collecting every `.toml` file. A missing directory gives
    /// an empty catalog.
    pub fn scan(root: &Path) -> Self {
        let mut catalog = Self::default();
        if !root.exists() {
            warn!(
                "Scenario directory not found at {:?}, catalog is empty.",
                root
            );
            return catalog;
        }

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| {
                !e.file_type().is_dir() && e.path().extension().map_or(false, |ext| ext == "toml")
            })
        {
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let key = relative
                .with_extension("")
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, ".");
            debug!("Found scenario '{}'", key);
            catalog.0.insert(key, path.to_path_buf());
        }
        catalog
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Looks `name` up in the catalog, falling back to treating it as a path.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if let Some(path) = self.0.get(name) {
            return Some(path.clone());
        }
        let direct = PathBuf::from(name);
        direct.is_file().then_some(direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "pathtrack_catalog_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("demos")).unwrap();
        dir
    }

    #[test]
    fn test_scan_keys_by_relative_path() {
        let dir = scratch_dir("keys");
        fs::write(dir.join("standard.toml"), "").unwrap();
        fs::write(dir.join("demos").join("straight.toml"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let catalog = ScenarioCatalog::scan(&dir);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["demos.straight", "standard"]);
        assert_eq!(catalog.resolve("standard"), Some(dir.join("standard.toml")));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let catalog = ScenarioCatalog::scan(Path::new("/definitely/not/here"));
        assert_eq!(catalog.names().count(), 0);
        assert_eq!(catalog.resolve("standard"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_a_file_path() {
        let dir = scratch_dir("fallback");
        let file = dir.join("loose.toml");
        fs::write(&file, "").unwrap();

        let catalog = ScenarioCatalog::default();
        let raw = file.to_string_lossy().into_owned();
        assert_eq!(catalog.resolve(&raw), Some(file));

        fs::remove_dir_all(&dir).unwrap();
    }
}
