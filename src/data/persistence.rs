use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Set once at startup by main() from the --data-dir argument.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Call this from main() before any load/save operations.
pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = DATA_DIR.get() {
        return Ok(dir.clone());
    }
    // Fallback when running tests or if set_data_dir was not called
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join("config"))
}

pub fn get_file_path(name: &str) -> Result<PathBuf> {
    let dir = get_data_dir()?;
    Ok(dir.join(name))
}

/// YAML-backed config files. Loading a missing file yields `Default`, so
/// startup never requires the file to exist.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;

    fn load() -> Result<Self> {
        let path = get_file_path(Self::filename())?;
        Self::load_path(&path)
    }

    fn save(&self) -> Result<()> {
        let path = get_file_path(Self::filename())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        self.save_path(&path)
    }

    /// Load from an explicit directory, bypassing the global `DATA_DIR`.
    fn load_from(dir: &Path) -> Result<Self> {
        Self::load_path(&dir.join(Self::filename()))
    }

    /// Save to an explicit directory, bypassing the global `DATA_DIR`.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        self.save_path(&dir.join(Self::filename()))
    }

    /// Shared loader used by `load` and `load_from`.
    fn load_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_norway::from_str(&contents)
            .with_context(|| format!("failed to parse YAML from {}", path.display()))
    }

    /// Shared writer used by `save` and `save_to`.
    fn save_path(&self, path: &Path) -> Result<()> {
        let contents = serde_norway::to_string(self).context("failed to serialize YAML")?;
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    /// Minimal Persistable implementation for testing the trait plumbing.
    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct TestConfig {
        label: String,
        count: u32,
    }

    impl Persistable for TestConfig {
        fn filename() -> &'static str {
            "test_config.yaml"
        }
    }

    #[test]
    fn test_get_data_dir_returns_a_path() {
        // When DATA_DIR is unset the fallback is cwd/config.
        // When it IS set (by a prior test run), it returns that value.
        // Either way a valid PathBuf should be returned.
        let result = get_data_dir();
        assert!(result.is_ok());
    }

    #[test]
    fn test_get_file_path_appends_filename() {
        let path = get_file_path("my_file.yaml").unwrap();
        assert!(path.ends_with("my_file.yaml"));
    }

    #[test]
    fn test_save_to_and_load_from_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let data = TestConfig {
            label: "round-trip".to_string(),
            count: 42,
        };
        data.save_to(tmp.path()).unwrap();
        let loaded = TestConfig::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_from_returns_default_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let result: TestConfig = TestConfig::load_from(tmp.path()).unwrap();
        assert_eq!(result, TestConfig::default());
    }

    #[test]
    fn test_load_from_rejects_malformed_yaml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test_config.yaml"), "label: [unclosed").unwrap();
        assert!(TestConfig::load_from(tmp.path()).is_err());
    }

    #[test]
    fn test_save_to_creates_directory_if_missing() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        let data = TestConfig {
            label: "nested".to_string(),
            count: 1,
        };
        data.save_to(&nested).unwrap();
        let loaded = TestConfig::load_from(&nested).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_saved_file_is_yaml() {
        let tmp = TempDir::new().unwrap();
        let data = TestConfig {
            label: "plain".to_string(),
            count: 7,
        };
        data.save_to(tmp.path()).unwrap();
        let contents = fs::read_to_string(tmp.path().join("test_config.yaml")).unwrap();
        assert!(contents.contains("label: plain"));
        assert!(contents.contains("count: 7"));
    }
}
