//! Storage layer for JSON persistence
//!
//! Path-based file I/O used by the favorites slot.

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AppError::Storage(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

/// Get the path of a named data slot in the config directory
pub fn data_path(slot: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(format!("{slot}.json")))
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::PermissionDenied => {
                    format!("Permission denied: cannot read {:?}", path)
                }
                _ => format!("Failed to read {:?}: {}", path, e),
            };
            return Err(AppError::Storage(msg));
        }
    };

    // An empty slot is the same as an absent one
    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("Failed to parse {:?}: {}", path, e)))?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path
///
/// Creates parent directories if they don't exist; the slot is overwritten
/// wholesale.
pub fn save_to<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("Failed to create directory {:?}: {}", parent, e))
            })?;
        }
    }

    let content = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Storage(format!("Failed to serialize data: {}", e)))?;

    fs::write(path, content).map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::PermissionDenied => {
                format!("Permission denied: cannot write to {:?}", path)
            }
            ErrorKind::ReadOnlyFilesystem => {
                format!("Cannot write to {:?}: filesystem is read-only", path)
            }
            _ => format!("Failed to write to {:?}: {}", path, e),
        };
        AppError::Storage(msg)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("homescope_storage_test_{}_{}.json", id, name))
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_load");
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        save_to(&path, &data).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = load_from(&path).unwrap();
        assert_eq!(loaded, Some(data));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_nonexistent() {
        let path = temp_path("nonexistent");
        let loaded: Option<TestData> = load_from(&path).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_empty_file() {
        let path = temp_path("empty");
        fs::write(&path, "").unwrap();

        let loaded: Option<TestData> = load_from(&path).unwrap();
        assert_eq!(loaded, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_whitespace_only_file() {
        let path = temp_path("whitespace");
        fs::write(&path, "  \n\t ").unwrap();

        let loaded: Option<TestData> = load_from(&path).unwrap();
        assert_eq!(loaded, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "not valid json").unwrap();

        let result: Result<Option<TestData>> = load_from(&path);
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_error_message_contains_path() {
        let path = temp_path("error");
        fs::write(&path, "{ broken").unwrap();

        let err = load_from::<TestData>(&path).unwrap_err().to_string();
        assert!(err.contains("homescope_storage_test"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let path = temp_dir()
            .join(format!(
                "homescope_storage_test_{}",
                TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
            ))
            .join("nested")
            .join("data.json");

        let data = TestData {
            name: "nested".to_string(),
            value: 7,
        };

        save_to(&path, &data).unwrap();
        assert!(path.exists());

        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent.parent().unwrap());
        }
    }

    #[test]
    fn test_data_path_has_json_extension() {
        if let Ok(path) = data_path("propertyFavorites") {
            assert!(path.to_string_lossy().ends_with("propertyFavorites.json"));
        }
    }
}
