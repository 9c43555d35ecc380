//! Loosely-typed view of a `c_cpp_properties.json` document
//!
//! The document is hand-edited, so every field is extracted independently
//! from a [`serde_json::Value`]. A field with an unexpected JSON type is
//! treated as absent and never invalidates its siblings.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::io::FileSystemTrait;
use crate::project::ConfigError;

/// One entry of the `configurations` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSection {
    /// Platform identifier this section applies to (`None` if absent or not a string)
    pub name: Option<String>,

    /// Include directories, `None` when `includePath` is absent or not an array
    pub include_path: Option<Vec<String>>,
}

/// Parsed configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CppProperties {
    /// Main sketch/source file; its directory is searched for headers
    pub sketch: Option<PathBuf>,

    /// Per-platform configuration sections in document order
    pub configurations: Option<Vec<ConfigurationSection>>,
}

impl CppProperties {
    /// Parse from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Extract the known fields from an arbitrary JSON value
    ///
    /// Anything that is not an object yields an empty document.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            trace!("Configuration root is not an object, ignoring");
            return Self::default();
        };

        let sketch = object
            .get("sketch")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let configurations = object
            .get("configurations")
            .and_then(Value::as_array)
            .map(|sections| {
                sections
                    .iter()
                    .map(ConfigurationSection::from_value)
                    .collect()
            });

        Self {
            sketch,
            configurations,
        }
    }

    /// Include paths of every section named `platform`, in document order
    pub fn include_paths_for<'a>(&'a self, platform: &'a str) -> impl Iterator<Item = &'a str> {
        self.configurations
            .iter()
            .flatten()
            .filter(move |section| section.name.as_deref() == Some(platform))
            .filter_map(|section| section.include_path.as_ref())
            .flatten()
            .map(String::as_str)
    }
}

impl ConfigurationSection {
    fn from_value(value: &Value) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        // Non-string elements are dropped; the rest of the array still counts
        let include_path = value
            .get("includePath")
            .and_then(Value::as_array)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            });

        Self { name, include_path }
    }
}

/// Load and parse the configuration file at `path`
pub fn load_cpp_properties<F>(fs: &F, path: &Path) -> Result<CppProperties, ConfigError>
where
    F: FileSystemTrait + ?Sized,
{
    let path_str = path.to_string_lossy().to_string();

    if !fs.exists(path) {
        return Err(ConfigError::NotFound { path: path_str });
    }

    let content = fs.read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_str.clone(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(ConfigError::Empty { path: path_str });
    }

    let properties = CppProperties::from_json_str(&content).map_err(|source| {
        ConfigError::Parse {
            path: path_str.clone(),
            source,
        }
    })?;

    debug!(
        "Loaded configuration from {}: sketch={:?}, {} section(s)",
        path_str,
        properties.sketch,
        properties.configurations.as_ref().map_or(0, Vec::len)
    );

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::TestFileSystem;
    use serde_json::json;

    #[test]
    fn test_parse_full_document() {
        let props = CppProperties::from_json_str(
            r#"{
                "sketch": "/proj/app.ino",
                "configurations": [
                    { "name": "Linux", "includePath": ["/usr/include/lib1", "/opt/lib2"] },
                    { "name": "Win32", "includePath": ["C:\\lib"] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(props.sketch, Some(PathBuf::from("/proj/app.ino")));
        let sections = props.configurations.as_ref().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name.as_deref(), Some("Linux"));
        assert_eq!(
            sections[0].include_path,
            Some(vec!["/usr/include/lib1".to_string(), "/opt/lib2".to_string()])
        );
    }

    #[test]
    fn test_wrong_field_types_are_treated_as_absent() {
        let props = CppProperties::from_value(&json!({
            "sketch": 42,
            "configurations": [
                { "name": "Linux", "includePath": "/not/an/array" },
                { "name": 7, "includePath": ["/x"] },
                { "name": "Linux", "includePath": ["/ok", 3, null] }
            ]
        }));

        assert_eq!(props.sketch, None);
        let sections = props.configurations.unwrap();
        assert_eq!(sections[0].include_path, None);
        assert_eq!(sections[1].name, None);
        assert_eq!(sections[2].include_path, Some(vec!["/ok".to_string()]));
    }

    #[test]
    fn test_non_object_root_is_empty_document() {
        assert_eq!(CppProperties::from_value(&json!([1, 2])), CppProperties::default());
        assert_eq!(CppProperties::from_value(&json!("text")), CppProperties::default());
    }

    #[test]
    fn test_configurations_not_array_is_absent() {
        let props = CppProperties::from_value(&json!({ "configurations": { "name": "Linux" } }));
        assert_eq!(props.configurations, None);
    }

    #[test]
    fn test_include_paths_for_accumulates_matching_sections() {
        let props = CppProperties::from_value(&json!({
            "configurations": [
                { "name": "Linux", "includePath": ["/a"] },
                { "name": "Mac", "includePath": ["/mac"] },
                { "name": "Linux" },
                { "name": "Linux", "includePath": ["/b", "/c"] }
            ]
        }));

        let paths: Vec<&str> = props.include_paths_for("Linux").collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
        assert_eq!(props.include_paths_for("Win32").count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let fs = TestFileSystem::new();
        let result = load_cpp_properties(&fs, Path::new("/proj/.vscode/c_cpp_properties.json"));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_empty_file() {
        let fs = TestFileSystem::new();
        let path = Path::new("/proj/.vscode/c_cpp_properties.json");
        fs.set_file_content(path, "  \n");
        assert!(matches!(
            load_cpp_properties(&fs, path),
            Err(ConfigError::Empty { .. })
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let fs = TestFileSystem::new();
        let path = Path::new("/proj/.vscode/c_cpp_properties.json");
        fs.set_file_content(path, "{ \"configurations\": [ ");
        let err = load_cpp_properties(&fs, path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("c_cpp_properties.json"));
    }

    #[test]
    fn test_load_read_error() {
        let mut fs = crate::io::MockFileSystemTrait::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))
        });

        let result = load_cpp_properties(&fs, Path::new("/proj/config.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
