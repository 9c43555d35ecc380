use serde::Serialize;
use std::fmt;

/// Opaque platform identifier matched against configuration section names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Section name conventionally used for the host operating system
    pub fn current() -> Self {
        let name = if cfg!(target_os = "windows") {
            "Win32"
        } else if cfg!(target_os = "macos") {
            "Mac"
        } else {
            "Linux"
        };
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Platform {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_is_known_section_name() {
        let current = Platform::current();
        assert!(["Win32", "Mac", "Linux"].contains(&current.as_str()));
    }

    #[test]
    fn test_platform_is_opaque_equality_key() {
        assert_eq!(Platform::from("linux").as_str(), "linux");
        assert_ne!(Platform::from("linux"), Platform::from("Linux"));
    }
}
