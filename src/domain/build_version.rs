use crate::error::{ApkNamerError, Result};
use std::fmt;

/// Build number used when a version string carries no `+N` suffix
pub const DEFAULT_BUILD_NUMBER: u64 = 1;

/// Version name and build number as the build toolchain sees them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersion {
    pub version_name: String,
    pub build_number: u64,
}

impl BuildVersion {
    /// Create a new build version
    pub fn new(version_name: impl Into<String>, build_number: u64) -> Self {
        BuildVersion {
            version_name: version_name.into(),
            build_number,
        }
    }

    /// Parse a Flutter-style version string (e.g., "0.3.0+9" -> ("0.3.0", 9))
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (name, build) = match raw.split_once('+') {
            Some((name, build)) => (name, Some(build)),
            None => (raw, None),
        };

        if name.is_empty() {
            return Err(ApkNamerError::version(format!(
                "Missing version name in '{}'",
                raw
            )));
        }

        let build_number = match build {
            Some(build) => build.parse::<u64>().map_err(|_| {
                ApkNamerError::version(format!("Invalid build number: '{}'", build))
            })?,
            None => DEFAULT_BUILD_NUMBER,
        };

        Ok(BuildVersion::new(name, build_number))
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.version_name, self.build_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_build_number() {
        let v = BuildVersion::parse("0.3.0+9").unwrap();
        assert_eq!(v, BuildVersion::new("0.3.0", 9));
    }

    #[test]
    fn test_parse_without_build_number() {
        let v = BuildVersion::parse("1.2.0").unwrap();
        assert_eq!(v.version_name, "1.2.0");
        assert_eq!(v.build_number, DEFAULT_BUILD_NUMBER);
    }

    #[test]
    fn test_parse_build_zero() {
        assert_eq!(BuildVersion::parse("1.0.0+0").unwrap().build_number, 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            BuildVersion::parse("  2.1.0+14\n").unwrap(),
            BuildVersion::new("2.1.0", 14)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(BuildVersion::parse("").is_err());
        assert!(BuildVersion::parse("+9").is_err());
        assert!(BuildVersion::parse("1.0.0+").is_err());
        assert!(BuildVersion::parse("1.0.0+abc").is_err());
        assert!(BuildVersion::parse("1.0.0+-3").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildVersion::new("0.3.0", 9).to_string(), "0.3.0+9");
    }
}
