//! Reads the version a Flutter project builds with from its `pubspec.yaml`.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::BuildVersion;
use crate::error::{ApkNamerError, Result};

#[derive(Debug, Deserialize)]
struct Pubspec {
    #[serde(default)]
    version: Option<serde_yaml::Value>,
}

/// Read the version name and build number from a pubspec file.
///
/// # Returns
/// * `Ok(BuildVersion)` - Parsed `version: X.Y.Z+N` entry
/// * `Err` - If the file cannot be read, is not YAML, or has no usable version
pub fn read_build_version(path: &Path) -> Result<BuildVersion> {
    let contents = fs::read_to_string(path)?;
    parse_build_version(&contents).map_err(|e| match e {
        ApkNamerError::Version(msg) => {
            ApkNamerError::version(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Parse the `version` entry out of pubspec contents
pub fn parse_build_version(contents: &str) -> Result<BuildVersion> {
    let pubspec: Pubspec = serde_yaml::from_str(contents)?;

    // An unquoted `1.10` is a YAML float and would come back as "1.1"
    let raw = match pubspec.version {
        Some(serde_yaml::Value::String(s)) => s,
        Some(_) => {
            return Err(ApkNamerError::version(
                "'version' must be a string like X.Y.Z+N",
            ))
        }
        None => return Err(ApkNamerError::version("no 'version' entry")),
    };

    let version = BuildVersion::parse(&raw)?;
    debug!("pubspec version {} resolved to {:?}", raw, version);
    Ok(version)
}
