//! Per-product rules that decide whether a build is tagged as pre-release.
//!
//! Each product carries its own policy; there is no global rule shared across
//! products.

use crate::error::{ApkNamerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version prefix that marks a zero-major (pre-1.0) release
pub const ZERO_MAJOR_PREFIX: &str = "0.";

/// How a product decides its pre-release flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreReleasePolicy {
    /// Pre-release iff the version name starts with `0.`
    #[default]
    ZeroMajor,
    /// Never tagged
    Never,
    /// Always tagged
    Always,
}

impl PreReleasePolicy {
    /// Whether a build with this version name is a pre-release under this policy
    pub fn applies_to(&self, version_name: &str) -> bool {
        match self {
            PreReleasePolicy::ZeroMajor => version_name.starts_with(ZERO_MAJOR_PREFIX),
            PreReleasePolicy::Never => false,
            PreReleasePolicy::Always => true,
        }
    }
}

impl FromStr for PreReleasePolicy {
    type Err = ApkNamerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "zero-major" => Ok(PreReleasePolicy::ZeroMajor),
            "never" => Ok(PreReleasePolicy::Never),
            "always" => Ok(PreReleasePolicy::Always),
            other => Err(ApkNamerError::config(format!(
                "Unknown pre-release policy '{}' (expected zero-major, never or always)",
                other
            ))),
        }
    }
}

impl fmt::Display for PreReleasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleasePolicy::ZeroMajor => write!(f, "zero-major"),
            PreReleasePolicy::Never => write!(f, "never"),
            PreReleasePolicy::Always => write!(f, "always"),
        }
    }
}
