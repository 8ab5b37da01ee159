use std::fmt;

use crate::domain::NamingInput;

/// Characters that cannot appear in a file name on at least one common platform
pub const RESERVED_CHARACTERS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Warnings about naming inputs that will still be formatted, but likely produce
/// a file name distribution tooling cannot use.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum NamingWarning {
    /// App name is empty
    EmptyAppName,
    /// App name contains a path separator, reserved or control character
    ReservedCharacters { app_name: String },
    /// Version name is empty
    EmptyVersionName,
    /// Version name is not a semantic version
    NonSemanticVersion { version_name: String },
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingWarning::EmptyAppName => write!(f, "App name is empty"),
            NamingWarning::ReservedCharacters { app_name } => {
                write!(
                    f,
                    "App name '{}' contains characters that are not allowed in file names",
                    app_name.escape_debug()
                )
            }
            NamingWarning::EmptyVersionName => write!(f, "Version name is empty"),
            NamingWarning::NonSemanticVersion { version_name } => {
                write!(
                    f,
                    "Version name '{}' is not a semantic version (expected X.Y.Z)",
                    version_name
                )
            }
        }
    }
}

/// Inspect a naming input without rejecting it.
///
/// The namer formats anything it is given; this is the caller-side check that
/// reports what would make the resulting file name suspicious.
pub fn check_input(input: &NamingInput) -> Vec<NamingWarning> {
    let mut warnings = Vec::new();

    if input.app_name.is_empty() {
        warnings.push(NamingWarning::EmptyAppName);
    } else if input
        .app_name
        .chars()
        .any(|c| RESERVED_CHARACTERS.contains(&c) || c.is_control())
    {
        warnings.push(NamingWarning::ReservedCharacters {
            app_name: input.app_name.clone(),
        });
    }

    if input.version_name.is_empty() {
        warnings.push(NamingWarning::EmptyVersionName);
    } else if semver::Version::parse(&input.version_name).is_err() {
        warnings.push(NamingWarning::NonSemanticVersion {
            version_name: input.version_name.clone(),
        });
    }

    warnings
}
