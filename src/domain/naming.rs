//! Artifact naming rule for release packages.
//!
//! Produces `<AppName>_v<VersionName>[-BETA]_build<BuildNumber>.apk`. Distribution
//! tooling matches on this exact shape, so inputs are formatted verbatim.

/// Marker inserted right after the version segment of a pre-release artifact
pub const PRE_RELEASE_MARKER: &str = "-BETA";

/// File extension of every produced artifact
pub const ARTIFACT_EXTENSION: &str = ".apk";

/// Everything needed to name one build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingInput {
    pub app_name: String,
    pub version_name: String,
    pub build_number: u64,
    pub pre_release: bool,
}

impl NamingInput {
    /// Create a new naming input
    pub fn new(
        app_name: impl Into<String>,
        version_name: impl Into<String>,
        build_number: u64,
        pre_release: bool,
    ) -> Self {
        NamingInput {
            app_name: app_name.into(),
            version_name: version_name.into(),
            build_number,
            pre_release,
        }
    }

    /// File name for this input
    pub fn artifact_name(&self) -> String {
        compute_artifact_name(
            &self.app_name,
            &self.version_name,
            self.build_number,
            self.pre_release,
        )
    }
}

/// Compute the output file name of a build artifact.
///
/// Never fails: empty or malformed strings are formatted as they are. Callers that
/// need validation should run [`crate::boundary::check_input`] first.
///
/// # Example
/// ```
/// use apk_namer::domain::compute_artifact_name;
///
/// assert_eq!(
///     compute_artifact_name("CoffeaSuite", "0.3.0", 9, true),
///     "CoffeaSuite_v0.3.0-BETA_build9.apk"
/// );
/// ```
pub fn compute_artifact_name(
    app_name: &str,
    version_name: &str,
    build_number: u64,
    pre_release_tag_enabled: bool,
) -> String {
    let marker = if pre_release_tag_enabled {
        PRE_RELEASE_MARKER
    } else {
        ""
    };

    format!(
        "{}_v{}{}_build{}{}",
        app_name, version_name, marker, build_number, ARTIFACT_EXTENSION
    )
}
