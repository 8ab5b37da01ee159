//! Main workflow orchestration logic
//!
//! Resolves a product and its build version, names the artifact and optionally
//! renames the build output. Kept apart from main.rs so the workflow can be
//! called programmatically without depending on clap.

use log::debug;
use std::path::PathBuf;

use crate::boundary::{check_input, NamingWarning};
use crate::config::Config;
use crate::domain::{BuildVersion, NamingInput, PreReleasePolicy};
use crate::error::{ApkNamerError, Result};
use crate::hooks::{RenameHook, RenameOutcome};
use crate::pubspec;

/// Arguments for the naming workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenameWorkflowArgs {
    /// Configured product id
    pub product: Option<String>,

    /// Overrides the product's app name
    pub app_name: Option<String>,

    /// Explicit version name, wins over the pubspec
    pub version_name: Option<String>,

    /// Explicit build number, wins over the pubspec
    pub build_number: Option<u64>,

    /// Flutter pubspec.yaml to read `version: X.Y.Z+N` from
    pub pubspec: Option<PathBuf>,

    /// Replaces the product's pre-release policy
    pub policy: Option<PreReleasePolicy>,

    /// Forces the pre-release marker on or off, wins over any policy
    pub pre_release: Option<bool>,

    /// Build output to rename
    pub apk: Option<PathBuf>,

    /// Replace an existing file at the target path
    pub overwrite: bool,

    /// Compute the rename without touching the filesystem
    pub dry_run: bool,
}

/// Result of a successful naming workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Product id that was named
    pub product: String,

    /// Computed artifact file name
    pub artifact_name: String,

    /// Whether the pre-release marker was applied
    pub pre_release: bool,

    /// Non-fatal input warnings
    pub warnings: Vec<NamingWarning>,

    /// What happened to the build output, if one was given
    pub outcome: Option<RenameOutcome>,
}

/// Main naming workflow
///
/// 1. Resolve the product
/// 2. Resolve version name and build number
/// 3. Derive the pre-release flag from the product policy
/// 4. Compute the artifact name and check the inputs
/// 5. Rename the build output if one was given
pub fn run_rename_workflow(args: &RenameWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
    let (product_id, product) = config.resolve_product(args.product.as_deref())?;

    let version = resolve_build_version(args)?;

    let policy = args.policy.unwrap_or(product.pre_release);
    let pre_release = args
        .pre_release
        .unwrap_or_else(|| policy.applies_to(&version.version_name));

    let app_name = args
        .app_name
        .clone()
        .unwrap_or_else(|| product.app_name.clone());

    let input = NamingInput::new(
        app_name,
        version.version_name,
        version.build_number,
        pre_release,
    );
    let artifact_name = input.artifact_name();
    let warnings = check_input(&input);
    debug!(
        "product {} ({} policy) -> {}",
        product_id, policy, artifact_name
    );

    let outcome = match &args.apk {
        Some(apk) => {
            let hook = RenameHook::new(
                input,
                args.overwrite || config.behavior.overwrite,
                args.dry_run,
            );
            Some(hook.rename_output(apk)?)
        }
        None => None,
    };

    Ok(WorkflowResult {
        product: product_id.to_string(),
        artifact_name,
        pre_release,
        warnings,
        outcome,
    })
}

fn resolve_build_version(args: &RenameWorkflowArgs) -> Result<BuildVersion> {
    let from_pubspec = match &args.pubspec {
        Some(path) => Some(pubspec::read_build_version(path)?),
        None => None,
    };

    let version_name = args
        .version_name
        .clone()
        .or_else(|| from_pubspec.as_ref().map(|v| v.version_name.clone()))
        .ok_or_else(|| {
            ApkNamerError::version("No version name given (use --version-name or --pubspec)")
        })?;

    let build_number = args
        .build_number
        .or_else(|| from_pubspec.as_ref().map(|v| v.build_number))
        .ok_or_else(|| {
            ApkNamerError::version("No build number given (use --build-number or --pubspec)")
        })?;

    Ok(BuildVersion::new(version_name, build_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(product: &str, version: &str, build: u64) -> RenameWorkflowArgs {
        RenameWorkflowArgs {
            product: Some(product.to_string()),
            version_name: Some(version.to_string()),
            build_number: Some(build),
            ..Default::default()
        }
    }

    #[test]
    fn test_suite_zero_major_gets_marker() {
        let result = run_rename_workflow(&args("suite", "0.3.0", 9), &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaSuite_v0.3.0-BETA_build9.apk");
        assert!(result.pre_release);
        assert!(result.warnings.is_empty());
        assert!(result.outcome.is_none());
    }

    #[test]
    fn test_suite_stable() {
        let result = run_rename_workflow(&args("suite", "1.0.0", 12), &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaSuite_v1.0.0_build12.apk");
        assert!(!result.pre_release);
    }

    #[test]
    fn test_pos_never_gets_marker() {
        let result = run_rename_workflow(&args("pos", "0.9.9", 1), &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaPOS_v0.9.9_build1.apk");
        assert!(!result.pre_release);
    }

    #[test]
    fn test_explicit_flag_overrides_policy() {
        let mut a = args("pos", "1.2.0", 9);
        a.pre_release = Some(true);
        let result = run_rename_workflow(&a, &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaPOS_v1.2.0-BETA_build9.apk");
    }

    #[test]
    fn test_policy_override_replaces_product_policy() {
        let mut a = args("pos", "0.9.9", 1);
        a.policy = Some(PreReleasePolicy::ZeroMajor);
        let result = run_rename_workflow(&a, &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaPOS_v0.9.9-BETA_build1.apk");
    }

    #[test]
    fn test_explicit_flag_wins_over_policy_override() {
        let mut a = args("suite", "0.3.0", 9);
        a.policy = Some(PreReleasePolicy::Always);
        a.pre_release = Some(false);
        let result = run_rename_workflow(&a, &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaSuite_v0.3.0_build9.apk");
    }

    #[test]
    fn test_app_name_override() {
        let mut a = args("suite", "1.0.0", 3);
        a.app_name = Some("CoffeaSuiteDemo".to_string());
        let result = run_rename_workflow(&a, &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaSuiteDemo_v1.0.0_build3.apk");
    }

    #[test]
    fn test_missing_version_is_error() {
        let a = RenameWorkflowArgs {
            product: Some("suite".to_string()),
            build_number: Some(1),
            ..Default::default()
        };
        let err = run_rename_workflow(&a, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("No version name"));
    }

    #[test]
    fn test_missing_build_number_is_error() {
        let a = RenameWorkflowArgs {
            product: Some("suite".to_string()),
            version_name: Some("1.0.0".to_string()),
            ..Default::default()
        };
        let err = run_rename_workflow(&a, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("No build number"));
    }

    #[test]
    fn test_malformed_version_still_named_with_warning() {
        let result = run_rename_workflow(&args("pos", "", 0), &Config::default()).unwrap();
        assert_eq!(result.artifact_name, "CoffeaPOS_v_build0.apk");
        assert_eq!(result.warnings, vec![NamingWarning::EmptyVersionName]);
    }
}
