use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::NamingInput;
use crate::error::{ApkNamerError, Result};

/// What the rename hook did with an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Artifact moved to the new path
    Renamed(PathBuf),
    /// Dry run: artifact would be moved to this path
    Planned(PathBuf),
    /// Artifact already carries the computed name
    Unchanged(PathBuf),
}

impl RenameOutcome {
    /// Final (or planned) path of the artifact
    pub fn path(&self) -> &Path {
        match self {
            RenameOutcome::Renamed(path)
            | RenameOutcome::Planned(path)
            | RenameOutcome::Unchanged(path) => path,
        }
    }
}

/// Renames build outputs to their computed artifact name
#[derive(Debug, Clone)]
pub struct RenameHook {
    input: NamingInput,
    overwrite: bool,
    dry_run: bool,
}

impl RenameHook {
    /// Create a hook for one naming input
    ///
    /// # Arguments
    /// * `input` - Naming input of the artifact being renamed
    /// * `overwrite` - Replace an existing file at the target path
    /// * `dry_run` - Compute the target without touching the filesystem
    pub fn new(input: NamingInput, overwrite: bool, dry_run: bool) -> Self {
        RenameHook {
            input,
            overwrite,
            dry_run,
        }
    }

    /// Path the artifact would be moved to
    pub fn target_for(&self, original: &Path) -> PathBuf {
        let name = self.input.artifact_name();
        match original.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Rename a build output to its computed artifact name
    ///
    /// # Returns
    /// * `Ok(RenameOutcome)` - What happened (or would happen in a dry run)
    /// * `Err` - If the source is missing or not a file, the target exists and
    ///   overwriting is disabled, or the rename itself fails
    pub fn rename_output(&self, original: &Path) -> Result<RenameOutcome> {
        if !original.exists() {
            return Err(ApkNamerError::hook(format!(
                "Build output not found: {}",
                original.display()
            )));
        }

        if !original.is_file() {
            return Err(ApkNamerError::hook(format!(
                "Build output is not a file: {}",
                original.display()
            )));
        }

        let target = self.target_for(original);

        if target == original {
            debug!("{} already has its artifact name", original.display());
            return Ok(RenameOutcome::Unchanged(target));
        }

        if target.exists() && !self.overwrite {
            return Err(ApkNamerError::hook(format!(
                "Target already exists: {} (pass --overwrite to replace it)",
                target.display()
            )));
        }

        if self.dry_run {
            return Ok(RenameOutcome::Planned(target));
        }

        fs::rename(original, &target).map_err(|e| {
            ApkNamerError::hook(format!(
                "Failed to rename {} to {}: {}",
                original.display(),
                target.display(),
                e
            ))
        })?;
        debug!("renamed {} -> {}", original.display(), target.display());

        Ok(RenameOutcome::Renamed(target))
    }
}
