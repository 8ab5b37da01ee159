//! Pure formatting functions for UI output.
//!
//! Everything here goes to stderr so that stdout stays free for the bare
//! artifact name.

use console::style;

use crate::boundary::NamingWarning;
use crate::config::Config;
use crate::hooks::RenameOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a naming warning to the user.
pub fn display_warning(warning: &NamingWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display configured products with their app name and pre-release policy.
pub fn display_available_products(config: &Config) {
    eprintln!("{}", style("Configured products:").bold());
    for (id, product) in &config.products {
        eprintln!(
            "  - {} ({}, pre-release: {})",
            id, product.app_name, product.pre_release
        );
    }
}

/// Describe a rename outcome in one line.
pub fn describe_rename_outcome(outcome: &RenameOutcome) -> String {
    match outcome {
        RenameOutcome::Renamed(path) => format!("Renamed artifact to {}", path.display()),
        RenameOutcome::Planned(path) => {
            format!("Dry run: would rename artifact to {}", path.display())
        }
        RenameOutcome::Unchanged(path) => {
            format!("Artifact already named {}", path.display())
        }
    }
}

/// Display what the rename hook did.
pub fn display_rename_outcome(outcome: &RenameOutcome) {
    let message = describe_rename_outcome(outcome);
    match outcome {
        RenameOutcome::Renamed(_) => display_success(&message),
        RenameOutcome::Planned(_) | RenameOutcome::Unchanged(_) => display_status(&message),
    }
}
