//! User interface module - console output for the CLI.

pub mod formatter;

pub use formatter::{
    describe_rename_outcome, display_available_products, display_error, display_rename_outcome,
    display_status, display_success, display_warning,
};
