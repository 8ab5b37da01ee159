pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod pubspec;
pub mod ui;

pub use domain::{compute_artifact_name, NamingInput, PreReleasePolicy};
pub use error::{ApkNamerError, Result};
