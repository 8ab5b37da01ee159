//! Post-build hook that renames a produced artifact in place.
//!
//! The build toolchain writes its output under its own file name; the hook
//! moves it to the computed artifact name in the same directory.

pub mod rename;

pub use rename::{RenameHook, RenameOutcome};
