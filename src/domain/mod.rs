//! Domain logic - pure naming rules independent of the filesystem

pub mod build_version;
pub mod naming;
pub mod policy;

pub use build_version::BuildVersion;
pub use naming::{compute_artifact_name, NamingInput, ARTIFACT_EXTENSION, PRE_RELEASE_MARKER};
pub use policy::PreReleasePolicy;
