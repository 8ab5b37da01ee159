//! Command-line workflow support

pub mod orchestration;
