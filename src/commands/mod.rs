//! CLI commands

pub mod build;
pub mod clean;
pub mod convert;
pub mod list;
pub mod new;
