//! CLI command implementations.

pub mod config;
pub mod init;
pub mod lesson;
pub mod list;
pub mod version;
