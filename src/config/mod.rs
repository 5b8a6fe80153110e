//! Configuration module for LibraNet
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LibraryPaths;
pub use settings::Settings;
