//! Filesystem layer for the agent kit distributor
//!
//! Provides normalized path handling, atomic text writes, directory
//! listing, and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
