//! Shared test utilities for the agent kit workspace.
//!
//! A dev-dependency only, never published.
//!
//! - [`catalog`]: [`TestCatalog`] with a kits root, a workspace and a fake
//!   home directory in one temporary directory
//! - [`kit`]: [`KitBuilder`] for writing kit source trees

pub mod catalog;
pub mod kit;

pub use catalog::TestCatalog;
pub use kit::KitBuilder;
