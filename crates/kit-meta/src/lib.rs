//! Descriptors consumed by the install pipeline.
//!
//! - [`AiTool`] describes a target assistant: where it keeps its files,
//!   which rules variant it reads, and which install strategy applies.
//! - [`Kit`] describes a source bundle of agents, skills and workflows.
//! - [`Scope`] selects the workspace or the user's home directory.
//!
//! Descriptors are immutable once built. Custom tools can be declared in
//! TOML and loaded with [`ToolLoader`].

pub mod error;
pub mod loader;
pub mod schema;

pub use error::{Error, Result};
pub use loader::ToolLoader;
pub use schema::{AiTool, DivergentSchema, FieldRule, InstallStrategy, Kit, Scope, home_dir};
