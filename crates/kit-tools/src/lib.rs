//! Kit installation for AI coding assistants.
//!
//! # Architecture
//!
//! Installation is split into three layers:
//!
//! 1. **Transformers** rewrite a single agent or workflow file into the
//!    metadata dialect of the target tool.
//! 2. **Materializer** mirrors directory trees, applying path substitution
//!    to every text file on the way.
//! 3. **Installers** decide which subtrees are copied verbatim and which go
//!    through a transformer. The strategy is chosen by the tool descriptor,
//!    see [`installer_for`].
//!
//! The [`ToolRegistry`] carries the built-in tool descriptors.

pub mod error;
pub mod installer;
pub mod logging;
pub mod materialize;
pub mod registry;
pub mod skills;
pub mod transform;

pub use error::{Error, Result};
pub use installer::{
    GenericInstaller, InstallContext, InstallResult, KitInstaller, SchemaDivergentInstaller,
    installer_for,
};
pub use registry::{ToolCategory, ToolRegistration, ToolRegistry};
pub use transform::{AgentTransformer, ContentTransformer, TransformContext, WorkflowTransformer};
