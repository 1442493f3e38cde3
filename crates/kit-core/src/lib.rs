//! Install orchestration for the agent kit distributor
//!
//! `kit-core` sits between the CLI and the installer crates:
//!
//! ```text
//!                  kit-cli
//!                     |
//!                 kit-core
//!                     |
//!      +--------+-----+------+-----------+
//!      |        |            |           |
//!   kit-fs  kit-content  kit-meta    kit-tools
//! ```
//!
//! - **Catalog**: discovers kits, the shared `common/` tree and overrides
//! - **Request / Preflight**: resolves where a request installs and whether
//!   an installation is already there
//! - **InstallEngine**: applies a [`ConflictPolicy`] and runs the installer
//!   for every requested kit, in order
//! - **Validator / Inventory**: structural checks and listings of a kit tree

pub mod backup;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod request;
pub mod status;
pub mod validate;

pub use backup::{backup_existing, backup_path};
pub use catalog::{KitCatalog, KitOverride};
pub use engine::InstallEngine;
pub use error::{Error, Result};
pub use request::{ConflictPolicy, InstallOutcome, InstallRequest, Preflight};
pub use status::{AgentEntry, KitInventory, SkillEntry, WorkflowEntry};
pub use validate::{Finding, KitStats, KitValidator, Severity, ValidationReport};
