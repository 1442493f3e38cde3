//! Command implementations for kit-cli

pub mod install;
pub mod list;
pub mod status;
pub mod validate;

pub use install::{InstallArgs, run_install};
pub use list::{run_list_kits, run_list_tools};
pub use status::run_status;
pub use validate::run_validate;
