//! Tool registry
//!
//! Built-in tool descriptors live in one place ([`builtin_registrations`]);
//! custom tools loaded from TOML are registered on top of them.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, builtin_registrations};
pub use store::ToolRegistry;
pub use types::{ToolCategory, ToolRegistration};
