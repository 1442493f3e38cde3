//! Content handling for kit resource files
//!
//! Every agent, skill, and workflow file in a kit is a markdown document
//! prefixed with a `---` delimited metadata block. This crate provides:
//!
//! - [`frontmatter`]: a deliberately narrow codec for that block. Values are
//!   flat scalars ([`ScalarValue`]); lists, nesting and quoting are not
//!   interpreted.
//! - [`rewrite`]: pure string rewrites applied while retargeting a kit to a
//!   tool (path prefix tokens, folder renames, terminology).

pub mod frontmatter;
pub mod rewrite;

pub use frontmatter::{Frontmatter, ParsedFrontmatter, ScalarValue, parse, render, serialize};
pub use rewrite::{CANONICAL_PATH_TOKEN, FolderRename, PathToken, TermMapping};
