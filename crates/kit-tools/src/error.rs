//! Error types for kit-tools

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kit_fs::Error),

    #[error("Descriptor error: {0}")]
    Meta(#[from] kit_meta::Error),

    #[error("Source for kit '{kit}' not found at {path}")]
    KitSourceMissing { kit: String, path: PathBuf },
}
