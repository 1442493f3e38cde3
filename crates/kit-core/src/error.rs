//! Error types for kit-core

use std::path::PathBuf;

/// Result type for kit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested kit is not in the catalog
    #[error("Kit not found: {id}")]
    KitNotFound { id: String },

    /// Kit is listed but marked unavailable
    #[error("Kit '{id}' is not available")]
    KitUnavailable { id: String },

    /// Install request names no kits
    #[error("No kits requested")]
    NoKitsRequested,

    /// Kits root has no `kits/` directory
    #[error("No kits directory at {path}")]
    CatalogNotFound { path: PathBuf },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from kit-fs
    #[error(transparent)]
    Fs(#[from] kit_fs::Error),

    /// Descriptor error from kit-meta
    #[error(transparent)]
    Meta(#[from] kit_meta::Error),

    /// Installer error from kit-tools
    #[error(transparent)]
    Tools(#[from] kit_tools::Error),
}
