//! Error types for kit-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kit_fs::Error),

    #[error("Tool not found: {id}")]
    ToolNotFound { id: String },

    #[error("Invalid tool definition '{id}': {message}")]
    InvalidTool { id: String, message: String },

    #[error("Could not determine the home directory")]
    HomeDirNotFound,
}
