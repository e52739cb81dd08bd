use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("reference file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read reference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("reference file has no usable entries")]
    Empty,
}
