//! Error types for export operations.

use std::io;
use thiserror::Error;

/// Errors that can occur while writing export files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DXF document could not be written.
    #[error("DXF write error: {0}")]
    Dxf(#[from] dxf::DxfError),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
