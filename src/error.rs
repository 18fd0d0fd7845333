use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxcanvas operations
#[derive(Error, Diagnostic, Debug)]
pub enum CanvasError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxcanvas::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxcanvas::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid canvas dimensions: {width}x{height}")]
    #[diagnostic(
        code(pxcanvas::dimension),
        help("Width and height must both be at least 1 pixel")
    )]
    InvalidDimension { width: u32, height: u32 },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxcanvas::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("PNG encoding failed: {message}")]
    #[diagnostic(code(pxcanvas::encode))]
    Encoding { message: String },
}

pub type Result<T> = std::result::Result<T, CanvasError>;
