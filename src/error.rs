//! Error handling for the cat utility

use std::io;
use thiserror::Error;

/// Custom error type for cat operations
#[derive(Error, Debug)]
pub enum CatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{file}: Permission denied")]
    PermissionDenied { file: String },

    #[error("{file}: No such file or directory")]
    FileNotFound { file: String },

    #[error("{file}: Is a directory")]
    IsDirectory { file: String },

    #[error("invalid flag: '{flag}'")]
    InvalidFlag { flag: char },
}

impl CatError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CatError::InvalidFlag { .. } => crate::USAGE_FAILURE,

            CatError::PermissionDenied { .. }
            | CatError::FileNotFound { .. }
            | CatError::IsDirectory { .. }
            | CatError::Io(_) => crate::ACCESS_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        CatError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        CatError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an is directory error
    pub fn is_directory(file: &str) -> Self {
        CatError::IsDirectory {
            file: file.to_string(),
        }
    }

    /// Create an invalid flag error
    pub fn invalid_flag(flag: char) -> Self {
        CatError::InvalidFlag { flag }
    }
}

/// Result type for cat operations
pub type CatResult<T> = Result<T, CatError>;

/// Context trait for mapping I/O errors to named file-access errors
pub trait CatContext<T> {
    fn with_file_context(self, filename: &str) -> CatResult<T>;
}

impl<T> CatContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> CatResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => CatError::permission_denied(filename),
            io::ErrorKind::NotFound => CatError::file_not_found(filename),
            _ => CatError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
