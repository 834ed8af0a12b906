//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, ImgcryptError>`](ImgcryptError).

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all envelope, cipher and pipeline operations.
#[derive(Error, Debug)]
pub enum ImgcryptError {
    /// The password was empty.
    ///
    /// Checked once before a batch starts; no file is read or written when
    /// this is returned.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// I/O error tied to a specific path.
    ///
    /// Covers unreadable inputs, output directories that cannot be created
    /// and outputs that cannot be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is too short to hold the 16-byte salt and 16-byte IV.
    #[error("envelope too short: {len} bytes (need at least 32)")]
    EnvelopeTooShort { len: usize },

    /// A buffer handed to the cipher engine is not a multiple of the block size.
    #[error("input length {len} is not a multiple of the 16-byte block size")]
    InvalidInputLength { len: usize },

    /// Key derivation or randomness failure.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl ImgcryptError {
    /// Wrap an [`std::io::Error`] with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImgcryptError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the batch can continue after this error.
    ///
    /// Only [`ImgcryptError::EmptyPassword`] and [`ImgcryptError::Crypto`]
    /// apply to every file alike.
    #[must_use]
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ImgcryptError::Io { .. }
                | ImgcryptError::EnvelopeTooShort { .. }
                | ImgcryptError::InvalidInputLength { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ImgcryptError::io(
            "pics/a.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "I/O error on pics/a.png: gone");
        assert!(err.is_per_file());
    }

    #[test]
    fn batch_fatal_errors_are_not_per_file() {
        assert!(!ImgcryptError::EmptyPassword.is_per_file());
        assert!(!ImgcryptError::Crypto("rng failed".into()).is_per_file());
        assert!(ImgcryptError::EnvelopeTooShort { len: 3 }.is_per_file());
    }
}
