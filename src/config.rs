//! # Pipeline Configuration
//!
//! Everything a batch run needs besides the folder and the password.

use crate::consts::{DECRYPTED_DIR, DECRYPTED_SUFFIX, ENCRYPTED_DIR, ENCRYPTED_SUFFIX};
use crate::crypto::kdf::KdfParams;
use std::fmt;
use std::str::FromStr;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Output subdirectory name (`encrypted` / `decrypted`).
    #[must_use]
    pub const fn output_dir(self) -> &'static str {
        match self {
            Mode::Encrypt => ENCRYPTED_DIR,
            Mode::Decrypt => DECRYPTED_DIR,
        }
    }

    /// Marker spliced into output file names.
    #[must_use]
    pub const fn name_suffix(self) -> &'static str {
        match self {
            Mode::Encrypt => ENCRYPTED_SUFFIX,
            Mode::Decrypt => DECRYPTED_SUFFIX,
        }
    }

    /// Present participle for progress lines.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Mode::Encrypt => "Encrypting",
            Mode::Decrypt => "Decrypting",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(format!("invalid operation '{other}' (expected encrypt or decrypt)")),
        }
    }
}

/// What a batch does after a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the failure and move on to the next file.
    #[default]
    Continue,
    /// Report the failure and stop the batch.
    Abort,
}

/// Batch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    pub kdf: KdfParams,
    pub failure_policy: FailurePolicy,
    /// Report every file at info level, not just failures and the summary.
    pub verbose: bool,
}

impl PipelineConfig {
    #[must_use]
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
