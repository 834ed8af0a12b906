//! Folder batches.
//!
//! Files are handled one at a time in name order. A failing file is reported
//! and recorded; the batch then continues or stops according to
//! [`FailurePolicy`]. An empty password stops the batch before any file is
//! listed.

use crate::aliases::PasswordString;
use crate::config::{FailurePolicy, Mode, PipelineConfig};
use crate::consts::IMAGE_EXTENSIONS;
use crate::error::ImgcryptError;
use crate::pipeline::file_ops::transform_file;
use crate::report::Reporter;
use std::fs;
use std::path::{Path, PathBuf};

/// One file that made it through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// One file that did not.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ImgcryptError,
}

/// Outcome of [`run_batch`].
#[derive(Debug)]
pub struct BatchReport {
    pub mode: Mode,
    pub succeeded: Vec<Transformed>,
    pub failed: Vec<FileFailure>,
    /// Set when [`FailurePolicy::Abort`] cut the batch short.
    pub aborted: bool,
}

impl BatchReport {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            succeeded: Vec::new(),
            failed: Vec::new(),
            aborted: false,
        }
    }

    /// True when every selected file was transformed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.aborted
    }

    /// One-line tally, e.g. `Encrypting: 2 succeeded, 0 failed`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {} succeeded, {} failed",
            self.mode.verb(),
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// Case-sensitive `.png` / `.jpg` check on a file name.
#[must_use]
pub fn is_image_name(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Regular files directly inside `dir` with an image name, sorted by path.
///
/// Subdirectories (including earlier `encrypted/` and `decrypted/` outputs)
/// are not entered.
pub fn select_images(dir: &Path) -> Result<Vec<PathBuf>, ImgcryptError> {
    let mut selected = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| ImgcryptError::io(dir, e))? {
        let entry = entry.map_err(|e| ImgcryptError::io(dir, e))?;
        let path = entry.path();

        let is_image = entry.file_name().to_str().is_some_and(is_image_name);
        if is_image && path.is_file() {
            selected.push(path);
        }
    }

    selected.sort();
    Ok(selected)
}

/// Encrypt or decrypt every image directly inside `dir`.
///
/// # Errors
///
/// Returns `Err` only for batch-wide problems: empty password, invalid KDF
/// parameters, or an unreadable `dir`. Per-file failures land in
/// [`BatchReport::failed`].
pub fn run_batch(
    dir: &Path,
    mode: Mode,
    password: &PasswordString,
    config: &PipelineConfig,
    reporter: &dyn Reporter,
) -> Result<BatchReport, ImgcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ImgcryptError::EmptyPassword);
    }
    config.kdf.validate()?;

    let files = select_images(dir)?;
    let mut report = BatchReport::new(mode);

    if files.is_empty() {
        reporter.warn(&format!("No .png or .jpg files found in {}", dir.display()));
        return Ok(report);
    }

    for path in files {
        if config.verbose {
            reporter.info(&format!("{} file: {}", mode.verb(), path.display()));
        }

        match transform_file(&path, password, &config.kdf, mode) {
            Ok(output) => {
                if config.verbose {
                    reporter.info(&format!("Wrote {}", output.display()));
                }
                report.succeeded.push(Transformed {
                    input: path,
                    output,
                });
            }
            Err(error) if error.is_per_file() => {
                reporter.error(&format!("Failed to {mode} {}: {error}", path.display()));
                report.failed.push(FileFailure { path, error });

                if config.failure_policy == FailurePolicy::Abort {
                    report.aborted = true;
                    reporter.warn("Stopping batch after first failure");
                    break;
                }
            }
            Err(error) => return Err(error),
        }
    }

    let summary = report.summary();
    if report.is_success() {
        reporter.info(&summary);
    } else {
        reporter.warn(&summary);
    }

    Ok(report)
}
