//! Output path construction.
//!
//! `pics/photo.png` encrypts to `pics/encrypted/photo_encrypted.png`. The
//! marker is spliced in front of the last four characters of the file name,
//! whatever they are: `archive.jpeg` becomes `archive._encryptedjpeg`, not
//! `archive_encrypted.jpeg`.

use crate::config::Mode;
use crate::consts::NAME_TAIL_CHARS;
use crate::error::ImgcryptError;
use std::io;
use std::path::{Path, PathBuf};

/// Insert `marker` before the last [`NAME_TAIL_CHARS`] characters of `name`.
///
/// Counts characters, not bytes. Names of four characters or fewer get the
/// marker in front.
#[must_use]
pub fn splice_name(name: &str, marker: &str) -> String {
    let split_char = name.chars().count().saturating_sub(NAME_TAIL_CHARS);
    let split_byte = name
        .char_indices()
        .nth(split_char)
        .map_or(name.len(), |(i, _)| i);

    let (head, tail) = name.split_at(split_byte);
    let mut out = String::with_capacity(name.len() + marker.len());
    out.push_str(head);
    out.push_str(marker);
    out.push_str(tail);
    out
}

/// Directory receiving outputs for `input`: `<input dir>/encrypted` or
/// `<input dir>/decrypted`.
#[must_use]
pub fn output_dir(input: &Path, mode: Mode) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(mode.output_dir())
}

/// Full output path for `input`.
///
/// # Errors
///
/// [`ImgcryptError::Io`] when `input` has no UTF-8 file name.
pub fn output_path(input: &Path, mode: Mode) -> Result<PathBuf, ImgcryptError> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ImgcryptError::io(
                input,
                io::Error::new(io::ErrorKind::InvalidInput, "file name is missing or not UTF-8"),
            )
        })?;

    Ok(output_dir(input, mode).join(splice_name(name, mode.name_suffix())))
}
