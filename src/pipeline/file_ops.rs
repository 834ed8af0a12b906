//! Single-file transforms: read whole file → envelope ↔ plaintext → write.

use crate::aliases::PasswordString;
use crate::config::Mode;
use crate::crypto::kdf::KdfParams;
use crate::error::ImgcryptError;
use crate::pipeline::paths::output_path;
use crate::{decrypt_bytes, encrypt_bytes};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Encrypt one file into `<dir>/encrypted/<name>_encrypted<tail>`.
///
/// Returns the output path.
pub fn encrypt_file(
    path: &Path,
    password: &PasswordString,
    params: &KdfParams,
) -> Result<PathBuf, ImgcryptError> {
    transform_file(path, password, params, Mode::Encrypt)
}

/// Decrypt one envelope into `<dir>/decrypted/<name>_decrypted<tail>`.
///
/// Trailing zero bytes are stripped from the result, including any that
/// belonged to the original file.
pub fn decrypt_file(
    path: &Path,
    password: &PasswordString,
    params: &KdfParams,
) -> Result<PathBuf, ImgcryptError> {
    transform_file(path, password, params, Mode::Decrypt)
}

/// Shared body of [`encrypt_file`] and [`decrypt_file`].
pub fn transform_file(
    path: &Path,
    password: &PasswordString,
    params: &KdfParams,
    mode: Mode,
) -> Result<PathBuf, ImgcryptError> {
    if password.expose_secret().is_empty() {
        return Err(ImgcryptError::EmptyPassword);
    }

    let input = fs::read(path).map_err(|e| ImgcryptError::io(path, e))?;

    let output = match mode {
        Mode::Encrypt => encrypt_bytes(&input, password, params)?,
        Mode::Decrypt => decrypt_bytes(&input, password, params)?,
    };

    let out_path = output_path(path, mode)?;
    write_output(&out_path, &output)?;

    debug!(
        input = %path.display(),
        output = %out_path.display(),
        in_len = input.len(),
        out_len = output.len(),
        "{mode} complete"
    );

    Ok(out_path)
}

/// Create the parent directory if needed, then write `data` to a temporary
/// file next to `out_path` and rename it into place.
pub fn write_output(out_path: &Path, data: &[u8]) -> Result<(), ImgcryptError> {
    let dir = match out_path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ImgcryptError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ImgcryptError::io(dir, e))?;
    tmp.write_all(data)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ImgcryptError::io(tmp.path(), e))?;
    tmp.persist(out_path)
        .map_err(|e| ImgcryptError::io(out_path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::kdf::Prf;
    use tempfile::tempdir;

    const FAST: KdfParams = KdfParams {
        iterations: 5,
        prf: Prf::Sha1,
    };

    fn password(s: &str) -> PasswordString {
        PasswordString::new(s.to_string())
    }

    #[test]
    fn missing_input_is_io_error_with_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let err = encrypt_file(&missing, &password("pw"), &FAST).unwrap_err();
        match err {
            ImgcryptError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_password_touches_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("a.png");
        fs::write(&input, b"img").unwrap();

        let err = encrypt_file(&input, &password(""), &FAST).unwrap_err();
        assert!(matches!(err, ImgcryptError::EmptyPassword));
        assert!(!dir.path().join("encrypted").exists());
    }

    #[test]
    fn write_output_creates_dir_and_overwrites() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("encrypted").join("x_encrypted.png");

        write_output(&out, b"first").unwrap();
        write_output(&out, b"second").unwrap();

        assert_eq!(fs::read(&out).unwrap(), b"second");
        assert_eq!(fs::read_dir(out.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn short_envelope_file_reports_too_short() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.png");
        fs::write(&input, [0u8; 10]).unwrap();

        let err = decrypt_file(&input, &password("pw"), &FAST).unwrap_err();
        assert!(matches!(err, ImgcryptError::EnvelopeTooShort { len: 10 }));
        assert!(!dir.path().join("decrypted").join("bad_decrypted.png").exists());
    }
}
