//! tests/common.rs
//! Common constants and helpers shared across test files

use imgcrypt_rs::aliases::PasswordString;
use imgcrypt_rs::{KdfParams, Prf};

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password
#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "correct horse";

#[allow(dead_code)]
pub fn fast_params() -> KdfParams {
    KdfParams {
        iterations: TEST_ITERATIONS,
        prf: Prf::Sha1,
    }
}

#[allow(dead_code)]
pub fn password(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}
