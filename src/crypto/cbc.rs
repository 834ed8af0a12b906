//! src/crypto/cbc.rs
//! AES-256-CBC over whole, block-aligned buffers
//!
//! The block primitive comes from `aes`; chaining is done here with
//! [`xor_blocks`]. No padding is applied at this layer: callers hand in a
//! buffer whose length is a multiple of [`BLOCK_SIZE`] and get one back.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::BLOCK_SIZE;
use crate::error::ImgcryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

#[inline]
fn check_aligned(len: usize) -> Result<(), ImgcryptError> {
    if len % BLOCK_SIZE != 0 {
        return Err(ImgcryptError::InvalidInputLength { len });
    }
    Ok(())
}

/// Encrypt a block-aligned buffer with AES-256-CBC.
///
/// # Errors
///
/// [`ImgcryptError::InvalidInputLength`] if `padded.len() % 16 != 0`.
pub fn encrypt_blocks(
    key: &Aes256Key32,
    iv: &Iv16,
    padded: &[u8],
) -> Result<Vec<u8>, ImgcryptError> {
    check_aligned(padded.len())?;

    let cipher = Aes256Enc::new(key.expose_secret().into());
    let mut ciphertext = Vec::with_capacity(padded.len());

    // previous ciphertext block – starts as the IV
    let mut prev_block: [u8; 16] = *iv.expose_secret();
    let mut xor_output = Block16::new([0u8; 16]);

    for plaintext_block in padded.chunks_exact(BLOCK_SIZE) {
        xor_blocks(plaintext_block, &prev_block, xor_output.expose_secret_mut());

        let mut aes_block = AesBlock::from(*xor_output.expose_secret());
        cipher.encrypt_block(&mut aes_block);

        prev_block.copy_from_slice(&aes_block);
        ciphertext.extend_from_slice(&aes_block);
    }

    Ok(ciphertext)
}

/// Decrypt a block-aligned AES-256-CBC buffer.
///
/// A key or IV that does not match the one used for encryption produces
/// meaningless bytes, never an error: there is nothing to authenticate
/// against.
///
/// # Errors
///
/// [`ImgcryptError::InvalidInputLength`] if `ciphertext.len() % 16 != 0`.
pub fn decrypt_blocks(
    key: &Aes256Key32,
    iv: &Iv16,
    ciphertext: &[u8],
) -> Result<Vec<u8>, ImgcryptError> {
    check_aligned(ciphertext.len())?;

    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut plaintext = vec![0u8; ciphertext.len()];
    let mut prev_block: [u8; 16] = *iv.expose_secret();

    for (chunk, target) in ciphertext
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut aes_block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut aes_block);
        xor_blocks(&aes_block, &prev_block, target);
        prev_block.copy_from_slice(chunk);
    }

    Ok(plaintext)
}
