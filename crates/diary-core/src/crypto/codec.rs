//! Blowfish encryption with base64 transport encoding.
//!
//! Entries are encrypted with Blowfish in ECB mode with PKCS#5/7 padding and
//! no IV. The ciphertext is stored as standard base64 text, which is the whole
//! content of an entry file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use blowfish::Blowfish;
use ecb::cipher::block_padding::Pkcs7;
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::error::{DiaryError, Result};

type BlowfishEcbEnc = ecb::Encryptor<Blowfish>;
type BlowfishEcbDec = ecb::Decryptor<Blowfish>;

/// Blowfish block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Shortest key Blowfish accepts (32 bits).
pub const MIN_KEY_LEN: usize = 4;

/// Longest key Blowfish accepts (448 bits).
pub const MAX_KEY_LEN: usize = 56;

/// Check that `key` is usable as a Blowfish key.
///
/// # Errors
///
/// Returns `DiaryError::Crypto` if the key is shorter than [`MIN_KEY_LEN`] or
/// longer than [`MAX_KEY_LEN`] bytes.
pub fn check_key(key: &[u8]) -> Result<()> {
    if key.len() < MIN_KEY_LEN || key.len() > MAX_KEY_LEN {
        return Err(DiaryError::Crypto(format!(
            "Key must be between {} and {} bytes (got {})",
            MIN_KEY_LEN,
            MAX_KEY_LEN,
            key.len()
        )));
    }
    Ok(())
}

/// Encrypt `plaintext` under `key` and return base64 ciphertext.
///
/// The same plaintext and key always produce the same ciphertext.
///
/// # Examples
///
/// ```
/// use diary_core::crypto::encrypt;
///
/// let ciphertext = encrypt("Hello diary", b"secret123").unwrap();
/// assert_eq!(ciphertext, "StnqXQIZLraHcEDyJqYZ8w==");
/// ```
pub fn encrypt(plaintext: &str, key: &[u8]) -> Result<String> {
    check_key(key)?;
    let cipher = BlowfishEcbEnc::new_from_slice(key)
        .map_err(|e| DiaryError::Crypto(format!("Failed to create cipher: {}", e)))?;

    let encrypted = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(STANDARD.encode(encrypted))
}

/// Decrypt base64 `ciphertext` produced by [`encrypt`].
///
/// # Errors
///
/// Returns `DiaryError::Crypto` if:
/// - The key length is unusable
/// - The input is not valid base64
/// - The decoded length is zero or not a whole number of blocks
/// - The padding check fails (almost always a wrong password)
/// - The decrypted bytes are not UTF-8
///
/// # Examples
///
/// ```
/// use diary_core::crypto::{decrypt, encrypt};
///
/// let ciphertext = encrypt("Hello diary", b"secret123").unwrap();
/// assert_eq!(decrypt(&ciphertext, b"secret123").unwrap(), "Hello diary");
/// ```
pub fn decrypt(ciphertext: &str, key: &[u8]) -> Result<String> {
    check_key(key)?;

    let encrypted = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| DiaryError::Crypto(format!("Ciphertext is not valid base64: {}", e)))?;
    if encrypted.is_empty() {
        return Err(DiaryError::Crypto("Ciphertext is empty".to_string()));
    }
    if encrypted.len() % BLOCK_SIZE != 0 {
        return Err(DiaryError::Crypto(format!(
            "Ciphertext length {} is not a multiple of {}",
            encrypted.len(),
            BLOCK_SIZE
        )));
    }

    let cipher = BlowfishEcbDec::new_from_slice(key)
        .map_err(|e| DiaryError::Crypto(format!("Failed to create cipher: {}", e)))?;
    let decrypted = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&encrypted)
        .map_err(|_| DiaryError::Crypto("Padding check failed".to_string()))?;

    String::from_utf8(decrypted)
        .map_err(|_| DiaryError::Crypto("Decrypted data is not valid UTF-8".to_string()))
}
