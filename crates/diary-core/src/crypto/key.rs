//! Session key material.
//!
//! The key is the raw UTF-8 bytes of the password, with no derivation step.
//! See the module docs of [`crate::crypto`] for why.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::codec::check_key;
use crate::error::Result;

/// Key bytes held for the lifetime of a diary session.
///
/// This type ensures that key material is zeroized from memory when dropped
/// and never shows up in `Debug` output.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey {
    bytes: Vec<u8>,
}

impl SessionKey {
    /// Build a key from a password.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Crypto` if the password is not 4 to 56 bytes long
    /// once encoded as UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use diary_core::crypto::SessionKey;
    ///
    /// let key = SessionKey::from_password("secret123").unwrap();
    /// assert_eq!(key.as_bytes(), b"secret123");
    /// assert!(SessionKey::from_password("abc").is_err());
    /// ```
    pub fn from_password(password: &str) -> Result<Self> {
        check_key(password.as_bytes())?;
        Ok(Self {
            bytes: password.as_bytes().to_vec(),
        })
    }

    /// Get the raw key bytes.
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
