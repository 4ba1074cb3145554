//! Cryptographic operations for diary entries.
//!
//! - **codec**: Blowfish/ECB/PKCS#7 encryption with base64 transport encoding
//! - **key**: in-memory session key material
//!
//! ## Security Model
//!
//! The on-disk format predates this crate and is kept byte-compatible with
//! existing diaries:
//! - The raw UTF-8 password bytes are the Blowfish key (4 to 56 bytes)
//! - No salt, no key stretching, no authentication tag
//! - ECB mode: identical 8-byte plaintext blocks encrypt identically
//!
//! This protects entries against casual reading of the data directory only.
//! It does NOT resist offline brute-force of weak passwords, and tampering is
//! detected only incidentally (through padding or parse failures).
//!
//! Key bytes are zeroized from memory on drop and never logged.

pub mod codec;
pub mod key;

pub use codec::{check_key, decrypt, encrypt, BLOCK_SIZE, MAX_KEY_LEN, MIN_KEY_LEN};
pub use key::SessionKey;
