//! Storage for diary entries.
//!
//! ## Architecture
//!
//! - **layout**: date → file path mapping and its configuration
//! - **traits**: the `EntryStorage` interface
//! - **file_store**: one encrypted file per date on the local filesystem
//!
//! ## On-disk format
//!
//! `root/<dir name>/<file name>.json`, containing the base64 Blowfish
//! ciphertext of `{"date":"YYYY-MM-DD","entry":"..."}`. Despite the suffix
//! the bytes on disk are not JSON.

pub mod file_store;
pub mod layout;
pub mod traits;

// Re-export public types
pub use file_store::EntryStore;
pub use layout::{LayoutConfig, PathLayout};
pub use traits::EntryStorage;
