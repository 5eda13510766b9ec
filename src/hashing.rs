//! Hashing System - MD5 for Identicons, SHA-256 for Output Digests
//!
//! The MD5 digest of the input drives every visual property of the image.

use std::ffi::OsStr;

use md5::{Digest, Md5};
use sha2::Sha256;

use crate::pipeline::IdenticonError;
use crate::state::{ImageState, HASH_LEN};

/// Compute the 16-byte MD5 digest of raw bytes
pub fn md5_bytes(data: &[u8]) -> [u8; HASH_LEN] {
    let mut hasher = Md5::new();
    hasher.update(data);
    let mut digest = [0u8; HASH_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Start a pipeline run: a record carrying only the digest of `input`
pub fn hash_input(input: &str) -> ImageState {
    let hash = md5_bytes(input.as_bytes());
    log::debug!("hashed {:?} to {}", input, hex::encode(hash));
    ImageState::from_hash(hash)
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Borrow an OS-provided string as UTF-8, the only encoding the hasher accepts
pub fn input_from_os(input: &OsStr) -> Result<&str, IdenticonError> {
    input
        .to_str()
        .ok_or_else(|| IdenticonError::InputEncoding(input.to_string_lossy().into_owned()))
}
