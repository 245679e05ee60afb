//! The SHA-3 fixed-length hash functions of FIPS 202, built on the Keccak-f[1600] sponge.
//!
//! ```
//! use k3_sha3::sha3_256;
//!
//! assert_eq!(sha3_256(b"abc")[..4], [0x3a, 0x98, 0x5d, 0xa7]);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod error;
pub mod sponge;
mod variants;

pub use config::*;
pub use error::*;
use k3_symmetric::CryptographicHasher;
pub use sponge::keccak_digest_into;
pub use variants::*;

/// Returns the SHA3-224 digest of `input`.
#[must_use]
pub fn sha3_224(input: &[u8]) -> [u8; 28] {
    Sha3_224.hash_slice(input)
}

/// Returns the SHA3-256 digest of `input`.
#[must_use]
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    Sha3_256.hash_slice(input)
}

/// Returns the SHA3-384 digest of `input`.
#[must_use]
pub fn sha3_384(input: &[u8]) -> [u8; 48] {
    Sha3_384.hash_slice(input)
}

/// Returns the SHA3-512 digest of `input`.
#[must_use]
pub fn sha3_512(input: &[u8]) -> [u8; 64] {
    Sha3_512.hash_slice(input)
}

/// Returns the Keccak-256 digest of `input`.
#[must_use]
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    Keccak256.hash_slice(input)
}
