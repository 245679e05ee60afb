use k3_keccak::STATE_BYTES;
use tracing::debug;

use crate::error::{DigestError, DigestResult};

/// Domain separation byte of the FIPS 202 SHA-3 functions.
pub const SHA3_DOMAIN: u8 = 0x06;

/// Domain separation byte of the original Keccak submission (as used by Ethereum).
pub const KECCAK_DOMAIN: u8 = 0x01;

/// The final padding bit, XORed into the last byte of the rate block.
pub const FINAL_PAD: u8 = 0x80;

/// Parameters of a fixed-output Keccak sponge.
///
/// Every value of this type satisfies `0 < output_len <= rate <= 200`, so the digest is always
/// squeezed with a single permutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpongeConfig {
    rate: usize,
    output_len: usize,
    domain: u8,
}

pub const SHA3_224: SpongeConfig = SpongeConfig::sha3(224);
pub const SHA3_256: SpongeConfig = SpongeConfig::sha3(256);
pub const SHA3_384: SpongeConfig = SpongeConfig::sha3(384);
pub const SHA3_512: SpongeConfig = SpongeConfig::sha3(512);
pub const KECCAK_256: SpongeConfig = SpongeConfig::keccak(256);

impl SpongeConfig {
    /// The SHA-3 function with an `output_bits`-bit digest.
    ///
    /// The rate is `200 - 2 * output_bits / 8` bytes.
    ///
    /// # Panics
    /// Panics if `output_bits` is not a positive multiple of 8 or the digest would not fit in
    /// one rate block.
    #[must_use]
    pub const fn sha3(output_bits: usize) -> Self {
        Self::with_capacity_for(output_bits, SHA3_DOMAIN)
    }

    /// Like [`SpongeConfig::sha3`], but with the original Keccak padding.
    ///
    /// # Panics
    /// Same conditions as [`SpongeConfig::sha3`].
    #[must_use]
    pub const fn keccak(output_bits: usize) -> Self {
        Self::with_capacity_for(output_bits, KECCAK_DOMAIN)
    }

    const fn with_capacity_for(output_bits: usize, domain: u8) -> Self {
        assert!(output_bits > 0 && output_bits % 8 == 0);
        let output_len = output_bits / 8;
        assert!(3 * output_len <= STATE_BYTES, "digest does not fit in one rate block");
        Self {
            rate: STATE_BYTES - 2 * output_len,
            output_len,
            domain,
        }
    }

    /// Builds a configuration from explicit parameters.
    pub fn new(rate: usize, output_len: usize, domain: u8) -> DigestResult<Self> {
        if rate == 0 || rate > STATE_BYTES {
            debug!(rate, "rejecting sponge rate");
            return Err(DigestError::InvalidRate { rate });
        }
        if output_len == 0 {
            debug!(rate, "rejecting empty digest");
            return Err(DigestError::EmptyOutput);
        }
        if output_len > rate {
            debug!(rate, output_len, "rejecting multi-block squeeze");
            return Err(DigestError::OutputExceedsRate { output_len, rate });
        }
        Ok(Self {
            rate,
            output_len,
            domain,
        })
    }

    /// Bytes absorbed per permutation.
    #[must_use]
    pub const fn rate(&self) -> usize {
        self.rate
    }

    /// State bytes never written by input.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        STATE_BYTES - self.rate
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    #[must_use]
    pub const fn domain(&self) -> u8 {
        self.domain
    }
}
