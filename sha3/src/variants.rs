use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use k3_symmetric::CryptographicHasher;

use crate::config::{KECCAK_256, SHA3_224, SHA3_256, SHA3_384, SHA3_512, SpongeConfig};
use crate::error::DigestResult;
use crate::sponge::{hash_bytes, hash_slices, keccak_digest_into};

macro_rules! fixed_output_hasher {
    ($(#[$attr:meta])* $name:ident, $config:expr, $len:literal) => {
        $(#[$attr])*
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub const CONFIG: SpongeConfig = $config;
            pub const OUTPUT_LEN: usize = $len;
        }

        const _: () = assert!($config.output_len() == $len);

        impl CryptographicHasher<u8, [u8; $len]> for $name {
            fn hash_iter<I>(&self, input: I) -> [u8; $len]
            where
                I: IntoIterator<Item = u8>,
            {
                let mut output = [0u8; $len];
                hash_bytes(&Self::CONFIG, input, &mut output);
                output
            }

            fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; $len]
            where
                I: IntoIterator<Item = &'a [u8]>,
            {
                let mut output = [0u8; $len];
                hash_slices(&Self::CONFIG, input, &mut output);
                output
            }
        }
    };
}

fixed_output_hasher!(
    /// The SHA3-224 hash function.
    Sha3_224,
    SHA3_224,
    28
);
fixed_output_hasher!(
    /// The SHA3-256 hash function.
    Sha3_256,
    SHA3_256,
    32
);
fixed_output_hasher!(
    /// The SHA3-384 hash function.
    Sha3_384,
    SHA3_384,
    48
);
fixed_output_hasher!(
    /// The SHA3-512 hash function.
    Sha3_512,
    SHA3_512,
    64
);
fixed_output_hasher!(
    /// The `Keccak` hash function with a 256-bit digest, as defined in the
    /// [Keccak SHA3 submission](https://keccak.team/files/Keccak-submission-3.pdf).
    ///
    /// Identical to SHA3-256 apart from its domain separation byte.
    Keccak256,
    KECCAK_256,
    32
);

/// A runtime choice among the fixed-output hash functions.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sha3Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak256,
}

impl Sha3Variant {
    pub const ALL: [Self; 5] = [
        Self::Sha3_224,
        Self::Sha3_256,
        Self::Sha3_384,
        Self::Sha3_512,
        Self::Keccak256,
    ];

    #[must_use]
    pub const fn config(self) -> SpongeConfig {
        match self {
            Self::Sha3_224 => SHA3_224,
            Self::Sha3_256 => SHA3_256,
            Self::Sha3_384 => SHA3_384,
            Self::Sha3_512 => SHA3_512,
            Self::Keccak256 => KECCAK_256,
        }
    }

    #[must_use]
    pub const fn output_len(self) -> usize {
        self.config().output_len()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha3_224 => "SHA3-224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
            Self::Keccak256 => "Keccak-256",
        }
    }

    #[must_use]
    pub fn digest(self, input: &[u8]) -> Vec<u8> {
        let mut output = vec![0u8; self.output_len()];
        hash_slices(&self.config(), [input], &mut output);
        output
    }

    /// Writes the digest of `input` to the front of `out`.
    ///
    /// Fails without hashing if `out` is shorter than [`Sha3Variant::output_len`].
    pub fn digest_into(self, input: &[u8], out: &mut [u8]) -> DigestResult<()> {
        keccak_digest_into(&self.config(), input, out)
    }
}

impl fmt::Display for Sha3Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
