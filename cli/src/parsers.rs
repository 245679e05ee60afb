//! Command line enums.
//!
//! Each option may be given by its full name or by any prefix which determines it uniquely, plus
//! a few natural aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use k3_sha3::Sha3Variant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmOptions {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak256,
}

/// Produce a `PossibleValue` accepting `base`, its prefixes of at least `min_unique_base_prefix`
/// characters, and each alias together with its prefixes of at least the given length.
///
/// For example `get_aliases("sha3-384", 6, vec![("384", 3)])` accepts
///
/// ```text
/// sha3-3, sha3-38, sha3-384, 384
/// ```
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    alias: Vec<(&'static str, usize)>,
) -> PossibleValue {
    PossibleValue::new(base).aliases(
        (min_unique_base_prefix..base.len())
            .map(|i| &base[..i])
            .chain(alias.into_iter().flat_map(|(alias, min_unique)| {
                (min_unique..alias.len() + 1).map(|i| &alias[..i])
            })),
    )
}

impl ValueEnum for AlgorithmOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            AlgorithmOptions::Sha3_224,
            AlgorithmOptions::Sha3_256,
            AlgorithmOptions::Sha3_384,
            AlgorithmOptions::Sha3_512,
            AlgorithmOptions::Keccak256,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            AlgorithmOptions::Sha3_224 => get_aliases("sha3-224", 7, vec![("224", 3)]),
            AlgorithmOptions::Sha3_256 => get_aliases("sha3-256", 7, vec![("256", 3)]),
            AlgorithmOptions::Sha3_384 => get_aliases("sha3-384", 6, vec![("384", 3)]),
            AlgorithmOptions::Sha3_512 => get_aliases("sha3-512", 6, vec![("512", 3)]),
            AlgorithmOptions::Keccak256 => get_aliases("keccak-256", 1, vec![("keccak256", 7)]),
        })
    }
}

impl From<AlgorithmOptions> for Sha3Variant {
    fn from(options: AlgorithmOptions) -> Self {
        match options {
            AlgorithmOptions::Sha3_224 => Sha3Variant::Sha3_224,
            AlgorithmOptions::Sha3_256 => Sha3Variant::Sha3_256,
            AlgorithmOptions::Sha3_384 => Sha3Variant::Sha3_384,
            AlgorithmOptions::Sha3_512 => Sha3Variant::Sha3_512,
            AlgorithmOptions::Keccak256 => Sha3Variant::Keccak256,
        }
    }
}
