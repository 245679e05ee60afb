//! The Keccak-f[1600] permutation.

#![no_std]

mod constants;
mod round;
mod state;

pub use constants::*;
use k3_symmetric::{CryptographicPermutation, Permutation};
pub use round::*;
pub use state::*;

/// The Keccak-f[1600] permutation.
#[derive(Copy, Clone, Debug, Default)]
pub struct KeccakF;

impl Permutation<[u64; NUM_LANES]> for KeccakF {
    fn permute_mut(&self, state: &mut [u64; NUM_LANES]) {
        keccak_f(state);
    }
}

impl CryptographicPermutation<[u64; NUM_LANES]> for KeccakF {}

impl Permutation<KeccakState> for KeccakF {
    fn permute_mut(&self, state: &mut KeccakState) {
        let mut lanes = state.to_lanes();
        keccak_f(&mut lanes);
        state.store_lanes(&lanes);
    }
}

impl CryptographicPermutation<KeccakState> for KeccakF {}
