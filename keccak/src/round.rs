//! The five step mappings of a Keccak-f[1600] round, acting on the lane view of the state.
//!
//! Lanes are indexed by `x + 5 * y`.

use crate::constants::{NUM_LANES, NUM_ROUNDS, PI_LANES, RC, RHO_OFFSETS};

/// XORs every lane with the parities of the two neighbouring columns.
#[inline(always)]
pub fn theta(a: &mut [u64; NUM_LANES]) {
    let c: [u64; 5] =
        core::array::from_fn(|x| a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20]);

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..NUM_LANES).step_by(5) {
            a[y + x] ^= d;
        }
    }
}

/// Rotates each lane by its rho offset while moving it to its pi position.
///
/// Walks the single 24-cycle of the pi mapping starting from lane 1, carrying the displaced lane
/// forward. Lane 0 is fixed by both steps.
#[inline(always)]
pub fn rho_pi(a: &mut [u64; NUM_LANES]) {
    let mut carried = a[1];
    for (&lane, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let displaced = a[lane];
        a[lane] = carried.rotate_left(offset);
        carried = displaced;
    }
}

/// The only non-linear step: `a[x] ^= !a[x + 1] & a[x + 2]` along each row.
#[inline(always)]
pub fn chi(a: &mut [u64; NUM_LANES]) {
    for y in (0..NUM_LANES).step_by(5) {
        let row: [u64; 5] = core::array::from_fn(|x| a[y + x]);
        for x in 0..5 {
            a[y + x] ^= !row[(x + 1) % 5] & row[(x + 2) % 5];
        }
    }
}

/// XORs the round constant into lane `(0, 0)`.
///
/// # Panics
/// Panics if `round >= 24`.
#[inline(always)]
pub fn iota(a: &mut [u64; NUM_LANES], round: usize) {
    a[0] ^= RC[round];
}

/// One full round: theta, rho, pi, chi, iota.
#[inline(always)]
pub fn round(a: &mut [u64; NUM_LANES], round: usize) {
    theta(a);
    rho_pi(a);
    chi(a);
    iota(a, round);
}

/// The Keccak-f[1600] permutation: all 24 rounds, in place.
pub fn keccak_f(a: &mut [u64; NUM_LANES]) {
    for i in 0..NUM_ROUNDS {
        round(a, i);
    }
}
