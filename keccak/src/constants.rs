//! Fixed tables of the Keccak-f[1600] permutation.

/// Number of 64-bit lanes in the state.
pub const NUM_LANES: usize = 25;

/// Number of bytes in the state.
pub const STATE_BYTES: usize = 8 * NUM_LANES;

/// Number of rounds of Keccak-f[1600].
pub const NUM_ROUNDS: usize = 24;

/// Round constants, XORed into lane `(0, 0)` by the iota step.
pub const RC: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation applied to the lane carried into the `t`-th position of the rho/pi walk.
///
/// Entry `t` is the triangular number `(t + 1)(t + 2) / 2` reduced mod 64.
pub const RHO_OFFSETS: [u32; NUM_ROUNDS] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane index (`x + 5y`) visited at step `t` of the rho/pi walk, which starts at lane 1.
pub const PI_LANES: [usize; NUM_ROUNDS] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];
