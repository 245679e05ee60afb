use core::fmt;

use crate::constants::{NUM_LANES, STATE_BYTES};

/// The 1600-bit Keccak state.
///
/// The state is stored as 200 bytes. Lane `(x, y)` is the little-endian `u64` at byte offset
/// `8 * (x + 5 * y)`, so writes through the byte view and the lane view always observe each
/// other.
#[derive(Clone, PartialEq, Eq)]
pub struct KeccakState {
    bytes: [u8; STATE_BYTES],
}

impl KeccakState {
    /// The all-zero state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; STATE_BYTES],
        }
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; STATE_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub fn from_lanes(lanes: [u64; NUM_LANES]) -> Self {
        let mut state = Self::new();
        state.store_lanes(&lanes);
        state
    }

    /// Reads all 25 lanes, indexed by `x + 5 * y`.
    #[must_use]
    pub fn to_lanes(&self) -> [u64; NUM_LANES] {
        core::array::from_fn(|i| self.lane_at(i))
    }

    /// Overwrites all 25 lanes.
    pub fn store_lanes(&mut self, lanes: &[u64; NUM_LANES]) {
        for (chunk, lane) in self.bytes.chunks_exact_mut(8).zip(lanes) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
    }

    /// Returns lane `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is not below 5.
    #[must_use]
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.lane_at(lane_index(x, y))
    }

    /// Overwrites lane `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is not below 5.
    pub fn set_lane(&mut self, x: usize, y: usize, value: u64) {
        let i = lane_index(x, y);
        self.bytes[8 * i..8 * i + 8].copy_from_slice(&value.to_le_bytes());
    }

    /// XORs `value` into lane `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is not below 5.
    pub fn xor_lane(&mut self, x: usize, y: usize, value: u64) {
        let i = lane_index(x, y);
        for (byte, v) in self.bytes[8 * i..8 * i + 8]
            .iter_mut()
            .zip(value.to_le_bytes())
        {
            *byte ^= v;
        }
    }

    /// XORs `value` into byte `index` of the byte view.
    #[inline]
    pub fn xor_byte(&mut self, index: usize, value: u8) {
        self.bytes[index] ^= value;
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; STATE_BYTES] {
        &self.bytes
    }

    pub const fn as_bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
        &mut self.bytes
    }

    #[inline]
    fn lane_at(&self, i: usize) -> u64 {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&self.bytes[8 * i..8 * i + 8]);
        u64::from_le_bytes(chunk)
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u64; NUM_LANES]> for KeccakState {
    fn from(lanes: [u64; NUM_LANES]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl From<&KeccakState> for [u64; NUM_LANES] {
    fn from(state: &KeccakState) -> Self {
        state.to_lanes()
    }
}

impl fmt::Debug for KeccakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakState")
            .field("lanes", &self.to_lanes())
            .finish()
    }
}

#[inline]
fn lane_index(x: usize, y: usize) -> usize {
    assert!(x < 5 && y < 5, "lane ({x}, {y}) is outside the 5x5 state");
    x + 5 * y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_view_is_little_endian_over_bytes() {
        let mut state = KeccakState::new();
        state.set_lane(1, 0, 0x0807_0605_0403_0201);
        assert_eq!(&state.as_bytes()[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(state.as_bytes()[..8].iter().all(|&b| b == 0));
        assert!(state.as_bytes()[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn byte_writes_are_visible_through_lanes() {
        let mut state = KeccakState::new();
        // Byte 8 * (2 + 5 * 3) + 7 is the most significant byte of lane (2, 3).
        state.xor_byte(8 * 17 + 7, 0xAB);
        assert_eq!(state.lane(2, 3), 0xAB00_0000_0000_0000);
        state.as_bytes_mut()[8 * 17] = 0x01;
        assert_eq!(state.lane(2, 3), 0xAB00_0000_0000_0001);
        assert_eq!(state.to_lanes()[17], 0xAB00_0000_0000_0001);
    }

    #[test]
    fn xor_lane_accumulates() {
        let mut state = KeccakState::new();
        state.xor_lane(4, 4, 0xFF00);
        state.xor_lane(4, 4, 0x0FF0);
        assert_eq!(state.lane(4, 4), 0xF0F0);
        assert_eq!(state.as_bytes()[8 * 24], 0xF0);
        assert_eq!(state.as_bytes()[8 * 24 + 1], 0xF0);
    }

    #[test]
    fn lanes_round_trip_through_bytes() {
        let lanes: [u64; NUM_LANES] =
            core::array::from_fn(|i| (i as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let state = KeccakState::from(lanes);
        assert_eq!(state.to_lanes(), lanes);
        assert_eq!(KeccakState::from_bytes(*state.as_bytes()), state);
    }

    #[test]
    #[should_panic]
    fn out_of_range_lane_panics() {
        let _ = KeccakState::new().lane(5, 0);
    }
}
