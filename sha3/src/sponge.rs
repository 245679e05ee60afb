//! The absorb/squeeze protocol over the byte view of a [`KeccakState`].

use core::slice;

use k3_keccak::{KeccakF, KeccakState, STATE_BYTES};
use k3_symmetric::Permutation;
use tracing::{debug, instrument};

use crate::config::{FINAL_PAD, SpongeConfig};
use crate::error::{DigestError, DigestResult};

/// XORs `message` into the first `rate` bytes of `state`, permuting after every full block.
///
/// Returns the number of bytes of the current, not yet permuted, block that are filled. Padding
/// starts at that offset.
pub fn absorb(state: &mut KeccakState, message: &[u8], rate: usize) -> usize {
    absorb_at(state, 0, message, rate)
}

/// Continues absorbing from a block that already holds `offset` bytes.
///
/// Absorbing `a` and then `b` from the returned offset is the same as absorbing `a ++ b`.
///
/// # Panics
/// Panics if `rate` is not in `1..=200` or `offset >= rate`.
pub fn absorb_at(
    state: &mut KeccakState,
    mut offset: usize,
    message: &[u8],
    rate: usize,
) -> usize {
    assert!(
        rate > 0 && rate <= STATE_BYTES,
        "rate of {rate} bytes is outside 1..={STATE_BYTES}"
    );
    assert!(offset < rate, "offset {offset} is outside a {rate}-byte block");

    for &byte in message {
        state.xor_byte(offset, byte);
        offset += 1;
        if offset == rate {
            KeccakF.permute_mut(state);
            offset = 0;
        }
    }
    offset
}

/// Pads the current block, permutes once and copies `out.len()` bytes of the state into `out`.
///
/// `offset` is the value returned by [`absorb`]. When `offset == rate - 1` the domain byte and the
/// final padding bit land on the same byte.
///
/// # Panics
/// Panics if `rate` is not in `1..=200`, `offset >= rate`, or `out` is longer than `rate`; a
/// single squeeze cannot produce more than one block.
pub fn squeeze(state: &mut KeccakState, out: &mut [u8], domain: u8, rate: usize, offset: usize) {
    assert!(
        rate > 0 && rate <= STATE_BYTES,
        "rate of {rate} bytes is outside 1..={STATE_BYTES}"
    );
    assert!(offset < rate, "offset {offset} is outside a {rate}-byte block");
    assert!(
        out.len() <= rate,
        "cannot squeeze {} bytes from a {rate}-byte rate",
        out.len()
    );

    state.xor_byte(offset, domain);
    state.xor_byte(rate - 1, FINAL_PAD);
    KeccakF.permute_mut(state);

    out.copy_from_slice(&state.as_bytes()[..out.len()]);
}

/// Hashes `input` under `config`, writing the digest to the front of `out`.
///
/// Bytes of `out` past the digest length are left untouched.
#[instrument(level = "trace", skip_all, fields(rate = config.rate(), input_len = input.len()))]
pub fn keccak_digest_into(
    config: &SpongeConfig,
    input: &[u8],
    out: &mut [u8],
) -> DigestResult<()> {
    let provided = out.len();
    let Some(digest) = out.get_mut(..config.output_len()) else {
        debug!(provided, "output buffer too short");
        return Err(DigestError::OutputTooShort {
            required: config.output_len(),
            provided,
        });
    };

    hash_slices(config, [input], digest);
    Ok(())
}

/// Hashes the concatenation of `input` into `out`, which must be exactly one digest long.
pub(crate) fn hash_slices<'a, I>(config: &SpongeConfig, input: I, out: &mut [u8])
where
    I: IntoIterator<Item = &'a [u8]>,
{
    debug_assert_eq!(out.len(), config.output_len());

    let mut state = KeccakState::new();
    let offset = input.into_iter().fold(0, |offset, chunk| {
        absorb_at(&mut state, offset, chunk, config.rate())
    });
    squeeze(&mut state, out, config.domain(), config.rate(), offset);
}

/// Like [`hash_slices`], for input that arrives one byte at a time.
pub(crate) fn hash_bytes<I>(config: &SpongeConfig, input: I, out: &mut [u8])
where
    I: IntoIterator<Item = u8>,
{
    debug_assert_eq!(out.len(), config.output_len());

    let mut state = KeccakState::new();
    let offset = input.into_iter().fold(0, |offset, byte| {
        absorb_at(&mut state, offset, slice::from_ref(&byte), config.rate())
    });
    squeeze(&mut state, out, config.domain(), config.rate(), offset);
}
