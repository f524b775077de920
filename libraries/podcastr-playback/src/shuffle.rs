//! Shuffle selection
//!
//! Shuffle does not reorder the episode list. Each "next" picks a random
//! index instead, never the one that is currently playing.

use rand::Rng;

/// Pick a random index in `0..len` that differs from `current`
///
/// With a single episode the only valid index is returned. Returns `None`
/// for an empty list.
pub fn pick_random_index<R: Rng>(rng: &mut R, len: usize, current: usize) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            // Draw from len - 1 slots and skip over `current`, which keeps
            // the remaining indices equally likely.
            let candidate = rng.gen_range(0..len - 1);
            if candidate >= current.min(len - 1) {
                Some(candidate + 1)
            } else {
                Some(candidate)
            }
        }
    }
}
