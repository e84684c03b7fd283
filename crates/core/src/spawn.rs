//! Spawner - uniform single-pass choice of an empty cell

use crate::rng::RandomSource;

/// Pick one item uniformly from `items` in a single pass.
///
/// Reservoir sampling of size 1: the k-th item replaces the current pick
/// with probability 1/k. Returns `None` for an empty stream.
pub fn pick_uniform<T, I, R>(items: I, rng: &mut R) -> Option<T>
where
    I: IntoIterator<Item = T>,
    R: RandomSource + ?Sized,
{
    let mut seen = 0u64;
    let mut picked = None;
    for item in items {
        seen += 1;
        if rng.next_below(seen) == 0 {
            picked = Some(item);
        }
    }
    picked
}
