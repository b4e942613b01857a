//! Random-selection helpers used by the unit generator.
//!
//! Kept separate so the two sampling capabilities the generator needs
//! (uniform choice with replacement, k distinct without replacement) are
//! explicit and individually testable with a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform choice with replacement, returned as an index.
///
/// Callers that carry positionally paired data (unit types and base
/// prices) read both slots at the returned index.
pub fn choose_index<R: Rng>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

/// Uniform choice with replacement over a slice of labels.
pub fn choose<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Sample `k` distinct labels without replacement.
///
/// Any k-subset is equally likely; order within the sample is whatever
/// the shuffle produced and carries no meaning.
pub fn sample_distinct<R: Rng>(rng: &mut R, pool: &[&str], k: usize) -> Vec<String> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().take(k).map(str::to_string).collect()
}
