//! Input generators shared by the test suite and the benchmarks.
//!
//! All random patterns draw from one process-wide seed, see [`random_init_seed`].

use std::env;
use std::ops::{Range, RangeInclusive};

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Seed used by every random pattern in this process.
///
/// Set `OVERRIDE_SEED=<u64>` to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Random values with a zipfian distribution, few values repeat a lot.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

/// Alternating ascending and descending runs of roughly `len / saw_count` elements.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    //    :.  :.
    //  .::.:::.
    // .::::::::

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    let mut v = ascending(half);
    v.extend(descending(len - half));

    v
}

/// Mostly ascending data with a few random swaps in `range`.
pub fn ascending_with_swaps(len: usize, swaps: Range<usize>) -> Vec<i32> {
    let mut v = ascending(len);
    if len < 2 {
        return v;
    }

    let mut rng = new_seeded_rng();
    let swap_count = rng.gen_range(swaps);
    for _ in 0..swap_count {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        v.swap(a, b);
    }

    v
}
