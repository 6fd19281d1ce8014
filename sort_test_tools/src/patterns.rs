//! Input shapes for testing and benchmarking the sorts, all producing `i32` values.
//!
//! Random patterns share one seed per process so that a failure can be replayed by setting
//! `OVERRIDE_SEED` to the value printed by the failing test.

use std::cmp::Reverse;
use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = seeded_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Random values drawn from `distinct` different keys, the case three-way partitioning targets.
pub fn random_duplicates(len: usize, distinct: usize) -> Vec<i32> {
    // .:.:.:.:
    // ::::::::

    let upper = distinct.clamp(1, i32::MAX as usize) as i32;
    random_uniform(len, 0..upper)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // A few keys dominate, followed by a long tail of rare ones.

    if len == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng();
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
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

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let mut rng = seeded_rng();
    saw(len, saw_count, |_| rng.gen::<bool>())
}

pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::
    // Chunk lengths are picked from `range`, directions at random.

    let mut vals = random(len);
    let mut rng = seeded_rng();

    let mut start = 0;
    while start < len {
        let chunk_len = rng.gen_range(range.clone()).max(1);
        let end = (start + chunk_len).min(len);
        sort_chunk(&mut vals[start..end], rng.gen::<bool>());
        start = end;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let (first_half, second_half) = vals.split_at_mut(len / 2);

    first_half.sort();
    second_half.sort_by_key(|&e| Reverse(e));

    vals
}

/// Makes every later call to a random pattern draw fresh values instead of replaying the
/// per-process seed. Benchmarks should call this once up front.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    *lock_seed() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn lock_seed() -> std::sync::MutexGuard<'static, Option<(SeedType, u64)>> {
    // A test that panicked while holding the lock leaves the seed itself intact.
    SEED_TYPE_AND_VALUE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *lock_seed().get_or_insert_with(|| {
        match env::var("OVERRIDE_SEED") {
            Ok(seed) => {
                let seed = u64::from_str(seed.trim())
                    .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: '{seed}'"));
                (SeedType::ExternalOverride, seed)
            }
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (seed_type, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn saw(len: usize, saw_count: usize, mut ascending: impl FnMut(usize) -> bool) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        sort_chunk(chunk, ascending(i));
    }

    vals
}

fn sort_chunk(chunk: &mut [i32], ascending: bool) {
    if ascending {
        chunk.sort();
    } else {
        chunk.sort_by_key(|&e| Reverse(e));
    }
}
