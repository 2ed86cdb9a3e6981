use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Returns the process-wide seed every pattern derives its randomness from.
///
/// Set `OVERRIDE_SEED=<u64>` to replay a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(value) => u64::from_str(&value)
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got {value:?}")),
            Err(_) => thread_rng().gen(),
        };
        eprintln!("Seed: {seed}");
        seed
    })
}

/// A fresh generator seeded from [`random_init_seed`].
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng();
    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|_| panic!("invalid zipf parameters: len {len}, exponent {exponent}"));
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    let mut v = random(len);
    v.sort();
    v
}

pub fn random_binary(len: usize) -> Vec<i32> {
    // :.:..::.

    random_uniform(len, 0..=1)
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

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let saw_count = saw_count.clamp(1, len);
    let saw_len = len.div_ceil(saw_count);

    let mut rng = seeded_rng();
    let mut v = random(len);
    for chunk in v.chunks_mut(saw_len) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = &mut v[0..(len / 2)];
    first_half.sort();

    let second_half = &mut v[(len / 2)..len];
    second_half.sort_by(|a, b| b.cmp(a));

    v
}
