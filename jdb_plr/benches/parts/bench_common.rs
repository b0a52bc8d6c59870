use std::hint::black_box;

use criterion::{BenchmarkId, measurement::WallTime};
use jdb_plr::{PlrConf, PlrIndex, compute_with_conf};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

pub const SEED: u64 = 42;

/// Shuffle pairs so the defensive sort has work to do
/// 打乱点对，使防御性排序真正生效
pub fn shuffled((lpns, ppns): (Vec<i64>, Vec<i64>)) -> (Vec<i64>, Vec<i64>) {
  let mut rng = StdRng::seed_from_u64(SEED);
  let mut pairs: Vec<(i64, i64)> = lpns.into_iter().zip(ppns).collect();
  pairs.shuffle(&mut rng);
  pairs.into_iter().unzip()
}

/// Random queries drawn from mapped keys (all hit)
/// 从已映射键中随机抽取查询（全部命中）
pub fn gen_queries(keys: &[i64], count: usize) -> Vec<i64> {
  let mut rng = StdRng::seed_from_u64(SEED);
  (0..count)
    .map(|_| keys[rng.random_range(0..keys.len())])
    .collect()
}

pub fn bench_compute(
  group: &mut criterion::BenchmarkGroup<WallTime>,
  keys: &[i64],
  values: &[i64],
  gamma: f64,
  presorted: bool,
) {
  let conf = PlrConf::new(gamma).presorted(presorted);
  group.bench_with_input(
    BenchmarkId::new(format!("gamma_{gamma}"), keys.len()),
    &(keys, values),
    |b, (keys, values)| b.iter(|| black_box(compute_with_conf(*keys, *values, &conf))),
  );
}

pub fn bench_lookup(
  group: &mut criterion::BenchmarkGroup<WallTime>,
  keys: &[i64],
  values: &[i64],
  queries: &[i64],
  gamma: f64,
) {
  let Ok(idx) = PlrIndex::build(keys, values, &PlrConf::new(gamma).presorted(true)) else {
    return;
  };
  group.bench_with_input(
    BenchmarkId::new(format!("gamma_{gamma}"), keys.len()),
    queries,
    |b, queries| {
      b.iter(|| {
        for &q in queries {
          black_box(idx.predict_range(q));
        }
      })
    },
  );
}
