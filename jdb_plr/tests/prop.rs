//! Property-based tests for segmentation invariants.
//!
//! Every generated input checks coverage, the gamma error bound, segment
//! count monotone in gamma, shuffle idempotence and large gamma collapse.

use jdb_plr::{Segment, compute};
use proptest::prelude::*;

const GAMMAS: [f64; 9] = [0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 64.0, 256.0];

/// Float slack for |v - f(k)| <= gamma, grows with magnitude
fn tol(k: i64, v: i64) -> f64 {
  1e-6 + 1e-10 * (k.abs().max(v.abs()) as f64)
}

/// Distinct sorted keys with arbitrary values
fn random_map(max_len: usize) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
  proptest::collection::btree_set(0i64..1_000_000, 1..=max_len).prop_flat_map(|keys| {
    let n = keys.len();
    (
      Just(keys.into_iter().collect::<Vec<_>>()),
      proptest::collection::vec(-1_000_000i64..1_000_000, n),
    )
  })
}

/// Near-identity mapping, typical of sequential writes
fn near_linear(max_len: usize) -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
  proptest::collection::btree_set(0i64..1_000_000, 1..=max_len).prop_flat_map(|keys| {
    let n = keys.len();
    let keys: Vec<i64> = keys.into_iter().collect();
    proptest::collection::vec(-100i64..100, n).prop_map(move |noise| {
      let values = keys.iter().zip(&noise).map(|(k, d)| k + d).collect();
      (keys.clone(), values)
    })
  })
}

/// Walk sorted points and segments together: contiguous cover + error bound
fn check_cover(keys: &[i64], values: &[i64], segs: &[Segment<i64>], gamma: f64) {
  let n = keys.len();
  let mut i = 0;
  for seg in segs {
    assert!(i < n, "segment past last key: {seg:?}");
    assert_eq!(seg.key_start, keys[i], "gap or overlap at {seg:?}");
    assert!(seg.key_start <= seg.key_end);
    while i < n && keys[i] <= seg.key_end {
      let err = (values[i] as f64 - seg.eval(keys[i])).abs();
      assert!(
        err <= gamma + tol(keys[i], values[i]),
        "point ({}, {}) err {err} > gamma {gamma} in {seg:?}",
        keys[i],
        values[i]
      );
      i += 1;
    }
    assert_eq!(keys[i - 1], seg.key_end, "segment ends between keys: {seg:?}");
  }
  assert_eq!(i, n, "keys left uncovered");
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn cover_and_error_bound_random((keys, values) in random_map(300)) {
    for gamma in GAMMAS {
      let plr = compute(&keys, &values, gamma).unwrap();
      check_cover(&keys, &values, &plr.segments, gamma);
    }
  }

  #[test]
  fn cover_and_error_bound_near_linear((keys, values) in near_linear(300)) {
    for gamma in GAMMAS {
      let plr = compute(&keys, &values, gamma).unwrap();
      check_cover(&keys, &values, &plr.segments, gamma);
    }
  }

  #[test]
  fn count_monotone_in_gamma((keys, values) in near_linear(300)) {
    let mut prev = usize::MAX;
    for gamma in GAMMAS {
      let count = compute(&keys, &values, gamma).unwrap().segment_count();
      prop_assert!(count <= prev, "gamma {} gave {} segments, previous {}", gamma, count, prev);
      prev = count;
    }
  }

  #[test]
  fn shuffle_idempotent(
    pairs in random_map(200)
      .prop_flat_map(|(k, v)| {
        let zipped: Vec<(i64, i64)> = k.into_iter().zip(v).collect();
        (Just(zipped.clone()), Just(zipped).prop_shuffle())
      }),
    gamma in prop::sample::select(GAMMAS.to_vec()),
  ) {
    let (sorted, shuffled) = pairs;
    let (sk, sv): (Vec<i64>, Vec<i64>) = sorted.into_iter().unzip();
    let (hk, hv): (Vec<i64>, Vec<i64>) = shuffled.into_iter().unzip();
    let a = compute(&sk, &sv, gamma).unwrap();
    let b = compute(&hk, &hv, gamma).unwrap();
    prop_assert_eq!(a.segments, b.segments);
  }

  #[test]
  fn large_gamma_single_segment((keys, values) in random_map(300)) {
    let plr = compute(&keys, &values, 1e12).unwrap();
    prop_assert_eq!(plr.segment_count(), 1);
    let seg = plr.segments[0];
    prop_assert_eq!(seg.key_start, keys[0]);
    prop_assert_eq!(seg.key_end, keys[keys.len() - 1]);
  }

  #[test]
  fn single_point(k in -1_000_000i64..1_000_000, v in -1_000_000i64..1_000_000, gamma in 0.0f64..100.0) {
    let plr = compute(&[k], &[v], gamma).unwrap();
    prop_assert_eq!(plr.segment_count(), 1);
    let seg = plr.segments[0];
    prop_assert_eq!(seg.slope, 1.0);
    prop_assert_eq!(seg.intercept, (v - k) as f64);
    prop_assert_eq!((seg.key_start, seg.key_end), (k, k));
  }

  #[test]
  fn collinear_one_segment(
    m in -50i64..50,
    c in -10_000i64..10_000,
    start in -10_000i64..10_000,
    step in 1i64..20,
    n in 2usize..200,
    gamma in 0.25f64..16.0,
  ) {
    let keys: Vec<i64> = (0..n as i64).map(|i| start + i * step).collect();
    let values: Vec<i64> = keys.iter().map(|k| m * k + c).collect();
    let plr = compute(&keys, &values, gamma).unwrap();
    prop_assert_eq!(plr.segment_count(), 1);
    let seg = plr.segments[0];
    prop_assert!((seg.slope - m as f64).abs() < 1e-6, "slope {} vs {}", seg.slope, m);
    prop_assert!((seg.intercept - c as f64).abs() < 1e-3, "intercept {} vs {}", seg.intercept, c);
    prop_assert_eq!((seg.key_start, seg.key_end), (keys[0], keys[n - 1]));
  }
}
