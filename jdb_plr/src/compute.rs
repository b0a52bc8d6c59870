//! One-shot driver: pair, sort, segment, time
//! 一次性驱动：配对、排序、分段、计时

use std::time::Instant;

use log::debug;

use crate::{
  conf::PlrConf,
  error::{Error, Result},
  segmenter::build_segments,
  types::{Key, Plr, Point, Timing},
};

/// Fit `keys[i] -> values[i]` within `gamma`, input order does not matter
/// 在 `gamma` 误差内拟合 `keys[i] -> values[i]`，输入顺序无关
///
/// Keys must be distinct: any repeated key fails with [`Error::DuplicateKey`]
/// (position counted after sorting). Raw write traces that overwrite a key
/// should keep only the latest value per key before calling this.
/// 键必须互不相同：重复键返回 [`Error::DuplicateKey`]（位置按排序后计）。
/// 含覆盖写的原始写入轨迹需先按键只保留最新值。
#[inline]
pub fn compute<K: Key>(keys: &[K], values: &[K], gamma: f64) -> Result<Plr<K>> {
  compute_with_conf(keys, values, &PlrConf::new(gamma))
}

/// Same as `compute` with explicit configuration
/// 与 `compute` 相同，使用显式配置
pub fn compute_with_conf<K: Key>(keys: &[K], values: &[K], conf: &PlrConf) -> Result<Plr<K>> {
  let total_start = Instant::now();
  conf.validate()?;
  if keys.len() != values.len() {
    return Err(Error::LenMismatch {
      keys: keys.len(),
      values: values.len(),
    });
  }
  if keys.is_empty() {
    return Ok(Plr::empty());
  }

  let mut points: Vec<Point<K>> = keys
    .iter()
    .zip(values)
    .map(|(&key, &value)| Point { key, value })
    .collect();

  let sort_start = Instant::now();
  if !conf.presorted {
    // Point orders by key, then value
    // Point 先按键再按值排序
    points.sort_unstable();
  }
  let sort = sort_start.elapsed();

  let fit_start = Instant::now();
  let segments = build_segments(&points, conf.gamma)?;
  let fit = fit_start.elapsed();

  let timing = Timing {
    sort,
    fit,
    total: total_start.elapsed(),
  };
  debug!(
    "plr: {} points -> {} segments, gamma={}, sort={:?} fit={:?} total={:?}",
    points.len(),
    segments.len(),
    conf.gamma,
    timing.sort,
    timing.fit,
    timing.total
  );
  Ok(Plr { segments, timing })
}
