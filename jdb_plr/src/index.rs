//! Key -> value translation over fitted segments
//! 基于拟合段的键到值映射

#![allow(clippy::cast_precision_loss)]

use std::{mem::size_of, ops::RangeInclusive};

use crate::{
  compute::compute_with_conf,
  conf::PlrConf,
  error::{Result, check_gamma},
  types::{Key, Plr, PlrStats, Segment},
};

/// Learned mapping: segments sorted by key_start plus their error bound
/// 学习到的映射：按 key_start 排序的段及其误差界
#[derive(Clone, Debug)]
pub struct PlrIndex<K: Key> {
  pub gamma: f64,
  pub segments: Vec<Segment<K>>,
}

impl<K: Key> PlrIndex<K> {
  /// Wrap segments produced with `gamma`
  /// 包装以 `gamma` 生成的段
  pub fn new(segments: Vec<Segment<K>>, gamma: f64) -> Result<Self> {
    Ok(Self {
      gamma: check_gamma(gamma)?,
      segments,
    })
  }

  #[inline]
  pub fn from_plr(plr: Plr<K>, gamma: f64) -> Result<Self> {
    Self::new(plr.segments, gamma)
  }

  /// Fit and index `keys[i] -> values[i]`
  /// 拟合并索引 `keys[i] -> values[i]`
  pub fn build(keys: &[K], values: &[K], conf: &PlrConf) -> Result<Self> {
    let plr = compute_with_conf(keys, values, conf)?;
    Self::from_plr(plr, conf.gamma)
  }

  #[inline]
  #[must_use]
  pub fn segment_count(&self) -> usize {
    self.segments.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }

  /// Mean key span per segment
  /// 每段平均键跨度
  #[must_use]
  pub fn avg_span(&self) -> f64 {
    let total: f64 = self.segments.iter().map(Segment::span).sum();
    total / self.segments.len().max(1) as f64
  }

  /// Memory usage of the segment table
  /// 段表内存占用
  #[inline]
  #[must_use]
  pub fn mem_usage(&self) -> usize {
    self.segments.len() * size_of::<Segment<K>>()
  }

  #[must_use]
  pub fn stats(&self) -> PlrStats {
    PlrStats {
      segments: self.segment_count(),
      avg_span: self.avg_span(),
      memory_bytes: self.mem_usage(),
    }
  }

  /// Segment whose closed key range contains `key`
  /// 闭区间包含 `key` 的段
  #[inline]
  pub fn find_seg(&self, key: K) -> Option<&Segment<K>> {
    let idx = self.segments.partition_point(|seg| seg.key_start <= key);
    // First segment starting after key is at idx, candidate at idx - 1
    // idx 处为首个起点大于 key 的段，候选段为 idx - 1
    let seg = self.segments.get(idx.checked_sub(1)?)?;
    seg.contains(key).then_some(seg)
  }

  /// Fitted value at `key`
  /// `key` 处的拟合值
  #[inline]
  #[must_use]
  pub fn predict(&self, key: K) -> Option<f64> {
    self.find_seg(key).map(|seg| seg.eval(key))
  }

  /// Fitted value rounded to the nearest integer
  /// 四舍五入后的拟合值
  #[inline]
  #[must_use]
  pub fn predict_key(&self, key: K) -> Option<K> {
    self.predict(key).map(|v| K::from_f64(v.round()))
  }

  /// Closed range guaranteed to hold the true value of any fitted point
  /// 保证包含任一拟合点真实值的闭区间
  #[inline]
  #[must_use]
  pub fn predict_range(&self, key: K) -> Option<RangeInclusive<K>> {
    self.predict(key).map(|v| {
      K::from_f64((v - self.gamma).floor())..=K::from_f64((v + self.gamma).ceil())
    })
  }
}
