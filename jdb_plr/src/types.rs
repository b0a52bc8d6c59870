//! Type definitions for PLR
//! PLR 类型定义

#![allow(
  clippy::cast_precision_loss,
  clippy::cast_lossless,
  clippy::cast_possible_truncation
)]

use std::{fmt::Debug, time::Duration};

/// Integer type usable as key or value
/// 可作为键或值的整数类型
pub trait Key: Copy + Send + Sync + Ord + Debug + 'static {
  /// Convert to f64
  /// 转换为 f64
  fn as_f64(self) -> f64;

  /// Convert from f64 (saturating, NaN maps to 0)
  /// 从 f64 转换（饱和截断，NaN 映射为 0）
  fn from_f64(v: f64) -> Self;
}

macro_rules! impl_key {
  ($($t:ty),*) => {
    $(
      impl Key for $t {
        #[inline(always)]
        fn as_f64(self) -> f64 {
          self as f64
        }

        #[inline(always)]
        fn from_f64(v: f64) -> Self {
          v as $t
        }
      }
    )*
  };
}

impl_key!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

/// Input pair, e.g. LPN -> PPN
/// 输入点对，如 LPN -> PPN
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<K: Key> {
  pub key: K,
  pub value: K,
}

impl<K: Key> Point<K> {
  #[inline(always)]
  pub const fn new(key: K, value: K) -> Self {
    Self { key, value }
  }

  #[inline(always)]
  pub(crate) fn xy(self) -> (f64, f64) {
    (self.key.as_f64(), self.value.as_f64())
  }
}

impl<K: Key> From<(K, K)> for Point<K> {
  #[inline(always)]
  fn from((key, value): (K, K)) -> Self {
    Self { key, value }
  }
}

/// Linear segment over the closed key range [key_start, key_end]:
/// value ≈ slope * key + intercept
/// 闭区间 [key_start, key_end] 上的线性段
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct Segment<K: Key> {
  pub slope: f64,
  pub intercept: f64,
  pub key_start: K,
  pub key_end: K,
}

impl<K: Key> Segment<K> {
  /// Evaluate the fitted line at `key`
  /// 在 `key` 处求拟合直线的值
  #[inline(always)]
  #[must_use]
  pub fn eval(&self, key: K) -> f64 {
    self.slope.mul_add(key.as_f64(), self.intercept)
  }

  #[inline(always)]
  #[must_use]
  pub fn contains(&self, key: K) -> bool {
    self.key_start <= key && key <= self.key_end
  }

  /// Key span covered (key_end - key_start + 1)
  /// 覆盖的键跨度
  #[inline]
  #[must_use]
  pub fn span(&self) -> f64 {
    self.key_end.as_f64() - self.key_start.as_f64() + 1.0
  }
}

/// Phase timings of one `compute` call (informational only)
/// 单次 `compute` 调用的各阶段耗时（仅供参考）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timing {
  pub sort: Duration,
  pub fit: Duration,
  pub total: Duration,
}

/// Result of `compute`
/// `compute` 的结果
#[derive(Clone, Debug)]
pub struct Plr<K: Key> {
  pub segments: Vec<Segment<K>>,
  pub timing: Timing,
}

impl<K: Key> Plr<K> {
  #[inline]
  #[must_use]
  pub fn empty() -> Self {
    Self {
      segments: Vec::new(),
      timing: Timing::default(),
    }
  }

  #[inline]
  #[must_use]
  pub fn segment_count(&self) -> usize {
    self.segments.len()
  }
}

/// Index statistics
/// 索引统计信息
#[derive(Clone, Debug, Default)]
pub struct PlrStats {
  pub segments: usize,
  pub avg_span: f64,
  pub memory_bytes: usize,
}
