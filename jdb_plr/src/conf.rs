//! Per-call configuration
//! 单次调用配置

use crate::error::{Result, check_gamma};

/// Configuration for `compute_with_conf` and `PlrIndex::build`
/// `compute_with_conf` 与 `PlrIndex::build` 的配置
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlrConf {
  /// Max vertical error of every point against its segment
  /// 每个点相对其段的最大纵向误差
  pub gamma: f64,
  /// Skip the defensive (key, value) sort
  /// 跳过防御性的 (键, 值) 排序
  pub presorted: bool,
}

impl PlrConf {
  #[inline]
  #[must_use]
  pub const fn new(gamma: f64) -> Self {
    Self {
      gamma,
      presorted: false,
    }
  }

  #[inline]
  #[must_use]
  pub const fn presorted(mut self, presorted: bool) -> Self {
    self.presorted = presorted;
    self
  }

  #[inline]
  pub fn validate(&self) -> Result<()> {
    check_gamma(self.gamma).map(|_| ())
  }
}
