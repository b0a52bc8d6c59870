use thiserror::Error;

/// PLR specialized Result type.
/// PLR 专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations surfaced instead of silently fitting garbage.
/// 调用方违反约定时返回的错误，而非静默拟合出错误结果。
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Keys and values are not paired by index.
  /// 键与值数量不一致。
  #[error("keys/values length mismatch: {keys} keys, {values} values")]
  LenMismatch { keys: usize, values: usize },
  /// Gamma must be finite and non-negative.
  /// gamma 必须为有限非负数。
  #[error("invalid gamma: {0}")]
  Gamma(f64),
  /// Point at `pos` repeats the key of its predecessor.
  /// 位置 `pos` 的点与前一点键相同。
  #[error("duplicate key at position {pos}")]
  DuplicateKey { pos: usize },
  /// Point at `pos` has a smaller key than its predecessor.
  /// 位置 `pos` 的点键小于前一点。
  #[error("unsorted key at position {pos}")]
  Unsorted { pos: usize },
  /// Key at `pos` is distinct from its predecessor but equal once converted to f64.
  /// 位置 `pos` 的键与前一键不同，但转为 f64 后相等。
  #[error("key at position {pos} collides with its predecessor as f64")]
  KeyPrecision { pos: usize },
}

/// Check gamma is usable as an error bound
/// 检查 gamma 是否可作为误差界
#[inline]
pub(crate) fn check_gamma(gamma: f64) -> Result<f64> {
  if gamma.is_finite() && gamma >= 0.0 {
    Ok(gamma)
  } else {
    Err(Error::Gamma(gamma))
  }
}
