//! Line geometry used by the shrinking cone
//! 收缩锥使用的直线几何

/// y = slope * x + intercept
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
  pub slope: f64,
  pub intercept: f64,
}

impl Line {
  #[inline(always)]
  pub const fn new(slope: f64, intercept: f64) -> Self {
    Self { slope, intercept }
  }

  /// Line through two points with distinct x
  /// 过两点（x 不同）的直线
  ///
  /// Callers guarantee `p1.0 != p2.0`; the segmenter rejects keys that are
  /// equal as integers or as f64 before any line is built.
  /// 调用方保证 x 不同；分段器在构造直线前已拒绝整数或 f64 相等的键。
  #[inline]
  pub fn through(p1: (f64, f64), p2: (f64, f64)) -> Self {
    debug_assert!(p1.0 != p2.0, "vertical line through {p1:?} {p2:?}");
    let slope = (p2.1 - p1.1) / (p2.0 - p1.0);
    Self {
      slope,
      intercept: p1.1 - slope * p1.0,
    }
  }

  #[inline(always)]
  pub fn at(&self, x: f64) -> f64 {
    self.slope * x + self.intercept
  }

  /// Intersection point, None for parallel lines
  /// 交点，平行时为 None
  #[inline]
  pub fn intersect(&self, other: &Line) -> Option<(f64, f64)> {
    if self.slope == other.slope {
      return None;
    }
    let x = (other.intercept - self.intercept) / (self.slope - other.slope);
    Some((x, self.at(x)))
  }

  /// Point strictly above the line
  /// 点严格位于直线上方
  #[inline(always)]
  pub fn has_above(&self, (x, y): (f64, f64)) -> bool {
    y > self.at(x)
  }

  /// Point strictly below the line
  /// 点严格位于直线下方
  #[inline(always)]
  pub fn has_below(&self, (x, y): (f64, f64)) -> bool {
    y < self.at(x)
  }
}
