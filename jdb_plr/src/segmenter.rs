//! Streaming greedy PLR (shrinking cone anchored at the bound intersection)
//! 流式贪心 PLR（以上下界交点为锚的收缩锥）
//!
//! Time Complexity: O(N), state is O(1) besides emitted segments.
//!
//! Cone geometry is kept relative to the anchor, so large keys only lose
//! precision once when the segment is closed.
//! 锥的几何以锚点为原点，大键仅在闭合段时损失一次精度。

use std::{cmp::Ordering, mem};

use log::trace;

use crate::{
  consts::{MAX_FIT_GAMMA, MIN_SEG_CAP, SEG_HINT_DIV, SINGLE_POINT_SLOPE},
  error::{Error, Result, check_gamma},
  line::Line,
  types::{Key, Point, Segment},
};

/// Feasible cone of the open segment, lines and pivot relative to `origin`
/// 当前未闭合段的可行锥，直线与支点相对 `origin`
#[derive(Clone, Copy, Debug)]
struct Cone<K: Key> {
  anchor: Point<K>,
  last: Point<K>,
  origin: (f64, f64),
  upper: Line,
  lower: Line,
  pivot: (f64, f64),
}

impl<K: Key> Cone<K> {
  fn new(anchor: Point<K>, next: Point<K>, gamma: f64) -> Self {
    let origin = anchor.xy();
    let (x1, y1) = rel(origin, next.xy());
    let upper = Line::through((0.0, -gamma), (x1, y1 + gamma));
    let lower = Line::through((0.0, gamma), (x1, y1 - gamma));
    // gamma == 0 collapses both bounds onto the same line: pivot on the anchor
    // gamma == 0 时上下界重合：以锚点为支点
    let pivot = upper.intersect(&lower).unwrap_or((0.0, 0.0));
    Self {
      anchor,
      last: next,
      origin,
      upper,
      lower,
      pivot,
    }
  }

  /// Accept `p` if strictly inside the cone, narrowing it; on-bound points are rejected
  /// 点严格位于锥内则接纳并收缩锥；恰在边界上的点被拒绝
  fn accept(&mut self, p: Point<K>, gamma: f64) -> bool {
    let xy = rel(self.origin, p.xy());
    if !(self.lower.has_above(xy) && self.upper.has_below(xy)) {
      return false;
    }
    self.last = p;

    let (x, y) = xy;
    let hi = (x, y + gamma);
    if self.upper.has_below(hi) {
      self.upper = Line::through(self.pivot, hi);
    }
    let lo = (x, y - gamma);
    if self.lower.has_above(lo) {
      self.lower = Line::through(self.pivot, lo);
    }
    true
  }

  fn close(&self) -> Segment<K> {
    let slope = (self.upper.slope + self.lower.slope) * 0.5;
    let (x0, y0) = self.origin;
    let (px, py) = self.pivot;
    Segment {
      slope,
      intercept: (y0 + py) - slope * (x0 + px),
      key_start: self.anchor.key,
      key_end: self.last.key,
    }
  }
}

#[inline(always)]
fn rel((x0, y0): (f64, f64), (x, y): (f64, f64)) -> (f64, f64) {
  (x - x0, y - y0)
}

#[derive(Clone, Copy, Debug)]
enum State<K: Key> {
  Empty,
  Anchored(Point<K>),
  Fitting(Cone<K>),
}

/// Online segmenter: push points in strictly increasing key order, then `finish`.
/// 在线分段器：按键严格递增推入点，最后调用 `finish`。
///
/// ```
/// use jdb_plr::{Point, Segmenter};
///
/// let mut seg = Segmenter::new(1.0)?;
/// for k in 0..100i64 {
///   seg.push(Point::new(k, 2 * k + 7))?;
/// }
/// let segments = seg.finish();
/// assert_eq!(segments.len(), 1);
/// # Ok::<(), jdb_plr::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Segmenter<K: Key> {
  gamma: f64,
  /// gamma used by the cone, capped at `MAX_FIT_GAMMA`
  /// 锥实际使用的 gamma，上限为 `MAX_FIT_GAMMA`
  bound: f64,
  state: State<K>,
  segments: Vec<Segment<K>>,
  pushed: usize,
}

impl<K: Key> Segmenter<K> {
  pub fn new(gamma: f64) -> Result<Self> {
    let gamma = check_gamma(gamma)?;
    Ok(Self {
      gamma,
      bound: gamma.min(MAX_FIT_GAMMA),
      state: State::Empty,
      segments: Vec::new(),
      pushed: 0,
    })
  }

  /// Pre-size the output for roughly `points` inputs
  /// 按预计输入点数预分配输出
  pub fn with_capacity(gamma: f64, points: usize) -> Result<Self> {
    let mut seg = Self::new(gamma)?;
    seg.segments = Vec::with_capacity((points / SEG_HINT_DIV).max(MIN_SEG_CAP));
    Ok(seg)
  }

  #[inline]
  #[must_use]
  pub fn gamma(&self) -> f64 {
    self.gamma
  }

  /// Points pushed so far
  /// 已推入的点数
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.pushed
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.pushed == 0
  }

  /// Segments already closed (the open one is excluded)
  /// 已闭合的段（不含未闭合段）
  #[inline]
  #[must_use]
  pub fn segments(&self) -> &[Segment<K>] {
    &self.segments
  }

  fn last_key(&self) -> Option<K> {
    match &self.state {
      State::Empty => None,
      State::Anchored(p) => Some(p.key),
      State::Fitting(cone) => Some(cone.last.key),
    }
  }

  /// Feed the next point
  /// 推入下一个点
  pub fn push(&mut self, p: Point<K>) -> Result<()> {
    let pos = self.pushed;
    if let Some(prev) = self.last_key() {
      match p.key.cmp(&prev) {
        Ordering::Greater => {}
        Ordering::Equal => return Err(Error::DuplicateKey { pos }),
        Ordering::Less => return Err(Error::Unsorted { pos }),
      }
      // Distinct keys above 2^53 may round to the same f64
      // 超过 2^53 的不同键可能舍入为同一 f64
      if p.key.as_f64() <= prev.as_f64() {
        return Err(Error::KeyPrecision { pos });
      }
    }
    self.pushed += 1;

    let next = match mem::replace(&mut self.state, State::Empty) {
      State::Empty => State::Anchored(p),
      State::Anchored(anchor) => State::Fitting(Cone::new(anchor, p, self.bound)),
      State::Fitting(mut cone) => {
        if cone.accept(p, self.bound) {
          State::Fitting(cone)
        } else {
          self.emit(cone.close());
          State::Anchored(p)
        }
      }
    };
    self.state = next;
    Ok(())
  }

  /// Feed every point of `iter`, stopping at the first error
  /// 推入迭代器中的所有点，遇错即停
  pub fn push_all<I>(&mut self, iter: I) -> Result<()>
  where
    I: IntoIterator<Item = Point<K>>,
  {
    for p in iter {
      self.push(p)?;
    }
    Ok(())
  }

  /// Flush the open segment and return all segments in key order
  /// 刷出未闭合段并按键序返回全部段
  #[must_use]
  pub fn finish(mut self) -> Vec<Segment<K>> {
    match mem::replace(&mut self.state, State::Empty) {
      State::Empty => {}
      State::Anchored(p) => {
        let (x, y) = p.xy();
        self.emit(Segment {
          slope: SINGLE_POINT_SLOPE,
          intercept: y - x,
          key_start: p.key,
          key_end: p.key,
        });
      }
      State::Fitting(cone) => self.emit(cone.close()),
    }
    self.segments
  }

  #[inline]
  fn emit(&mut self, seg: Segment<K>) {
    trace!(
      "segment [{:?}, {:?}] slope={} intercept={}",
      seg.key_start, seg.key_end, seg.slope, seg.intercept
    );
    self.segments.push(seg);
  }
}

/// Segment points already sorted by strictly increasing key
/// 对按键严格递增排序的点分段
pub fn build_segments<K: Key>(sorted: &[Point<K>], gamma: f64) -> Result<Vec<Segment<K>>> {
  let mut seg = Segmenter::with_capacity(gamma, sorted.len())?;
  seg.push_all(sorted.iter().copied())?;
  Ok(seg.finish())
}
