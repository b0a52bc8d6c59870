//! Streaming piecewise linear regression for address translation
//! 用于地址映射的流式分段线性回归
//!
//! Each point (key, value) ends up in exactly one segment whose line is within
//! `gamma` of it. Segments are produced in one pass by a greedy shrinking cone.
//! 每个点 (key, value) 恰属于一个段，且与段直线的纵向误差不超过 `gamma`。
//! 段由贪心收缩锥一次扫描生成。

#[cfg(feature = "burst")]
pub mod burst;
pub mod compute;
pub mod conf;
pub mod consts;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod index;
pub mod line;
pub mod segmenter;
pub mod types;

pub use self::{
  compute::{compute, compute_with_conf},
  conf::PlrConf,
  error::{Error, Result},
  index::PlrIndex,
  line::Line,
  segmenter::{Segmenter, build_segments},
  types::{Key, Plr, PlrStats, Point, Segment, Timing},
};
