//! Constants for PLR segmentation
//! PLR 分段常量

include!(concat!(env!("OUT_DIR"), "/plr_consts.rs"));

/// Slope of the line emitted for a lone point
/// 孤立点输出直线的斜率
pub const SINGLE_POINT_SLOPE: f64 = 1.0;

/// Largest gamma the cone works with (2^100). Integer values span at most
/// 2^65, so any gamma above this already admits every point, and capping it
/// keeps the bound slopes finite.
/// 锥使用的最大 gamma（2^100）。整数值跨度至多 2^65，超过此值的 gamma
/// 已可容纳所有点，截断可保证边界斜率有限。
pub const MAX_FIT_GAMMA: f64 = 1_267_650_600_228_229_401_496_703_205_376.0;
