//! C ABI: library allocates the result, caller releases it once
//! C 接口：库分配结果，调用方释放一次
//!
//! `learn_and_time_segments` / `free_plr_result` are exported for callers
//! linking the historical symbol names.
//! 同时导出 `learn_and_time_segments` / `free_plr_result` 兼容旧符号名。

#![allow(clippy::cast_sign_loss)]

use std::{ptr, slice};

use log::warn;

use crate::{compute::compute, types::Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct SegmentResult {
  pub slope: f64,
  pub intercept: f64,
  pub key_start: i64,
  pub key_end: i64,
}

impl From<Segment<i64>> for SegmentResult {
  #[inline]
  fn from(seg: Segment<i64>) -> Self {
    Self {
      slope: seg.slope,
      intercept: seg.intercept,
      key_start: seg.key_start,
      key_end: seg.key_end,
    }
  }
}

/// Seconds per phase
/// 各阶段耗时（秒）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct TimingResult {
  pub total_sec: f64,
  pub sort_sec: f64,
  pub fit_sec: f64,
}

#[derive(Debug)]
#[repr(C)]
pub struct PlrResult {
  /// Null when `segment_count == 0`
  /// `segment_count == 0` 时为空指针
  pub segments: *mut SegmentResult,
  /// C `int`
  pub segment_count: i32,
  pub timings: TimingResult,
}

/// Fit `count` pairs; returns null on invalid input.
/// 拟合 `count` 个点对；输入非法时返回空指针。
///
/// # Safety
///
/// `keys` and `values` must each point to `count` readable `i64` when
/// `count > 0`. A non-null return must be passed to `plr_release` exactly once.
#[no_mangle]
pub unsafe extern "C" fn plr_compute(
  keys: *const i64,
  values: *const i64,
  count: i32,
  gamma: f64,
) -> *mut PlrResult {
  if count == 0 {
    return Box::into_raw(Box::new(PlrResult {
      segments: ptr::null_mut(),
      segment_count: 0,
      timings: TimingResult::default(),
    }));
  }
  if count < 0 || keys.is_null() || values.is_null() {
    warn!("plr_compute: invalid input count={count}");
    return ptr::null_mut();
  }

  let n = count as usize;
  // SAFETY: caller guarantees both pointers cover `count` elements.
  let (keys, values) = unsafe { (slice::from_raw_parts(keys, n), slice::from_raw_parts(values, n)) };

  let plr = match compute(keys, values, gamma) {
    Ok(plr) => plr,
    Err(e) => {
      warn!("plr_compute: {e}");
      return ptr::null_mut();
    }
  };

  // At most one segment per point, so this fits whenever `count` does
  // 每点至多一段，`count` 能表示时此值也能表示
  let Ok(segment_count) = i32::try_from(plr.segments.len()) else {
    warn!("plr_compute: {} segments overflow i32", plr.segments.len());
    return ptr::null_mut();
  };
  let segments = if segment_count == 0 {
    ptr::null_mut()
  } else {
    let boxed: Box<[SegmentResult]> = plr.segments.into_iter().map(SegmentResult::from).collect();
    Box::into_raw(boxed).cast::<SegmentResult>()
  };

  Box::into_raw(Box::new(PlrResult {
    segments,
    segment_count,
    timings: TimingResult {
      total_sec: plr.timing.total.as_secs_f64(),
      sort_sec: plr.timing.sort.as_secs_f64(),
      fit_sec: plr.timing.fit.as_secs_f64(),
    },
  }))
}

/// Free a result from `plr_compute`; null is a no-op.
/// 释放 `plr_compute` 返回的结果；空指针不做任何事。
///
/// # Safety
///
/// `result` must be null or a pointer returned by `plr_compute` not yet released.
#[no_mangle]
pub unsafe extern "C" fn plr_release(result: *mut PlrResult) {
  if result.is_null() {
    return;
  }
  // SAFETY: result came from Box::into_raw in plr_compute and is released once.
  let result = unsafe { Box::from_raw(result) };
  if !result.segments.is_null() {
    // SAFETY: segments is a Box<[SegmentResult]> of segment_count elements.
    drop(unsafe {
      Box::from_raw(ptr::slice_from_raw_parts_mut(
        result.segments,
        result.segment_count as usize,
      ))
    });
  }
}

/// Alias of [`plr_compute`] under its historical name
/// [`plr_compute`] 的旧符号名
///
/// # Safety
///
/// Same as [`plr_compute`].
#[no_mangle]
pub unsafe extern "C" fn learn_and_time_segments(
  lpns: *const i64,
  ppns: *const i64,
  num_points: i32,
  gamma: f64,
) -> *mut PlrResult {
  unsafe { plr_compute(lpns, ppns, num_points, gamma) }
}

/// Alias of [`plr_release`] under its historical name
/// [`plr_release`] 的旧符号名
///
/// # Safety
///
/// Same as [`plr_release`].
#[no_mangle]
pub unsafe extern "C" fn free_plr_result(result: *mut PlrResult) {
  unsafe { plr_release(result) }
}
