//! Synthetic LPN -> PPN mapping shaped like sequential write bursts
//! 模拟顺序写突发的 LPN -> PPN 映射

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng, rngs::StdRng};

pub const MIN_BURST: usize = 50;
pub const MAX_BURST: usize = 200;
/// 1 TiB of 4 KiB pages
/// 1 TiB 的 4 KiB 页
pub const MAX_LPN: i64 = 1 << 28;

/// Replay `writes` page writes: each burst starts at a random LPN and writes
/// consecutive pages, PPNs are handed out log-structured. Overwritten LPNs keep
/// their latest PPN. Returns (lpns, ppns) sorted by LPN.
/// 重放 `writes` 次页写入：每个突发从随机 LPN 开始连续写，PPN 按日志结构顺序分配。
/// 被覆盖的 LPN 保留最新 PPN。返回按 LPN 排序的 (lpns, ppns)。
pub fn burst_trace(writes: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut map = BTreeMap::new();
  let mut lpn = 0i64;
  let mut left = 0usize;

  for ppn in 0..writes as i64 {
    if left == 0 || lpn >= MAX_LPN {
      lpn = rng.random_range(0..MAX_LPN);
      left = rng.random_range(MIN_BURST..=MAX_BURST);
    }
    map.insert(lpn, ppn);
    lpn += 1;
    left -= 1;
  }
  map.into_iter().unzip()
}
