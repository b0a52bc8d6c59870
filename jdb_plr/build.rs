use std::{env, fs, path::Path, str::FromStr};

/// Get an environment variable or a default value and register it for cargo rerun.
/// 获取环境变量或默认值，并将其注册为 cargo rerun 触发项。
fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T {
  println!("cargo:rerun-if-env-changed={}", name);
  env::var(name)
    .ok()
    .and_then(|v| v.parse().ok())
    .unwrap_or(default)
}

fn main() {
  println!("cargo:rerun-if-changed=build.rs");

  let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR not set");
  let dest_path = Path::new(&out_dir).join("plr_consts.rs");

  // Burst traces average ~16 points per segment at small gamma
  // 小 gamma 下突发轨迹平均每段约 16 个点
  let seg_hint_div = get_env_or_default("PLR_SEG_HINT_DIV", 16usize).max(1);
  let min_seg_cap = get_env_or_default("PLR_MIN_SEG_CAP", 16usize);

  let content = format!(
    r#"
pub const SEG_HINT_DIV: usize = {seg_hint_div};
pub const MIN_SEG_CAP: usize = {min_seg_cap};
"#
  );

  fs::write(&dest_path, content).expect("Failed to write plr_consts.rs");
}
