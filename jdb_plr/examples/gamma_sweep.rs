use std::{mem::size_of, time::Instant};

use clap::Parser;
use jdb_plr::{PlrConf, PlrIndex, burst::burst_trace};

#[derive(Parser, Debug)]
#[command(author, version, about = "Segment count and memory per gamma on a burst trace", long_about = None)]
struct Args {
  /// Page writes to replay
  #[arg(short, long, default_value_t = 1_000_000)]
  writes: usize,

  #[arg(short, long, default_value_t = 42)]
  seed: u64,

  /// Gammas to try
  #[arg(short, long, value_delimiter = ',', default_values_t = vec![0.0, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 64.0])]
  gamma: Vec<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();
  println!("Replaying {} writes (seed {})...", args.writes, args.seed);
  let (lpns, ppns) = burst_trace(args.writes, args.seed);
  let raw = lpns.len() * 2 * size_of::<i64>();
  println!("{} mapped pages, raw table {} bytes", lpns.len(), raw);

  println!(
    "{:>8} {:>10} {:>10} {:>12} {:>8} {:>10}",
    "gamma", "segments", "avg_span", "bytes", "ratio", "build"
  );
  for gamma in args.gamma {
    let start = Instant::now();
    let idx = PlrIndex::build(&lpns, &ppns, &PlrConf::new(gamma).presorted(true))?;
    let elapsed = start.elapsed();
    let stats = idx.stats();
    println!(
      "{:>8} {:>10} {:>10.1} {:>12} {:>8.1} {:>10.2?}",
      gamma,
      stats.segments,
      stats.avg_span,
      stats.memory_bytes,
      raw as f64 / stats.memory_bytes.max(1) as f64,
      elapsed
    );
  }
  Ok(())
}
