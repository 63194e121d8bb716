//! Engine introspection: which implementation each constructor selects.
//!
//! Run with: `cargo run --example introspect -p crcengine`
//! Forced:   `CRCENGINE_FORCE=bitwise cargo run --example introspect -p crcengine`

use crcengine::{Calculate, CrcError, Engine, catalog, config};

fn main() -> Result<(), CrcError> {
  println!("=== crcengine Introspection ===\n");

  configuration();
  selection()?;
  Ok(())
}

fn configuration() {
  println!("--- Configuration ---\n");
  let cfg = config::get();
  println!("CRCENGINE_FORCE: {}", cfg.requested_force.as_str());
  println!();
}

/// Show the selected engine and check value for every catalogued algorithm.
fn selection() -> Result<(), CrcError> {
  println!("--- Default Selection ---\n");

  for params in catalog::ALGORITHMS {
    let engine = Engine::new(*params)?;
    let status = if engine.verify().is_ok() { "ok" } else { "MISMATCH" };
    println!(
      "{:<20} width={:>2} {:<12} check=0x{:0w$X} {status}",
      params.name,
      params.width,
      engine.kind().as_str(),
      engine.check(),
      w = usize::from(params.width).div_ceil(4),
    );
  }
  println!();
  Ok(())
}
