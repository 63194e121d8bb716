//! Basic engine usage: catalogued algorithms, custom parameters, seeding.
//!
//! Run with: `cargo run --example basic -p crcengine`

use crcengine::{Calculate, CrcError, CrcParams, Engine, catalog};

fn main() -> Result<(), CrcError> {
  println!("=== crcengine Basic Examples ===\n");

  catalogued()?;
  custom_parameters()?;
  resume_example()?;
  Ok(())
}

/// Catalogued algorithms by constant or by name.
fn catalogued() -> Result<(), CrcError> {
  println!("--- Catalogued Algorithms ---\n");

  let data = b"123456789";

  // CRC-32 (IEEE) - Ethernet, gzip, zip, PNG
  let crc32 = Engine::new(catalog::CRC_32)?.calculate(data);
  println!("CRC-32 (IEEE):      0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-16/XMODEM, looked up by name
  let xmodem = Engine::by_name("crc-16/xmodem")?.calculate(data);
  println!("CRC-16 (XMODEM):    0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  // CRC-64 (XZ) - XZ Utils, 7-Zip
  let crc64 = Engine::new(catalog::CRC_64_XZ)?.calculate(data);
  println!("CRC-64 (XZ):        0x{crc64:016X}");
  assert_eq!(crc64, 0x995D_C9BB_DF19_39FA);

  println!();
  Ok(())
}

/// Any width from 1 to 64 bits with independent input/output reflection.
fn custom_parameters() -> Result<(), CrcError> {
  println!("--- Custom Parameters ---\n");

  // CRC-5/USB spelled out by hand
  let params = CrcParams::new(5, 0x05)
    .with_name("my-crc-5")
    .with_seed(0x1F)
    .with_reflect(true, true)
    .with_xor_out(0x1F)
    .with_check(0x19);
  let engine = Engine::new(params)?;
  println!("{} via {}: 0x{:02X}", params.name, engine.kind(), engine.check());
  assert!(engine.verify().is_ok());

  // Out-of-range values are rejected at construction
  let err = Engine::new(CrcParams::new(8, 0x1D5)).unwrap_err();
  println!("rejected: {err}");

  println!();
  Ok(())
}

/// Chaining calculations through the seed.
fn resume_example() -> Result<(), CrcError> {
  println!("--- Resume via Seed ---\n");

  // For a non-reflected CRC with zero xor_out the result is the register
  // state, so it can seed the next chunk directly.
  let engine = Engine::new(catalog::CRC_16_XMODEM)?;
  let data = b"123456789";
  let (a, b) = data.split_at(4);

  let first = engine.calculate(a);
  let resumed = engine.calculate_seeded(b, first);
  println!("one-shot: 0x{:04X}", engine.calculate(data));
  println!("resumed:  0x{resumed:04X}");
  assert_eq!(resumed, engine.calculate(data));

  println!();
  Ok(())
}
