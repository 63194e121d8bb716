//! Fuzz target for engine equivalence.
//!
//! Builds every engine for an arbitrary parameter set and checks that all of
//! them agree with the bit-by-bit reference.

#![no_main]

use arbitrary::Arbitrary;
use crcengine::{Calculate, CrcParams, Engine, EngineForce, width_mask};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  seed: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = input.width % 64 + 1;
  let mask = width_mask(width);
  let params = CrcParams::new(width, input.polynomial & mask)
    .with_seed(input.seed & mask)
    .with_xor_out(input.xor_out & mask)
    .with_reflect(input.reflect_in, input.reflect_out);

  let reference = Engine::generic(params).unwrap().calculate(&input.data);
  assert_eq!(reference & !mask, 0, "result wider than {width} bits");

  let engines = [
    Engine::with_force(params, EngineForce::Table).unwrap(),
    Engine::generic_lsb(params).unwrap(),
    Engine::windowed(params).unwrap(),
  ];
  for engine in &engines {
    let ours = engine.calculate(&input.data);
    assert_eq!(
      ours,
      reference,
      "{} mismatch: ours={:#x}, reference={:#x}, params={:?}, len={}",
      engine.kind(),
      ours,
      reference,
      params,
      input.data.len()
    );
  }

  // Unmasked parameters must be rejected, never computed.
  if input.polynomial & !mask != 0 {
    let wide = CrcParams {
      polynomial: input.polynomial,
      ..params
    };
    assert!(Engine::new(wide).is_err());
  }
});
