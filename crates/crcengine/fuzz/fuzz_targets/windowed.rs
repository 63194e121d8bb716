//! Fuzz target for bit-range calculation.
//!
//! Arbitrary start/length pairs must either be rejected up front or produce a
//! value that fits the width and, over the whole buffer, matches the
//! whole-buffer calculation.

#![no_main]

use arbitrary::Arbitrary;
use crcengine::{Calculate, CrcError, Engine, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  start_bit: usize,
  length_bits: Option<usize>,
  seed: Option<u64>,
}

fuzz_target!(|input: Input| {
  for params in [catalog::CRC_32, catalog::CRC_16_XMODEM, catalog::CRC_5_EPC] {
    let engine = Engine::windowed(params).unwrap();
    let windowed = engine.as_windowed().unwrap();
    let total = input.data.len() * 8;

    match windowed.calculate_range(&input.data, input.start_bit, input.length_bits, input.seed) {
      Err(CrcError::StartBitOutOfRange { .. }) => assert!(input.start_bit >= total),
      Err(CrcError::LengthOutOfRange { length_bits, .. }) => {
        assert!(input.start_bit.checked_add(length_bits).is_none_or(|end| end > total));
      }
      Err(other) => panic!("unexpected error {other}"),
      Ok(crc) => {
        assert!(input.start_bit < total);
        assert_eq!(crc & !params.mask(), 0);
        if input.start_bit == 0 && input.length_bits.is_none_or(|len| len == total) {
          let seed = input.seed.unwrap_or(params.seed);
          assert_eq!(crc, engine.calculate_seeded(&input.data, seed));
        }
      }
    }
  }
});
