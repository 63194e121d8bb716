//! Bit-range ("windowed") engine.
//!
//! Checksums an arbitrary bit-aligned slice of a buffer. Bits are numbered
//! MSB-first across the buffer: bit 0 is the most significant bit of
//! `data[0]`, bit 8 the most significant bit of `data[1]`. With `reflect_in`
//! each byte is mirrored first, so bits within a byte count from the least
//! significant end instead.
//!
//! ```text
//!            first_byte          last_byte
//! data:  ... [ x x x|a a a a a ] [ b b b b b b b b ] [ c c c|x x x x x ] ...
//!                   ^ start_bit                              ^ start_bit + length_bits
//! ```
//!
//! The first byte is shifted left so its first in-range bit is at the top and
//! gets `8 - first_bit` rounds; the last byte is masked so bits past the end
//! are zero and gets `last_bit + 1` rounds. When both are the same byte the
//! two adjustments combine.

use log::debug;
use traits::Calculate;

use super::bitwise::{MsbRegister, finalize};
use crate::{CrcError, CrcParams, bits::reverse_byte};

/// Mask keeping bits `0..=last_bit` of a byte, counted MSB-first.
#[inline]
const fn end_mask(last_bit: usize) -> u8 {
  !((1u8 << (7 - last_bit)) - 1)
}

/// MSB-first bit-by-bit engine over a bit range of the input.
///
/// Over a whole buffer it is identical to [`Generic`](crate::Generic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Windowed {
  params: CrcParams,
  register: MsbRegister,
}

impl Windowed {
  pub(crate) const fn from_params(params: CrcParams) -> Self {
    Self {
      register: MsbRegister::new(&params),
      params,
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Calculate the CRC of `length_bits` bits of `data` starting at `start_bit`.
  ///
  /// `length_bits = None` runs to the end of the buffer. `seed = None` uses
  /// the configured seed; an explicit seed is truncated to the CRC width.
  ///
  /// # Errors
  ///
  /// - [`CrcError::StartBitOutOfRange`] if `start_bit` is not inside `data`
  ///   (this includes every `start_bit` for an empty buffer).
  /// - [`CrcError::LengthOutOfRange`] if the range runs past the end of `data`.
  ///
  /// Nothing is computed when either check fails.
  ///
  /// ```
  /// use crcengine::{Calculate, Engine, catalog};
  ///
  /// let engine = Engine::windowed(catalog::CRC_8)?;
  /// let windowed = engine.as_windowed().unwrap();
  /// let data = b"xx123456789";
  /// assert_eq!(windowed.calculate_range(data, 16, None, None)?, 0xF4);
  /// assert!(windowed.calculate_range(data, 88, None, None).is_err());
  /// # Ok::<(), crcengine::CrcError>(())
  /// ```
  pub fn calculate_range(
    &self,
    data: &[u8],
    start_bit: usize,
    length_bits: Option<usize>,
    seed: Option<u64>,
  ) -> Result<u64, CrcError> {
    let total_bits = data.len().saturating_mul(8);
    if start_bit >= total_bits {
      debug!("rejecting window: start bit {start_bit} outside {total_bits}-bit buffer");
      return Err(CrcError::StartBitOutOfRange { start_bit, total_bits });
    }
    let length_bits = length_bits.unwrap_or(total_bits - start_bit);
    let end_bit = start_bit
      .checked_add(length_bits)
      .filter(|&end| end <= total_bits)
      .ok_or_else(|| {
        debug!("rejecting window: {length_bits} bits from bit {start_bit} exceed {total_bits}-bit buffer");
        CrcError::LengthOutOfRange {
          start_bit,
          length_bits,
          total_bits,
        }
      })?;
    Ok(self.run(data, start_bit, end_bit, seed.unwrap_or(self.params.seed)))
  }

  /// Process bits `start_bit..end_bit`, which the caller has bounds-checked.
  fn run(&self, data: &[u8], start_bit: usize, end_bit: usize, seed: u64) -> u64 {
    let reg = &self.register;
    let mut crc = reg.load(seed & self.params.mask());

    if end_bit > start_bit {
      let (first_byte, first_bit) = (start_bit / 8, start_bit % 8);
      let (last_byte, last_bit) = ((end_bit - 1) / 8, (end_bit - 1) % 8);
      let window = data.get(first_byte..=last_byte).unwrap_or_default();

      for (index, &byte) in (first_byte..).zip(window) {
        let mut byte = if self.params.reflect_in { reverse_byte(byte) } else { byte };
        let mut block_width = 8;
        if index == last_byte {
          byte &= end_mask(last_bit);
          block_width = last_bit + 1;
        }
        if index == first_byte {
          byte <<= first_bit;
          block_width -= first_bit;
        }
        crc = reg.feed(crc, byte, block_width);
      }
    }

    debug_assert_eq!(reg.residue(crc), 0, "alignment shift left residual bits");
    finalize(&self.params, reg.unload(crc))
  }
}

impl Calculate for Windowed {
  #[inline]
  fn width(&self) -> u8 {
    self.params.width
  }

  #[inline]
  fn seed(&self) -> u64 {
    self.params.seed
  }

  /// Checksum the whole buffer. An empty buffer yields the finalized seed.
  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64 {
    self.run(data, 0, data.len().saturating_mul(8), seed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Generic, catalog};

  #[test]
  fn end_mask_values() {
    assert_eq!(end_mask(0), 0x80);
    assert_eq!(end_mask(3), 0xF0);
    assert_eq!(end_mask(6), 0xFE);
    assert_eq!(end_mask(7), 0xFF);
  }

  #[test]
  fn whole_buffer_matches_check() {
    let engine = Windowed::from_params(catalog::CRC_32);
    assert_eq!(engine.check(), 0xCBF4_3926);
    assert_eq!(engine.calculate_range(b"123456789", 0, None, None), Ok(0xCBF4_3926));
    assert_eq!(engine.calculate_range(b"123456789", 0, Some(72), None), Ok(0xCBF4_3926));
  }

  #[test]
  fn byte_aligned_subrange() {
    let engine = Windowed::from_params(catalog::CRC_16_IBM_3740);
    let data = b"--123456789--";
    assert_eq!(engine.calculate_range(data, 16, Some(72), None), Ok(0x29B1));
  }

  #[test]
  fn unaligned_range_matches_shifted_buffer() {
    // Shifting "123456789" right by three bits and windowing from bit 3
    // must give the same CRC as the original buffer.
    let engine = Windowed::from_params(catalog::CRC_8);
    let original = b"123456789";
    let mut shifted = [0u8; 10];
    for (i, &b) in original.iter().enumerate() {
      shifted[i] |= b >> 3;
      shifted[i + 1] |= b << 5;
    }
    assert_eq!(engine.calculate_range(&shifted, 3, Some(72), None), Ok(0xF4));
  }

  #[test]
  fn range_within_single_byte() {
    // Bits 2..6 of 0b0011_1100 are all ones; compare against a byte that
    // carries the same four bits at the top.
    let engine = Windowed::from_params(catalog::CRC_3_GSM);
    let inner = engine.calculate_range(&[0b0011_1100], 2, Some(4), None).unwrap();
    let top = engine.calculate_range(&[0b1111_0000], 0, Some(4), None).unwrap();
    assert_eq!(inner, top);
  }

  #[test]
  fn zero_length_returns_finalized_seed() {
    let params = catalog::CRC_16_X25;
    let engine = Windowed::from_params(params);
    let expected = finalize(&params, params.seed);
    assert_eq!(engine.calculate_range(b"abc", 5, Some(0), None), Ok(expected));
    assert_eq!(engine.calculate(b""), expected);
  }

  #[test]
  fn rejects_out_of_range() {
    let engine = Windowed::from_params(catalog::CRC_8);
    assert_eq!(
      engine.calculate_range(b"ab", 16, None, None),
      Err(CrcError::StartBitOutOfRange {
        start_bit: 16,
        total_bits: 16
      })
    );
    assert_eq!(
      engine.calculate_range(b"", 0, Some(0), None),
      Err(CrcError::StartBitOutOfRange {
        start_bit: 0,
        total_bits: 0
      })
    );
    assert_eq!(
      engine.calculate_range(b"ab", 4, Some(13), None),
      Err(CrcError::LengthOutOfRange {
        start_bit: 4,
        length_bits: 13,
        total_bits: 16
      })
    );
    assert!(engine.calculate_range(b"ab", 1, Some(usize::MAX), None).is_err());
  }

  #[test]
  fn explicit_seed_overrides_default() {
    let params = catalog::CRC_16_XMODEM;
    let engine = Windowed::from_params(params);
    let generic = Generic::from_params(params);
    assert_eq!(
      engine.calculate_range(b"hello", 0, None, Some(0xBEEF)),
      Ok(generic.calculate_seeded(b"hello", 0xBEEF))
    );
  }
}
