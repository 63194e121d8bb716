//! Bit reversal and width masks for arbitrary CRC widths.
//!
//! Reflection translates between the "normal" (MSB-first) and "reflected"
//! (LSB-first) CRC conventions. Values are reversed a byte at a time through
//! [`BYTE_REVERSE`], a table computed at compile time.

// SAFETY: All array indexing in this module uses `u8`-derived indices into
// 256-entry tables. Clippy cannot prove this in const fn contexts, but bounds
// are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Reverse the bits of a byte one bit at a time.
const fn reverse_byte_bitwise(byte: u8) -> u8 {
  let mut result = 0u8;
  let mut i = 0;
  while i < 8 {
    if byte & (1 << i) != 0 {
      result |= 1 << (7 - i);
    }
    i += 1;
  }
  result
}

const fn generate_byte_reverse() -> [u8; 256] {
  let mut table = [0u8; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = reverse_byte_bitwise(i as u8);
    i += 1;
  }
  table
}

/// `BYTE_REVERSE[b]` is `b` with its bit order mirrored.
pub const BYTE_REVERSE: [u8; 256] = generate_byte_reverse();

/// Mirror the bit order of a byte.
#[inline]
#[must_use]
pub const fn reverse_byte(byte: u8) -> u8 {
  BYTE_REVERSE[byte as usize]
}

/// Mirror the low `num_bits` bits of `value`.
///
/// Bit `k` of the field (counting from its most significant bit) becomes bit
/// `num_bits - 1 - k`. Bits above `num_bits` are ignored and the result never
/// has them set. `num_bits` above 64 is treated as 64.
///
/// ```
/// use crcengine::reverse_bits;
///
/// assert_eq!(reverse_bits(0b0001, 4), 0b1000);
/// assert_eq!(reverse_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// ```
#[must_use]
pub const fn reverse_bits(value: u64, num_bits: u8) -> u64 {
  let num_bits = if num_bits > 64 { 64 } else { num_bits };
  // Left-align the field on a byte boundary; the zeros shifted in at the
  // bottom become leading zeros once reversed.
  let mut value = value << (8u8.wrapping_sub(num_bits) & 7);
  let num_bytes = (num_bits as u32 + 7) >> 3;
  let mut result = 0u64;
  let mut i = 0;
  while i < num_bytes {
    result = (result << 8) | BYTE_REVERSE[(value & 0xFF) as usize] as u64;
    value >>= 8;
    i += 1;
  }
  result
}

/// Largest value representable in `bits` bits (`u64::MAX` for 64 and above).
#[inline]
#[must_use]
pub const fn width_mask(bits: u8) -> u64 {
  if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn byte_table_matches_core() {
    for b in 0u8..=255 {
      assert_eq!(reverse_byte(b), b.reverse_bits(), "byte {b:#04x}");
    }
  }

  #[test]
  fn known_values() {
    assert_eq!(reverse_bits(0b1010, 4), 0b0101);
    assert_eq!(reverse_bits(0b1100, 4), 0b0011);
    assert_eq!(reverse_bits(0xFF, 8), 0xFF);
    assert_eq!(reverse_bits(0x80, 8), 0x01);
    assert_eq!(reverse_bits(0x1EDC_6F41, 32), 0x82F6_3B78);
    assert_eq!(reverse_bits(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
    assert_eq!(reverse_bits(0x864CFB, 24), 0xDF3261);
  }

  #[test]
  fn matches_core_for_every_width() {
    let samples = [0u64, 1, 0x5A, 0x0123_4567_89AB_CDEF, u64::MAX, 0x8000_0000_0000_0001];
    for n in 1u8..=64 {
      for &x in &samples {
        let x = x & width_mask(n);
        let expected = x.reverse_bits() >> (64 - u32::from(n));
        assert_eq!(reverse_bits(x, n), expected, "x={x:#x} n={n}");
      }
    }
  }

  #[test]
  fn ignores_bits_above_width() {
    assert_eq!(reverse_bits(0xF1, 4), 0b1000);
    assert_eq!(reverse_bits(u64::MAX, 12), 0xFFF);
    assert_eq!(reverse_bits(0xABCD, 0), 0);
  }

  #[test]
  fn involution_small_widths_exhaustive() {
    for n in 1u8..=12 {
      for x in 0..=width_mask(n) {
        assert_eq!(reverse_bits(reverse_bits(x, n), n), x, "x={x:#x} n={n}");
      }
    }
  }

  #[test]
  fn width_mask_edges() {
    assert_eq!(width_mask(0), 0);
    assert_eq!(width_mask(1), 1);
    assert_eq!(width_mask(8), 0xFF);
    assert_eq!(width_mask(63), u64::MAX >> 1);
    assert_eq!(width_mask(64), u64::MAX);
    assert_eq!(width_mask(200), u64::MAX);
  }
}
