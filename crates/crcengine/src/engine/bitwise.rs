//! Bit-by-bit engines: one shift round per input bit, no tables.
//!
//! These engines mirror the mathematical definition directly, which makes
//! them the reference every table-driven result is checked against. They also
//! accept any combination of `reflect_in` and `reflect_out`.

use traits::Calculate;

use crate::{
  CrcParams,
  bits::{reverse_bits, reverse_byte, width_mask},
};

/// Apply `reflect_out` and `xor_out` to a finished register in normal form.
#[inline]
pub(crate) const fn finalize(params: &CrcParams, crc: u64) -> u64 {
  let crc = if params.reflect_out {
    reverse_bits(crc, params.width)
  } else {
    crc
  };
  crc ^ params.xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// MSB-first register
// ─────────────────────────────────────────────────────────────────────────────

/// Shift-register layout shared by the MSB-first bitwise engines.
///
/// Widths below 8 run at the top of an 8-bit register (`crc_lshift`) so whole
/// bytes can be XORed in. Widths of 8 and more XOR each byte into the top
/// eight bits of the register (`msb_lshift`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MsbRegister {
  poly: u64,
  crc_lshift: u32,
  msb_lshift: u32,
  msbit_mask: u64,
  crc_mask: u64,
}

impl MsbRegister {
  pub(crate) const fn new(params: &CrcParams) -> Self {
    let width = params.width as u32;
    let (crc_lshift, msb_lshift) = if width < 8 { (8 - width, 0) } else { (0, width - 8) };
    let reg_width = width + crc_lshift;
    Self {
      poly: params.polynomial << crc_lshift,
      crc_lshift,
      msb_lshift,
      msbit_mask: 1 << (reg_width - 1),
      crc_mask: width_mask(reg_width as u8),
    }
  }

  /// Move a normal-form value into register position.
  #[inline]
  pub(crate) const fn load(&self, value: u64) -> u64 {
    value << self.crc_lshift
  }

  /// Move the register back to a normal-form value.
  #[inline]
  pub(crate) const fn unload(&self, crc: u64) -> u64 {
    crc >> self.crc_lshift
  }

  /// Bits below the alignment shift. Always zero for a consistent register.
  #[inline]
  pub(crate) const fn residue(&self, crc: u64) -> u64 {
    crc & ((1 << self.crc_lshift) - 1)
  }

  /// XOR `byte` into the top of the register and run `rounds` shift rounds.
  ///
  /// Only the top `rounds` bits of `byte` may be set.
  #[inline]
  pub(crate) fn feed(&self, mut crc: u64, byte: u8, rounds: usize) -> u64 {
    crc ^= u64::from(byte) << self.msb_lshift;
    for _ in 0..rounds {
      crc = if crc & self.msbit_mask != 0 {
        (crc << 1) ^ self.poly
      } else {
        crc << 1
      };
      crc &= self.crc_mask;
    }
    crc
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// MSB-first generic
// ─────────────────────────────────────────────────────────────────────────────

/// Bit-by-bit MSB-first engine with independent input/output reflection.
///
/// Reflected input is handled by mirroring each byte before it enters the
/// register; reflected output by mirroring the final register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generic {
  params: CrcParams,
  register: MsbRegister,
}

impl Generic {
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
}

impl Calculate for Generic {
  #[inline]
  fn width(&self) -> u8 {
    self.params.width
  }

  #[inline]
  fn seed(&self) -> u64 {
    self.params.seed
  }

  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64 {
    let reg = &self.register;
    let mut crc = reg.load(seed & self.params.mask());
    for &byte in data {
      let byte = if self.params.reflect_in { reverse_byte(byte) } else { byte };
      crc = reg.feed(crc, byte, 8);
    }
    finalize(&self.params, reg.unload(crc))
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// LSB-first generic
// ─────────────────────────────────────────────────────────────────────────────

/// Bit-by-bit LSB-first engine, the mirror image of [`Generic`].
///
/// The register runs in reflected space: the polynomial and seed are
/// reflected once, bytes enter at the bottom, and rounds shift right. Input
/// that is *not* reflected is mirrored per byte so its most significant bit is
/// processed first; output that is *not* reflected is mirrored back at the
/// end. The result matches every other engine for the same parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericLsb {
  params: CrcParams,
  poly_reflected: u64,
  result_mask: u64,
}

impl GenericLsb {
  pub(crate) const fn from_params(params: CrcParams) -> Self {
    Self {
      poly_reflected: params.polynomial_reflected(),
      result_mask: params.mask(),
      params,
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }
}

impl Calculate for GenericLsb {
  #[inline]
  fn width(&self) -> u8 {
    self.params.width
  }

  #[inline]
  fn seed(&self) -> u64 {
    self.params.seed
  }

  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64 {
    let width = self.params.width;
    let mut crc = reverse_bits(seed & self.result_mask, width);
    for &byte in data {
      let byte = if self.params.reflect_in { byte } else { reverse_byte(byte) };
      crc ^= u64::from(byte);
      for _ in 0..8 {
        crc = if crc & 1 != 0 {
          (crc >> 1) ^ self.poly_reflected
        } else {
          crc >> 1
        };
      }
      crc &= self.result_mask;
    }
    // The register holds the reflected CRC.
    let crc = if self.params.reflect_out {
      crc
    } else {
      reverse_bits(crc, width)
    };
    crc ^ self.params.xor_out
  }
}
