//! Table-driven engines: one lookup per input byte.

use traits::Calculate;

use crate::{
  CrcError, CrcParams,
  bits::{reverse_bits, width_mask},
  error::Field,
  params::check_fits,
  table::{BitOrder, CrcTable},
};

/// Check that `table` has the expected order and that `seed` and `xor_out`
/// fit its width.
fn check_table_inputs(table: &CrcTable, expected: BitOrder, seed: u64, xor_out: u64) -> Result<(), CrcError> {
  if table.order() != expected {
    return Err(CrcError::TableOrderMismatch {
      expected,
      found: table.order(),
    });
  }
  check_fits(Field::Seed, seed, table.width())?;
  check_fits(Field::XorOut, xor_out, table.width())
}

/// Parameters describing an engine built directly from a table.
const fn table_params(table: &CrcTable, seed: u64, xor_out: u64, reflect_in: bool, reflect_out: bool) -> CrcParams {
  CrcParams {
    name: "",
    width: table.width(),
    // The polynomial contributes every power-of-two entry's first round.
    polynomial: match table.order() {
      BitOrder::Msb => table.get(1),
      BitOrder::Lsb => reverse_bits(table.get(0x80), table.width()),
    },
    seed,
    reflect_in,
    reflect_out,
    xor_out,
    check: None,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// LSB-first
// ─────────────────────────────────────────────────────────────────────────────

/// Least-significant-bit-first table-driven engine (reflected input).
///
/// # Seed convention
///
/// The table holds reflected intermediate values, so the register runs in
/// reflected space. The seed is accepted in normal form and bit-reversed on
/// entry to every calculation. Callers must not pre-reflect it.
///
/// When the output is not reflected (`reflect_in != reflect_out`) the final
/// register is reversed back before `xor_out` is applied.
#[derive(Clone, Debug)]
pub struct LsbTable {
  params: CrcParams,
  table: CrcTable,
  result_mask: u64,
  reverse_result: bool,
}

impl LsbTable {
  /// Build the table for `params` (which must have `reflect_in` set).
  pub(crate) fn from_params(params: CrcParams) -> Self {
    debug_assert!(params.reflect_in);
    Self {
      table: CrcTable::new_unchecked(params.polynomial, params.width, BitOrder::Lsb),
      result_mask: params.mask(),
      reverse_result: params.reflect_in != params.reflect_out,
      params,
    }
  }

  /// Wrap a pre-generated LSB-first table.
  ///
  /// `seed` is in normal form. `reverse_result` selects a non-reflected
  /// output.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableOrderMismatch`] for an MSB-first table and
  /// [`CrcError::ValueTooWide`] if `seed` or `xor_out` exceed the table width.
  pub fn with_table(table: CrcTable, seed: u64, xor_out: u64, reverse_result: bool) -> Result<Self, CrcError> {
    check_table_inputs(&table, BitOrder::Lsb, seed, xor_out)?;
    Ok(Self {
      params: table_params(&table, seed, xor_out, true, !reverse_result),
      result_mask: width_mask(table.width()),
      table,
      reverse_result,
    })
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }
}

impl Calculate for LsbTable {
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
      crc = ((crc >> 8) ^ self.table.get(crc as u8 ^ byte)) & self.result_mask;
    }
    if self.reverse_result {
      crc = reverse_bits(crc, width);
    }
    crc ^ self.params.xor_out
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// MSB-first
// ─────────────────────────────────────────────────────────────────────────────

/// Most-significant-bit-first table-driven engine (non-reflected input).
///
/// The table index is the register's top byte. For widths below 8 the
/// register is left-aligned into a byte instead, and the `crc << 8` term
/// vanishes under the width mask.
#[derive(Clone, Debug)]
pub struct MsbTable {
  params: CrcParams,
  table: CrcTable,
  result_mask: u64,
  index_rshift: u32,
  index_lshift: u32,
  reverse_result: bool,
}

impl MsbTable {
  /// Build the table for `params` (which must not have `reflect_in` set).
  pub(crate) fn from_params(params: CrcParams) -> Self {
    debug_assert!(!params.reflect_in);
    Self::assemble(
      params,
      CrcTable::new_unchecked(params.polynomial, params.width, BitOrder::Msb),
      params.reflect_out,
    )
  }

  /// Wrap a pre-generated MSB-first table.
  ///
  /// `reverse_result` selects a reflected output.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableOrderMismatch`] for an LSB-first table and
  /// [`CrcError::ValueTooWide`] if `seed` or `xor_out` exceed the table width.
  pub fn with_table(table: CrcTable, seed: u64, xor_out: u64, reverse_result: bool) -> Result<Self, CrcError> {
    check_table_inputs(&table, BitOrder::Msb, seed, xor_out)?;
    let params = table_params(&table, seed, xor_out, false, reverse_result);
    Ok(Self::assemble(params, table, reverse_result))
  }

  fn assemble(params: CrcParams, table: CrcTable, reverse_result: bool) -> Self {
    let width = u32::from(params.width);
    Self {
      result_mask: params.mask(),
      index_rshift: width.saturating_sub(8),
      index_lshift: 8u32.saturating_sub(width),
      reverse_result,
      params,
      table,
    }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &CrcTable {
    &self.table
  }
}

impl Calculate for MsbTable {
  #[inline]
  fn width(&self) -> u8 {
    self.params.width
  }

  #[inline]
  fn seed(&self) -> u64 {
    self.params.seed
  }

  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64 {
    let mut crc = seed & self.result_mask;
    for &byte in data {
      let top = ((crc >> self.index_rshift) << self.index_lshift) as u8;
      crc = ((crc << 8) ^ self.table.get(top ^ byte)) & self.result_mask;
    }
    if self.reverse_result {
      crc = reverse_bits(crc, self.params.width);
    }
    crc ^ self.params.xor_out
  }
}
