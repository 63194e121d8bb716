//! Const-fn CRC lookup table generation for any width up to 64 bits.
//!
//! A 256-entry table maps one input byte to the remainder it contributes
//! after eight shift rounds. Because every step is a XOR, tables are linear:
//!
//! ```text
//! table[i ^ j] == table[i] ^ table[j]
//! ```
//!
//! The generators below exploit this. Only the eight power-of-two entries are
//! computed with a shift round each; every other entry is the XOR of entries
//! already known. That is 8 shift rounds and 255 XORs per table instead of
//! 256 × 8 shift rounds.
//!
//! | Order | Register moves | Polynomial | Seed index |
//! |-------|----------------|------------|------------|
//! | [`BitOrder::Msb`] | left | normal | `1`, doubling |
//! | [`BitOrder::Lsb`] | right | reflected | `0x80`, halving |

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use crate::{
  CrcError,
  bits::{reverse_bits, width_mask},
  error::Field,
  params::{check_fits, check_width},
};

/// Bit convention of a lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOrder {
  /// Most significant bit first (non-reflected input).
  Msb,
  /// Least significant bit first (reflected input).
  Lsb,
}

impl BitOrder {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Msb => "msb-first",
      Self::Lsb => "lsb-first",
    }
  }
}

/// Register layout for MSB-first tables.
///
/// Widths below 8 are computed at the top of an 8-bit register so a whole
/// input byte can be XORed in; `shift` is the distance moved.
const fn msb_layout(width: u8) -> (u8, u8) {
  let shift = if width < 8 { 8 - width } else { 0 };
  (shift, width + shift)
}

/// Generate an MSB-first table by doubling.
///
/// `poly` is the normal polynomial without its implicit top bit. `width` must
/// be in `1..=64`; see [`generate_table`] for the checked entry point.
#[must_use]
pub const fn msb_table(poly: u64, width: u8) -> [u64; 256] {
  let (shift, reg_width) = msb_layout(width);
  let top = 1u64 << (reg_width - 1);
  let mask = width_mask(reg_width);
  let poly = (poly << shift) & mask;

  let mut table = [0u64; 256];
  // Entry 1 is the top bit after seven free shifts; each following power of
  // two needs exactly one more round than the previous one.
  let mut crc = top;
  let mut i = 1usize;
  while i <= 128 {
    crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
    crc &= mask;
    // i is a power of two above j, so i + j == i ^ j.
    let mut j = 0;
    while j < i {
      table[i + j] = table[j] ^ crc;
      j += 1;
    }
    i <<= 1;
  }

  if shift != 0 {
    let mut k = 0;
    while k < 256 {
      table[k] >>= shift;
      k += 1;
    }
  }
  table
}

/// Generate an LSB-first table by halving.
///
/// `poly` is the normal polynomial; it is reflected here. Entries are in
/// reflected register space. `width` must be in `1..=64`.
#[must_use]
pub const fn lsb_table(poly: u64, width: u8) -> [u64; 256] {
  let poly = reverse_bits(poly, width);

  let mut table = [0u64; 256];
  // 0x80 reaches bit 0 after seven free shifts, so one round gives its entry.
  // Each halving of the index needs one more round.
  let mut crc = 1u64;
  let mut i = 0x80usize;
  while i > 0 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    let mut j = 0;
    while j < 256 {
      table[i + j] = crc ^ table[j];
      j += 2 * i;
    }
    i >>= 1;
  }
  table
}

/// Generate an MSB-first table one entry at a time with eight shift rounds
/// per entry. Reference oracle for [`msb_table`].
#[must_use]
pub const fn msb_table_bitwise(poly: u64, width: u8) -> [u64; 256] {
  let (shift, reg_width) = msb_layout(width);
  let top = 1u64 << (reg_width - 1);
  let mask = width_mask(reg_width);
  let poly = (poly << shift) & mask;

  let mut table = [0u64; 256];
  let mut n = 1usize;
  while n < 256 {
    let mut crc = (n as u64) << (reg_width - 8);
    let mut round = 0;
    while round < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
      crc &= mask;
      round += 1;
    }
    table[n] = crc >> shift;
    n += 1;
  }
  table
}

/// Generate an LSB-first table one entry at a time. Reference oracle for
/// [`lsb_table`].
#[must_use]
pub const fn lsb_table_bitwise(poly: u64, width: u8) -> [u64; 256] {
  let poly = reverse_bits(poly, width);

  let mut table = [0u64; 256];
  let mut n = 1usize;
  while n < 256 {
    let mut crc = n as u64;
    let mut round = 0;
    while round < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      round += 1;
    }
    table[n] = crc;
    n += 1;
  }
  table
}

/// A generated 256-entry lookup table.
///
/// Entries are masked to [`width`](Self::width) bits. Tables are immutable
/// once built and can be read from any number of threads.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable {
  entries: [u64; 256],
  width: u8,
  order: BitOrder,
}

impl CrcTable {
  /// Build a table without validating `width` or `poly`.
  pub(crate) const fn new_unchecked(poly: u64, width: u8, order: BitOrder) -> Self {
    let entries = match order {
      BitOrder::Msb => msb_table(poly, width),
      BitOrder::Lsb => lsb_table(poly, width),
    };
    Self { entries, width, order }
  }

  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u64; 256] {
    &self.entries
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn order(&self) -> BitOrder {
    self.order
  }

  /// Entry for byte `index`.
  #[inline]
  #[must_use]
  pub const fn get(&self, index: u8) -> u64 {
    self.entries[index as usize]
  }

  /// Check `table[i ^ j] == table[i] ^ table[j]` for every pair of indices.
  #[must_use]
  pub fn is_linear(&self) -> bool {
    (0u8..=255).all(|i| (0u8..=255).all(|j| self.get(i ^ j) == self.get(i) ^ self.get(j)))
  }
}

impl fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &self.width)
      .field("order", &self.order)
      .field("entries", &format_args!("[{:#x}, {:#x}, .. 256]", self.get(0), self.get(1)))
      .finish()
  }
}

/// Generate a lookup table for `polynomial` of `width` bits.
///
/// This is the checked entry point for callers that embed tables elsewhere
/// (for example generated source code). Values are pre-masked to `width`.
///
/// # Errors
///
/// [`CrcError::InvalidWidth`] if `width` is not in `1..=64`, and
/// [`CrcError::ValueTooWide`] if `polynomial` has bits above `width`.
///
/// ```
/// use crcengine::{BitOrder, generate_table};
///
/// let table = generate_table(0x04C1_1DB7, 32, BitOrder::Lsb)?;
/// assert_eq!(table.get(1), 0x7707_3096);
/// # Ok::<(), crcengine::CrcError>(())
/// ```
pub fn generate_table(polynomial: u64, width: u8, order: BitOrder) -> Result<CrcTable, CrcError> {
  check_width(width)?;
  check_fits(Field::Polynomial, polynomial, width)?;
  log::trace!(
    "generating {} table: width={width} polynomial={polynomial:#x}",
    order.as_str()
  );
  Ok(CrcTable::new_unchecked(polynomial, width, order))
}
