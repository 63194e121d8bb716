//! Configuration and range errors.

use core::fmt;

use crate::table::BitOrder;

/// Parameter named by [`CrcError::ValueTooWide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
  Polynomial,
  Seed,
  XorOut,
  Check,
}

impl Field {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Polynomial => "polynomial",
      Self::Seed => "seed",
      Self::XorOut => "xor_out",
      Self::Check => "check",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Errors raised while building an engine or validating a bit range.
///
/// Configuration errors surface at construction time; range errors are raised
/// by [`Windowed::calculate_range`](crate::Windowed::calculate_range) before
/// any bits are processed. Neither is retryable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CrcError {
  /// Width is zero or larger than 64 bits.
  InvalidWidth { width: u8 },
  /// A parameter has bits set above the CRC width.
  ValueTooWide { field: Field, value: u64, width: u8 },
  /// A table of the wrong bit order was handed to a table-driven engine.
  TableOrderMismatch { expected: BitOrder, found: BitOrder },
  /// The first bit of a window is outside the buffer.
  StartBitOutOfRange { start_bit: usize, total_bits: usize },
  /// A window extends past the end of the buffer.
  LengthOutOfRange {
    start_bit: usize,
    length_bits: usize,
    total_bits: usize,
  },
  /// No catalogue algorithm has the requested name.
  UnknownAlgorithm,
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidWidth { width } => write!(f, "invalid CRC width {width}: must be between 1 and 64 bits"),
      Self::ValueTooWide { field, value, width } => {
        write!(f, "{field} {value:#x} does not fit in {width} bits")
      }
      Self::TableOrderMismatch { expected, found } => {
        write!(f, "expected a {} table, got a {} table", expected.as_str(), found.as_str())
      }
      Self::StartBitOutOfRange { start_bit, total_bits } => {
        write!(f, "start bit {start_bit} is out of range for a {total_bits}-bit buffer")
      }
      Self::LengthOutOfRange {
        start_bit,
        length_bits,
        total_bits,
      } => write!(
        f,
        "length_bits {length_bits} starting at bit {start_bit} runs past the end of a {total_bits}-bit buffer"
      ),
      Self::UnknownAlgorithm => f.write_str("unknown CRC algorithm name"),
    }
  }
}

impl core::error::Error for CrcError {}
