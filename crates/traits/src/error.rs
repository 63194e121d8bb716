//! Error types shared by CRC engines.
//!
//! Individual crates define their own configuration errors as needed.

use core::fmt;

/// An engine's check value did not match the published one.
///
/// Returned when an engine is verified against the CRC of
/// [`CHECK_INPUT`](crate::CHECK_INPUT) recorded in its parameter set.
///
/// # Examples
///
/// ```
/// use traits::CheckMismatch;
///
/// fn verify(actual: u64, expected: u64) -> Result<(), CheckMismatch> {
///   if actual == expected { Ok(()) } else { Err(CheckMismatch::new(expected, actual)) }
/// }
///
/// assert!(verify(0xCBF4_3926, 0xCBF4_3926).is_ok());
/// assert!(verify(0x0, 0xCBF4_3926).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct CheckMismatch {
  /// Published check value.
  pub expected: u64,
  /// Value the engine produced.
  pub actual: u64,
}

impl CheckMismatch {
  /// Create a new check mismatch error.
  #[inline]
  #[must_use]
  pub const fn new(expected: u64, actual: u64) -> Self {
    Self { expected, actual }
  }
}

impl fmt::Display for CheckMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "check value mismatch: expected {:#x}, got {:#x}",
      self.expected, self.actual
    )
  }
}

impl core::error::Error for CheckMismatch {}
