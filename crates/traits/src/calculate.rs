//! The single-call CRC calculation contract.
//!
//! Every engine, table-driven or bit-by-bit, answers the same question: given
//! a byte buffer, what is the CRC? Engines carry no state between calls, so
//! all methods take `&self` and an engine can be shared freely across threads.

/// Input used by the CRC catalogue to define an algorithm's check value.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A configured CRC calculator.
///
/// Results are returned as `u64` regardless of the CRC width; only the low
/// [`width`](Self::width) bits can ever be set.
///
/// # Usage
///
/// ```rust,ignore
/// use crcengine::{Calculate, Engine};
///
/// let crc32 = Engine::by_name("crc-32")?;
/// assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `calculate(data)` must equal `calculate_seeded(data, self.seed())`
/// - results must be masked to `width()` bits
/// - calculation must not mutate shared state
pub trait Calculate {
  /// CRC width in bits (1..=64).
  fn width(&self) -> u8;

  /// Default initial register value, in normal (unreflected) form.
  fn seed(&self) -> u64;

  /// Calculate the CRC of `data` starting from `seed` instead of the default.
  ///
  /// `seed` is interpreted in normal (unreflected) form and truncated to
  /// `width()` bits.
  #[must_use]
  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64;

  /// Calculate the CRC of `data`.
  #[inline]
  #[must_use]
  fn calculate(&self, data: &[u8]) -> u64 {
    self.calculate_seeded(data, self.seed())
  }

  /// CRC of the catalogue check string `"123456789"`.
  #[inline]
  #[must_use]
  fn check(&self) -> u64 {
    self.calculate(CHECK_INPUT)
  }
}
