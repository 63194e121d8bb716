//! CRC algorithm parameters.
//!
//! This module defines the parameter set of a CRC algorithm following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::{
  CrcError,
  bits::{reverse_bits, width_mask},
  error::Field,
};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (1 to 64)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `seed`: Initial value for the CRC register, in normal form
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
/// - `check`: CRC of `"123456789"`, when published
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC32, CRC32C) use
/// reflected input and output, which maps to LSB-first processing.
///
/// # Examples
///
/// ```
/// use crcengine::CrcParams;
///
/// const MY_CRC: CrcParams = CrcParams::new(16, 0x1021)
///   .with_name("my-crc")
///   .with_seed(0xFFFF)
///   .with_check(0x29B1);
///
/// assert!(MY_CRC.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  /// Identifier, empty when the caller did not name the algorithm.
  pub name: &'static str,
  /// Width in bits (1 to 64).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub seed: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
  /// Published CRC of `"123456789"`.
  pub check: Option<u64>,
}

impl CrcParams {
  /// Unnamed, unreflected parameters with zero seed and zero `xor_out`.
  #[must_use]
  pub const fn new(width: u8, polynomial: u64) -> Self {
    Self {
      name: "",
      width,
      polynomial,
      seed: 0,
      reflect_in: false,
      reflect_out: false,
      xor_out: 0,
      check: None,
    }
  }

  #[must_use]
  pub const fn with_name(mut self, name: &'static str) -> Self {
    self.name = name;
    self
  }

  #[must_use]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = seed;
    self
  }

  #[must_use]
  pub const fn with_reflect(mut self, reflect_in: bool, reflect_out: bool) -> Self {
    self.reflect_in = reflect_in;
    self.reflect_out = reflect_out;
    self
  }

  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u64) -> Self {
    self.xor_out = xor_out;
    self
  }

  #[must_use]
  pub const fn with_check(mut self, check: u64) -> Self {
    self.check = Some(check);
    self
  }

  /// Mask selecting the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reverse_bits(self.polynomial, self.width)
  }

  /// Check that the width is supported and every value fits in it.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidWidth`] or [`CrcError::ValueTooWide`] naming the
  /// first offending field.
  pub fn validate(&self) -> Result<(), CrcError> {
    check_width(self.width)?;
    check_fits(Field::Polynomial, self.polynomial, self.width)?;
    check_fits(Field::Seed, self.seed, self.width)?;
    check_fits(Field::XorOut, self.xor_out, self.width)?;
    if let Some(check) = self.check {
      check_fits(Field::Check, check, self.width)?;
    }
    Ok(())
  }
}

pub(crate) const fn check_width(width: u8) -> Result<(), CrcError> {
  if width == 0 || width > 64 {
    return Err(CrcError::InvalidWidth { width });
  }
  Ok(())
}

pub(crate) const fn check_fits(field: Field, value: u64, width: u8) -> Result<(), CrcError> {
  if value & !width_mask(width) != 0 {
    return Err(CrcError::ValueTooWide { field, value, width });
  }
  Ok(())
}
