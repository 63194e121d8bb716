//! Engine selection and the unified [`Engine`] type.
//!
//! Five implementations share the [`Calculate`] interface:
//!
//! | Kind | Type | Per byte | Reflection |
//! |------|------|----------|------------|
//! | `table/lsb` | [`LsbTable`] | 1 lookup | `reflect_in` set |
//! | `table/msb` | [`MsbTable`] | 1 lookup | `reflect_in` clear |
//! | `bitwise/msb` | [`Generic`] | 8 rounds | any |
//! | `bitwise/lsb` | [`GenericLsb`] | 8 rounds | any |
//! | `windowed` | [`Windowed`] | up to 8 rounds | any, plus bit ranges |
//!
//! The variant is chosen once at construction. All five agree on every input.

mod bitwise;
mod table;
mod windowed;

pub use bitwise::{Generic, GenericLsb};
pub use table::{LsbTable, MsbTable};
pub use windowed::Windowed;

use log::debug;
use traits::{CHECK_INPUT, Calculate, CheckMismatch};

use crate::{
  CrcError, CrcParams, catalog,
  config::{self, EngineForce},
};

/// Which implementation an [`Engine`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
  LsbTable,
  MsbTable,
  Generic,
  GenericLsb,
  Windowed,
}

impl EngineKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::LsbTable => "table/lsb",
      Self::MsbTable => "table/msb",
      Self::Generic => "bitwise/msb",
      Self::GenericLsb => "bitwise/lsb",
      Self::Windowed => "windowed",
    }
  }

  /// True for the table-driven kinds.
  #[inline]
  #[must_use]
  pub const fn is_table(self) -> bool {
    matches!(self, Self::LsbTable | Self::MsbTable)
  }
}

impl core::fmt::Display for EngineKind {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A configured CRC engine.
///
/// ```
/// use crcengine::{Calculate, Engine, catalog};
///
/// let crc32 = Engine::new(catalog::CRC_32)?;
/// assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
/// assert_eq!(crc32.kind().as_str(), "table/lsb");
/// # Ok::<(), crcengine::CrcError>(())
/// ```
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Engine {
  LsbTable(LsbTable),
  MsbTable(MsbTable),
  Generic(Generic),
  GenericLsb(GenericLsb),
  Windowed(Windowed),
}

impl Engine {
  /// Table-driven engine for `params`, unless `CRCENGINE_FORCE` says otherwise.
  ///
  /// Reflected input selects the LSB-first table, anything else the MSB-first
  /// table.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError`] if `params` is not a valid parameter set.
  pub fn new(params: CrcParams) -> Result<Self, CrcError> {
    Self::with_force(params, config::get().requested_force)
  }

  /// Build with an explicit engine selection, ignoring the environment.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError`] if `params` is not a valid parameter set.
  pub fn with_force(params: CrcParams, force: EngineForce) -> Result<Self, CrcError> {
    params.validate()?;
    let engine = match force {
      EngineForce::Auto | EngineForce::Table => Self::table_unchecked(params),
      EngineForce::Bitwise => Self::Generic(Generic::from_params(params)),
    };
    engine.log_selected(force);
    Ok(engine)
  }

  /// Bit-by-bit MSB-first engine.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError`] if `params` is not a valid parameter set.
  pub fn generic(params: CrcParams) -> Result<Self, CrcError> {
    params.validate()?;
    let engine = Self::Generic(Generic::from_params(params));
    engine.log_selected(EngineForce::Auto);
    Ok(engine)
  }

  /// Bit-by-bit LSB-first engine.
  ///
  /// # Errors
  ///
  /// Returns [`CrcError`] if `params` is not a valid parameter set.
  pub fn generic_lsb(params: CrcParams) -> Result<Self, CrcError> {
    params.validate()?;
    let engine = Self::GenericLsb(GenericLsb::from_params(params));
    engine.log_selected(EngineForce::Auto);
    Ok(engine)
  }

  /// Bit-range engine; see [`Windowed::calculate_range`].
  ///
  /// # Errors
  ///
  /// Returns [`CrcError`] if `params` is not a valid parameter set.
  pub fn windowed(params: CrcParams) -> Result<Self, CrcError> {
    params.validate()?;
    let engine = Self::Windowed(Windowed::from_params(params));
    engine.log_selected(EngineForce::Auto);
    Ok(engine)
  }

  /// Engine for a catalogued algorithm, e.g. `"crc-32"` or `"crc-16/ccitt-false"`.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnknownAlgorithm`] if `name` is not in the [catalog](crate::catalog).
  pub fn by_name(name: &str) -> Result<Self, CrcError> {
    let params = catalog::lookup(name).ok_or_else(|| {
      debug!("no catalogued algorithm named {name:?}");
      CrcError::UnknownAlgorithm
    })?;
    Self::new(*params)
  }

  fn table_unchecked(params: CrcParams) -> Self {
    if params.reflect_in {
      Self::LsbTable(LsbTable::from_params(params))
    } else {
      Self::MsbTable(MsbTable::from_params(params))
    }
  }

  fn log_selected(&self, force: EngineForce) {
    let p = self.params();
    debug!(
      "crc engine {} for {:?}: width={} poly={:#x} refin={} refout={} force={}",
      self.kind(),
      p.name,
      p.width,
      p.polynomial,
      p.reflect_in,
      p.reflect_out,
      force.as_str(),
    );
  }

  #[must_use]
  pub const fn kind(&self) -> EngineKind {
    match self {
      Self::LsbTable(_) => EngineKind::LsbTable,
      Self::MsbTable(_) => EngineKind::MsbTable,
      Self::Generic(_) => EngineKind::Generic,
      Self::GenericLsb(_) => EngineKind::GenericLsb,
      Self::Windowed(_) => EngineKind::Windowed,
    }
  }

  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    match self {
      Self::LsbTable(e) => e.params(),
      Self::MsbTable(e) => e.params(),
      Self::Generic(e) => e.params(),
      Self::GenericLsb(e) => e.params(),
      Self::Windowed(e) => e.params(),
    }
  }

  /// The bit-range engine, if this is one.
  #[must_use]
  pub const fn as_windowed(&self) -> Option<&Windowed> {
    match self {
      Self::Windowed(e) => Some(e),
      _ => None,
    }
  }

  /// Compare the CRC of `"123456789"` against the published check value.
  ///
  /// Parameter sets without a check value always pass.
  ///
  /// # Errors
  ///
  /// [`CheckMismatch`] if the computed value differs.
  pub fn verify(&self) -> Result<(), CheckMismatch> {
    let Some(expected) = self.params().check else {
      return Ok(());
    };
    let actual = self.calculate(CHECK_INPUT);
    if actual == expected {
      Ok(())
    } else {
      Err(CheckMismatch::new(expected, actual))
    }
  }
}

impl Calculate for Engine {
  #[inline]
  fn width(&self) -> u8 {
    self.params().width
  }

  #[inline]
  fn seed(&self) -> u64 {
    self.params().seed
  }

  #[inline]
  fn calculate_seeded(&self, data: &[u8], seed: u64) -> u64 {
    match self {
      Self::LsbTable(e) => e.calculate_seeded(data, seed),
      Self::MsbTable(e) => e.calculate_seeded(data, seed),
      Self::Generic(e) => e.calculate_seeded(data, seed),
      Self::GenericLsb(e) => e.calculate_seeded(data, seed),
      Self::Windowed(e) => e.calculate_seeded(data, seed),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free-function constructors
// ─────────────────────────────────────────────────────────────────────────────

/// Shorthand for [`Engine::new`].
///
/// # Errors
///
/// Returns [`CrcError`] if `params` is not a valid parameter set.
#[inline]
pub fn create(params: CrcParams) -> Result<Engine, CrcError> {
  Engine::new(params)
}

/// Shorthand for [`Engine::generic`].
///
/// # Errors
///
/// Returns [`CrcError`] if `params` is not a valid parameter set.
#[inline]
pub fn create_generic(params: CrcParams) -> Result<Engine, CrcError> {
  Engine::generic(params)
}

/// Shorthand for [`Engine::generic_lsb`].
///
/// # Errors
///
/// Returns [`CrcError`] if `params` is not a valid parameter set.
#[inline]
pub fn create_generic_lsb(params: CrcParams) -> Result<Engine, CrcError> {
  Engine::generic_lsb(params)
}

/// Shorthand for [`Engine::windowed`].
///
/// # Errors
///
/// Returns [`CrcError`] if `params` is not a valid parameter set.
#[inline]
pub fn create_windowed(params: CrcParams) -> Result<Engine, CrcError> {
  Engine::windowed(params)
}

/// Shorthand for [`Engine::by_name`].
///
/// # Errors
///
/// [`CrcError::UnknownAlgorithm`] if `name` is not catalogued.
#[inline]
pub fn by_name(name: &str) -> Result<Engine, CrcError> {
  Engine::by_name(name)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Field;

  const CONSTRUCTORS: [fn(CrcParams) -> Result<Engine, CrcError>; 5] = [
    |p| Engine::with_force(p, EngineForce::Table),
    Engine::generic,
    Engine::generic_lsb,
    Engine::windowed,
    |p| Engine::with_force(p, EngineForce::Bitwise),
  ];

  #[test]
  fn engines_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
    assert_send_sync::<EngineKind>();
  }

  #[test]
  fn table_selection_follows_reflect_in() {
    let lsb = Engine::with_force(catalog::CRC_32, EngineForce::Auto).unwrap();
    assert_eq!(lsb.kind(), EngineKind::LsbTable);
    let msb = Engine::with_force(catalog::CRC_32_BZIP2, EngineForce::Table).unwrap();
    assert_eq!(msb.kind(), EngineKind::MsbTable);
    let umts = Engine::with_force(catalog::CRC_12_UMTS, EngineForce::Auto).unwrap();
    assert_eq!(umts.kind(), EngineKind::MsbTable);
    let forced = Engine::with_force(catalog::CRC_32, EngineForce::Bitwise).unwrap();
    assert_eq!(forced.kind(), EngineKind::Generic);
  }

  #[test]
  fn kind_names_are_distinct() {
    let kinds = [
      EngineKind::LsbTable,
      EngineKind::MsbTable,
      EngineKind::Generic,
      EngineKind::GenericLsb,
      EngineKind::Windowed,
    ];
    for (i, a) in kinds.iter().enumerate() {
      for b in &kinds[i + 1..] {
        assert_ne!(a.as_str(), b.as_str());
      }
    }
    assert!(EngineKind::MsbTable.is_table());
    assert!(!EngineKind::Windowed.is_table());
  }

  #[test]
  fn every_constructor_passes_check() {
    for params in [
      catalog::CRC_32,
      catalog::CRC_16_XMODEM,
      catalog::CRC_12_UMTS,
      catalog::CRC_5_USB,
      catalog::CRC_64_XZ,
    ] {
      for ctor in CONSTRUCTORS {
        let engine = ctor(params).unwrap();
        assert_eq!(engine.verify(), Ok(()), "{} on {}", params.name, engine.kind());
        assert_eq!(engine.check(), params.check.unwrap());
      }
    }
  }

  #[test]
  fn verify_reports_mismatch() {
    let params = catalog::CRC_32.with_check(0x1234);
    let engine = Engine::new(params).unwrap();
    assert_eq!(engine.verify(), Err(CheckMismatch::new(0x1234, 0xCBF4_3926)));

    let mut unchecked = catalog::CRC_32;
    unchecked.check = None;
    assert_eq!(Engine::new(unchecked).unwrap().verify(), Ok(()));
  }

  #[test]
  fn constructors_validate() {
    let bad_width = CrcParams::new(0, 0x1);
    let bad_poly = CrcParams::new(8, 0x107);
    for ctor in CONSTRUCTORS {
      assert_eq!(ctor(bad_width).unwrap_err(), CrcError::InvalidWidth { width: 0 });
      assert_eq!(
        ctor(bad_poly).unwrap_err(),
        CrcError::ValueTooWide {
          field: Field::Polynomial,
          value: 0x107,
          width: 8
        }
      );
    }
  }

  #[test]
  fn by_name_resolves_catalog() {
    let engine = by_name("CRC-32").unwrap();
    assert_eq!(engine.params().name, "crc-32");
    assert_eq!(engine.check(), 0xCBF4_3926);
    assert_eq!(by_name("crc-33/unknown").unwrap_err(), CrcError::UnknownAlgorithm);
  }

  #[test]
  fn as_windowed_only_for_windowed() {
    assert!(create_windowed(catalog::CRC_8).unwrap().as_windowed().is_some());
    assert!(create_generic(catalog::CRC_8).unwrap().as_windowed().is_none());
    assert!(create_generic_lsb(catalog::CRC_8).unwrap().as_windowed().is_none());
    assert!(create(catalog::CRC_8).unwrap().as_windowed().is_none());
  }

  #[test]
  #[cfg(feature = "std")]
  fn shared_across_threads() {
    let engine = Engine::new(catalog::CRC_32C).unwrap();
    std::thread::scope(|s| {
      let handles: [_; 4] = core::array::from_fn(|i| {
        let engine = &engine;
        s.spawn(move || engine.calculate(&[i as u8; 64]))
      });
      for (i, h) in handles.into_iter().enumerate() {
        let expected = Engine::generic(catalog::CRC_32C).unwrap().calculate(&[i as u8; 64]);
        assert_eq!(h.join().unwrap(), expected);
      }
    });
  }
}
