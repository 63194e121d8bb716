//! Engine selection configuration (overrides).
//!
//! [`Engine::new`](crate::Engine::new) normally builds a table-driven engine.
//! The selection can be forced per call with
//! [`Engine::with_force`](crate::Engine::with_force), or process-wide through
//! the `CRCENGINE_FORCE` environment variable (requires the `std` feature):
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` | Default selection |
//! | `table`, `portable` | Table-driven engine |
//! | `bitwise`, `generic`, `reference` | Bit-by-bit MSB-first engine |

/// Forced engine selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineForce {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the table-driven engine matching the input reflection.
  Table,
  /// Force the bit-by-bit MSB-first engine.
  Bitwise,
}

impl EngineForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Bitwise => "bitwise",
    }
  }

  /// Parse an override value. Surrounding whitespace and ASCII case are ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Table);
    }
    if value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("generic")
      || value.eq_ignore_ascii_case("reference")
    {
      return Some(Self::Bitwise);
    }
    None
  }
}

/// Effective engine configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EngineConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: EngineForce,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: EngineForce,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_force(name: &str) -> Option<EngineForce> {
    let value = std::env::var(name).ok()?;
    let force = EngineForce::parse(&value);
    if force.is_none() && !value.trim().is_empty() {
      log::warn!("ignoring unrecognised {name}={value:?}");
    }
    force
  }

  Overrides {
    force: parse_force("CRCENGINE_FORCE").unwrap_or_default(),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective engine configuration for this process.
///
/// The environment is read once; later changes to it have no effect.
#[inline]
#[must_use]
pub fn get() -> EngineConfig {
  EngineConfig {
    requested_force: overrides().force,
  }
}
