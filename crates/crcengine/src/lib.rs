//! Configurable CRC engines for any width from 1 to 64 bits.
//!
//! A CRC is described by a [`CrcParams`] set (width, polynomial, seed,
//! input/output reflection, final XOR). From one parameter set the crate can
//! build several interchangeable engines, all producing identical results:
//!
//! | Engine | Strategy | Notes |
//! |--------|----------|-------|
//! | [`LsbTable`] | 256-entry table, LSB-first | default for reflected input |
//! | [`MsbTable`] | 256-entry table, MSB-first | default for normal input |
//! | [`Generic`] | bit-by-bit, MSB-first | reference implementation |
//! | [`GenericLsb`] | bit-by-bit, LSB-first | mirror of `Generic` |
//! | [`Windowed`] | bit-by-bit over a bit range | arbitrary start bit and length |
//!
//! A [catalog] of common algorithms with published check values is included.
//!
//! # Example
//!
//! ```rust
//! use crcengine::{Calculate, CrcParams, Engine};
//!
//! // Catalogued algorithm
//! let crc32 = Engine::by_name("crc-32")?;
//! assert_eq!(crc32.calculate(b"123456789"), 0xCBF4_3926);
//!
//! // Custom parameters
//! let crc5 = Engine::new(CrcParams::new(5, 0x05).with_seed(0x1F).with_reflect(true, true).with_xor_out(0x1F))?;
//! assert_eq!(crc5.calculate(b"123456789"), 0x19);
//!
//! // Bit range: the same 12 one-bits, at bit 4 and at bit 0
//! let engine = Engine::windowed(crcengine::catalog::CRC_8)?;
//! let windowed = engine.as_windowed().unwrap();
//! let shifted = windowed.calculate_range(b"\x0f\xff", 4, Some(12), None)?;
//! let aligned = windowed.calculate_range(b"\xff\xf0", 0, Some(12), None)?;
//! assert_eq!(shifted, aligned);
//! # Ok::<(), crcengine::CrcError>(())
//! ```
//!
//! # Engine selection
//!
//! [`Engine::new`] picks a table-driven engine. Set `CRCENGINE_FORCE=bitwise`
//! to route it through the bit-by-bit reference instead; see [`config`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! crcengine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod bits;
pub mod catalog;
pub mod config;
mod engine;
mod error;
mod params;
mod table;

#[cfg(all(test, not(miri)))]
mod proptests;

pub use bits::{BYTE_REVERSE, reverse_bits, reverse_byte, width_mask};
pub use config::EngineForce;
pub use engine::{
  Engine, EngineKind, Generic, GenericLsb, LsbTable, MsbTable, Windowed, by_name, create, create_generic,
  create_generic_lsb, create_windowed,
};
pub use error::{CrcError, Field};
pub use params::CrcParams;
pub use table::{BitOrder, CrcTable, generate_table, lsb_table, lsb_table_bitwise, msb_table, msb_table_bitwise};
// Re-export traits for convenience
pub use traits::{CHECK_INPUT, Calculate, CheckMismatch};
