//! Core calculation traits for crcengine.
//!
//! This crate provides the contract that every CRC engine conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Calculate`] | One-shot CRC calculation with an optional per-call seed |
//! | [`CHECK_INPUT`] | The catalogue check string `"123456789"` |
//! | [`CheckMismatch`] | An engine disagreed with its published check value |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod calculate;
pub mod error;

pub use calculate::{CHECK_INPUT, Calculate};
pub use error::CheckMismatch;
