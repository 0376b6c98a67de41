//! Financial instrument definitions.
//!
//! Instruments are organised by asset class:
//! - [`fx`]: FX window forwards and their trades
//!
//! All construction failures are reported as [`InstrumentError`].

mod error;
pub mod fx;

pub use error::InstrumentError;
