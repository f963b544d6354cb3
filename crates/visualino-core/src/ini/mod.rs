//! INI settings file format.
//!
//! The dialect matches what Qt's `QSettings::IniFormat` writes for flat
//! string values, so settings files and bundled `config.ini` defaults
//! produced by earlier Visualino releases load unchanged.

pub mod codec;

pub use codec::{parse, parse_lenient, serialize, IniError, GENERAL_SECTION};
