//! Compiled numeric-literal grammars.
//!
//! A number parser that supports many languages needs to know, per call,
//! which literal forms to accept: whether `1_000` is legal, whether `.5`
//! needs a leading digit, whether `+1` or `NaN` are allowed. This crate turns
//! such a description into a [`NumberFormat`], one validated `u64` a parser
//! can test with single masks.
//!
//! # Modules
//!
//! - [`flags`]: rule bits, the region × placement separator table, masks
//! - [`validate`]: consistency checks for a rule set
//! - [`builder`]: compiles rules into a format
//! - [`format`]: the packed word and its predicates
//! - [`preset`]: named formats for common languages
//!
//! ```
//! use numgram_format::{NumberFormat, Preset};
//!
//! let format: NumberFormat = "rust-literal".parse::<Preset>().unwrap().format();
//! assert!(format.integer_internal_digit_separator());
//! assert_eq!(format.digit_separator(), b'_');
//! ```

pub mod builder;
pub mod config;
mod error;
pub mod flags;
pub mod format;
pub mod preset;
pub mod validate;

pub use builder::NumberFormatBuilder;
pub use config::ExponentConfig;
pub use error::{FormatError, UnknownPreset, UnknownRule};
pub use flags::{GrammarRule, Placement, Region, RuleFlags};
pub use format::NumberFormat;
pub use preset::Preset;
pub use validate::{is_valid, is_valid_digit_separator, validate};
