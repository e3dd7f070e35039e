//! Errors reported while compiling or re-validating a number format.

use crate::flags::Region;

/// Why a rule set (or raw word) does not describe a usable number format.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum FormatError {
    /// The separator is non-ASCII, a digit, a sign, the decimal point, or an
    /// exponent marker.
    #[error("invalid digit separator byte 0x{0:02x}")]
    InvalidDigitSeparator(u8),

    #[error("exponent rules are set but exponent notation is disabled")]
    ExponentRulesWithoutNotation,

    #[error("mantissa sign cannot be both forbidden and required")]
    ConflictingMantissaSign,

    #[error("exponent sign cannot be both forbidden and required")]
    ConflictingExponentSign,

    #[error("special value rules are set but special values are disabled")]
    SpecialRulesWithoutSpecial,

    /// Consecutive separators were allowed without any other placement.
    #[error("{0} digit separators allow consecutive separators but no placement")]
    ConsecutiveSeparatorOnly(Region),

    /// The raw word sets bits no rule is defined for.
    #[error("reserved bits set: {0:#018x}")]
    ReservedBits(u64),

    /// The raw word carries a separator character but no separator rule.
    #[error("digit separator byte 0x{0:02x} set without any separator rule")]
    UnusedDigitSeparator(u8),
}

/// A grammar rule name did not match any rule.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unknown grammar rule")]
pub struct UnknownRule;

/// A preset name did not match any preset or alias.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("unknown preset")]
pub struct UnknownPreset;
