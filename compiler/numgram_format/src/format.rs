//! The compiled number format word.
//!
//! A [`NumberFormat`] packs every active rule and the digit separator into
//! one `u64` so a parser can carry its whole grammar in a register and test
//! any rule with a single mask. Values only come from the builder, the
//! preset table, or the `from_bits` constructors. Each of them validates,
//! so the accessors here never fail.

use std::fmt;

use crate::builder::NumberFormatBuilder;
use crate::config::ExponentConfig;
use crate::error::FormatError;
use crate::flags::{
    GrammarRule, Placement, Region, RuleFlags, DIGIT_SEPARATOR_BITS, DIGIT_SEPARATOR_SHIFT,
};
use crate::validate;

/// A validated numeric-literal grammar, packed into 64 bits.
///
/// Layout: `(digit_separator << 56) | rule_bits`. The separator byte is zero
/// whenever no separator rule is active, so equal grammars compare equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "u64"))]
#[repr(transparent)]
pub struct NumberFormat(u64);

const _: () = assert!(std::mem::size_of::<NumberFormat>() == 8);

/// Generates one predicate per grammar rule.
macro_rules! rule_predicates {
    ($($(#[$meta:meta])* $name:ident => $flag:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub const fn $name(self) -> bool {
                self.rules().contains(RuleFlags::$flag)
            }
        )*
    };
}

impl NumberFormat {
    /// Pack an already validated rule set. Drops the separator when no
    /// separator rule can observe it.
    pub(crate) const fn from_parts(rules: RuleFlags, digit_separator: u8) -> Self {
        let separator = if rules.has_digit_separator() {
            (digit_separator as u64) << DIGIT_SEPARATOR_SHIFT
        } else {
            0
        };
        NumberFormat(rules.bits() | separator)
    }

    /// Rebuild a format from a raw word, e.g. one received across FFI.
    ///
    /// Runs the full validator, and also rejects reserved bits and a
    /// separator byte that no rule uses.
    pub fn from_bits(bits: u64, config: &ExponentConfig) -> Result<Self, FormatError> {
        let (rules, separator) = Self::split(bits);
        validate::validate(rules, separator, config)?;
        Self::canonical(bits, rules, separator)
    }

    /// Like [`from_bits`](Self::from_bits), but without knowing which
    /// exponent markers the word was compiled against.
    ///
    /// Every check except the separator/marker collision runs. Use this for
    /// stored words that may come from a host with custom markers.
    pub fn from_bits_without_markers(bits: u64) -> Result<Self, FormatError> {
        let (rules, separator) = Self::split(bits);
        validate::validate_without_markers(rules, separator)?;
        Self::canonical(bits, rules, separator)
    }

    fn split(bits: u64) -> (RuleFlags, u8) {
        let rules = RuleFlags::from_bits_retain(bits & !DIGIT_SEPARATOR_BITS);
        #[allow(clippy::cast_possible_truncation, reason = "top byte only")]
        let separator = (bits >> DIGIT_SEPARATOR_SHIFT) as u8;
        (rules, separator)
    }

    fn canonical(bits: u64, rules: RuleFlags, separator: u8) -> Result<Self, FormatError> {
        if separator != 0 && !rules.has_digit_separator() {
            return Err(FormatError::UnusedDigitSeparator(separator));
        }
        Ok(NumberFormat(bits))
    }

    /// Start a builder with every rule inactive.
    pub const fn builder() -> NumberFormatBuilder {
        NumberFormatBuilder::new()
    }

    /// Start a builder preloaded with this format's rules and separator.
    pub const fn rebuild(self) -> NumberFormatBuilder {
        NumberFormatBuilder::from_format(self)
    }

    /// No rules at all: the most permissive grammar.
    pub const fn permissive() -> Self {
        Self::PERMISSIVE
    }

    /// Allow `digit_separator` anywhere a separator can appear.
    ///
    /// `None` if the character cannot be a separator.
    pub fn ignore(digit_separator: u8) -> Option<Self> {
        Self::builder()
            .digit_separator(digit_separator)
            .digit_separators(true)
            .build()
    }

    /// The raw packed word.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The rule bits, without the separator character.
    #[inline]
    pub const fn rules(self) -> RuleFlags {
        RuleFlags::from_bits_truncate(self.0)
    }

    /// The separator character, or `0` when no separator rule is active.
    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "top byte only")]
    pub const fn digit_separator(self) -> u8 {
        (self.0 >> DIGIT_SEPARATOR_SHIFT) as u8
    }

    // === Rule Predicates ===

    rule_predicates! {
        /// Digits are required before the decimal point.
        required_integer_digits => REQUIRED_INTEGER_DIGITS;
        /// Digits are required after the decimal point.
        required_fraction_digits => REQUIRED_FRACTION_DIGITS;
        /// Digits are required after the exponent marker.
        required_exponent_digits => REQUIRED_EXPONENT_DIGITS;
        no_positive_mantissa_sign => NO_POSITIVE_MANTISSA_SIGN;
        required_mantissa_sign => REQUIRED_MANTISSA_SIGN;
        no_exponent_notation => NO_EXPONENT_NOTATION;
        no_positive_exponent_sign => NO_POSITIVE_EXPONENT_SIGN;
        required_exponent_sign => REQUIRED_EXPONENT_SIGN;
        no_exponent_without_fraction => NO_EXPONENT_WITHOUT_FRACTION;
        /// Special (non-finite) values are not allowed.
        no_special => NO_SPECIAL;
        case_sensitive_special => CASE_SENSITIVE_SPECIAL;
        no_integer_leading_zeros => NO_INTEGER_LEADING_ZEROS;
        no_float_leading_zeros => NO_FLOAT_LEADING_ZEROS;
        integer_internal_digit_separator => INTEGER_INTERNAL_DIGIT_SEPARATOR;
        integer_leading_digit_separator => INTEGER_LEADING_DIGIT_SEPARATOR;
        integer_trailing_digit_separator => INTEGER_TRAILING_DIGIT_SEPARATOR;
        integer_consecutive_digit_separator => INTEGER_CONSECUTIVE_DIGIT_SEPARATOR;
        fraction_internal_digit_separator => FRACTION_INTERNAL_DIGIT_SEPARATOR;
        fraction_leading_digit_separator => FRACTION_LEADING_DIGIT_SEPARATOR;
        fraction_trailing_digit_separator => FRACTION_TRAILING_DIGIT_SEPARATOR;
        fraction_consecutive_digit_separator => FRACTION_CONSECUTIVE_DIGIT_SEPARATOR;
        exponent_internal_digit_separator => EXPONENT_INTERNAL_DIGIT_SEPARATOR;
        exponent_leading_digit_separator => EXPONENT_LEADING_DIGIT_SEPARATOR;
        exponent_trailing_digit_separator => EXPONENT_TRAILING_DIGIT_SEPARATOR;
        exponent_consecutive_digit_separator => EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR;
        /// Digit separators are allowed inside special values.
        special_digit_separator => SPECIAL_DIGIT_SEPARATOR;
    }

    /// Check a rule by name.
    #[inline]
    pub const fn is_active(self, rule: GrammarRule) -> bool {
        self.rules().contains(rule.flag())
    }

    /// Active rules, in bit order.
    pub fn active_rules(self) -> impl Iterator<Item = GrammarRule> {
        GrammarRule::ALL
            .into_iter()
            .filter(move |&rule| self.is_active(rule))
    }

    /// Check one cell of the separator table.
    #[inline]
    pub const fn digit_separator_allowed(self, region: Region, placement: Placement) -> bool {
        self.rules().contains(RuleFlags::separator(region, placement))
    }

    // === Aggregates ===

    /// Digits are required in any position.
    #[inline]
    pub const fn required_digits(self) -> bool {
        self.rules().intersects(RuleFlags::REQUIRED_DIGITS)
    }

    /// Internal separators are allowed in any region.
    #[inline]
    pub const fn internal_digit_separator(self) -> bool {
        self.rules().intersects(RuleFlags::INTERNAL_DIGIT_SEPARATOR)
    }

    /// Leading separators are allowed in any region.
    #[inline]
    pub const fn leading_digit_separator(self) -> bool {
        self.rules().intersects(RuleFlags::LEADING_DIGIT_SEPARATOR)
    }

    /// Trailing separators are allowed in any region.
    #[inline]
    pub const fn trailing_digit_separator(self) -> bool {
        self.rules().intersects(RuleFlags::TRAILING_DIGIT_SEPARATOR)
    }

    /// Consecutive separators are allowed in any region.
    #[inline]
    pub const fn consecutive_digit_separator(self) -> bool {
        self.rules().intersects(RuleFlags::CONSECUTIVE_DIGIT_SEPARATOR)
    }

    /// Any separator rule is active, so [`digit_separator`](Self::digit_separator) is meaningful.
    #[inline]
    pub const fn has_digit_separator(self) -> bool {
        self.rules().has_digit_separator()
    }

    /// Any rule that constrains the exponent is active.
    #[inline]
    pub const fn has_exponent_rules(self) -> bool {
        self.rules().intersects(RuleFlags::EXPONENT_MASK)
    }
}

impl fmt::Debug for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NumberFormat");
        s.field("rules", &self.rules());
        if self.has_digit_separator() {
            s.field("digit_separator", &char::from(self.digit_separator()));
        }
        s.finish()
    }
}

/// Renders the packed word as `0x` followed by 16 hex digits.
impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

impl From<NumberFormat> for u64 {
    fn from(format: NumberFormat) -> u64 {
        format.0
    }
}

/// Validates against [`ExponentConfig::DEFAULT`].
impl TryFrom<u64> for NumberFormat {
    type Error = FormatError;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        Self::from_bits(bits, &ExponentConfig::DEFAULT)
    }
}

/// Deserializes from the plain `u64` word.
///
/// The exponent markers a stored word was compiled against are not part of
/// the word, so only marker-independent checks run here. Hosts with custom
/// markers can re-check with [`NumberFormat::from_bits`].
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumberFormat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u64::deserialize(deserializer)?;
        Self::from_bits_without_markers(bits).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
