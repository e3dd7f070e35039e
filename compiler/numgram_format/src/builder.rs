//! Builder that compiles a set of grammar rules into a [`NumberFormat`].
//!
//! Every rule starts inactive and the separator starts as `_`. Setters are
//! `const fn` so formats can be compiled in constant context:
//!
//! ```
//! use numgram_format::NumberFormat;
//!
//! let format = NumberFormat::builder()
//!     .digit_separator(b'\'')
//!     .integer_internal_digit_separator(true)
//!     .no_special(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(format.digit_separator(), b'\'');
//! ```

use crate::config::ExponentConfig;
use crate::error::FormatError;
use crate::flags::{GrammarRule, Region, RuleFlags};
use crate::format::NumberFormat;
use crate::validate;

/// Default separator character for a fresh builder.
const DEFAULT_DIGIT_SEPARATOR: u8 = b'_';

/// Collects rule toggles and a separator character before validation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct NumberFormatBuilder {
    rules: RuleFlags,
    digit_separator: u8,
}

#[inline]
const fn toggle(rules: RuleFlags, flag: RuleFlags, value: bool) -> RuleFlags {
    if value {
        rules.union(flag)
    } else {
        rules.difference(flag)
    }
}

/// Generates one boolean setter per grammar rule.
macro_rules! rule_setters {
    ($($name:ident => $flag:ident;)*) => {
        $(
            #[inline]
            #[must_use]
            pub const fn $name(mut self, value: bool) -> Self {
                self.rules = toggle(self.rules, RuleFlags::$flag, value);
                self
            }
        )*
    };
}

impl NumberFormatBuilder {
    /// A builder with no active rules and `_` as the separator.
    pub const fn new() -> Self {
        NumberFormatBuilder {
            rules: RuleFlags::empty(),
            digit_separator: DEFAULT_DIGIT_SEPARATOR,
        }
    }

    /// A builder preloaded from an existing format.
    ///
    /// A format without separator rules carries no separator, so the
    /// default `_` is restored.
    pub const fn from_format(format: NumberFormat) -> Self {
        let digit_separator = if format.has_digit_separator() {
            format.digit_separator()
        } else {
            DEFAULT_DIGIT_SEPARATOR
        };
        NumberFormatBuilder {
            rules: format.rules(),
            digit_separator,
        }
    }

    /// Rules toggled so far.
    #[inline]
    pub const fn rules(&self) -> RuleFlags {
        self.rules
    }

    /// Separator character set so far.
    #[inline]
    pub const fn get_digit_separator(&self) -> u8 {
        self.digit_separator
    }

    /// Set the separator character. Checked at build time.
    #[inline]
    #[must_use]
    pub const fn digit_separator(mut self, ch: u8) -> Self {
        self.digit_separator = ch;
        self
    }

    rule_setters! {
        required_integer_digits => REQUIRED_INTEGER_DIGITS;
        required_fraction_digits => REQUIRED_FRACTION_DIGITS;
        required_exponent_digits => REQUIRED_EXPONENT_DIGITS;
        no_positive_mantissa_sign => NO_POSITIVE_MANTISSA_SIGN;
        required_mantissa_sign => REQUIRED_MANTISSA_SIGN;
        no_exponent_notation => NO_EXPONENT_NOTATION;
        no_positive_exponent_sign => NO_POSITIVE_EXPONENT_SIGN;
        required_exponent_sign => REQUIRED_EXPONENT_SIGN;
        no_exponent_without_fraction => NO_EXPONENT_WITHOUT_FRACTION;
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
        special_digit_separator => SPECIAL_DIGIT_SEPARATOR;

        // Groups
        required_digits => REQUIRED_DIGITS;
        internal_digit_separators => INTERNAL_DIGIT_SEPARATOR;
        leading_digit_separators => LEADING_DIGIT_SEPARATOR;
        trailing_digit_separators => TRAILING_DIGIT_SEPARATOR;
        consecutive_digit_separators => CONSECUTIVE_DIGIT_SEPARATOR;
        integer_digit_separators => INTEGER_DIGIT_SEPARATOR_MASK;
        fraction_digit_separators => FRACTION_DIGIT_SEPARATOR_MASK;
        exponent_digit_separators => EXPONENT_DIGIT_SEPARATOR_MASK;
        digit_separators => DIGIT_SEPARATOR_MASK;
    }

    /// Toggle every placement of one region.
    #[inline]
    #[must_use]
    pub const fn region_digit_separators(mut self, region: Region, value: bool) -> Self {
        self.rules = toggle(self.rules, RuleFlags::region(region), value);
        self
    }

    /// Toggle a rule by name.
    #[inline]
    #[must_use]
    pub const fn rule(mut self, rule: GrammarRule, value: bool) -> Self {
        self.rules = toggle(self.rules, rule.flag(), value);
        self
    }

    /// Compile against the default exponent markers.
    pub fn try_build(&self) -> Result<NumberFormat, FormatError> {
        self.try_build_with(&ExponentConfig::DEFAULT)
    }

    /// Compile against `config`, reporting why the rules were rejected.
    pub fn try_build_with(&self, config: &ExponentConfig) -> Result<NumberFormat, FormatError> {
        validate::validate(self.rules, self.digit_separator, config)?;
        Ok(NumberFormat::from_parts(self.rules, self.digit_separator))
    }

    /// Compile against the default exponent markers.
    ///
    /// `None` if the rules contradict each other or the separator is unusable.
    pub fn build(&self) -> Option<NumberFormat> {
        self.build_with(&ExponentConfig::DEFAULT)
    }

    /// Compile against `config`. `None` if the rules are invalid.
    pub fn build_with(&self, config: &ExponentConfig) -> Option<NumberFormat> {
        match self.try_build_with(config) {
            Ok(format) => Some(format),
            Err(error) => {
                tracing::debug!(
                    %error,
                    rules = self.rules.bits(),
                    digit_separator = self.digit_separator,
                    "number format rejected"
                );
                None
            }
        }
    }
}

impl Default for NumberFormatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
