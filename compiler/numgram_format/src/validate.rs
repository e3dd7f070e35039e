//! Consistency checks for a rule set.
//!
//! A rule set is valid when no two rules contradict each other and the
//! digit separator cannot be confused with any other part of a numeric
//! literal. Checks run in a fixed order and the first failure is reported.

use crate::config::ExponentConfig;
use crate::error::FormatError;
use crate::flags::{Placement, Region, RuleFlags};

/// Check if `ch` can serve as a digit separator under `config`.
///
/// Rejects non-ASCII bytes, decimal digits, `+`, `-`, `.`, and either
/// configured exponent marker.
pub const fn is_valid_digit_separator(ch: u8, config: &ExponentConfig) -> bool {
    is_separator_char(ch) && !config.is_exponent_marker(ch)
}

/// The marker-independent part of [`is_valid_digit_separator`].
const fn is_separator_char(ch: u8) -> bool {
    match ch {
        b'0'..=b'9' | b'+' | b'-' | b'.' => false,
        _ => ch.is_ascii(),
    }
}

/// Validate `rules` together with the separator character.
///
/// The separator is checked even when no separator rule is active; the
/// compiled word then stores zero in its place.
pub fn validate(
    rules: RuleFlags,
    separator: u8,
    config: &ExponentConfig,
) -> Result<(), FormatError> {
    let result = check(rules, separator, Some(config));
    if let Err(error) = result {
        tracing::trace!(rules = rules.bits(), separator, %error, "rule set rejected");
    }
    result
}

/// Boolean form of [`validate`].
pub fn is_valid(rules: RuleFlags, separator: u8, config: &ExponentConfig) -> bool {
    check(rules, separator, Some(config)).is_ok()
}

/// [`validate`] without the exponent marker collision check, for words
/// whose compile-time markers are unknown.
pub(crate) fn validate_without_markers(
    rules: RuleFlags,
    separator: u8,
) -> Result<(), FormatError> {
    check(rules, separator, None)
}

const MANTISSA_SIGN_CONFLICT: RuleFlags =
    RuleFlags::NO_POSITIVE_MANTISSA_SIGN.union(RuleFlags::REQUIRED_MANTISSA_SIGN);

const EXPONENT_SIGN_CONFLICT: RuleFlags =
    RuleFlags::NO_POSITIVE_EXPONENT_SIGN.union(RuleFlags::REQUIRED_EXPONENT_SIGN);

/// Rules that only make sense if special values are parsed at all.
const SPECIAL_VALUE_RULES: RuleFlags =
    RuleFlags::CASE_SENSITIVE_SPECIAL.union(RuleFlags::SPECIAL_DIGIT_SEPARATOR);

fn check(
    rules: RuleFlags,
    separator: u8,
    markers: Option<&ExponentConfig>,
) -> Result<(), FormatError> {
    let reserved = rules.bits() & !RuleFlags::RULE_MASK.bits();
    if reserved != 0 {
        return Err(FormatError::ReservedBits(reserved));
    }

    let separator_ok = match markers {
        Some(config) => is_valid_digit_separator(separator, config),
        None => is_separator_char(separator),
    };
    if !separator_ok {
        return Err(FormatError::InvalidDigitSeparator(separator));
    }

    if rules.contains(RuleFlags::NO_EXPONENT_NOTATION)
        && rules.intersects(RuleFlags::EXPONENT_MASK)
    {
        return Err(FormatError::ExponentRulesWithoutNotation);
    }

    if rules.contains(MANTISSA_SIGN_CONFLICT) {
        return Err(FormatError::ConflictingMantissaSign);
    }

    if rules.contains(EXPONENT_SIGN_CONFLICT) {
        return Err(FormatError::ConflictingExponentSign);
    }

    if rules.contains(RuleFlags::NO_SPECIAL) && rules.intersects(SPECIAL_VALUE_RULES) {
        return Err(FormatError::SpecialRulesWithoutSpecial);
    }

    for region in Region::ALL {
        let placed = rules.intersection(RuleFlags::region(region));
        if placed == RuleFlags::separator(region, Placement::Consecutive) {
            return Err(FormatError::ConsecutiveSeparatorOnly(region));
        }
    }

    Ok(())
}
