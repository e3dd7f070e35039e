//! Property-based tests for compiling and decoding number formats.
//!
//! Random rule subsets and separator bytes are pushed through the builder
//! and checked against the validator and the decoder:
//! 1. The builder succeeds exactly when the validator accepts.
//! 2. Decoding a compiled format yields the rules that went in.
//! 3. A compiled word survives re-validation through `from_bits`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use numgram_format::{
    is_valid, is_valid_digit_separator, validate, ExponentConfig, FormatError, GrammarRule,
    NumberFormat, Placement, Region, RuleFlags,
};
use proptest::prelude::*;

// -- Strategies --

/// Any combination of defined rules.
fn rules_strategy() -> impl Strategy<Value = RuleFlags> {
    any::<u64>().prop_map(RuleFlags::from_bits_truncate)
}

/// Any combination of generic rules, with no separator rules.
fn generic_rules_strategy() -> impl Strategy<Value = RuleFlags> {
    any::<u64>().prop_map(|bits| RuleFlags::from_bits_truncate(bits) & RuleFlags::GENERIC_MASK)
}

/// Printable ASCII that is never a digit, sign, point, or default marker.
fn separator_strategy() -> impl Strategy<Value = u8> {
    prop::sample::select(b"_',# !\"$%&*/:;<=>?@|~`".to_vec())
}

fn build(rules: RuleFlags, separator: u8) -> Result<NumberFormat, FormatError> {
    GrammarRule::ALL
        .into_iter()
        .filter(|rule| rules.contains(rule.flag()))
        .fold(NumberFormat::builder().digit_separator(separator), |b, rule| {
            b.rule(rule, true)
        })
        .try_build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn builder_agrees_with_validator(rules in rules_strategy(), separator in any::<u8>()) {
        let config = ExponentConfig::DEFAULT;
        let built = build(rules, separator);
        prop_assert_eq!(built.is_ok(), is_valid(rules, separator, &config));
        prop_assert_eq!(built.err(), validate(rules, separator, &config).err());
    }

    #[test]
    fn decode_inverts_compile(rules in rules_strategy(), separator in any::<u8>()) {
        if let Ok(format) = build(rules, separator) {
            prop_assert_eq!(format.rules(), rules);
            for rule in GrammarRule::ALL {
                prop_assert_eq!(format.is_active(rule), rules.contains(rule.flag()));
            }
            let expected = if rules.has_digit_separator() { separator } else { 0 };
            prop_assert_eq!(format.digit_separator(), expected);
        }
    }

    #[test]
    fn compiled_words_revalidate(rules in rules_strategy(), separator in any::<u8>()) {
        if let Ok(format) = build(rules, separator) {
            prop_assert_eq!(
                NumberFormat::from_bits(format.bits(), &ExponentConfig::DEFAULT),
                Ok(format)
            );
            prop_assert_eq!(format.rebuild().try_build(), Ok(format));
        }
    }

    #[test]
    fn raw_words_accepted_only_if_canonical(bits in any::<u64>()) {
        if let Ok(format) = NumberFormat::try_from(bits) {
            prop_assert_eq!(format.bits(), bits);
            prop_assert_eq!(format.rebuild().try_build(), Ok(format));
        }
    }

    #[test]
    fn generic_rules_drop_valid_separator(rules in generic_rules_strategy(), separator in any::<u8>()) {
        let with_separator = build(rules, separator);
        if is_valid_digit_separator(separator, &ExponentConfig::DEFAULT) {
            prop_assert_eq!(with_separator, build(rules, b'_'));
            if let Ok(format) = with_separator {
                prop_assert_eq!(format.digit_separator(), 0);
            }
        } else {
            prop_assert_eq!(with_separator, Err(FormatError::InvalidDigitSeparator(separator)));
        }
    }

    #[test]
    fn good_separators_only_fail_on_rule_conflicts(
        rules in rules_strategy(),
        separator in separator_strategy(),
    ) {
        let result = build(rules, separator);
        prop_assert!(!matches!(result, Err(FormatError::InvalidDigitSeparator(_))));
    }

    #[test]
    fn lone_consecutive_always_rejected(
        rules in generic_rules_strategy(),
        region in prop::sample::select(Region::ALL.to_vec()),
    ) {
        let rules = rules | RuleFlags::separator(region, Placement::Consecutive);
        prop_assert!(build(rules, b'_').is_err());
    }

    #[test]
    fn no_exponent_notation_excludes_exponent_rules(rules in rules_strategy()) {
        let rules = rules | RuleFlags::NO_EXPONENT_NOTATION;
        if let Ok(format) = build(rules, b'_') {
            prop_assert!(!format.has_exponent_rules());
        }
    }
}
