use super::*;
use pretty_assertions::assert_eq;

fn sample() -> NumberFormat {
    NumberFormat::from_parts(
        RuleFlags::REQUIRED_INTEGER_DIGITS
            | RuleFlags::NO_SPECIAL
            | RuleFlags::FRACTION_INTERNAL_DIGIT_SEPARATOR
            | RuleFlags::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR,
        b'\'',
    )
}

#[test]
fn predicates_match_rules() {
    let format = sample();
    for rule in GrammarRule::ALL {
        let expected = format.rules().contains(rule.flag());
        assert_eq!(format.is_active(rule), expected, "{rule}");
    }
    assert!(format.required_integer_digits());
    assert!(!format.required_fraction_digits());
    assert!(format.no_special());
    assert!(format.fraction_internal_digit_separator());
    assert!(format.fraction_consecutive_digit_separator());
    assert!(!format.integer_internal_digit_separator());
    assert!(!format.special_digit_separator());
}

#[test]
fn active_rules_in_bit_order() {
    let rules: Vec<_> = sample().active_rules().collect();
    assert_eq!(
        rules,
        vec![
            GrammarRule::RequiredIntegerDigits,
            GrammarRule::NoSpecial,
            GrammarRule::FractionInternalDigitSeparator,
            GrammarRule::FractionConsecutiveDigitSeparator,
        ]
    );
    assert_eq!(NumberFormat::PERMISSIVE.active_rules().count(), 0);
}

#[test]
fn separator_table_lookup() {
    let format = sample();
    assert!(format.digit_separator_allowed(Region::Fraction, Placement::Internal));
    assert!(format.digit_separator_allowed(Region::Fraction, Placement::Consecutive));
    assert!(!format.digit_separator_allowed(Region::Fraction, Placement::Leading));
    assert!(!format.digit_separator_allowed(Region::Integer, Placement::Internal));
}

#[test]
fn aggregates() {
    let format = sample();
    assert!(format.required_digits());
    assert!(format.internal_digit_separator());
    assert!(format.consecutive_digit_separator());
    assert!(!format.leading_digit_separator());
    assert!(!format.trailing_digit_separator());
    assert!(format.has_digit_separator());
    assert!(!format.has_exponent_rules());

    let permissive = NumberFormat::permissive();
    assert!(!permissive.required_digits());
    assert!(!permissive.has_digit_separator());
    assert!(NumberFormat::STANDARD.has_exponent_rules());
}

#[test]
fn separator_byte() {
    assert_eq!(sample().digit_separator(), b'\'');
    assert_eq!(sample().bits() >> 56, u64::from(b'\''));
    assert_eq!(NumberFormat::from_parts(RuleFlags::NO_SPECIAL, b'\'').digit_separator(), 0);
}

#[test]
fn from_bits_accepts_valid_words() {
    let config = ExponentConfig::DEFAULT;
    assert_eq!(NumberFormat::from_bits(sample().bits(), &config), Ok(sample()));
    assert_eq!(NumberFormat::from_bits(0, &config), Ok(NumberFormat::PERMISSIVE));
    assert_eq!(NumberFormat::try_from(sample().bits()), Ok(sample()));
    assert_eq!(u64::from(sample()), sample().bits());
}

#[test]
fn from_bits_rejects_bad_words() {
    let config = ExponentConfig::DEFAULT;
    assert_eq!(
        NumberFormat::from_bits(1 << 20, &config),
        Err(FormatError::ReservedBits(1 << 20))
    );
    assert_eq!(
        NumberFormat::from_bits((u64::from(b'_') << 56) | 1, &config),
        Err(FormatError::UnusedDigitSeparator(b'_'))
    );
    assert_eq!(
        NumberFormat::from_bits((u64::from(b'e') << 56) | (1 << 32), &config),
        Err(FormatError::InvalidDigitSeparator(b'e'))
    );
    assert_eq!(
        NumberFormat::from_bits((1 << 5) | (1 << 2), &config),
        Err(FormatError::ExponentRulesWithoutNotation)
    );
}

#[test]
fn from_bits_without_markers_skips_marker_collision() {
    let custom = NumberFormat::builder()
        .digit_separator(b'^')
        .integer_internal_digit_separator(true)
        .build_with(&ExponentConfig::new(b'e'))
        .unwrap_or_else(|| panic!("separator is free under these markers"));
    let bits = custom.bits();
    assert_eq!(NumberFormat::from_bits_without_markers(bits), Ok(custom));
    assert_eq!(
        NumberFormat::from_bits(bits, &ExponentConfig::DEFAULT),
        Err(FormatError::InvalidDigitSeparator(b'^'))
    );

    assert_eq!(
        NumberFormat::from_bits_without_markers((u64::from(b'7') << 56) | (1 << 32)),
        Err(FormatError::InvalidDigitSeparator(b'7'))
    );
    assert_eq!(
        NumberFormat::from_bits_without_markers((u64::from(b'_') << 56) | 1),
        Err(FormatError::UnusedDigitSeparator(b'_'))
    );
    assert_eq!(
        NumberFormat::from_bits_without_markers((1 << 40) | (1 << 13)),
        Err(FormatError::ReservedBits(1 << 13))
    );
}

#[test]
fn ignore_allows_every_placement() {
    let format = NumberFormat::ignore(b'_');
    assert_eq!(format, Some(NumberFormat::IGNORE));
    for region in Region::ALL {
        for placement in Placement::ALL {
            assert!(format.is_some_and(|f| f.digit_separator_allowed(region, placement)));
        }
    }
    assert!(format.is_some_and(NumberFormat::special_digit_separator));
    assert_eq!(NumberFormat::ignore(b'1'), None);
    assert_eq!(NumberFormat::ignore(b'e'), None);
}

#[test]
fn display_is_hex_word() {
    assert_eq!(NumberFormat::PERMISSIVE.to_string(), "0x0000000000000000");
    assert_eq!(NumberFormat::STANDARD.to_string(), "0x0000000000000004");
    assert_eq!(sample().to_string(), "0x2700009000000201");
}

#[test]
fn debug_shows_separator_only_when_active() {
    let debug = format!("{:?}", sample());
    assert!(debug.contains("digit_separator: '\\''"), "{debug}");
    let debug = format!("{:?}", NumberFormat::STANDARD);
    assert!(!debug.contains("digit_separator"), "{debug}");
    assert!(debug.contains("REQUIRED_EXPONENT_DIGITS"), "{debug}");
}

#[test]
fn default_is_permissive() {
    assert_eq!(NumberFormat::default(), NumberFormat::PERMISSIVE);
}

#[cfg(feature = "serde")]
#[test]
fn serde_accepts_custom_marker_formats() {
    let format = NumberFormat::builder()
        .digit_separator(b'^')
        .integer_internal_digit_separator(true)
        .build_with(&ExponentConfig::new(b'e'))
        .unwrap_or_else(|| panic!("separator is free under these markers"));

    let bytes = bincode::serialize(&format).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    assert_eq!(bytes, format.bits().to_le_bytes());
    let deserialized: NumberFormat =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));
    assert_eq!(deserialized, format);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_invalid_words() {
    for bits in [1_u64 << 20, u64::from(b'_') << 56, (u64::from(b'.') << 56) | (1 << 32)] {
        let bytes = bincode::serialize(&bits).unwrap_or_else(|e| panic!("serialize failed: {e}"));
        assert!(bincode::deserialize::<NumberFormat>(&bytes).is_err(), "{bits:#x}");
    }
}
