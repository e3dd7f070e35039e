use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_builder_is_permissive() {
    let format = NumberFormatBuilder::new().build();
    assert_eq!(format, Some(NumberFormat::PERMISSIVE));
    assert_eq!(format.map(NumberFormat::bits), Some(0));
}

#[test]
fn one_setter_per_rule() {
    for rule in GrammarRule::ALL {
        let builder = NumberFormat::builder().rule(rule, true);
        assert_eq!(builder.rules(), rule.flag(), "{rule}");
        assert_eq!(builder.rule(rule, false).rules(), RuleFlags::empty());
    }
}

#[test]
fn setters_toggle_off() {
    let builder = NumberFormat::builder()
        .no_special(true)
        .required_digits(true)
        .no_special(false)
        .required_fraction_digits(false);
    assert_eq!(
        builder.rules(),
        RuleFlags::REQUIRED_INTEGER_DIGITS | RuleFlags::REQUIRED_EXPONENT_DIGITS
    );
}

#[test]
fn group_setters() {
    let builder = NumberFormat::builder().digit_separators(true);
    assert_eq!(builder.rules(), RuleFlags::DIGIT_SEPARATOR_MASK);

    let builder = NumberFormat::builder().region_digit_separators(Region::Fraction, true);
    assert_eq!(builder.rules(), RuleFlags::FRACTION_DIGIT_SEPARATOR_MASK);

    let builder = NumberFormat::builder()
        .integer_digit_separators(true)
        .integer_consecutive_digit_separator(false);
    assert_eq!(
        builder.rules(),
        RuleFlags::INTEGER_INTERNAL_DIGIT_SEPARATOR
            | RuleFlags::INTEGER_LEADING_DIGIT_SEPARATOR
            | RuleFlags::INTEGER_TRAILING_DIGIT_SEPARATOR
    );
}

#[test]
fn separator_stored_only_when_observable() {
    let format = NumberFormat::builder()
        .digit_separator(b'\'')
        .required_digits(true)
        .build();
    assert_eq!(format.map(NumberFormat::digit_separator), Some(0));

    let format = NumberFormat::builder()
        .digit_separator(b'\'')
        .integer_internal_digit_separator(true)
        .build();
    assert_eq!(format.map(NumberFormat::digit_separator), Some(b'\''));
    assert_eq!(
        format.map(NumberFormat::bits),
        Some((u64::from(b'\'') << 56) | (1 << 32))
    );
}

#[test]
fn equal_grammars_compare_equal() {
    let a = NumberFormat::builder().digit_separator(b'#').no_special(true).build();
    let b = NumberFormat::builder().digit_separator(b'_').no_special(true).build();
    assert_eq!(a, b);
}

#[test]
fn invalid_rules_yield_none() {
    let builder = NumberFormat::builder()
        .no_exponent_notation(true)
        .required_exponent_digits(true);
    assert_eq!(builder.build(), None);
    assert_eq!(
        builder.try_build(),
        Err(FormatError::ExponentRulesWithoutNotation)
    );

    let builder = NumberFormat::builder()
        .digit_separator(b'.')
        .fraction_internal_digit_separator(true);
    assert_eq!(builder.build(), None);

    let builder = NumberFormat::builder().digit_separator(b'5').no_special(true);
    assert_eq!(builder.build(), None);
    assert_eq!(
        builder.try_build(),
        Err(FormatError::InvalidDigitSeparator(b'5'))
    );
}

#[test]
fn exponent_config_is_consulted() {
    let builder = NumberFormat::builder()
        .digit_separator(b'p')
        .integer_internal_digit_separator(true);
    assert!(builder.build().is_some());
    assert_eq!(
        builder.try_build_with(&ExponentConfig::new(b'p')),
        Err(FormatError::InvalidDigitSeparator(b'p'))
    );

    let builder = builder.digit_separator(b'^');
    assert_eq!(builder.build(), None);
    assert!(builder.build_with(&ExponentConfig::new(b'e')).is_some());
}

#[test]
fn const_compilation() {
    const BUILDER: NumberFormatBuilder = NumberFormat::builder()
        .digit_separator(b'_')
        .internal_digit_separators(true)
        .consecutive_digit_separators(true);
    let format = BUILDER.build();
    assert!(format.is_some_and(|f| f.internal_digit_separator()));
    assert!(format.is_some_and(|f| f.consecutive_digit_separator()));
    assert!(format.is_some_and(|f| !f.leading_digit_separator()));
}

#[test]
fn rebuild_round_trip() {
    let format = NumberFormat::builder()
        .digit_separator(b'\'')
        .integer_internal_digit_separator(true)
        .integer_trailing_digit_separator(true)
        .case_sensitive_special(true)
        .build();
    assert_eq!(format.and_then(|f| f.rebuild().build()), format);

    let extended = format.and_then(|f| f.rebuild().no_float_leading_zeros(true).build());
    assert!(extended.is_some_and(|f| f.no_float_leading_zeros()));
    assert_eq!(extended.map(NumberFormat::digit_separator), Some(b'\''));
}

#[test]
fn rebuild_restores_default_separator() {
    let builder = NumberFormat::STANDARD.rebuild();
    assert_eq!(builder.get_digit_separator(), b'_');
    assert_eq!(builder.rules(), RuleFlags::REQUIRED_EXPONENT_DIGITS);

    let format = builder.digit_separators(true).build();
    assert_eq!(format.map(NumberFormat::digit_separator), Some(b'_'));
}
