use super::*;
use crate::config::ExponentConfig;
use crate::flags::{GrammarRule, Placement, Region};
use pretty_assertions::assert_eq;

#[test]
fn every_preset_revalidates() {
    let config = ExponentConfig::DEFAULT;
    for &preset in Preset::ALL {
        let format = preset.format();
        assert_eq!(
            NumberFormat::from_bits(format.bits(), &config),
            Ok(format),
            "{preset}"
        );
    }
}

#[test]
fn every_preset_rebuilds_to_itself() {
    for &preset in Preset::ALL {
        let format = preset.format();
        assert_eq!(format.rebuild().build(), Some(format), "{preset}");
    }
}

#[test]
fn names_are_unique_and_round_trip() {
    for (i, &a) in Preset::ALL.iter().enumerate() {
        assert_eq!(a.as_str().parse::<Preset>(), Ok(a));
        assert_eq!(a.to_string(), a.as_str());
        for &b in &Preset::ALL[i + 1..] {
            assert_ne!(a.as_str(), b.as_str());
        }
    }
}

#[test]
fn lookup_is_forgiving() {
    assert_eq!("RUST_LITERAL".parse::<Preset>(), Ok(Preset::RustLiteral));
    assert_eq!("Json".parse::<Preset>(), Ok(Preset::Json));
    assert_eq!("rust-literals".parse::<Preset>(), Err(UnknownPreset));
    assert_eq!("".parse::<Preset>(), Err(UnknownPreset));
}

#[test]
fn version_aliases() {
    assert_eq!("python-literal".parse::<Preset>(), Ok(Preset::Python3Literal));
    assert_eq!("python_string".parse::<Preset>(), Ok(Preset::Python3String));
    assert_eq!("cxx-literal".parse::<Preset>(), Ok(Preset::Cxx17Literal));
    assert_eq!("C-String".parse::<Preset>(), Ok(Preset::C18String));
    assert_eq!("csharp-literal".parse::<Preset>(), Ok(Preset::Csharp7Literal));
    assert_eq!("yaml".parse::<Preset>(), Ok(Preset::Json));
    assert_eq!("python-".parse::<Preset>(), Err(UnknownPreset));
    assert_eq!("c-json".parse::<Preset>(), Err(UnknownPreset));
}

#[test]
fn alias_constants_match() {
    assert_eq!(NumberFormat::PYTHON_LITERAL, NumberFormat::PYTHON3_LITERAL);
    assert_eq!(NumberFormat::CXX_LITERAL, NumberFormat::CXX17_LITERAL);
    assert_eq!(NumberFormat::C_STRING, NumberFormat::C18_STRING);
    assert_eq!(NumberFormat::CSHARP_LITERAL, NumberFormat::CSHARP7_LITERAL);
    assert_eq!(NumberFormat::YAML, NumberFormat::JSON);
}

#[test]
fn general_presets() {
    assert_eq!(NumberFormat::PERMISSIVE.bits(), 0);
    assert_eq!(
        NumberFormat::STANDARD.rules(),
        RuleFlags::REQUIRED_EXPONENT_DIGITS
    );
    assert_eq!(NumberFormat::STANDARD, NumberFormat::RUST_STRING);
    assert_eq!(NumberFormat::IGNORE.rules(), RuleFlags::DIGIT_SEPARATOR_MASK);
    assert_eq!(NumberFormat::IGNORE.digit_separator(), b'_');
}

#[test]
fn rust_literal() {
    let format = NumberFormat::RUST_LITERAL;
    let active: Vec<_> = format.active_rules().collect();
    assert_eq!(
        active,
        vec![
            GrammarRule::RequiredIntegerDigits,
            GrammarRule::RequiredFractionDigits,
            GrammarRule::RequiredExponentDigits,
            GrammarRule::NoPositiveMantissaSign,
            GrammarRule::NoSpecial,
            GrammarRule::IntegerInternalDigitSeparator,
            GrammarRule::IntegerTrailingDigitSeparator,
            GrammarRule::IntegerConsecutiveDigitSeparator,
            GrammarRule::FractionInternalDigitSeparator,
            GrammarRule::FractionTrailingDigitSeparator,
            GrammarRule::FractionConsecutiveDigitSeparator,
            GrammarRule::ExponentInternalDigitSeparator,
            GrammarRule::ExponentTrailingDigitSeparator,
            GrammarRule::ExponentConsecutiveDigitSeparator,
        ]
    );
    assert_eq!(format.digit_separator(), b'_');
}

#[test]
fn cxx17_uses_apostrophe() {
    let format = NumberFormat::CXX17_LITERAL;
    assert_eq!(format.digit_separator(), b'\'');
    assert!(format.internal_digit_separator());
    assert!(!format.consecutive_digit_separator());
    assert!(format.case_sensitive_special());
    assert!(!NumberFormat::CXX11_LITERAL.has_digit_separator());
}

#[test]
fn json_rejects_leading_zeros_and_specials() {
    let format = Preset::Json.format();
    assert!(format.required_digits());
    assert!(format.no_positive_mantissa_sign());
    assert!(format.no_special());
    assert!(format.no_integer_leading_zeros());
    assert!(format.no_float_leading_zeros());
    assert!(!format.has_digit_separator());
}

#[test]
fn octave_string_separator() {
    let format = NumberFormat::OCTAVE_STRING;
    assert_eq!(format.digit_separator(), b',');
    assert!(format.digit_separator_allowed(Region::Integer, Placement::Leading));
    assert!(!format.special_digit_separator());
}

#[test]
fn toml_uses_underscore() {
    let format = NumberFormat::TOML;
    assert_eq!(format.digit_separator(), b'_');
    assert!(format.internal_digit_separator());
    assert!(!format.leading_digit_separator());
    assert!(format.no_integer_leading_zeros());
}

#[test]
fn separator_byte_zero_without_rules() {
    for &preset in Preset::ALL {
        let format = preset.format();
        if !format.has_digit_separator() {
            assert_eq!(format.digit_separator(), 0, "{preset}");
        }
    }
}
