//! Grammar rule flags and their bit positions.
//!
//! Every rule a numeric-literal grammar can toggle owns exactly one bit in
//! the low 48 bits of a [`NumberFormat`](crate::NumberFormat) word:
//!
//! ```text
//! bits  0-12   generic rules (digits, signs, exponent, special values, leading zeros)
//! bits 13-31   reserved (zero)
//! bits 32-43   digit separator placement, 4 bits per region
//! bit  44      digit separators inside special values
//! bits 45-55   reserved (zero)
//! bits 56-63   digit separator character
//! ```
//!
//! The twelve placement flags are generated from the [`Region`] ×
//! [`Placement`] table by [`separator_bit`]; the grouping masks are folded
//! from the same table instead of being spelled out by hand.

use std::fmt;

use bitflags::bitflags;

/// First bit of the digit separator placement block.
const SEPARATOR_RULE_SHIFT: u32 = 32;

/// Bit shift of the digit separator character.
pub(crate) const DIGIT_SEPARATOR_SHIFT: u32 = 56;

/// Mask of the digit separator character, in place.
pub(crate) const DIGIT_SEPARATOR_BITS: u64 = 0xFF << DIGIT_SEPARATOR_SHIFT;

/// Structural part of a numeric literal a separator rule applies to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Region {
    /// Digits before the decimal point.
    Integer = 0,
    /// Digits after the decimal point.
    Fraction = 1,
    /// Digits after the exponent marker.
    Exponent = 2,
}

impl Region {
    /// All regions, in bit order.
    pub const ALL: [Region; 3] = [Region::Integer, Region::Fraction, Region::Exponent];

    /// Lowercase name of the region.
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::Integer => "integer",
            Region::Fraction => "fraction",
            Region::Exponent => "exponent",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a digit separator may appear within a region.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Placement {
    /// Between two digits: `1_000`.
    Internal = 0,
    /// Before the first digit: `_1000`.
    Leading = 1,
    /// After the last digit: `1000_`.
    Trailing = 2,
    /// Several separators in a row: `1__000`.
    ///
    /// Only a refinement of the other placements, never valid alone.
    Consecutive = 3,
}

impl Placement {
    /// All placements, in bit order.
    pub const ALL: [Placement; 4] = [
        Placement::Internal,
        Placement::Leading,
        Placement::Trailing,
        Placement::Consecutive,
    ];

    /// Lowercase name of the placement.
    pub const fn as_str(self) -> &'static str {
        match self {
            Placement::Internal => "internal",
            Placement::Leading => "leading",
            Placement::Trailing => "trailing",
            Placement::Consecutive => "consecutive",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bit for one cell of the region × placement table.
pub const fn separator_bit(region: Region, placement: Placement) -> u64 {
    1 << (SEPARATOR_RULE_SHIFT + 4 * region as u32 + placement as u32)
}

bitflags! {
    /// Active grammar rules of a number format, without the separator character.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RuleFlags: u64 {
        // === Generic Rules (bits 0-12) ===

        /// Digits are required before the decimal point.
        const REQUIRED_INTEGER_DIGITS = 1 << 0;
        /// Digits are required after the decimal point, if one is present.
        const REQUIRED_FRACTION_DIGITS = 1 << 1;
        /// Digits are required after the exponent marker, if one is present.
        const REQUIRED_EXPONENT_DIGITS = 1 << 2;
        /// A `+` before the mantissa is not allowed.
        const NO_POSITIVE_MANTISSA_SIGN = 1 << 3;
        /// A sign before the mantissa is required.
        const REQUIRED_MANTISSA_SIGN = 1 << 4;
        /// Exponent notation is not allowed.
        const NO_EXPONENT_NOTATION = 1 << 5;
        /// A `+` before the exponent is not allowed.
        const NO_POSITIVE_EXPONENT_SIGN = 1 << 6;
        /// A sign before the exponent is required.
        const REQUIRED_EXPONENT_SIGN = 1 << 7;
        /// An exponent must be preceded by a decimal point.
        const NO_EXPONENT_WITHOUT_FRACTION = 1 << 8;
        /// Special (non-finite) values are not allowed.
        const NO_SPECIAL = 1 << 9;
        /// Special (non-finite) values are case-sensitive.
        const CASE_SENSITIVE_SPECIAL = 1 << 10;
        /// Leading zeros before an integer value are not allowed.
        const NO_INTEGER_LEADING_ZEROS = 1 << 11;
        /// Leading zeros before a float value are not allowed.
        const NO_FLOAT_LEADING_ZEROS = 1 << 12;

        // === Digit Separator Rules (bits 32-44) ===

        /// Digit separators are allowed between integer digits.
        const INTEGER_INTERNAL_DIGIT_SEPARATOR = separator_bit(Region::Integer, Placement::Internal);
        /// A digit separator is allowed before any integer digits.
        const INTEGER_LEADING_DIGIT_SEPARATOR = separator_bit(Region::Integer, Placement::Leading);
        /// A digit separator is allowed after any integer digits.
        const INTEGER_TRAILING_DIGIT_SEPARATOR = separator_bit(Region::Integer, Placement::Trailing);
        /// Multiple consecutive integer digit separators are allowed.
        const INTEGER_CONSECUTIVE_DIGIT_SEPARATOR = separator_bit(Region::Integer, Placement::Consecutive);
        /// Digit separators are allowed between fraction digits.
        const FRACTION_INTERNAL_DIGIT_SEPARATOR = separator_bit(Region::Fraction, Placement::Internal);
        /// A digit separator is allowed before any fraction digits.
        const FRACTION_LEADING_DIGIT_SEPARATOR = separator_bit(Region::Fraction, Placement::Leading);
        /// A digit separator is allowed after any fraction digits.
        const FRACTION_TRAILING_DIGIT_SEPARATOR = separator_bit(Region::Fraction, Placement::Trailing);
        /// Multiple consecutive fraction digit separators are allowed.
        const FRACTION_CONSECUTIVE_DIGIT_SEPARATOR = separator_bit(Region::Fraction, Placement::Consecutive);
        /// Digit separators are allowed between exponent digits.
        const EXPONENT_INTERNAL_DIGIT_SEPARATOR = separator_bit(Region::Exponent, Placement::Internal);
        /// A digit separator is allowed before any exponent digits.
        const EXPONENT_LEADING_DIGIT_SEPARATOR = separator_bit(Region::Exponent, Placement::Leading);
        /// A digit separator is allowed after any exponent digits.
        const EXPONENT_TRAILING_DIGIT_SEPARATOR = separator_bit(Region::Exponent, Placement::Trailing);
        /// Multiple consecutive exponent digit separators are allowed.
        const EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR = separator_bit(Region::Exponent, Placement::Consecutive);
        /// Digit separators are allowed inside special (non-finite) values.
        const SPECIAL_DIGIT_SEPARATOR = 1 << 44;
    }
}

/// Union of one placement across all regions.
const fn placement_mask(placement: Placement) -> u64 {
    let mut bits = 0;
    let mut i = 0;
    while i < Region::ALL.len() {
        bits |= separator_bit(Region::ALL[i], placement);
        i += 1;
    }
    bits
}

/// Union of every placement within one region.
const fn region_mask(region: Region) -> u64 {
    let mut bits = 0;
    let mut i = 0;
    while i < Placement::ALL.len() {
        bits |= separator_bit(region, Placement::ALL[i]);
        i += 1;
    }
    bits
}

impl RuleFlags {
    /// Digits required before the decimal point, after it, and after the exponent.
    pub const REQUIRED_DIGITS: Self = Self::REQUIRED_INTEGER_DIGITS
        .union(Self::REQUIRED_FRACTION_DIGITS)
        .union(Self::REQUIRED_EXPONENT_DIGITS);

    /// Internal digit separators in every region.
    pub const INTERNAL_DIGIT_SEPARATOR: Self =
        Self::from_bits_retain(placement_mask(Placement::Internal));

    /// Leading digit separators in every region.
    pub const LEADING_DIGIT_SEPARATOR: Self =
        Self::from_bits_retain(placement_mask(Placement::Leading));

    /// Trailing digit separators in every region.
    pub const TRAILING_DIGIT_SEPARATOR: Self =
        Self::from_bits_retain(placement_mask(Placement::Trailing));

    /// Consecutive digit separators in every region.
    pub const CONSECUTIVE_DIGIT_SEPARATOR: Self =
        Self::from_bits_retain(placement_mask(Placement::Consecutive));

    /// Every separator placement for integer digits.
    pub const INTEGER_DIGIT_SEPARATOR_MASK: Self =
        Self::from_bits_retain(region_mask(Region::Integer));

    /// Every separator placement for fraction digits.
    pub const FRACTION_DIGIT_SEPARATOR_MASK: Self =
        Self::from_bits_retain(region_mask(Region::Fraction));

    /// Every separator placement for exponent digits.
    pub const EXPONENT_DIGIT_SEPARATOR_MASK: Self =
        Self::from_bits_retain(region_mask(Region::Exponent));

    /// Every rule that makes the digit separator character observable.
    pub const DIGIT_SEPARATOR_MASK: Self = Self::INTEGER_DIGIT_SEPARATOR_MASK
        .union(Self::FRACTION_DIGIT_SEPARATOR_MASK)
        .union(Self::EXPONENT_DIGIT_SEPARATOR_MASK)
        .union(Self::SPECIAL_DIGIT_SEPARATOR);

    /// Every rule that only means something when exponent notation is allowed.
    pub const EXPONENT_MASK: Self = Self::REQUIRED_EXPONENT_DIGITS
        .union(Self::NO_POSITIVE_EXPONENT_SIGN)
        .union(Self::REQUIRED_EXPONENT_SIGN)
        .union(Self::NO_EXPONENT_WITHOUT_FRACTION)
        .union(Self::EXPONENT_DIGIT_SEPARATOR_MASK);

    /// Every rule that is not about digit separators.
    pub const GENERIC_MASK: Self = Self::all().difference(Self::DIGIT_SEPARATOR_MASK);

    /// Every defined rule bit; anything outside is reserved.
    pub const RULE_MASK: Self = Self::all();

    /// Separator flag for one cell of the region × placement table.
    #[inline]
    pub const fn separator(region: Region, placement: Placement) -> Self {
        Self::from_bits_retain(separator_bit(region, placement))
    }

    /// All separator flags of one region.
    #[inline]
    pub const fn region(region: Region) -> Self {
        Self::from_bits_retain(region_mask(region))
    }

    /// Check if any digit separator rule is active.
    #[inline]
    pub const fn has_digit_separator(self) -> bool {
        self.intersects(Self::DIGIT_SEPARATOR_MASK)
    }
}

// Layout is part of the stable interface; keep it pinned.
const _: () = assert!(RuleFlags::REQUIRED_INTEGER_DIGITS.bits() == 1);
const _: () = assert!(RuleFlags::NO_FLOAT_LEADING_ZEROS.bits() == 1 << 12);
const _: () = assert!(RuleFlags::INTEGER_INTERNAL_DIGIT_SEPARATOR.bits() == 1 << 32);
const _: () = assert!(RuleFlags::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR.bits() == 1 << 43);
const _: () = assert!(RuleFlags::SPECIAL_DIGIT_SEPARATOR.bits() == 1 << 44);
const _: () = assert!(RuleFlags::all().bits() >> 48 == 0);
const _: () = assert!(RuleFlags::all().bits() & DIGIT_SEPARATOR_BITS == 0);
const _: () = assert!(RuleFlags::RULE_MASK.bits().count_ones() == 26);
const _: () = assert!(RuleFlags::GENERIC_MASK.bits() == (1 << 13) - 1);

/// One named grammar rule.
///
/// The closed set of toggles a [`NumberFormat`](crate::NumberFormat) can
/// carry, one variant per [`RuleFlags`] bit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GrammarRule {
    RequiredIntegerDigits,
    RequiredFractionDigits,
    RequiredExponentDigits,
    NoPositiveMantissaSign,
    RequiredMantissaSign,
    NoExponentNotation,
    NoPositiveExponentSign,
    RequiredExponentSign,
    NoExponentWithoutFraction,
    NoSpecial,
    CaseSensitiveSpecial,
    NoIntegerLeadingZeros,
    NoFloatLeadingZeros,
    IntegerInternalDigitSeparator,
    IntegerLeadingDigitSeparator,
    IntegerTrailingDigitSeparator,
    IntegerConsecutiveDigitSeparator,
    FractionInternalDigitSeparator,
    FractionLeadingDigitSeparator,
    FractionTrailingDigitSeparator,
    FractionConsecutiveDigitSeparator,
    ExponentInternalDigitSeparator,
    ExponentLeadingDigitSeparator,
    ExponentTrailingDigitSeparator,
    ExponentConsecutiveDigitSeparator,
    SpecialDigitSeparator,
}

impl GrammarRule {
    /// All rules, in bit order.
    pub const ALL: [GrammarRule; 26] = [
        GrammarRule::RequiredIntegerDigits,
        GrammarRule::RequiredFractionDigits,
        GrammarRule::RequiredExponentDigits,
        GrammarRule::NoPositiveMantissaSign,
        GrammarRule::RequiredMantissaSign,
        GrammarRule::NoExponentNotation,
        GrammarRule::NoPositiveExponentSign,
        GrammarRule::RequiredExponentSign,
        GrammarRule::NoExponentWithoutFraction,
        GrammarRule::NoSpecial,
        GrammarRule::CaseSensitiveSpecial,
        GrammarRule::NoIntegerLeadingZeros,
        GrammarRule::NoFloatLeadingZeros,
        GrammarRule::IntegerInternalDigitSeparator,
        GrammarRule::IntegerLeadingDigitSeparator,
        GrammarRule::IntegerTrailingDigitSeparator,
        GrammarRule::IntegerConsecutiveDigitSeparator,
        GrammarRule::FractionInternalDigitSeparator,
        GrammarRule::FractionLeadingDigitSeparator,
        GrammarRule::FractionTrailingDigitSeparator,
        GrammarRule::FractionConsecutiveDigitSeparator,
        GrammarRule::ExponentInternalDigitSeparator,
        GrammarRule::ExponentLeadingDigitSeparator,
        GrammarRule::ExponentTrailingDigitSeparator,
        GrammarRule::ExponentConsecutiveDigitSeparator,
        GrammarRule::SpecialDigitSeparator,
    ];

    /// The flag this rule sets.
    pub const fn flag(self) -> RuleFlags {
        match self {
            GrammarRule::RequiredIntegerDigits => RuleFlags::REQUIRED_INTEGER_DIGITS,
            GrammarRule::RequiredFractionDigits => RuleFlags::REQUIRED_FRACTION_DIGITS,
            GrammarRule::RequiredExponentDigits => RuleFlags::REQUIRED_EXPONENT_DIGITS,
            GrammarRule::NoPositiveMantissaSign => RuleFlags::NO_POSITIVE_MANTISSA_SIGN,
            GrammarRule::RequiredMantissaSign => RuleFlags::REQUIRED_MANTISSA_SIGN,
            GrammarRule::NoExponentNotation => RuleFlags::NO_EXPONENT_NOTATION,
            GrammarRule::NoPositiveExponentSign => RuleFlags::NO_POSITIVE_EXPONENT_SIGN,
            GrammarRule::RequiredExponentSign => RuleFlags::REQUIRED_EXPONENT_SIGN,
            GrammarRule::NoExponentWithoutFraction => RuleFlags::NO_EXPONENT_WITHOUT_FRACTION,
            GrammarRule::NoSpecial => RuleFlags::NO_SPECIAL,
            GrammarRule::CaseSensitiveSpecial => RuleFlags::CASE_SENSITIVE_SPECIAL,
            GrammarRule::NoIntegerLeadingZeros => RuleFlags::NO_INTEGER_LEADING_ZEROS,
            GrammarRule::NoFloatLeadingZeros => RuleFlags::NO_FLOAT_LEADING_ZEROS,
            GrammarRule::IntegerInternalDigitSeparator => {
                RuleFlags::INTEGER_INTERNAL_DIGIT_SEPARATOR
            }
            GrammarRule::IntegerLeadingDigitSeparator => RuleFlags::INTEGER_LEADING_DIGIT_SEPARATOR,
            GrammarRule::IntegerTrailingDigitSeparator => {
                RuleFlags::INTEGER_TRAILING_DIGIT_SEPARATOR
            }
            GrammarRule::IntegerConsecutiveDigitSeparator => {
                RuleFlags::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR
            }
            GrammarRule::FractionInternalDigitSeparator => {
                RuleFlags::FRACTION_INTERNAL_DIGIT_SEPARATOR
            }
            GrammarRule::FractionLeadingDigitSeparator => {
                RuleFlags::FRACTION_LEADING_DIGIT_SEPARATOR
            }
            GrammarRule::FractionTrailingDigitSeparator => {
                RuleFlags::FRACTION_TRAILING_DIGIT_SEPARATOR
            }
            GrammarRule::FractionConsecutiveDigitSeparator => {
                RuleFlags::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR
            }
            GrammarRule::ExponentInternalDigitSeparator => {
                RuleFlags::EXPONENT_INTERNAL_DIGIT_SEPARATOR
            }
            GrammarRule::ExponentLeadingDigitSeparator => {
                RuleFlags::EXPONENT_LEADING_DIGIT_SEPARATOR
            }
            GrammarRule::ExponentTrailingDigitSeparator => {
                RuleFlags::EXPONENT_TRAILING_DIGIT_SEPARATOR
            }
            GrammarRule::ExponentConsecutiveDigitSeparator => {
                RuleFlags::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR
            }
            GrammarRule::SpecialDigitSeparator => RuleFlags::SPECIAL_DIGIT_SEPARATOR,
        }
    }

    /// Kebab-case name, e.g. `"no-positive-mantissa-sign"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            GrammarRule::RequiredIntegerDigits => "required-integer-digits",
            GrammarRule::RequiredFractionDigits => "required-fraction-digits",
            GrammarRule::RequiredExponentDigits => "required-exponent-digits",
            GrammarRule::NoPositiveMantissaSign => "no-positive-mantissa-sign",
            GrammarRule::RequiredMantissaSign => "required-mantissa-sign",
            GrammarRule::NoExponentNotation => "no-exponent-notation",
            GrammarRule::NoPositiveExponentSign => "no-positive-exponent-sign",
            GrammarRule::RequiredExponentSign => "required-exponent-sign",
            GrammarRule::NoExponentWithoutFraction => "no-exponent-without-fraction",
            GrammarRule::NoSpecial => "no-special",
            GrammarRule::CaseSensitiveSpecial => "case-sensitive-special",
            GrammarRule::NoIntegerLeadingZeros => "no-integer-leading-zeros",
            GrammarRule::NoFloatLeadingZeros => "no-float-leading-zeros",
            GrammarRule::IntegerInternalDigitSeparator => "integer-internal-digit-separator",
            GrammarRule::IntegerLeadingDigitSeparator => "integer-leading-digit-separator",
            GrammarRule::IntegerTrailingDigitSeparator => "integer-trailing-digit-separator",
            GrammarRule::IntegerConsecutiveDigitSeparator => "integer-consecutive-digit-separator",
            GrammarRule::FractionInternalDigitSeparator => "fraction-internal-digit-separator",
            GrammarRule::FractionLeadingDigitSeparator => "fraction-leading-digit-separator",
            GrammarRule::FractionTrailingDigitSeparator => "fraction-trailing-digit-separator",
            GrammarRule::FractionConsecutiveDigitSeparator => {
                "fraction-consecutive-digit-separator"
            }
            GrammarRule::ExponentInternalDigitSeparator => "exponent-internal-digit-separator",
            GrammarRule::ExponentLeadingDigitSeparator => "exponent-leading-digit-separator",
            GrammarRule::ExponentTrailingDigitSeparator => "exponent-trailing-digit-separator",
            GrammarRule::ExponentConsecutiveDigitSeparator => {
                "exponent-consecutive-digit-separator"
            }
            GrammarRule::SpecialDigitSeparator => "special-digit-separator",
        }
    }

    /// Check if this rule is one of the digit separator placement rules.
    #[inline]
    pub const fn is_digit_separator(self) -> bool {
        self.flag().intersects(RuleFlags::DIGIT_SEPARATOR_MASK)
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a rule name like `"no-special"`.
///
/// Case-insensitive; `_` and `-` are interchangeable.
impl std::str::FromStr for GrammarRule {
    type Err = crate::UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|rule| name_matches(rule.as_str(), s))
            .copied()
            .ok_or(crate::UnknownRule)
    }
}

/// Compare a kebab-case name against user input without allocating.
pub(crate) fn name_matches(name: &str, input: &str) -> bool {
    fn normalize(byte: u8) -> u8 {
        match byte {
            b'_' => b'-',
            other => other.to_ascii_lowercase(),
        }
    }

    name.len() == input.len()
        && name
            .bytes()
            .zip(input.bytes())
            .all(|(a, b)| normalize(a) == normalize(b))
}
