//! Positive-integer validation with diagnostic hints.
//!
//! An input is accepted when it is the plain decimal form of a positive
//! integer: ASCII digits only, no sign, no leading zero, no whitespace.
//! Rejected inputs get exactly one [`HintCode`], picked by walking ordered
//! rule tables where the first match wins.

/// Why an input failed positive-integer validation.
///
/// The `Display` form is the hint shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum HintCode {
    /// Nothing was entered.
    #[error("The number is empty.")]
    Empty,

    /// A plain space (0x20) appears in the input.
    #[error("A valid number doesn't contain whitespace")]
    Whitespace,

    /// The input starts with `0`.
    #[error("Positive integers start from 1")]
    Zero,

    /// A decimal point appears in the input.
    #[error("Fractional numbers are not supported.")]
    Fraction,

    /// A character outside ASCII appears in the input.
    #[error("Only ASCII characters are allowed.")]
    Ascii,

    /// An ASCII character other than `0`-`9` appears in the input.
    #[error("Only the numerals 0-9 are valid.")]
    Mixed,

    /// Rejected without any rule above matching.
    #[error("The number is invalid.")]
    Invalid,
}

impl HintCode {
    /// Every hint, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Empty,
        Self::Whitespace,
        Self::Zero,
        Self::Fraction,
        Self::Ascii,
        Self::Mixed,
        Self::Invalid,
    ];

    /// Stable short name, e.g. `EMPTY`; logged for refused requests and
    /// used as the key in golden hint data.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Whitespace => "WHITESPACE",
            Self::Zero => "ZERO",
            Self::Fraction => "FRACTION",
            Self::Ascii => "ASCII",
            Self::Mixed => "MIXED",
            Self::Invalid => "INVALID",
        }
    }
}

type InputRule = (fn(&str) -> bool, HintCode);
type CharRule = (fn(char) -> bool, HintCode);

/// Rules over the whole input, checked before any character is scanned.
const INPUT_RULES: [InputRule; 2] = [
    (str::is_empty, HintCode::Empty),
    (starts_with_zero, HintCode::Zero),
];

/// Rules applied to each character in turn; the first offending character
/// decides the hint.
const CHAR_RULES: [CharRule; 4] = [
    (is_decimal_point, HintCode::Fraction),
    (is_non_ascii, HintCode::Ascii),
    (is_space, HintCode::Whitespace),
    (is_not_ascii_digit, HintCode::Mixed),
];

fn starts_with_zero(input: &str) -> bool {
    input.starts_with('0')
}

fn is_decimal_point(c: char) -> bool {
    c == '.'
}

fn is_non_ascii(c: char) -> bool {
    !c.is_ascii()
}

fn is_space(c: char) -> bool {
    c == ' '
}

fn is_not_ascii_digit(c: char) -> bool {
    !c.is_ascii_digit()
}

/// Validate `input` as a positive integer, returning a hint on failure.
///
/// # Example
/// ```
/// use fibseq_core::validate::{validate, HintCode};
/// assert_eq!(validate("42"), Ok(()));
/// assert_eq!(validate("07"), Err(HintCode::Zero));
/// assert_eq!(validate("1.5"), Err(HintCode::Fraction));
/// ```
pub fn validate(input: &str) -> Result<(), HintCode> {
    if is_valid_positive_integer(input) {
        return Ok(());
    }
    Err(diagnose(input))
}

/// Check the acceptance rule directly, without producing a hint.
///
/// Always agrees with [`validate`] on pass/fail.
#[must_use]
pub fn is_valid_positive_integer(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) && !input.starts_with('0')
}

fn diagnose(input: &str) -> HintCode {
    INPUT_RULES
        .iter()
        .find(|(applies, _)| applies(input))
        .map(|&(_, hint)| hint)
        .or_else(|| input.chars().find_map(char_hint))
        .unwrap_or(HintCode::Invalid)
}

fn char_hint(c: char) -> Option<HintCode> {
    CHAR_RULES
        .iter()
        .find(|(applies, _)| applies(c))
        .map(|&(_, hint)| hint)
}
