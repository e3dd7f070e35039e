//! The `check` command: re-validate a raw format word.

use numgram_format::{ExponentConfig, NumberFormat};

use super::{render_format, CliError};

/// Parse `hex` (with or without `0x`, `_` allowed between digits), validate
/// it against the default exponent markers, and decode it.
#[tracing::instrument(level = "debug", skip_all, fields(word = hex))]
pub fn check_word(hex: &str) -> Result<String, CliError> {
    let bits = parse_hex_word(hex)?;
    let format = NumberFormat::from_bits(bits, &ExponentConfig::default())?;
    Ok(render_format(format))
}

fn parse_hex_word(input: &str) -> Result<u64, CliError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CliError::InvalidBits(input.to_string()));
    }
    u64::from_str_radix(&digits, 16).map_err(|_| CliError::InvalidBits(input.to_string()))
}
