//! Command handlers for the numgram CLI.
//!
//! Each handler returns the text to print so the binary stays a thin
//! dispatcher. Shared rendering and argument helpers live here in the
//! module root.

use std::fmt::Write as _;

use numgram_format::{FormatError, NumberFormat};

mod check;
mod compile;
mod list;
mod show;

pub use check::check_word;
pub use compile::{compile_rules, parse_compile_args, CompileOptions};
pub use list::list_presets;
pub use show::show_preset;

/// Why a command could not produce output.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown preset `{0}` (run `numgram list`)")]
    UnknownPreset(String),

    #[error("unknown grammar rule `{0}`")]
    UnknownRule(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`{0}` is not a single ASCII character")]
    InvalidByte(String),

    #[error("`{0}` is not a hexadecimal format word")]
    InvalidBits(String),

    #[error("invalid format: {0}")]
    Format(#[from] FormatError),
}

/// Render a format as its hex word, separator, and active rules.
pub(crate) fn render_format(format: NumberFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "format:    {format}");
    if format.has_digit_separator() {
        let _ = writeln!(
            out,
            "separator: {:?}",
            char::from(format.digit_separator())
        );
    } else {
        out.push_str("separator: none\n");
    }

    let mut rules = format.active_rules().peekable();
    if rules.peek().is_none() {
        out.push_str("rules:     none\n");
    } else {
        out.push_str("rules:\n");
        for rule in rules {
            let _ = writeln!(out, "  {rule}");
        }
    }
    out
}

/// Parse a single-character argument such as `--separator='`.
pub(crate) fn parse_byte_arg(value: &str) -> Result<u8, CliError> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(CliError::InvalidByte(value.to_string())),
    }
}
