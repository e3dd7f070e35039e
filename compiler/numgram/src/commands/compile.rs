//! The `compile` command: build a format word from rule names.

use numgram_format::{ExponentConfig, GrammarRule, NumberFormat, NumberFormatBuilder, Preset};

use super::{parse_byte_arg, render_format, CliError};

/// Parsed `compile` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Builder with every requested rule applied.
    pub builder: NumberFormatBuilder,
    /// Exponent markers the separator is checked against.
    pub config: ExponentConfig,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            builder: NumberFormat::builder(),
            config: ExponentConfig::default(),
        }
    }
}

/// Parse options and rule names, in order.
///
/// `--preset=<name>` replaces every rule given so far, so it normally goes
/// first. A rule prefixed with `!` is cleared instead of set.
pub fn parse_compile_args(args: &[String]) -> Result<CompileOptions, CliError> {
    let mut options = CompileOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--separator=") {
            options.builder = options.builder.digit_separator(parse_byte_arg(value)?);
        } else if let Some(value) = arg.strip_prefix("--preset=") {
            let preset: Preset = value
                .parse()
                .map_err(|_| CliError::UnknownPreset(value.to_string()))?;
            let separator = options.builder.get_digit_separator();
            options.builder = preset.format().rebuild();
            if !preset.format().has_digit_separator() {
                options.builder = options.builder.digit_separator(separator);
            }
        } else if let Some(value) = arg.strip_prefix("--exponent=") {
            let marker = parse_byte_arg(value)?;
            options.config = ExponentConfig::new(marker).with_secondary(options.config.secondary());
        } else if let Some(value) = arg.strip_prefix("--exponent-backup=") {
            let secondary = if value == "none" {
                None
            } else {
                Some(parse_byte_arg(value)?)
            };
            options.config = options.config.with_secondary(secondary);
        } else if arg.starts_with("--") {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            let (name, value) = match arg.strip_prefix('!') {
                Some(name) => (name, false),
                None => (arg.as_str(), true),
            };
            let rule: GrammarRule = name
                .parse()
                .map_err(|_| CliError::UnknownRule(name.to_string()))?;
            options.builder = options.builder.rule(rule, value);
        }
    }

    Ok(options)
}

/// Compile the parsed rules, reporting the first violated constraint.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(rules = options.builder.rules().bits())
)]
pub fn compile_rules(options: &CompileOptions) -> Result<String, CliError> {
    let format = options.builder.try_build_with(&options.config)?;
    tracing::debug!(%format, "compiled");
    Ok(render_format(format))
}
