//! The `show` command: decode a preset by name.

use numgram_format::Preset;

use super::{render_format, CliError};

/// Decode the preset called `name` (aliases such as `python-literal` work).
#[tracing::instrument(level = "debug", skip_all, fields(preset = name))]
pub fn show_preset(name: &str) -> Result<String, CliError> {
    let preset: Preset = name
        .parse()
        .map_err(|_| CliError::UnknownPreset(name.to_string()))?;
    tracing::debug!(resolved = preset.as_str(), "preset found");

    Ok(format!("preset:    {preset}\n{}", render_format(preset.format())))
}
