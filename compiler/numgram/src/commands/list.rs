//! The `list` command: every preset with its format word.

use std::fmt::Write as _;

use numgram_format::Preset;

/// One line per preset: name padded to a column, then the hex word.
pub fn list_presets() -> String {
    let width = Preset::ALL
        .iter()
        .map(|preset| preset.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for preset in Preset::ALL {
        let _ = writeln!(out, "{:<width$}  {}", preset.as_str(), preset.format());
    }
    out
}
