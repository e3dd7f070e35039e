//! Exponent marker configuration.
//!
//! The digit separator may never collide with an exponent marker, so the
//! validator needs to know which characters the host parser treats as one.
//! The host owns this value and passes it by reference; nothing here is
//! global.

/// Exponent markers recognized by the host parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentConfig {
    primary: u8,
    secondary: Option<u8>,
}

impl ExponentConfig {
    /// `e` for decimal input, `^` as the fallback marker for other radixes.
    pub const DEFAULT: Self = ExponentConfig {
        primary: b'e',
        secondary: Some(b'^'),
    };

    /// Config with a single marker.
    pub const fn new(primary: u8) -> Self {
        ExponentConfig {
            primary,
            secondary: None,
        }
    }

    /// Replace the secondary marker.
    #[must_use]
    pub const fn with_secondary(self, secondary: Option<u8>) -> Self {
        ExponentConfig {
            primary: self.primary,
            secondary,
        }
    }

    #[inline]
    pub const fn primary(&self) -> u8 {
        self.primary
    }

    #[inline]
    pub const fn secondary(&self) -> Option<u8> {
        self.secondary
    }

    /// Check if `ch` is either configured marker.
    ///
    /// Exact byte comparison: `E` is not a marker under the default config.
    pub const fn is_exponent_marker(&self, ch: u8) -> bool {
        if ch == self.primary {
            return true;
        }
        match self.secondary {
            Some(secondary) => ch == secondary,
            None => false,
        }
    }
}

impl Default for ExponentConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests;
