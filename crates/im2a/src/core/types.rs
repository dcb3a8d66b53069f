//! Value types carried by a render configuration
//!
//! [`Charset`] is the glyph ramp used to map brightness to characters and
//! [`LumaWeights`] holds the channel coefficients used to compute brightness.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::OptionsError;

/// Glyph ramp used when no `--charset` is given, darkest first
pub const DEFAULT_CHARSET: &str = " M   ...',;:clodxkO0KXNWMM";

/// Minimum number of glyphs a charset must contain
pub const MIN_CHARSET_LEN: usize = 2;

/// Default red channel coefficient
pub const DEFAULT_RED_WEIGHT: f64 = 0.2989;
/// Default green channel coefficient
pub const DEFAULT_GREEN_WEIGHT: f64 = 0.5866;
/// Default blue channel coefficient
pub const DEFAULT_BLUE_WEIGHT: f64 = 0.1145;

/// Default alpha cut-off for transparent pixels
pub const DEFAULT_TRANSPARENCY_THRESHOLD: f64 = 1.0;

/// Ordered glyph ramp, darkest glyph first
///
/// Always holds at least [`MIN_CHARSET_LEN`] characters. Length is counted in
/// Unicode scalar values, so a ramp such as `"░▒▓█"` has four glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Charset {
    glyphs: Vec<char>,
}

impl Charset {
    /// Build a charset, rejecting ramps shorter than two glyphs
    pub fn new(glyphs: &str) -> Result<Self, OptionsError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < MIN_CHARSET_LEN {
            return Err(OptionsError::CharsetTooShort {
                length: glyphs.len(),
            });
        }
        Ok(Self { glyphs })
    }

    /// Glyphs in ramp order
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of glyphs in the ramp
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Charset {
    type Error = OptionsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Charset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Channel coefficients combining red, green and blue into brightness
///
/// The weights are not normalised; whether they sum to one is up to the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LumaWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl LumaWeights {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Weighted sum of the three channels
    pub fn luminance(&self, red: f64, green: f64, blue: f64) -> f64 {
        self.red * red + self.green * green + self.blue * blue
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED_WEIGHT,
            green: DEFAULT_GREEN_WEIGHT,
            blue: DEFAULT_BLUE_WEIGHT,
        }
    }
}
