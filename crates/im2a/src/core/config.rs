//! Render configuration produced by the option parser
//!
//! A [`Configuration`] is built once from the command line and never mutated
//! afterwards. The rendering core reads it through the accessors below.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use super::types::{Charset, LumaWeights, DEFAULT_TRANSPARENCY_THRESHOLD};

/// Validated settings for one image-to-ASCII conversion
///
/// Invariants:
/// - `html_output` and `pixel_mode` are never both set
/// - the charset holds at least two glyphs
/// - `source_path` is the single positional argument and is never empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub(crate) html_output: bool,
    pub(crate) pixel_mode: bool,
    pub(crate) invert: bool,
    pub(crate) center: bool,
    pub(crate) grayscale: bool,
    pub(crate) transparent: bool,
    pub(crate) width: Option<NonZeroU32>,
    pub(crate) height: Option<NonZeroU32>,
    pub(crate) charset: Charset,
    pub(crate) transparency_threshold: f64,
    pub(crate) weights: LumaWeights,
    #[serde(serialize_with = "serialize_lossy")]
    pub(crate) source_path: PathBuf,
}

/// Paths that are not valid UTF-8 serialize with replacement characters
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

impl Configuration {
    /// Configuration with every option at its default for the given source
    pub(crate) fn with_source(source_path: PathBuf) -> Self {
        Self {
            html_output: false,
            pixel_mode: false,
            invert: false,
            center: false,
            grayscale: false,
            transparent: false,
            width: None,
            height: None,
            charset: Charset::default(),
            transparency_threshold: DEFAULT_TRANSPARENCY_THRESHOLD,
            weights: LumaWeights::default(),
            source_path,
        }
    }

    pub fn html_output(&self) -> bool {
        self.html_output
    }

    pub fn pixel_mode(&self) -> bool {
        self.pixel_mode
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn center(&self) -> bool {
        self.center
    }

    /// Grayscale output instead of 256-color
    pub fn grayscale(&self) -> bool {
        self.grayscale
    }

    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// Requested output width in characters, `None` to derive from the image
    pub fn width(&self) -> Option<u32> {
        self.width.map(NonZeroU32::get)
    }

    /// Requested output height in characters, `None` to derive from the image
    pub fn height(&self) -> Option<u32> {
        self.height.map(NonZeroU32::get)
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn transparency_threshold(&self) -> f64 {
        self.transparency_threshold
    }

    pub fn weights(&self) -> LumaWeights {
        self.weights
    }

    pub fn red_weight(&self) -> f64 {
        self.weights.red
    }

    pub fn green_weight(&self) -> f64 {
        self.weights.green
    }

    pub fn blue_weight(&self) -> f64 {
        self.weights.blue
    }

    /// Path of the input image, exactly as given on the command line
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
