//! Flatten an SVG icon into a single path, e.g. for import into an icon font.
//!
//! Only groups (`g`) and paths (`path`) are supported. Group transforms are
//! applied to the path data, all paths are merged into one path expression and
//! the `viewBox` / `width` / `height` of the root element are reconciled into
//! a single frame.
//!
//! Everything that cannot be represented by a glyph is dropped: unsupported
//! elements (with their children) and presentation attributes such as `fill`
//! or `style`. Whenever something like that happens, or when several shapes
//! had to be merged into one path, the result is flagged as not
//! [`guaranteed`](ConversionResult::guaranteed) to look like the source.
//!
//! You can optionally get serde 1 support by enabling the `serde` feature.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

use std::collections::BTreeSet;

use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

mod attributes;
mod document;
mod error;
mod frame;
mod merge;
mod output;
mod pathdata;
mod tags;
mod transform;
mod walk;

pub use crate::attributes::{AttributeKind, SIGNIFICANT_ATTRIBUTES};
pub use crate::document::{Document, Element, Node};
pub use crate::error::{Error, SizingError};
pub use crate::frame::Frame;
pub use crate::output::to_svg;
pub use crate::pathdata::apply_transform;
pub use crate::tags::TagKind;
pub use crate::transform::TransformChain;

/// Message shown to users when the input cannot be parsed as an SVG document.
pub const INVALID_IMAGE_MESSAGE: &str = "Invalid file format.";

/// Warning shown to users when tags or attributes were dropped. Followed by
/// the dropped names.
pub const REMOVE_TAGS_WARNING: &str = "If image looks not as expected please convert to compound \
     path manualy. Skipped tags and attributes: ";

/// Warning shown to users when a conversion is not guaranteed.
pub const MERGE_PATHS_WARNING: &str =
    "If image looks not as expected please convert to compound path manualy.";

/// Conversion settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Number of decimals written for transformed coordinates. `None` writes
    /// the shortest representation that round-trips.
    ///
    /// Path data without a transform is always copied verbatim.
    pub precision: Option<usize>,
    /// Documents with elements nested deeper than this are rejected.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: None,
            max_depth: 256,
        }
    }
}

/// The outcome of a conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConversionResult {
    /// The merged path expression. Empty if there was nothing to draw.
    pub d: String,
    pub frame: Frame,
    /// Names of unsupported elements that were dropped.
    pub ignored_tags: BTreeSet<String>,
    /// Names of significant attributes that were dropped.
    pub ignored_attrs: BTreeSet<String>,
    /// Set if the conversion failed. All other fields are empty in that case.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_error"))]
    pub error: Option<Error>,
    /// Whether the result is a lossless representation of the source.
    pub guaranteed: bool,
}

#[cfg(feature = "serde")]
fn serialize_error<S: Serializer>(error: &Option<Error>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ConversionResult {
    fn failed(error: Error) -> Self {
        Self {
            d: String::new(),
            frame: Frame::default(),
            ignored_tags: BTreeSet::new(),
            ignored_attrs: BTreeSet::new(),
            error: Some(error),
            guaranteed: false,
        }
    }

    /// Turn a failed conversion into an `Err`.
    pub fn into_result(self) -> Result<Self, Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }
}

fn try_convert(svg: &str, options: &Options) -> Result<ConversionResult, Error> {
    let doc = Document::parse(svg, options.max_depth)?;
    let frame = frame::resolve(doc.root())?;
    trace!("try_convert: Frame {:?}", frame);

    let walked = walk::walk_root(doc.root());
    let merged = merge::merge(&walked.drawables, options.precision);

    Ok(ConversionResult {
        d: merged.d,
        frame,
        ignored_tags: walked.ignored_tags,
        ignored_attrs: walked.ignored_attrs,
        error: None,
        guaranteed: walked.guaranteed && merged.guaranteed,
    })
}

/// Convert an SVG string using the given options.
pub fn convert_with(svg: &str, options: &Options) -> ConversionResult {
    trace!("convert_with: {:?}", options);
    match try_convert(svg, options) {
        Ok(result) => {
            if !result.guaranteed {
                warn!(
                    "Conversion is not guaranteed, ignored tags: {:?}, ignored attributes: {:?}",
                    result.ignored_tags, result.ignored_attrs
                );
            }
            result
        }
        Err(e) => {
            warn!("Conversion failed: {}", e);
            ConversionResult::failed(e)
        }
    }
}

/// Convert an SVG string into a single path with default options.
pub fn convert(svg: &str) -> ConversionResult {
    convert_with(svg, &Options::default())
}
