//! Reconciling the `viewBox` of the root element with its explicit size.

use std::str::FromStr;

use log::trace;
use svgtypes::{Length, LengthUnit, NumberListParser};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::document::Element;
use crate::error::SizingError;

/// The coordinate rectangle of the output document.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

fn parse_view_box(value: &str) -> Result<Frame, SizingError> {
    let malformed = || SizingError::MalformedViewBox(value.to_string());
    let numbers = NumberListParser::from(value)
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| malformed())?;
    match numbers[..] {
        [x, y, width, height] => Ok(Frame::new(x, y, width, height)),
        _ => Err(malformed()),
    }
}

/// Parse a user unit length. Units other than `px` cannot be mapped to user
/// space without a rendering context.
fn parse_length(svg: &Element, attr: &'static str) -> Result<Option<f64>, SizingError> {
    let value = match svg.attribute(attr) {
        Some(value) => value,
        None => return Ok(None),
    };
    let invalid = || SizingError::InvalidLength {
        attr,
        value: value.to_string(),
    };
    let length = Length::from_str(value).map_err(|_| invalid())?;
    match length.unit {
        LengthUnit::None | LengthUnit::Px => Ok(Some(length.number)),
        _ => Err(invalid()),
    }
}

/// Resolve the frame of the root `svg` element.
///
/// If both a `viewBox` and an explicit size are given they have to agree,
/// since scaling between the two is not supported. Without either, the frame
/// would have to be computed from the geometry, which is not supported
/// either.
///
/// The position (`x`, `y`) of the root element does not affect the frame and
/// is not read.
pub fn resolve(svg: &Element) -> Result<Frame, SizingError> {
    trace!("resolve");
    let view_box = svg.attribute("viewBox").map(parse_view_box).transpose()?;
    let width = parse_length(svg, "width")?;
    let height = parse_length(svg, "height")?;
    trace!(
        "resolve: viewBox={:?} width={:?} height={:?}",
        view_box,
        width,
        height
    );

    let negative = |v: Option<f64>| v.map_or(false, |v| v < 0.0);
    if negative(width)
        || negative(height)
        || negative(view_box.map(|vb| vb.width))
        || negative(view_box.map(|vb| vb.height))
    {
        return Err(SizingError::NegativeSize);
    }

    match (view_box, width, height) {
        (None, Some(width), Some(height)) => Ok(Frame::new(0.0, 0.0, width, height)),
        (None, _, _) => Err(SizingError::Insufficient),
        (Some(view_box), None, None) => Ok(view_box),
        (Some(view_box), width, height) => {
            let width = width.unwrap_or(view_box.width);
            let height = height.unwrap_or(view_box.height);
            #[allow(clippy::float_cmp)]
            let same = width == view_box.width && height == view_box.height;
            if same {
                Ok(Frame::new(view_box.x, view_box.y, width, height))
            } else {
                Err(SizingError::Conflict {
                    view_box_width: view_box.width,
                    view_box_height: view_box.height,
                    width,
                    height,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn resolve_str(attrs: &str) -> Result<Frame, SizingError> {
        let input = format!("<svg {}/>", attrs);
        let doc = Document::parse(&input, 256).unwrap();
        resolve(doc.root())
    }

    #[test]
    fn test_view_box_only() {
        assert_eq!(
            resolve_str(r#"viewBox="0 0 100 50""#),
            Ok(Frame::new(0.0, 0.0, 100.0, 50.0))
        );
        assert_eq!(
            resolve_str(r#"viewBox="-5,10,20,30""#),
            Ok(Frame::new(-5.0, 10.0, 20.0, 30.0))
        );
    }

    #[test]
    fn test_size_only() {
        assert_eq!(
            resolve_str(r#"width="100" height="50""#),
            Ok(Frame::new(0.0, 0.0, 100.0, 50.0))
        );
        assert_eq!(
            resolve_str(r#"width="100px" height="50.5px" x="3" y="4""#),
            Ok(Frame::new(0.0, 0.0, 100.0, 50.5))
        );
    }

    #[test]
    fn test_matching_view_box_and_size() {
        assert_eq!(
            resolve_str(r#"viewBox="10 20 100 50" width="100" height="50.0""#),
            Ok(Frame::new(10.0, 20.0, 100.0, 50.0))
        );
        assert_eq!(
            resolve_str(r#"viewBox="10 20 100 50" width="100""#),
            Ok(Frame::new(10.0, 20.0, 100.0, 50.0))
        );
    }

    #[test]
    fn test_conflicting_view_box_and_size() {
        assert_eq!(
            resolve_str(r#"viewBox="0 0 100 50" width="200" height="50""#),
            Err(SizingError::Conflict {
                view_box_width: 100.0,
                view_box_height: 50.0,
                width: 200.0,
                height: 50.0,
            })
        );
        assert!(matches!(
            resolve_str(r#"viewBox="0 0 100 50" height="20""#),
            Err(SizingError::Conflict { .. })
        ));
    }

    #[test]
    fn test_malformed_view_box() {
        assert_eq!(
            resolve_str(r#"viewBox="0 0 100""#),
            Err(SizingError::MalformedViewBox("0 0 100".into()))
        );
        assert!(matches!(
            resolve_str(r#"viewBox="" width="1" height="1""#),
            Err(SizingError::MalformedViewBox(_))
        ));
        assert!(matches!(
            resolve_str(r#"viewBox="0 0 a b""#),
            Err(SizingError::MalformedViewBox(_))
        ));
    }

    #[test]
    fn test_malformed_view_box_wins_over_negative_size() {
        assert!(matches!(
            resolve_str(r#"viewBox="0 0" width="-1" height="1""#),
            Err(SizingError::MalformedViewBox(_))
        ));
    }

    #[test]
    fn test_negative_size() {
        assert_eq!(
            resolve_str(r#"width="-1" height="10""#),
            Err(SizingError::NegativeSize)
        );
        assert_eq!(
            resolve_str(r#"viewBox="0 0 10 -10""#),
            Err(SizingError::NegativeSize)
        );
        // Checked before missing information is reported
        assert_eq!(
            resolve_str(r#"width="-1""#),
            Err(SizingError::NegativeSize)
        );
    }

    #[test]
    fn test_insufficient() {
        assert_eq!(resolve_str(""), Err(SizingError::Insufficient));
        assert_eq!(
            resolve_str(r#"width="10""#),
            Err(SizingError::Insufficient)
        );
        assert_eq!(
            resolve_str(r#"height="10" x="1" y="1""#),
            Err(SizingError::Insufficient)
        );
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            resolve_str(r#"width="100%" height="10""#),
            Err(SizingError::InvalidLength {
                attr: "width",
                value: "100%".into(),
            })
        );
        assert!(matches!(
            resolve_str(r#"width="1" height="abc""#),
            Err(SizingError::InvalidLength { attr: "height", .. })
        ));
    }

    #[test]
    fn test_position_is_ignored() {
        assert_eq!(
            resolve_str(r#"viewBox="0 0 24 24" x="10%" y="1em" width="24" height="24""#),
            Ok(Frame::new(0.0, 0.0, 24.0, 24.0))
        );
        assert_eq!(
            resolve_str(r#"x="bogus" width="24" height="24""#),
            Ok(Frame::new(0.0, 0.0, 24.0, 24.0))
        );
    }

    #[test]
    fn test_does_not_touch_document() {
        let doc = Document::parse(r#"<svg viewBox="0 0 1 2" width="1"/>"#, 256).unwrap();
        let before = doc.clone();
        resolve(doc.root()).unwrap();
        assert_eq!(doc, before);
    }
}
