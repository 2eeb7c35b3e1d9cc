/// Reasons why the `viewBox` and the explicit size attributes of the root
/// element cannot be reconciled into a single frame.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizingError {
    #[error("malformed viewBox: {0:?}")]
    MalformedViewBox(String),
    #[error("invalid value for attribute {attr}: {value:?}")]
    InvalidLength { attr: &'static str, value: String },
    #[error("negative size")]
    NegativeSize,
    #[error("insufficient sizing information (viewBox or width and height required)")]
    Insufficient,
    #[error(
        "conflicting viewBox and explicit size: viewBox is {view_box_width}x{view_box_height}, \
         size is {width}x{height}"
    )]
    Conflict {
        view_box_width: f64,
        view_box_height: f64,
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Error when parsing XML: {0}")]
    XmlParse(String),
    #[error("Document does not contain an svg element")]
    MissingSvg,
    #[error("Expected svg root element, found {0}")]
    UnexpectedRoot(String),
    #[error("Document contains more than one root element")]
    MultipleRoots,
    #[error("Could not resolve image size: {0}")]
    Sizing(#[from] SizingError),
    #[error("SVG path parse error: {0}")]
    PathParse(String),
    #[error("Transform error: {0}")]
    Transform(String),
    #[error("Could not write SVG: {0}")]
    Serialize(String),
}
