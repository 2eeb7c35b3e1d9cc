//! Classification of element attributes.
//!
//! Only a curated list of attributes is considered significant: these change
//! how a shape looks or behaves and cannot be represented by a bare glyph
//! path. Everything else (identifiers, geometry, transforms, namespaces,
//! unknown attributes) is dropped quietly.

use log::debug;

/// How dropping an attribute affects the fidelity of the result.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum AttributeKind {
    /// Dropping the attribute does not change the rendered glyph.
    Quiet,
    /// The attribute carries presentation, styling or behaviour that is lost.
    Significant,
}

/// Attributes whose loss makes the conversion result non-guaranteed.
pub const SIGNIFICANT_ATTRIBUTES: &[&str] = &[
    // Conditional processing
    "requiredFeatures",
    "requiredExtensions",
    "systemLanguage",
    // Core
    "xml:base",
    "xml:lang",
    "xml:space",
    // Graphical event handlers
    "onfocusin",
    "onfocusout",
    "onactivate",
    "onclick",
    "onmousedown",
    "onmouseup",
    "onmouseover",
    "onmousemove",
    "onmouseout",
    "onload",
    // Presentation
    "alignment-baseline",
    "baseline-shift",
    "clip",
    "clip-path",
    "clip-rule",
    "color",
    "color-interpolation",
    "color-interpolation-filters",
    "color-profile",
    "color-rendering",
    "cursor",
    "direction",
    "display",
    "dominant-baseline",
    "enable-background",
    "fill",
    "fill-opacity",
    "fill-rule",
    "filter",
    "flood-color",
    "flood-opacity",
    "font-family",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "glyph-orientation-horizontal",
    "glyph-orientation-vertical",
    "image-rendering",
    "kerning",
    "letter-spacing",
    "lighting-color",
    "marker-end",
    "marker-mid",
    "marker-start",
    "mask",
    "opacity",
    "overflow",
    "pointer-events",
    "shape-rendering",
    "stop-color",
    "stop-opacity",
    "stroke",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "text-anchor",
    "text-decoration",
    "text-rendering",
    "unicode-bidi",
    "visibility",
    "word-spacing",
    "writing-mode",
    // Styling
    "class",
    "style",
    // Other
    "externalResourcesRequired",
    "pathLength",
];

impl AttributeKind {
    /// Classify an attribute by its exact, case-sensitive name.
    ///
    /// Unknown names are quiet.
    pub fn of(name: &str) -> Self {
        if SIGNIFICANT_ATTRIBUTES.contains(&name) {
            debug!("Attribute {:?} is significant", name);
            AttributeKind::Significant
        } else {
            AttributeKind::Quiet
        }
    }

    pub fn is_significant(self) -> bool {
        self == AttributeKind::Significant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_list() {
        let expected = [
            "requiredFeatures",
            "requiredExtensions",
            "systemLanguage",
            "xml:base",
            "xml:lang",
            "xml:space",
            "onfocusin",
            "onfocusout",
            "onactivate",
            "onclick",
            "onmousedown",
            "onmouseup",
            "onmouseover",
            "onmousemove",
            "onmouseout",
            "onload",
            "alignment-baseline",
            "baseline-shift",
            "clip",
            "clip-path",
            "clip-rule",
            "color",
            "color-interpolation",
            "color-interpolation-filters",
            "color-profile",
            "color-rendering",
            "cursor",
            "direction",
            "display",
            "dominant-baseline",
            "enable-background",
            "fill",
            "fill-opacity",
            "fill-rule",
            "filter",
            "flood-color",
            "flood-opacity",
            "font-family",
            "font-size",
            "font-size-adjust",
            "font-stretch",
            "font-style",
            "font-variant",
            "font-weight",
            "glyph-orientation-horizontal",
            "glyph-orientation-vertical",
            "image-rendering",
            "kerning",
            "letter-spacing",
            "lighting-color",
            "marker-end",
            "marker-mid",
            "marker-start",
            "mask",
            "opacity",
            "overflow",
            "pointer-events",
            "shape-rendering",
            "stop-color",
            "stop-opacity",
            "stroke",
            "stroke-dasharray",
            "stroke-dashoffset",
            "stroke-linecap",
            "stroke-linejoin",
            "stroke-miterlimit",
            "stroke-opacity",
            "stroke-width",
            "text-anchor",
            "text-decoration",
            "text-rendering",
            "unicode-bidi",
            "visibility",
            "word-spacing",
            "writing-mode",
            "class",
            "style",
            "externalResourcesRequired",
            "pathLength",
        ];
        assert_eq!(SIGNIFICANT_ATTRIBUTES, &expected[..]);
        for name in &expected {
            assert_eq!(AttributeKind::of(name), AttributeKind::Significant, "{}", name);
        }
    }

    #[test]
    fn test_quiet() {
        for name in &["id", "d", "transform", "x", "y", "width", "height", "viewBox", "xmlns"] {
            assert_eq!(AttributeKind::of(name), AttributeKind::Quiet, "{}", name);
        }
    }

    #[test]
    fn test_unknown_is_quiet() {
        assert_eq!(AttributeKind::of("data-foo"), AttributeKind::Quiet);
        assert_eq!(AttributeKind::of("inkscape:label"), AttributeKind::Quiet);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(AttributeKind::of("fill").is_significant());
        assert!(!AttributeKind::of("Fill").is_significant());
        assert!(!AttributeKind::of("FILL").is_significant());
    }
}
