/// An ordered list of `transform` attribute values collected from the root
/// down to one element, outermost first.
///
/// `None` means that no element on the path carried a `transform` attribute.
/// `Some("")` is a chain that was explicitly written but is empty. Both are
/// the identity when applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformChain(Option<String>);

impl TransformChain {
    /// A chain without any transforms.
    pub fn empty() -> Self {
        Self(None)
    }

    /// Extend this chain with an element's own `transform` attribute.
    ///
    /// The parent chain comes first, the element's transform last, separated
    /// by a single space. Without an own transform the chain is returned
    /// unchanged.
    pub fn compose(&self, own: Option<&str>) -> Self {
        match (own, &self.0) {
            (None, _) => self.clone(),
            (Some(own), None) => Self(Some(own.to_string())),
            (Some(own), Some(parent)) => Self(Some(format!("{} {}", parent, own))),
        }
    }

    /// The composed transform list, if any element contributed one.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether applying this chain cannot change any coordinate.
    pub fn is_noop(&self) -> bool {
        self.0.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}

impl From<&str> for TransformChain {
    fn from(val: &str) -> Self {
        Self(Some(val.to_string()))
    }
}
