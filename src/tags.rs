/// What the tree walker does with an element, decided by its tag name.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TagKind {
    /// A group (`g`): its transform applies to all descendants.
    Container,
    /// A shape whose geometry is merged into the result (`path`).
    Drawable,
    /// Metadata that can be dropped without changing the picture.
    Quiet,
    /// Anything else. Recorded and dropped together with its subtree.
    Unsupported,
}

impl TagKind {
    /// Classify an element by its exact, case-sensitive tag name.
    pub fn of(name: &str) -> Self {
        match name {
            "g" => TagKind::Container,
            "path" => TagKind::Drawable,
            "desc" | "title" => TagKind::Quiet,
            _ => TagKind::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_kinds() {
        assert_eq!(TagKind::of("g"), TagKind::Container);
        assert_eq!(TagKind::of("path"), TagKind::Drawable);
        assert_eq!(TagKind::of("desc"), TagKind::Quiet);
        assert_eq!(TagKind::of("title"), TagKind::Quiet);
        for name in &["circle", "rect", "text", "defs", "use", "svg", "G", "Path"] {
            assert_eq!(TagKind::of(name), TagKind::Unsupported, "{}", name);
        }
    }
}
