//! Recursive walk over the element tree that collects drawable geometry and
//! everything that had to be dropped on the way.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::attributes::AttributeKind;
use crate::document::{Element, Node};
use crate::tags::TagKind;
use crate::transform::TransformChain;

/// Path data of one drawable element and the transforms that apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub path_data: String,
    pub transform: TransformChain,
}

/// What a walk over one subtree found.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    /// Drawables in document order.
    pub drawables: Vec<Drawable>,
    pub ignored_tags: BTreeSet<String>,
    pub ignored_attrs: BTreeSet<String>,
    /// False once a significant attribute or an unsupported element was dropped.
    pub guaranteed: bool,
}

impl Default for Walk {
    fn default() -> Self {
        Self {
            drawables: Vec::new(),
            ignored_tags: BTreeSet::new(),
            ignored_attrs: BTreeSet::new(),
            guaranteed: true,
        }
    }
}

impl Walk {
    /// Fold the result of a subtree walk into this one.
    fn union(&mut self, other: Walk) {
        self.drawables.extend(other.drawables);
        self.ignored_tags.extend(other.ignored_tags);
        self.ignored_attrs.extend(other.ignored_attrs);
        self.guaranteed &= other.guaranteed;
    }

    /// Record the significant attributes of `element`, which are all dropped.
    fn classify_attributes(&mut self, element: &Element) {
        for (name, _) in element.attributes() {
            if AttributeKind::of(name).is_significant() {
                debug!("Dropping attribute {:?} of <{}>", name, element.name());
                self.ignored_attrs.insert(name.to_string());
                self.guaranteed = false;
            }
        }
    }
}

/// Walk the children of `element`, with `parent` being the transforms of all
/// ancestors including `element` itself.
pub fn walk(element: &Element, parent: &TransformChain) -> Walk {
    let mut result = Walk::default();

    for child in element.children().iter().filter_map(Node::as_element) {
        let name = child.name();
        match TagKind::of(name) {
            TagKind::Quiet => {
                trace!("walk: Skip <{}>", name);
            }
            TagKind::Container => {
                trace!("walk: Enter <{}>", name);
                result.classify_attributes(child);
                let chain = parent.compose(child.attribute("transform"));
                result.union(walk(child, &chain));
            }
            TagKind::Drawable => {
                trace!("walk: Found <{}>", name);
                result.classify_attributes(child);
                result.drawables.push(Drawable {
                    path_data: child.attribute("d").unwrap_or_default().to_string(),
                    transform: parent.compose(child.attribute("transform")),
                });
            }
            TagKind::Unsupported => {
                debug!("Dropping unsupported element <{}> and its children", name);
                result.ignored_tags.insert(name.to_string());
                result.guaranteed = false;
            }
        }
    }

    result
}

/// Walk a whole document starting at its root `svg` element.
///
/// The attributes of the root are classified like those of any other element.
pub fn walk_root(root: &Element) -> Walk {
    let mut result = Walk::default();
    result.classify_attributes(root);
    let chain = TransformChain::empty().compose(root.attribute("transform"));
    result.union(walk(root, &chain));
    trace!(
        "walk_root: {} drawables, {} ignored tags, {} ignored attributes",
        result.drawables.len(),
        result.ignored_tags.len(),
        result.ignored_attrs.len()
    );
    result
}
