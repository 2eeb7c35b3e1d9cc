use log::{trace, warn};

use crate::pathdata::apply_transform;
use crate::walk::Drawable;

/// The combined path of all drawables.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    pub d: String,
    /// False if two or more non-empty shapes were merged into one path, or if
    /// a shape had to be dropped because it could not be transformed.
    pub guaranteed: bool,
}

/// Apply every drawable's transform to its path data and concatenate the
/// results in document order.
///
/// Compositing several shapes without boolean operations is ambiguous (holes,
/// overlaps), so the result is only guaranteed while at most one non-empty
/// shape contributed to it.
///
/// A drawable whose path data or transform cannot be parsed is dropped
/// without affecting the others.
pub fn merge(drawables: &[Drawable], precision: Option<usize>) -> Merged {
    trace!("merge: {} drawables", drawables.len());
    let mut d = String::new();
    let mut guaranteed = true;

    for drawable in drawables {
        let transformed = match apply_transform(&drawable.path_data, &drawable.transform, precision) {
            Ok(transformed) => transformed,
            Err(e) => {
                warn!("Dropping shape {:?}: {}", drawable.path_data, e);
                guaranteed = false;
                continue;
            }
        };
        if transformed.trim().is_empty() {
            continue;
        }
        if !d.is_empty() {
            if guaranteed {
                warn!("Merging multiple shapes into a single path");
            }
            guaranteed = false;
            d.push(' ');
        }
        d.push_str(&transformed);
    }

    Merged { d, guaranteed }
}
