//! Applying a transform list to SVG path data.
//!
//! Path data is always validated. If it is not transformed it is passed
//! through untouched. Otherwise
//! all segments are converted to absolute coordinates, shorthand segments are
//! expanded and elliptical arcs are approximated with cubic Bézier curves,
//! because an arbitrary affine transform does not preserve them.

use std::str::FromStr;

use log::trace;
use lyon_geom::{point, vector, Angle, ArcFlags, Point, SvgArc, Transform};
use svgtypes::{PathParser, PathSegment};

use crate::error::Error;
use crate::transform::TransformChain;

/// An absolute path segment. Horizontal, vertical, smooth and arc segments are
/// normalized away.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Segment {
    MoveTo(Point<f64>),
    LineTo(Point<f64>),
    CurveTo(Point<f64>, Point<f64>, Point<f64>),
    Quadratic(Point<f64>, Point<f64>),
    ClosePath,
}

impl Segment {
    fn transformed(self, ts: &Transform<f64>) -> Self {
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(ts.transform_point(p)),
            Segment::LineTo(p) => Segment::LineTo(ts.transform_point(p)),
            Segment::CurveTo(c1, c2, p) => Segment::CurveTo(
                ts.transform_point(c1),
                ts.transform_point(c2),
                ts.transform_point(p),
            ),
            Segment::Quadratic(c, p) => {
                Segment::Quadratic(ts.transform_point(c), ts.transform_point(p))
            }
            Segment::ClosePath => Segment::ClosePath,
        }
    }
}

/// Tracks the pen while walking over path segments.
#[derive(Debug)]
struct Pen {
    current: Point<f64>,
    subpath_start: Point<f64>,
    /// Second control point of the previous segment, if it was a cubic curve.
    prev_cubic_ctrl: Option<Point<f64>>,
    /// Control point of the previous segment, if it was a quadratic curve.
    prev_quad_ctrl: Option<Point<f64>>,
}

impl Pen {
    fn new() -> Self {
        Self {
            current: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
            prev_cubic_ctrl: None,
            prev_quad_ctrl: None,
        }
    }

    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point<f64> {
        if abs {
            point(x, y)
        } else {
            self.current + vector(x, y)
        }
    }

    /// Mirror `ctrl` along the current point.
    fn reflect(&self, ctrl: Option<Point<f64>>) -> Point<f64> {
        match ctrl {
            Some(ctrl) => self.current + (self.current - ctrl),
            None => self.current,
        }
    }
}

/// Parse a transform list into a single matrix.
fn parse_transform(list: &str) -> Result<Transform<f64>, Error> {
    let ts = svgtypes::Transform::from_str(list)
        .map_err(|e| Error::Transform(format!("Could not parse {:?}: {}", list, e)))?;
    Ok(Transform::new(ts.a, ts.b, ts.c, ts.d, ts.e, ts.f))
}

/// Parse a path expression into absolute, normalized segments.
#[allow(clippy::many_single_char_names)]
fn normalize(expr: &str) -> Result<Vec<Segment>, Error> {
    trace!("normalize");
    let mut segments = Vec::new();
    let mut pen = Pen::new();

    for segment in PathParser::from(expr) {
        let segment =
            segment.map_err(|e| Error::PathParse(format!("Could not parse path segment: {}", e)))?;
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::MoveTo(p));
                pen.current = p;
                pen.subpath_start = p;
            }
            PathSegment::LineTo { abs, x, y } => {
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::LineTo(p));
                pen.current = p;
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let p = if abs {
                    point(x, pen.current.y)
                } else {
                    point(pen.current.x + x, pen.current.y)
                };
                segments.push(Segment::LineTo(p));
                pen.current = p;
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let p = if abs {
                    point(pen.current.x, y)
                } else {
                    point(pen.current.x, pen.current.y + y)
                };
                segments.push(Segment::LineTo(p));
                pen.current = p;
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = pen.resolve(abs, x1, y1);
                let c2 = pen.resolve(abs, x2, y2);
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::CurveTo(c1, c2, p));
                cubic_ctrl = Some(c2);
                pen.current = p;
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c1 = pen.reflect(pen.prev_cubic_ctrl);
                let c2 = pen.resolve(abs, x2, y2);
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::CurveTo(c1, c2, p));
                cubic_ctrl = Some(c2);
                pen.current = p;
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let c = pen.resolve(abs, x1, y1);
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::Quadratic(c, p));
                quad_ctrl = Some(c);
                pen.current = p;
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let c = pen.reflect(pen.prev_quad_ctrl);
                let p = pen.resolve(abs, x, y);
                segments.push(Segment::Quadratic(c, p));
                quad_ctrl = Some(c);
                pen.current = p;
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let p = pen.resolve(abs, x, y);
                let arc = SvgArc {
                    from: pen.current,
                    to: p,
                    radii: vector(rx.abs(), ry.abs()),
                    x_rotation: Angle::degrees(x_axis_rotation),
                    flags: ArcFlags { large_arc, sweep },
                };
                if arc.is_straight_line() {
                    segments.push(Segment::LineTo(p));
                } else {
                    arc.to_arc().for_each_cubic_bezier(&mut |curve| {
                        segments.push(Segment::CurveTo(curve.ctrl1, curve.ctrl2, curve.to));
                    });
                }
                pen.current = p;
            }
            PathSegment::ClosePath { .. } => {
                segments.push(Segment::ClosePath);
                pen.current = pen.subpath_start;
            }
        }
        pen.prev_cubic_ctrl = cubic_ctrl;
        pen.prev_quad_ctrl = quad_ctrl;
    }

    Ok(segments)
}

/// Format a coordinate, optionally rounded to `precision` decimals.
fn format_number(val: f64, precision: Option<usize>) -> String {
    let formatted = match precision {
        Some(precision) => {
            let s = format!("{:.*}", precision, val);
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
        None => val.to_string(),
    };
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

fn write_segments(segments: &[Segment], precision: Option<usize>) -> String {
    let num = |p: Point<f64>| {
        format!(
            "{} {}",
            format_number(p.x, precision),
            format_number(p.y, precision)
        )
    };
    segments
        .iter()
        .map(|segment| match *segment {
            Segment::MoveTo(p) => format!("M {}", num(p)),
            Segment::LineTo(p) => format!("L {}", num(p)),
            Segment::CurveTo(c1, c2, p) => format!("C {} {} {}", num(c1), num(c2), num(p)),
            Segment::Quadratic(c, p) => format!("Q {} {}", num(c), num(p)),
            Segment::ClosePath => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply `chain` to the path expression `expr`.
///
/// The path expression is always validated. A chain that is absent, blank or
/// evaluates to the identity matrix returns `expr` verbatim.
pub fn apply_transform(
    expr: &str,
    chain: &TransformChain,
    precision: Option<usize>,
) -> Result<String, Error> {
    trace!("apply_transform: {:?}", chain);
    if expr.trim().is_empty() {
        return Ok(expr.to_string());
    }
    let segments = normalize(expr)?;
    let list = match chain.as_str() {
        Some(list) if !chain.is_noop() => list,
        _ => return Ok(expr.to_string()),
    };

    let ts = parse_transform(list)?;
    if ts == Transform::identity() {
        trace!("apply_transform: Identity, pass through");
        return Ok(expr.to_string());
    }

    let segments: Vec<Segment> = segments
        .into_iter()
        .map(|segment| segment.transformed(&ts))
        .collect();
    trace!("apply_transform: Transformed {} segments", segments.len());
    Ok(write_segments(&segments, precision))
}
