use thiserror::Error;

use crate::math_utils::{cubic_point, midpoint};
use crate::models::{PointType, Polyline, PolylinePoint};

/// Handle length as a fraction of the neighbor chord
pub const HANDLE_CHORD_RATIO: f64 = 0.3;
/// On-screen handle length cap, divided by the viewport scale
pub const MAX_HANDLE_SCREEN_LENGTH: f64 = 100.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Which control handle of a curve point to address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    In,
    Out,
}

/// Estimate the local tangent direction at a polyline point, scaled for use
/// as a symmetric control-handle offset.
///
/// The tangent follows the chord between the point's neighbors: previous to
/// next for interior points, point to its single neighbor at the ends of an
/// open path (closed paths wrap around). The result is normalized and scaled
/// by `min(0.3 * chord_length, 100 / viewport_scale)` so the handle keeps a
/// bounded on-screen size as the view zooms in. A point with no usable
/// neighbor, or a zero-length chord, yields the zero vector.
///
/// `viewport_scale` must be > 0.
pub fn calculate_tangent_direction(
    shape: &Polyline,
    index: usize,
    viewport_scale: f64,
) -> Result<(f64, f64), GeometryError> {
    let points = &shape.points;
    if index >= points.len() {
        return Err(GeometryError::IndexOutOfRange {
            index,
            len: points.len(),
        });
    }

    let current = points[index].point;

    let prev_idx = if index > 0 {
        Some(index - 1)
    } else if shape.closed {
        Some(points.len() - 1)
    } else {
        None
    };
    let next_idx = if index < points.len() - 1 {
        Some(index + 1)
    } else if shape.closed {
        Some(0)
    } else {
        None
    };

    let (mut tangent_x, mut tangent_y) = match (prev_idx, next_idx) {
        // Interior point - chord from previous to next neighbor
        (Some(p), Some(n)) => (
            points[n].point.0 - points[p].point.0,
            points[n].point.1 - points[p].point.1,
        ),
        // End of an open path - direction from the previous point
        (Some(p), None) => (current.0 - points[p].point.0, current.1 - points[p].point.1),
        // Start of an open path - direction to the next point
        (None, Some(n)) => (points[n].point.0 - current.0, points[n].point.1 - current.1),
        // Isolated point
        (None, None) => (0.0, 0.0),
    };

    let length = (tangent_x * tangent_x + tangent_y * tangent_y).sqrt();
    if length > 0.0 {
        let factor = (HANDLE_CHORD_RATIO * length).min(MAX_HANDLE_SCREEN_LENGTH / viewport_scale);
        tangent_x = tangent_x / length * factor;
        tangent_y = tangent_y / length * factor;
    }

    Ok((tangent_x, tangent_y))
}

/// Midpoint (t = 0.5) of the cubic Bezier segment between two adjacent
/// polyline points.
///
/// Two corner points form a straight segment, so the midpoint is their
/// arithmetic average. Otherwise the start's out-handle and the end's
/// in-handle act as the Bezier control points, each falling back to its own
/// vertex coordinate when absent.
pub fn path_midpoint(start: &PolylinePoint, end: &PolylinePoint) -> (f64, f64) {
    if start.point_type == PointType::Corner && end.point_type == PointType::Corner {
        return midpoint(start.point, end.point);
    }

    let (cp1, cp2) = segment_control_points(start, end);
    cubic_point(start.point, cp1, cp2, end.point, 0.5)
}

/// Bezier control points for the segment from `start` to `end`: the start's
/// out-handle and the end's in-handle, falling back to the vertex itself for
/// corner points and missing handles.
pub fn segment_control_points(
    start: &PolylinePoint,
    end: &PolylinePoint,
) -> ((f64, f64), (f64, f64)) {
    let cp1 = match start.point_type {
        PointType::Corner => start.point,
        PointType::Curve => start.out_handle.unwrap_or(start.point),
    };
    let cp2 = match end.point_type {
        PointType::Corner => end.point,
        PointType::Curve => end.in_handle.unwrap_or(end.point),
    };
    (cp1, cp2)
}

/// Flip one point between corner and curve, returning a new polyline.
///
/// Corner to curve places symmetric handles along the local tangent (an
/// existing handle is kept as-is) and locks them. Curve to corner discards
/// the handle data entirely. All other points are returned unchanged; the
/// input polyline is never mutated.
pub fn toggle_corner(
    shape: &Polyline,
    corner_idx: usize,
    viewport_scale: f64,
) -> Result<Polyline, GeometryError> {
    let corner = shape
        .points
        .get(corner_idx)
        .ok_or(GeometryError::IndexOutOfRange {
            index: corner_idx,
            len: shape.points.len(),
        })?;

    let replacement = match corner.point_type {
        PointType::Corner => {
            let (tangent_x, tangent_y) =
                calculate_tangent_direction(shape, corner_idx, viewport_scale)?;
            let (x, y) = corner.point;

            PolylinePoint {
                point_type: PointType::Curve,
                point: corner.point,
                in_handle: Some(corner.in_handle.unwrap_or((x - tangent_x, y - tangent_y))),
                out_handle: Some(corner.out_handle.unwrap_or((x + tangent_x, y + tangent_y))),
                locked: true,
            }
        }
        PointType::Curve => PolylinePoint {
            point_type: PointType::Corner,
            point: corner.point,
            in_handle: None,
            out_handle: None,
            locked: false,
        },
    };

    let mut points = shape.points.clone();
    points[corner_idx] = replacement;
    Ok(Polyline {
        points,
        closed: shape.closed,
    })
}

/// Insert a new corner point at the Bezier midpoint of a segment.
///
/// Segment `i` connects point `i` to point `i + 1`; on a closed polyline the
/// last segment connects the final point back to the first. The new point is
/// spliced in directly after the segment's start point.
pub fn insert_midpoint(shape: &Polyline, segment_idx: usize) -> Result<Polyline, GeometryError> {
    let segments = shape.segment_count();
    if segment_idx >= segments {
        return Err(GeometryError::IndexOutOfRange {
            index: segment_idx,
            len: segments,
        });
    }

    let start = &shape.points[segment_idx];
    let end = &shape.points[(segment_idx + 1) % shape.points.len()];
    let new_point = PolylinePoint {
        point_type: PointType::Corner,
        point: path_midpoint(start, end),
        in_handle: None,
        out_handle: None,
        locked: false,
    };

    let mut points = shape.points.clone();
    points.insert(segment_idx + 1, new_point);
    Ok(Polyline {
        points,
        closed: shape.closed,
    })
}

/// Move one control handle of a curve point to a new absolute position,
/// returning a new polyline.
///
/// On a locked point the opposite handle is mirrored about the vertex so the
/// joint stays smooth. Corner points carry no handles, so the polyline is
/// returned unchanged for them.
pub fn move_handle(
    shape: &Polyline,
    point_idx: usize,
    side: HandleSide,
    position: (f64, f64),
) -> Result<Polyline, GeometryError> {
    let point = shape
        .points
        .get(point_idx)
        .ok_or(GeometryError::IndexOutOfRange {
            index: point_idx,
            len: shape.points.len(),
        })?;

    let mut points = shape.points.clone();
    if point.point_type == PointType::Curve {
        let (x, y) = point.point;
        let mirrored = (2.0 * x - position.0, 2.0 * y - position.1);

        let updated = &mut points[point_idx];
        match side {
            HandleSide::In => {
                updated.in_handle = Some(position);
                if updated.locked {
                    updated.out_handle = Some(mirrored);
                }
            }
            HandleSide::Out => {
                updated.out_handle = Some(position);
                if updated.locked {
                    updated.in_handle = Some(mirrored);
                }
            }
        }
    }

    Ok(Polyline {
        points,
        closed: shape.closed,
    })
}
