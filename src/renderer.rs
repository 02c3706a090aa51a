use crate::models::{Annotation, AnnotationData, PointType, Polyline, Shape, ViewBox};
use crate::path_utils::segment_control_points;

const STROKE_COLOR: &str = "#1e88e5";
const STROKE_WIDTH: f64 = 2.0;

pub fn calculate_viewbox(annotations: &[Annotation]) -> ViewBox {
    const PADDING: f64 = 40.0;

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for annotation in annotations {
        if let Some((x0, y0, x1, y1)) = shape_bounds(&annotation.shape) {
            min_x = min_x.min(x0);
            min_y = min_y.min(y0);
            max_x = max_x.max(x1);
            max_y = max_y.max(y1);
        }
    }

    if min_x > max_x {
        // Nothing with usable bounds
        return ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 800.0,
            height: 600.0,
        };
    }

    ViewBox {
        min_x: min_x - PADDING,
        min_y: min_y - PADDING,
        width: max_x - min_x + PADDING * 2.0,
        height: max_y - min_y + PADDING * 2.0,
    }
}

/// Axis-aligned bounds as (min_x, min_y, max_x, max_y), or None for shapes
/// with no extent (an empty polyline).
fn shape_bounds(shape: &Shape) -> Option<(f64, f64, f64, f64)> {
    match shape {
        Shape::Ellipse(e) => Some((e.cx - e.rx, e.cy - e.ry, e.cx + e.rx, e.cy + e.ry)),
        Shape::Line(l) => {
            let ((x1, y1), (x2, y2)) = l.points;
            Some((x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)))
        }
        Shape::Polyline(p) => {
            if p.points.is_empty() {
                return None;
            }

            let mut min_x = f64::INFINITY;
            let mut min_y = f64::INFINITY;
            let mut max_x = f64::NEG_INFINITY;
            let mut max_y = f64::NEG_INFINITY;

            // A cubic stays inside its control polygon, so including the
            // handles gives a bound that covers the curved segments too
            for point in &p.points {
                let mut include = |(x, y): (f64, f64)| {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                };
                include(point.point);
                if let Some(handle) = point.in_handle {
                    include(handle);
                }
                if let Some(handle) = point.out_handle {
                    include(handle);
                }
            }

            Some((min_x, min_y, max_x, max_y))
        }
    }
}

/// SVG path data for a polyline, honoring the corner/curve type of each
/// point. A segment between two corners is a straight `L`; any segment with
/// a curve endpoint becomes a `C` cubic using the points' handles (falling
/// back to the vertex where a handle is absent). Closed polylines end in `Z`.
pub fn polyline_path_data(shape: &Polyline) -> String {
    let points = &shape.points;
    if points.is_empty() {
        return String::new();
    }

    let (start_x, start_y) = points[0].point;
    let mut d = format!("M {} {}", start_x, start_y);

    let segments = shape.segment_count();
    for i in 0..segments {
        let start = &points[i];
        let end = &points[(i + 1) % points.len()];
        let closing = shape.closed && i == segments - 1;

        if start.point_type == PointType::Corner && end.point_type == PointType::Corner {
            // The trailing Z already draws the straight closing segment
            if !closing {
                d.push_str(&format!(" L {} {}", end.point.0, end.point.1));
            }
        } else {
            let (cp1, cp2) = segment_control_points(start, end);
            d.push_str(&format!(
                " C {} {}, {} {}, {} {}",
                cp1.0, cp1.1, cp2.0, cp2.1, end.point.0, end.point.1
            ));
        }
    }

    if shape.closed {
        d.push_str(" Z");
    }

    d
}

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Ellipse(e) => format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            e.cx, e.cy, e.rx, e.ry, STROKE_COLOR, STROKE_WIDTH
        ),
        Shape::Line(l) => {
            let ((x1, y1), (x2, y2)) = l.points;
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                x1, y1, x2, y2, STROKE_COLOR, STROKE_WIDTH
            )
        }
        Shape::Polyline(p) => {
            let d = polyline_path_data(p);
            if d.is_empty() {
                return String::new();
            }
            format!(
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                d, STROKE_COLOR, STROKE_WIDTH
            )
        }
    }
}

pub fn generate_svg(data: &AnnotationData) -> String {
    let viewbox = calculate_viewbox(&data.annotations);

    let shapes_svg = data
        .annotations
        .iter()
        .map(|annotation| render_shape(&annotation.shape))
        .filter(|svg| !svg.is_empty())
        .collect::<Vec<_>>()
        .join("\n  ");

    format!(
        "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">\n  {}\n</svg>",
        viewbox.min_x, viewbox.min_y, viewbox.width, viewbox.height, shapes_svg
    )
}
