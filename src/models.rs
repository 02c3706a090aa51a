use serde::{Deserialize, Serialize};

/// Vertex kind on a polyline path.
/// Serialized with the annotation framework's SCREAMING-CASE tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PointType {
    /// Sharp vertex, straight-line joints on both sides
    Corner,
    /// Smooth vertex with cubic Bezier control handles
    Curve,
}

/// A single vertex of a polyline.
///
/// Handles are absolute coordinates, not offsets from the vertex. A
/// `Corner` point never carries handles; a `Curve` point may carry either
/// handle independently unless `locked`, in which case the two handles are
/// kept point-symmetric about the vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylinePoint {
    #[serde(rename = "type")]
    pub point_type: PointType,
    pub point: (f64, f64),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_handle: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_handle: Option<(f64, f64)>,
    #[serde(default)]
    pub locked: bool,
}

/// Ordered point sequence; `closed` connects the last point back to the first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<PolylinePoint>,
    #[serde(default)]
    pub closed: bool,
}

impl Polyline {
    /// Number of segments: open paths have one fewer segment than points,
    /// closed paths add the segment from the last point back to the first.
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start and end coordinates
    pub points: ((f64, f64), (f64, f64)),
}

/// Shape geometry tagged the way the annotation framework tags it:
/// `{ "type": "POLYLINE", "geometry": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "geometry", rename_all = "UPPERCASE")]
pub enum Shape {
    Ellipse(Ellipse),
    Line(Line),
    Polyline(Polyline),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub shape: Shape,
}

/// Top-level annotation document read and written by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationData {
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}
