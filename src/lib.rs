pub mod color_utils;
pub mod converter;
pub mod math_utils;
pub mod models;
pub mod path_utils;
pub mod renderer;

pub use converter::{convert_svg_to_png, PngOptions};
pub use models::{
    Annotation, AnnotationData, Ellipse, Line, PointType, Polyline, PolylinePoint, Shape,
};
pub use path_utils::{
    calculate_tangent_direction, insert_midpoint, move_handle, path_midpoint, toggle_corner,
    GeometryError, HandleSide,
};
pub use renderer::{calculate_viewbox, generate_svg};
