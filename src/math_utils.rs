/// Evaluate a cubic Bezier curve at parameter t
///
/// # Arguments
/// * `p0`, `p3` - curve endpoints in absolute coordinates
/// * `c1`, `c2` - control points for the outgoing/incoming tangents
/// * `t` - curve parameter in [0, 1]
pub fn cubic_point<T>(p0: (T, T), c1: (T, T), c2: (T, T), p3: (T, T), t: T) -> (T, T)
where
    T: num_traits::Float,
{
    let three = T::from(3.0).unwrap();
    let u = T::one() - t;
    let u2 = u * u;
    let u3 = u2 * u;
    let t2 = t * t;
    let t3 = t2 * t;
    let x = u3 * p0.0 + three * u2 * t * c1.0 + three * u * t2 * c2.0 + t3 * p3.0;
    let y = u3 * p0.1 + three * u2 * t * c1.1 + three * u * t2 * c2.1 + t3 * p3.1;
    (x, y)
}

/// Arithmetic midpoint of two points
pub fn midpoint<T>(p1: (T, T), p2: (T, T)) -> (T, T)
where
    T: num_traits::Float,
{
    let two = T::from(2.0).unwrap();
    ((p1.0 + p2.0) / two, (p1.1 + p2.1) / two)
}
