//! Synthetic geometry generators.
//!
//! These generators create predictable, verifiable shapes for tests and
//! benchmarks without external data files.

use map_common::{GeoPoint, Shape, ShapeType};

/// Creates a closed circular ring with `segments` edges.
///
/// The first vertex is repeated at the end, as polygon rings require.
///
/// # Arguments
///
/// * `center_x` - Ring center longitude
/// * `center_y` - Ring center latitude
/// * `radius` - Ring radius in degrees
/// * `segments` - Number of edges (at least 3)
///
/// # Example
///
/// ```
/// use test_utils::circle_ring;
///
/// let ring = circle_ring(0.0, 0.0, 1.0, 8);
/// assert_eq!(ring.len(), 9); // 8 segments + closing vertex
/// assert_eq!(ring[0], ring[8]);
/// ```
pub fn circle_ring(center_x: f64, center_y: f64, radius: f64, segments: usize) -> Vec<GeoPoint> {
    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = (i as f64 / segments as f64) * std::f64::consts::TAU;
        ring.push(GeoPoint::new(
            center_x + radius * theta.cos(),
            center_y + radius * theta.sin(),
        ));
    }
    ring.push(ring[0]);
    ring
}

/// Creates a coastline-like ring: a circle with deterministic radial
/// jitter derived from `seed`.
///
/// Same seed, same ring; different seeds diverge. Useful for benchmark
/// inputs that should look like real geography without shipping data.
pub fn jagged_ring(
    center_x: f64,
    center_y: f64,
    radius: f64,
    segments: usize,
    seed: u32,
) -> Vec<GeoPoint> {
    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let theta = (i as f64 / segments as f64) * std::f64::consts::TAU;
        // Jitter in [-0.25, 0.25] of the radius
        let jitter = (simple_hash(i as u32, 0, seed) % 1000) as f64 / 1000.0 - 0.5;
        let r = radius * (1.0 + jitter * 0.5);
        ring.push(GeoPoint::new(
            center_x + r * theta.cos(),
            center_y + r * theta.sin(),
        ));
    }
    ring.push(ring[0]);
    ring
}

/// Creates an open zig-zag polyline from `x0` to `x1` at base latitude `y`.
///
/// # Arguments
///
/// * `x0`, `x1` - Longitude span
/// * `y` - Base latitude
/// * `amplitude` - Vertical tooth height in degrees
/// * `teeth` - Number of up-down pairs
pub fn sawtooth_line(x0: f64, x1: f64, y: f64, amplitude: f64, teeth: usize) -> Vec<GeoPoint> {
    let vertices = teeth * 2 + 1;
    let mut line = Vec::with_capacity(vertices);
    for i in 0..vertices {
        let t = i as f64 / (vertices - 1) as f64;
        let x = x0 + t * (x1 - x0);
        let dy = if i % 2 == 0 { 0.0 } else { amplitude };
        line.push(GeoPoint::new(x, y + dy));
    }
    line
}

/// Assembles a polygon shape from one vertex ring per part.
pub fn polygon_from_rings(rings: &[Vec<GeoPoint>]) -> Shape {
    let mut parts = Vec::with_capacity(rings.len());
    let mut points = Vec::new();
    for ring in rings {
        parts.push(points.len());
        points.extend_from_slice(ring);
    }
    Shape::new(ShapeType::Polygon, points, parts)
}

/// Assembles a polyline shape from one vertex run per part.
pub fn polyline_from_parts(segments: &[Vec<GeoPoint>]) -> Shape {
    let mut parts = Vec::with_capacity(segments.len());
    let mut points = Vec::new();
    for segment in segments {
        parts.push(points.len());
        points.extend_from_slice(segment);
    }
    Shape::new(ShapeType::PolyLine, points, parts)
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_ring_closed() {
        let ring = circle_ring(10.0, 20.0, 2.0, 16);
        assert_eq!(ring.len(), 17);
        assert_eq!(ring[0], ring[16]);
        // Every vertex is on the circle
        for p in &ring {
            let dist = ((p.x - 10.0).powi(2) + (p.y - 20.0).powi(2)).sqrt();
            assert!((dist - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_jagged_ring_deterministic() {
        let a = jagged_ring(0.0, 0.0, 5.0, 64, 42);
        let b = jagged_ring(0.0, 0.0, 5.0, 64, 42);
        assert_eq!(a, b, "Same seed should produce same ring");

        let c = jagged_ring(0.0, 0.0, 5.0, 64, 43);
        assert_ne!(a, c, "Different seed should produce different ring");
    }

    #[test]
    fn test_sawtooth_line_span() {
        let line = sawtooth_line(-10.0, 10.0, 0.0, 1.0, 5);
        assert_eq!(line.len(), 11);
        assert_eq!(line[0], GeoPoint::new(-10.0, 0.0));
        assert_eq!(line[10], GeoPoint::new(10.0, 0.0));
        assert_eq!(line[1].y, 1.0);
    }

    #[test]
    fn test_polygon_from_rings_offsets() {
        let shape = polygon_from_rings(&[
            circle_ring(0.0, 0.0, 1.0, 4),
            circle_ring(5.0, 5.0, 1.0, 8),
        ]);
        assert_eq!(shape.parts, vec![0, 5]);
        assert_eq!(shape.points.len(), 5 + 9);
        assert!(shape.validate().is_ok());
    }
}
