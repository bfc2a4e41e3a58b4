//! Random polygon fixtures for the spatial-join benchmarks.
//!
//! This has nothing to do with table generation: it just produces the
//! `polys1k.wkt` style inputs the benchmarks load. Each fixture is a
//! random short segment inside a lon/lat window, widened into a capsule
//! polygon and written out as part of one `GEOMETRYCOLLECTION`.

use geo::{Coordinate, Geometry, Line, LineString, Point, Polygon};
use rand::Rng;
use wkt::ToWkt;

pub const LONGITUDES: (f64, f64) = (-80., -40.);
pub const LATITUDES: (f64, f64) = (15., 45.);

pub const MAX_SEGMENT_DEGREES: f64 = 0.5;
pub const BUFFER_DEGREES: f64 = 0.025;

// points per semicircle end cap
const CAP_SEGMENTS: usize = 8;

pub fn rand_point<R: Rng>(rng: &mut R) -> Point<f64> {
    Point::new(
        rng.gen_range(LONGITUDES.0, LONGITUDES.1),
        rng.gen_range(LATITUDES.0, LATITUDES.1),
    )
}

pub fn rand_segment<R: Rng>(rng: &mut R, max_distance_degrees: f64) -> Line<f64> {
    let start = rand_point(rng);
    let distance = rng.gen_range(0., max_distance_degrees);
    let angle_rad = rng.gen_range(0., 2. * std::f64::consts::PI);
    let end = Point::new(
        start.x() + angle_rad.cos() * distance,
        start.y() + angle_rad.sin() * distance,
    );
    Line::new(start, end)
}

/// Widen a segment into a capsule: both offset sides plus sampled
/// semicircle caps. shapely's buffer() produced these for the original
/// fixture sets; geo has no buffer operation, but for a bare segment
/// the outline is easy enough to build directly. A zero-length segment
/// degenerates to a sampled circle, which is fine.
pub fn buffer_segment(segment: &Line<f64>, distance: f64) -> Polygon<f64> {
    let theta = (segment.end.y - segment.start.y).atan2(segment.end.x - segment.start.x);
    let half = std::f64::consts::FRAC_PI_2;
    let step = std::f64::consts::PI / (CAP_SEGMENTS as f64);

    let mut ring: Vec<Coordinate<f64>> = Vec::with_capacity(2 * (CAP_SEGMENTS + 1));
    // end cap, sweeping from the right side of travel around the tip
    for i in 0..=CAP_SEGMENTS {
        let angle = theta - half + step * (i as f64);
        ring.push(Coordinate {
            x: segment.end.x + distance * angle.cos(),
            y: segment.end.y + distance * angle.sin(),
        });
    }
    // start cap, sweeping back around the tail
    for i in 0..=CAP_SEGMENTS {
        let angle = theta + half + step * (i as f64);
        ring.push(Coordinate {
            x: segment.start.x + distance * angle.cos(),
            y: segment.start.y + distance * angle.sin(),
        });
    }

    Polygon::new(LineString(ring), vec![])
}

pub fn rand_polys<R: Rng>(
    rng: &mut R,
    n: usize,
    max_distance_degrees: f64,
    buffer: f64,
) -> Vec<Polygon<f64>> {
    (0..n)
        .map(|_| buffer_segment(&rand_segment(rng, max_distance_degrees), buffer))
        .collect()
}

/// Serialize as a single `GEOMETRYCOLLECTION`, the shape the benchmark
/// loader expects.
pub fn wkt_collection(polys: &[Polygon<f64>]) -> String {
    let items: Vec<String> = polys
        .iter()
        .map(|poly| {
            let w = Geometry::Polygon(poly.clone()).to_wkt();
            w.items[0].to_string()
        })
        .collect();
    format!("GEOMETRYCOLLECTION({})", items.join(","))
}
