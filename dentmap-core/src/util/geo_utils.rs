use super::GeoPoint;
use geo::{Coord, Distance, HaversineMeasure, Point, Rect};
use uom::si::f64::Length;
use uom::si::length::meter;

/// spherical earth radius used for all great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// great-circle distance between two points using the haversine formula.
///
/// # Arguments
///
/// * `src` - first point
/// * `dst` - second point
///
/// # Returns
///
/// * the distance along the surface of a sphere of radius [`EARTH_RADIUS_METERS`]
pub fn haversine_distance(src: &GeoPoint, dst: &GeoPoint) -> Length {
    let meters = HaversineMeasure::new(EARTH_RADIUS_METERS)
        .distance(Point::<f64>::from(*src), Point::<f64>::from(*dst));
    Length::new::<meter>(meters)
}

/// creates a degenerate bounding box that covers exactly one point.
pub fn point_bounds(point: &GeoPoint) -> Rect<f64> {
    let coord: Coord<f64> = (*point).into();
    Rect::new(coord, coord)
}

/// builds a new bounding box covering both the given box and the point.
/// the input box is left untouched.
pub fn extend_bounds(bounds: &Rect<f64>, point: &GeoPoint) -> Rect<f64> {
    let min = bounds.min();
    let max = bounds.max();
    Rect::new(
        Coord {
            x: min.x.min(point.lng),
            y: min.y.min(point.lat),
        },
        Coord {
            x: max.x.max(point.lng),
            y: max.y.max(point.lat),
        },
    )
}

/// midpoint of the north-east and south-west corners of a bounding box.
///
/// this is not a true centroid of the covered points, only the center of
/// their axis-aligned extent.
pub fn bounds_midpoint(bounds: &Rect<f64>) -> GeoPoint {
    GeoPoint::from(bounds.center())
}

/// tests whether a point lies inside or on the boundary of a bounding box.
pub fn bounds_contains(bounds: &Rect<f64>, point: &GeoPoint) -> bool {
    let min = bounds.min();
    let max = bounds.max();
    min.x <= point.lng && point.lng <= max.x && min.y <= point.lat && point.lat <= max.y
}
