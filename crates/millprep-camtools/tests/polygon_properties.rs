//! Property-based tests for polygon orientation and clipper scaling.

use millprep_camtools::{from_clipper_coord, to_clipper_coord, Polygon2D};
use millprep_core::Vector2d;
use proptest::prelude::*;

/// Clipping grid scales from one unit per mm up to picometre resolution.
fn arb_scale() -> impl Strategy<Value = f64> {
    1.0..1e9f64
}

fn arb_polygon() -> impl Strategy<Value = Polygon2D> {
    prop::collection::vec((-1000.0..1000.0f64, -1000.0..1000.0f64), 0..16).prop_map(|pts| {
        Polygon2D::new(pts.into_iter().map(Vector2d::from).collect())
    })
}

fn tolerance(poly: &Polygon2D) -> f64 {
    1e-9 * (1.0 + poly.area().abs()) * poly.len().max(1) as f64 * 1e3
}

proptest! {
    #[test]
    fn area_is_invariant_under_rotation(poly in arb_polygon(), shift in 0usize..16) {
        let mut rotated = poly.points.clone();
        if !rotated.is_empty() {
            let k = shift % rotated.len();
            rotated.rotate_left(k);
        }
        let rotated = Polygon2D::new(rotated);
        prop_assert!((poly.area() - rotated.area()).abs() <= tolerance(&poly));
    }

    #[test]
    fn reversal_negates_area(poly in arb_polygon()) {
        let reversed = poly.reversed();
        prop_assert!((poly.area() + reversed.area()).abs() <= tolerance(&poly));
    }

    #[test]
    fn clipper_round_trip_is_within_half_a_unit(v in -1e6..1e6f64, scale in arb_scale()) {
        let back = from_clipper_coord(to_clipper_coord(v, scale), scale);
        prop_assert!((back - v).abs() <= 0.5 / scale + 1e-9 * v.abs().max(1.0));
    }

    #[test]
    fn clipper_integers_survive_round_trip(
        iv in -1_000_000_000_000i64..1_000_000_000_000i64,
        scale in arb_scale(),
    ) {
        prop_assert_eq!(to_clipper_coord(from_clipper_coord(iv, scale), scale), iv);
    }

    #[test]
    fn path_round_trip_keeps_shape(poly in arb_polygon(), scale in arb_scale()) {
        let back = Polygon2D::from_clipper_path(&poly.to_clipper_path(scale), scale);
        prop_assert_eq!(back.len(), poly.len());
        // each axis rounds by at most half a grid unit
        let limit = 0.75 / scale + 1e-9;
        for (a, b) in poly.points.iter().zip(&back.points) {
            prop_assert!(a.distance_to(b) <= limit);
        }
    }
}
