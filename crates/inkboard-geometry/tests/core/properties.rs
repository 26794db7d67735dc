use std::f64::consts::TAU;

use inkboard_geometry::{
    distance_to_element, rotate_point, Element, ElementType, ElementsMap, Point, Roundness,
};
use proptest::prelude::*;

fn closed_shape() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(vec![
            ElementType::Rectangle,
            ElementType::Diamond,
            ElementType::Ellipse,
            ElementType::Frame,
        ]),
        -500.0..500.0f64,
        -500.0..500.0f64,
        1.0..400.0f64,
        1.0..400.0f64,
        any::<bool>(),
    )
        .prop_map(|(element_type, x, y, w, h, rounded)| {
            let element = Element::new(element_type, x, y, w, h);
            if rounded {
                element.with_roundness(Roundness::Adaptive { value: None })
            } else {
                element
            }
        })
}

/// Lines, arrows and strokes whose point lists often repeat a point.
fn linear_shape() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(vec![ElementType::Line, ElementType::Arrow, ElementType::Freedraw]),
        -500.0..500.0f64,
        -500.0..500.0f64,
        prop::collection::vec(((-200.0..200.0f64, -200.0..200.0f64), 1..4usize), 0..8),
        any::<bool>(),
    )
        .prop_map(|(element_type, x, y, runs, rounded)| {
            let points = runs
                .into_iter()
                .flat_map(|((px, py), repeat)| std::iter::repeat(Point::new(px, py)).take(repeat))
                .collect();
            let element = Element::linear(element_type, x, y, points);
            if rounded {
                element.with_roundness(Roundness::Proportional)
            } else {
                element
            }
        })
}

fn board_point() -> impl Strategy<Value = Point> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn test_distance_is_finite_and_non_negative(element in closed_shape(), angle in 0.0..TAU, p in board_point()) {
        let element = element.with_angle(angle);
        let d = distance_to_element(&element, &ElementsMap::new(), p);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn test_linear_distance_is_finite_and_non_negative(
        element in linear_shape(),
        angle in 0.0..TAU,
        p in board_point(),
    ) {
        let element = element.with_angle(angle);
        let elements = ElementsMap::new();
        let d = distance_to_element(&element, &elements, p);
        prop_assert!(d.is_finite(), "{:?} gave {}", element.points, d);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d.to_bits(), distance_to_element(&element, &elements, p).to_bits());
    }

    #[test]
    fn test_distance_is_deterministic(element in closed_shape(), angle in 0.0..TAU, p in board_point()) {
        let element = element.with_angle(angle);
        let elements = ElementsMap::new();
        let first = distance_to_element(&element, &elements, p);
        let second = distance_to_element(&element, &elements, p);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_rotating_shape_and_point_together_preserves_distance(
        element in closed_shape(),
        angle in 0.0..TAU,
        p in board_point(),
    ) {
        let elements = ElementsMap::new();
        let upright = distance_to_element(&element, &elements, p);
        let moved = rotate_point(p, element.box_center(), angle);
        let turned = distance_to_element(&element.clone().with_angle(angle), &elements, moved);
        prop_assert!((upright - turned).abs() < 1e-6, "{} vs {}", upright, turned);
    }

    #[test]
    fn test_distance_grows_linearly_right_of_rectangle(
        w in 1.0..400.0f64,
        h in 1.0..400.0f64,
        offset in 0.0..1000.0f64,
    ) {
        let rect = Element::rectangle(-w / 2.0, -h / 2.0, w, h);
        let d = distance_to_element(&rect, &ElementsMap::new(), Point::new(w / 2.0 + offset, 0.0));
        prop_assert!((d - offset).abs() < 1e-9);
    }

    #[test]
    fn test_circle_distance_matches_radius_difference(
        r in 1.0..300.0f64,
        angle in 0.0..TAU,
        dist in 0.0..800.0f64,
    ) {
        let circle = Element::ellipse(-r, -r, 2.0 * r, 2.0 * r);
        let p = Point::new(dist * angle.cos(), dist * angle.sin());
        let d = distance_to_element(&circle, &ElementsMap::new(), p);
        prop_assert!((d - (dist - r).abs()).abs() < 1e-6, "{} vs {}", d, (dist - r).abs());
    }

    #[test]
    fn test_annotation_center_neighbourhood_is_always_hit(
        x in -500.0..500.0f64,
        y in -500.0..500.0f64,
        angle in 0.0..TAU,
        r in 0.0..16.0f64,
        theta in 0.0..TAU,
    ) {
        let marker = Element::annotation(x, y, 24.0, 24.0).with_angle(angle);
        let center = marker.box_center();
        let p = Point::new(center.x + r * theta.cos(), center.y + r * theta.sin());
        prop_assert_eq!(distance_to_element(&marker, &ElementsMap::new(), p), 0.0);
    }
}
