use std::f64::consts::FRAC_PI_2;

use inkboard_geometry::{distance_to_element, rotate_point, Element, ElementsMap, Point};

const EPS: f64 = 1e-9;

#[test]
fn test_rectangle_point_above_top_edge() {
    let rect = Element::rectangle(0.0, 0.0, 100.0, 50.0);
    let d = distance_to_element(&rect, &ElementsMap::new(), Point::new(50.0, -10.0));
    assert_eq!(d, 10.0);
}

#[test]
fn test_rectangle_quarter_turn_round_trips() {
    let rect = Element::rectangle(0.0, 0.0, 100.0, 50.0).with_angle(FRAC_PI_2);
    let center = Point::new(50.0, 25.0);
    // 10px outside the original top edge, carried along with the rotation.
    let p = rotate_point(Point::new(50.0, -10.0), center, FRAC_PI_2);
    let d = distance_to_element(&rect, &ElementsMap::new(), p);
    assert!((d - 10.0).abs() < EPS, "got {}", d);
}

#[test]
fn test_circle_outside_radius() {
    let circle = Element::ellipse(-50.0, -50.0, 100.0, 100.0);
    let d = distance_to_element(&circle, &ElementsMap::new(), Point::new(70.0, 0.0));
    assert!((d - 20.0).abs() < EPS, "got {}", d);
}

#[test]
fn test_annotation_within_outer_radius_is_hit() {
    let marker = Element::annotation(-10.0, -10.0, 20.0, 20.0);
    let d = distance_to_element(&marker, &ElementsMap::new(), Point::new(9.0, 12.0));
    assert_eq!(d, 0.0);
}

#[test]
fn test_diamond_above_top_vertex() {
    let diamond = Element::diamond(0.0, 0.0, 100.0, 100.0);
    let d = distance_to_element(&diamond, &ElementsMap::new(), Point::new(50.0, -5.0));
    assert!((d - 5.0).abs() < EPS, "got {}", d);
}

#[test]
fn test_point_on_edge_midpoint_is_zero() {
    let rect = Element::rectangle(10.0, 20.0, 60.0, 40.0);
    let elements = ElementsMap::new();
    for p in [
        Point::new(40.0, 20.0),
        Point::new(70.0, 40.0),
        Point::new(40.0, 60.0),
        Point::new(10.0, 40.0),
    ] {
        assert!(distance_to_element(&rect, &elements, p) < EPS);
    }
}

#[test]
fn test_distance_right_of_right_edge_is_exact() {
    let (w, h) = (80.0, 30.0);
    let rect = Element::rectangle(-w / 2.0, -h / 2.0, w, h);
    let elements = ElementsMap::new();
    for d in [0.5, 1.0, 7.25, 100.0] {
        let got = distance_to_element(&rect, &elements, Point::new(w / 2.0 + d, 0.0));
        assert_eq!(got, d);
    }
}
