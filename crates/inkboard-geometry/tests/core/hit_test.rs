use std::f64::consts::PI;

use inkboard_geometry::{
    distance_to_element, element_at_position, elements_at_position, hit_element, to_elements_map,
    Element, ElementsMap, HitTestOptions, Point,
};

fn scene() -> Vec<Element> {
    vec![
        Element::rectangle(0.0, 0.0, 100.0, 100.0).with_id("rect"),
        Element::ellipse(50.0, 50.0, 100.0, 100.0)
            .with_id("ellipse")
            .with_fill(true),
        Element::line(200.0, 0.0, vec![Point::new(0.0, 0.0), Point::new(0.0, 100.0)]).with_id("line"),
    ]
}

#[test]
fn test_topmost_filled_element_wins() {
    let elements = scene();
    let lookup = to_elements_map(&elements);
    let options = HitTestOptions::default();
    let hit = element_at_position(&elements, &lookup, Point::new(75.0, 75.0), options.hit_threshold, &options);
    assert_eq!(hit.map(|e| e.id.as_str()), Some("ellipse"));
}

#[test]
fn test_hollow_rectangle_is_only_hit_near_its_outline() {
    let elements = scene();
    let lookup = to_elements_map(&elements);
    let options = HitTestOptions::default();

    let near_edge = element_at_position(&elements, &lookup, Point::new(20.0, 5.0), 10.0, &options);
    assert_eq!(near_edge.map(|e| e.id.as_str()), Some("rect"));

    let middle = element_at_position(&elements, &lookup, Point::new(30.0, 30.0), 10.0, &options);
    assert!(middle.is_none());
}

#[test]
fn test_all_hits_are_listed_topmost_first() {
    let elements = scene();
    let lookup = to_elements_map(&elements);
    let options = HitTestOptions::default();
    // On the rectangle's bottom-right corner, inside the filled ellipse.
    let hits = elements_at_position(&elements, &lookup, Point::new(100.0, 100.0), 10.0, &options);
    let ids: Vec<_> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ellipse", "rect"]);
}

#[test]
fn test_line_is_hit_within_threshold() {
    let elements = scene();
    let lookup = to_elements_map(&elements);
    let options = HitTestOptions::default();
    let hit = element_at_position(&elements, &lookup, Point::new(208.0, 50.0), 10.0, &options);
    assert_eq!(hit.map(|e| e.id.as_str()), Some("line"));
    let miss = element_at_position(&elements, &lookup, Point::new(215.0, 50.0), 10.0, &options);
    assert!(miss.is_none());
}

#[test]
fn test_deleted_elements_are_skipped() {
    let mut elements = scene();
    elements[1].is_deleted = true;
    let lookup = to_elements_map(&elements);
    let options = HitTestOptions::default();
    let hits = elements_at_position(&elements, &lookup, Point::new(120.0, 120.0), 10.0, &options);
    assert!(hits.is_empty());
}

#[test]
fn test_label_rotates_about_its_arrow_midpoint() {
    let arrow = Element::arrow(
        0.0,
        0.0,
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)],
    )
    .with_id("arrow");
    let label = Element::text(0.0, 0.0, 30.0, 10.0)
        .with_id("label")
        .with_container("arrow")
        .with_angle(PI);
    let lookup = to_elements_map(&[arrow, label.clone()]);

    // Turned half way about (100, 0), the label covers x 170..200, y -10..0.
    let d = distance_to_element(&label, &lookup, Point::new(185.0, 5.0));
    assert!((d - 5.0).abs() < 1e-9, "got {}", d);

    // Without the container the label turns about its own box and stays put.
    let alone = distance_to_element(&label, &ElementsMap::new(), Point::new(15.0, -5.0));
    assert!((alone - 5.0).abs() < 1e-9, "got {}", alone);
}

#[test]
fn test_annotation_has_generous_hit_target() {
    let marker = Element::annotation(0.0, 0.0, 4.0, 4.0);
    let options = HitTestOptions::default();
    let lookup = ElementsMap::new();
    assert!(hit_element(&marker, &lookup, Point::new(2.0, 17.0), 0.0, &options));
    assert!(!hit_element(&marker, &lookup, Point::new(2.0, 40.0), 0.0, &options));
}
