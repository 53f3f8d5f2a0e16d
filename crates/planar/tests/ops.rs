// Integration tests for boolean union, difference and ring filling.

use planar::{difference, fill_rings, union, Region};

fn rect(min: (f64, f64), max: (f64, f64)) -> Region {
    Region::rect(min, max).unwrap()
}

fn total_area(regions: &[Region]) -> f64 {
    regions.iter().map(Region::area).sum()
}

#[test]
fn union_of_nothing_is_empty() {
    assert!(union(&[]).is_empty());
}

#[test]
fn overlapping_rectangles_merge() {
    let merged = union(&[rect((0.0, 0.0), (10.0, 10.0)), rect((5.0, 0.0), (15.0, 10.0))]);
    assert_eq!(merged.len(), 1);
    assert!((merged[0].area() - 150.0).abs() < 1e-9);
}

#[test]
fn separate_rectangles_stay_separate() {
    let merged = union(&[rect((0.0, 0.0), (1.0, 1.0)), rect((5.0, 5.0), (6.0, 6.0))]);
    assert_eq!(merged.len(), 2);
    assert!((total_area(&merged) - 2.0).abs() < 1e-9);
}

#[test]
fn ring_of_footprints_leaves_a_courtyard_hole() {
    let footprints = [
        rect((0.0, 0.0), (10.0, 2.0)),
        rect((0.0, 8.0), (10.0, 10.0)),
        rect((0.0, 0.0), (2.0, 10.0)),
        rect((8.0, 0.0), (10.0, 10.0)),
    ];
    let merged = union(&footprints);
    assert_eq!(merged.len(), 1);
    assert!(merged[0].has_holes());
    assert!((merged[0].area() - 64.0).abs() < 1e-9);

    let rings = fill_rings(&merged[0]);
    assert_eq!(rings.len(), 2);
    assert!((total_area(&rings) - 136.0).abs() < 1e-9);
}

#[test]
fn difference_removes_cutter_area() {
    let base = rect((0.0, 0.0), (30.0, 10.0));
    let cut = difference(&base, &[rect((5.0, 2.0), (15.0, 7.0))]);
    assert!((total_area(&cut) - 250.0).abs() < 1e-9);
}

#[test]
fn difference_without_cutters_is_identity() {
    let base = rect((0.0, 0.0), (30.0, 10.0));
    let cut = difference(&base, &[]);
    assert_eq!(cut.len(), 1);
    assert!((cut[0].area() - 300.0).abs() < 1e-9);
}
