// End-to-end evaluation of single sidewalks with known capacities.

use geo::Coord;
use sidewalk_eval::{evaluate, evaluate_sidewalks, Curve, EvaluationConfig, EvaluationInput, SidewalkKind};

fn config(utilization_percent: f64) -> EvaluationConfig {
    EvaluationConfig { social_radius: 3.0, utilization_percent, subway_influence: 1.25, tolerance: 0.1 }
}

/// A 30 x 10 sidewalk, area 300.
fn sidewalk() -> Curve {
    Curve::rect((0.0, 0.0), (30.0, 10.0))
}

#[test]
fn open_sidewalk_without_features() {
    let input = EvaluationInput { sidewalks: vec![sidewalk()], ..Default::default() };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    assert_eq!(sidewalks.len(), 1);
    let sw = &sidewalks[0];
    assert_eq!(sw.kind(), SidewalkKind::Interior);
    assert_eq!(sw.net_area(), 300.0);
    assert_eq!(sw.capacity(), 10);
    assert_eq!(sw.population(), 5);
}

#[test]
fn sidewalk_enclosing_a_building() {
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        buildings: vec![Curve::rect((5.0, 2.0), (15.0, 7.0))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    let sw = &sidewalks[0];
    assert!(sw.is_row());
    assert_eq!(sw.buildings().len(), 1);
    assert_eq!(sw.net_area(), 250.0);
    assert_eq!(sw.capacity(), 8);
    assert_eq!(sw.population(), 4);
}

#[test]
fn sidewalk_next_to_a_subway_entrance() {
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        subways: vec![Curve::rect((28.0, 4.0), (32.0, 6.0))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    let sw = &sidewalks[0];
    assert!(sw.has_subway());
    assert_eq!(sw.capacity(), 10);
    assert_eq!(sw.population(), 6);
}

#[test]
fn building_overhanging_beyond_tolerance_is_not_contained() {
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        buildings: vec![Curve::rect((5.0, 2.0), (15.0, 10.35))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    let sw = &sidewalks[0];
    assert!(!sw.is_row());
    assert!(sw.buildings().is_empty());
    assert_eq!(sw.net_area(), 300.0);
    assert_eq!(sw.capacity(), 10);
}

#[test]
fn building_overhanging_within_tolerance_is_contained() {
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        buildings: vec![Curve::rect((5.0, 2.0), (15.0, 10.05))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));
    assert!(sidewalks[0].is_row());
    assert_eq!(sidewalks[0].buildings().len(), 1);
}

#[test]
fn small_features_crossing_the_edge_are_attached() {
    let canopy = Curve::circle(Coord { x: 15.0, y: 11.5 }, 2.0);
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        trees: vec![canopy.clone()],
        subways: vec![Curve::rect((14.0, 9.5), (15.0, 14.0))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    let sw = &sidewalks[0];
    assert!(sw.has_trees());
    assert!(sw.has_subway());

    // The whole canopy is subtracted, not only the part over the sidewalk.
    let Curve::Circle(circle) = canopy else { unreachable!() };
    let canopy_area = sidewalk_eval::trees::canopy_region(&circle).unwrap().area();
    assert!((sw.net_area() - (300.0 - canopy_area)).abs() < 1e-9);
    assert_eq!(sw.capacity(), 10);
    assert_eq!(sw.population(), 6);
}

#[test]
fn zero_population_sidewalks_are_excluded() {
    let input = EvaluationInput {
        sidewalks: vec![
            sidewalk(),
            Curve::rect((100.0, 0.0), (104.0, 4.0)),
            Curve::rect((0.0, 20.0), (30.0, 30.0)),
        ],
        buildings: vec![Curve::rect((5.0, 22.0), (15.0, 27.0))],
        ..Default::default()
    };
    let result = evaluate(&input, &config(50.0));

    assert_eq!(result.len(), 2);
    assert_eq!(result.populations(), &[5, 4]);
    assert_eq!(result.sidewalks().len(), 2);
    assert_eq!(result.buildings().len(), 2);
    assert!(result.buildings()[0].is_no_data());
    assert_eq!(result.buildings()[1].regions().len(), 1);
}

#[test]
fn building_straddling_two_sidewalks_counts_for_neither() {
    let input = EvaluationInput {
        sidewalks: vec![Curve::rect((0.0, 0.0), (30.0, 10.0)), Curve::rect((30.0, 0.0), (60.0, 10.0))],
        buildings: vec![Curve::rect((25.0, 2.0), (35.0, 7.0))],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    assert_eq!(sidewalks.len(), 2);
    assert!(sidewalks.iter().all(|sw| !sw.is_row() && sw.net_area() == 300.0));
}

#[test]
fn courtyard_block_is_subtracted_whole() {
    // Four wings around a courtyard, inside a 40 x 40 sidewalk.
    let input = EvaluationInput {
        sidewalks: vec![Curve::rect((0.0, 0.0), (40.0, 40.0))],
        buildings: vec![
            Curve::rect((10.0, 10.0), (30.0, 14.0)),
            Curve::rect((10.0, 26.0), (30.0, 30.0)),
            Curve::rect((10.0, 10.0), (14.0, 30.0)),
            Curve::rect((26.0, 10.0), (30.0, 30.0)),
        ],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(100.0));

    let sw = &sidewalks[0];
    assert_eq!(sw.buildings().len(), 1);
    assert!(!sw.buildings()[0].has_holes());
    assert!((sw.net_area() - (1600.0 - 400.0)).abs() < 1e-9);
}

#[test]
fn later_subway_entrance_wins() {
    let first = Curve::rect((1.0, 1.0), (2.0, 2.0));
    let second = Curve::rect((20.0, 1.0), (21.0, 2.0));
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        subways: vec![first, second],
        ..Default::default()
    };
    let sidewalks = evaluate_sidewalks(&input, &config(50.0));

    let subway = sidewalks[0].subway().unwrap();
    assert_eq!(subway.bounds().min().x, 20.0);
}

#[test]
fn out_of_range_options_are_clamped() {
    let input = EvaluationInput {
        sidewalks: vec![sidewalk()],
        subways: vec![Curve::rect((1.0, 1.0), (2.0, 2.0))],
        ..Default::default()
    };
    let wild = EvaluationConfig { social_radius: 3.0, utilization_percent: 400.0, subway_influence: 9.0, tolerance: 0.1 };
    let sidewalks = evaluate_sidewalks(&input, &wild);
    assert_eq!(sidewalks[0].population(), 20);
}
