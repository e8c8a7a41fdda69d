// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use parabuild_core::{generate, BalconySpec, BuildingParams, Error, NodeId};
use parabuild_geometry::{Geometry, Point3, SceneGraphKernel, Shape};
use rustc_hash::FxHashSet;

fn params(width: f64, length: f64, number_floors: u32) -> BuildingParams {
    BuildingParams {
        width,
        length,
        number_floors,
        ..Default::default()
    }
}

fn group_len(group: &Geometry) -> usize {
    match &group.shape {
        Shape::Group { children } => children.len(),
        other => panic!("expected a group, got {:?}", other),
    }
}

fn node_identifiers(group: &Geometry) -> Vec<String> {
    group
        .expand()
        .into_iter()
        .map(|solid| solid.identifier.expect("node without identifier"))
        .collect()
}

#[test]
fn node_count_and_uniqueness_hold_across_dimensions() {
    for (width, length, floors) in [(30.0, 30.0, 10), (7.5, 41.2, 5), (100.0, 3.3, 40)] {
        let generation = generate(&params(width, length, floors), &SceneGraphKernel).unwrap();
        let ids = node_identifiers(&generation.scene.nodes);

        assert_eq!(ids.len(), 16 * (floors as usize + 1));
        let unique: FxHashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}

#[test]
fn every_node_identifier_round_trips_to_its_centre() {
    let generation = generate(&params(13.0, 29.0, 6), &SceneGraphKernel).unwrap();

    for solid in generation.scene.nodes.expand() {
        let id: NodeId = solid.identifier.as_deref().unwrap().parse().unwrap();
        assert_relative_eq!(id.position(), solid.centre(), epsilon = 1e-12);
    }
}

#[test]
fn base_building_has_eight_members_per_floor() {
    let generation = generate(&params(30.0, 30.0, 12), &SceneGraphKernel).unwrap();
    let solids = generation.scene.building.expand();

    assert_eq!(solids.len(), 8 * 12);

    let top = generation.scene.building.bounds().unwrap().max.z;
    assert_relative_eq!(top, 48.15, epsilon = 1e-9);
}

#[test]
fn added_elements_follow_selection_counts() {
    let mut input = params(30.0, 30.0, 10);
    input.add_columns = vec!["10-10-0".into(), "10-10-0".into(), "20-0-36".into()];
    input.add_floors = vec!["0-0-8".into(), "30-30-20".into()];

    let generation = generate(&input, &SceneGraphKernel).unwrap();
    assert_eq!(group_len(&generation.scene.added_columns), 3);
    assert_eq!(group_len(&generation.scene.added_floors), 2);

    for column in generation.scene.added_columns.expand() {
        let bounds = column.bounds();
        assert_relative_eq!(bounds.min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 40.0, epsilon = 1e-12);
    }

    let centres: Vec<Point3<f64>> = generation
        .scene
        .added_floors
        .expand()
        .iter()
        .map(|s| s.centre())
        .collect();
    assert_eq!(centres.len(), 2);
    assert_relative_eq!(centres[0], Point3::new(15.0, 15.0, 8.0), epsilon = 1e-12);
    assert_relative_eq!(centres[1], Point3::new(15.0, 15.0, 20.0), epsilon = 1e-12);
}

#[test]
fn scenario_a_y_balcony_on_x0_facade() {
    let mut input = params(30.0, 30.0, 10);
    input.balconies = vec![BalconySpec::new("0-0-4", "0-30-4")];

    let generation = generate(&input, &SceneGraphKernel).unwrap();
    assert!(generation.warnings.is_empty());
    assert_eq!(group_len(&generation.scene.added_balconies), 1);

    let bounds = generation.scene.added_balconies.bounds().unwrap();
    assert_relative_eq!(bounds.min.x, -3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.x, 0.0, epsilon = 1e-9);
}

#[test]
fn scenario_b_x_balcony_on_y0_facade() {
    let mut input = params(30.0, 30.0, 10);
    input.balconies = vec![BalconySpec::new("0-0-4", "30-0-4")];

    let generation = generate(&input, &SceneGraphKernel).unwrap();
    assert!(generation.warnings.is_empty());
    assert_eq!(group_len(&generation.scene.added_balconies), 1);

    let bounds = generation.scene.added_balconies.bounds().unwrap();
    assert_relative_eq!(bounds.min.y, -3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.max.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.size().z, 0.3, epsilon = 1e-9);
}

#[test]
fn scenario_c_invalid_balcony_only_warns() {
    let mut input = params(30.0, 30.0, 10);
    input.add_columns = vec!["10-20-0".into()];
    input.balconies = vec![BalconySpec::new("0-0-4", "30-30-8")];

    let generation = generate(&input, &SceneGraphKernel).unwrap();
    assert_eq!(group_len(&generation.scene.added_balconies), 0);
    assert_eq!(generation.warnings.len(), 1);
    assert_eq!(generation.warnings[0].balcony, 1);
    assert!(generation.warnings[0].message.contains("balcony 1"));

    // The rest of the scene is still produced
    assert_eq!(group_len(&generation.scene.added_columns), 1);
}

#[test]
fn unset_balcony_selection_contributes_nothing() {
    let mut input = params(30.0, 30.0, 10);
    input.balconies = vec![BalconySpec::default()];

    let generation = generate(&input, &SceneGraphKernel).unwrap();
    assert_eq!(group_len(&generation.scene.added_balconies), 0);
    assert!(generation.warnings.is_empty());
}

#[test]
fn identical_inputs_give_identical_scenes() {
    let mut input = params(22.0, 31.0, 7);
    input.add_columns = vec!["0-31-4".into()];
    input.add_floors = vec!["22-0-28".into()];
    input.balconies = vec![
        BalconySpec::new("22-0-8", "22-31-8"),
        BalconySpec::new("0-0-4", "22-31-8"),
    ];

    let first = generate(&input, &SceneGraphKernel).unwrap();
    let second = generate(&input, &SceneGraphKernel).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_identifier_aborts_generation() {
    let mut input = params(30.0, 30.0, 10);
    input.add_floors = vec!["ground floor".into()];

    let err = generate(&input, &SceneGraphKernel).unwrap_err();
    assert!(matches!(err, Error::MalformedNodeId { .. }));
}

#[test]
fn scene_serializes_with_group_names() {
    let generation = generate(&params(30.0, 30.0, 5), &SceneGraphKernel).unwrap();
    let json = serde_json::to_value(&generation).unwrap();

    for key in ["nodes", "building", "added_columns", "added_floors", "added_balconies"] {
        assert!(json["scene"].get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}
