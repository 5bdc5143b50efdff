//! Part Hierarchy Tests
//!
//! Tests for:
//! - PartTreeTemplate construction and validation errors
//! - Depth-first part order
//! - PartPose local matrices (ZYX Euler order)
//! - World transform composition
//! - PartSink hand-off

use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Vec3};

use marionette::errors::RigError;
use marionette::rig::{
    Cuboid, Part, PartPose, PartSink, PartSpec, PartTreeTemplate, Pose, WorldTransforms, submit_hierarchy,
    update_world_transforms,
};

const EPSILON: f32 = 1e-5;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn arm_tree() -> PartTreeTemplate {
    PartTreeTemplate::build(
        "arm",
        &[
            PartSpec::root("shoulder", PartPose::offset(0.0, 10.0, 0.0)),
            PartSpec::child("upper", "shoulder", PartPose::offset(1.0, 0.0, 0.0)),
            PartSpec::child("lower", "upper", PartPose::offset(2.0, 0.0, 0.0))
                .with_cuboid(Cuboid::new(0, 0, [-1.0, -1.0, -1.0], [2.0, 2.0, 2.0])),
            PartSpec::child("hand", "lower", PartPose::offset(0.0, 3.0, 0.0)),
        ],
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn build_links_parents_and_children() {
    let tree = arm_tree();
    assert_eq!(tree.name(), "arm");
    assert_eq!(tree.len(), 4);

    let shoulder = tree.find("shoulder").unwrap();
    let upper = tree.find("upper").unwrap();
    assert_eq!(tree.root(), shoulder);
    assert_eq!(tree.part(upper).unwrap().parent(), Some(shoulder));
    assert_eq!(tree.part(shoulder).unwrap().children(), &[upper]);
    assert!(tree.part(shoulder).unwrap().parent().is_none());
    assert_eq!(tree.part(tree.find("lower").unwrap()).unwrap().cuboids().len(), 1);
}

#[test]
fn build_accepts_children_declared_before_parents() {
    let tree = PartTreeTemplate::build(
        "reversed",
        &[
            PartSpec::child("leaf", "stem", PartPose::IDENTITY),
            PartSpec::child("stem", "pot", PartPose::IDENTITY),
            PartSpec::root("pot", PartPose::IDENTITY),
        ],
    )
    .unwrap();

    let names: Vec<_> = tree.iter().map(|(_, part)| part.name().to_string()).collect();
    assert_eq!(names, vec!["pot", "stem", "leaf"]);
}

#[test]
fn order_visits_parents_before_children() {
    let tree = PartTreeTemplate::build(
        "fork",
        &[
            PartSpec::root("root", PartPose::IDENTITY),
            PartSpec::child("left", "root", PartPose::IDENTITY),
            PartSpec::child("right", "root", PartPose::IDENTITY),
            PartSpec::child("left_tip", "left", PartPose::IDENTITY),
        ],
    )
    .unwrap();

    let names: Vec<_> = tree
        .order()
        .iter()
        .map(|&key| tree.part(key).unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["root", "left", "left_tip", "right"]);
}

#[test]
fn build_rejects_duplicate_names() {
    let err = PartTreeTemplate::build(
        "dup",
        &[
            PartSpec::root("root", PartPose::IDENTITY),
            PartSpec::child("leg", "root", PartPose::IDENTITY),
            PartSpec::child("leg", "root", PartPose::IDENTITY),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, RigError::DuplicatePart(ref name) if name == "leg"));
}

#[test]
fn build_rejects_unknown_parent() {
    let err = PartTreeTemplate::build(
        "orphan",
        &[
            PartSpec::root("root", PartPose::IDENTITY),
            PartSpec::child("tail", "body", PartPose::IDENTITY),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, RigError::UnknownParent { ref part, ref parent } if part == "tail" && parent == "body"));
}

#[test]
fn build_rejects_multiple_roots() {
    let err = PartTreeTemplate::build(
        "twins",
        &[PartSpec::root("a", PartPose::IDENTITY), PartSpec::root("b", PartPose::IDENTITY)],
    )
    .unwrap_err();
    assert!(matches!(err, RigError::MultipleRoots { .. }));
}

#[test]
fn build_rejects_missing_root() {
    let err = PartTreeTemplate::build("empty", &[]).unwrap_err();
    assert!(matches!(err, RigError::MissingRoot));

    // Every part has a parent: the only possible shape is a cycle
    let err = PartTreeTemplate::build(
        "loop",
        &[
            PartSpec::child("a", "b", PartPose::IDENTITY),
            PartSpec::child("b", "a", PartPose::IDENTITY),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, RigError::MissingRoot));
}

#[test]
fn build_rejects_cycle_detached_from_root() {
    let err = PartTreeTemplate::build(
        "cycle",
        &[
            PartSpec::root("root", PartPose::IDENTITY),
            PartSpec::child("b", "c", PartPose::IDENTITY),
            PartSpec::child("c", "b", PartPose::IDENTITY),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, RigError::Cycle(ref name) if name == "b"));
}

// ============================================================================
// PartPose
// ============================================================================

#[test]
fn part_pose_applies_z_then_y_then_x() {
    // Rz(90) * Ry(90) applied to +X: Ry sends X to -Z, Rz leaves Z alone.
    let pose = PartPose::offset_and_rotation(0.0, 0.0, 0.0, 0.0, FRAC_PI_2, FRAC_PI_2);
    let p = pose.local_matrix().transform_vector3(Vec3::X);
    assert!(approx_vec3(p, Vec3::new(0.0, 0.0, -1.0)), "got {p}");

    // Rz(90) * Rx(90) applied to +Y: Rx sends Y to Z, Rz leaves Z alone.
    let pose = PartPose::offset_and_rotation(0.0, 0.0, 0.0, FRAC_PI_2, 0.0, FRAC_PI_2);
    let p = pose.local_matrix().transform_vector3(Vec3::Y);
    assert!(approx_vec3(p, Vec3::Z), "got {p}");
}

#[test]
fn part_pose_scale_is_innermost() {
    let mut pose = PartPose::offset(1.0, 2.0, 3.0);
    pose.scale = Vec3::splat(2.0);
    let p = pose.local_matrix().transform_point3(Vec3::X);
    assert!(approx_vec3(p, Vec3::new(3.0, 2.0, 3.0)));
}

// ============================================================================
// World Transforms
// ============================================================================

#[test]
fn world_transforms_compose_parent_then_local() {
    let tree = arm_tree();
    let pose = Pose::new(&tree);
    let mut world = WorldTransforms::new();
    update_world_transforms(&tree, &pose, Affine3A::IDENTITY, &mut world);

    assert_eq!(world.len(), 4);
    let hand = world.get(tree.find("hand").unwrap()).unwrap();
    assert!(approx_vec3(hand.translation.into(), Vec3::new(3.0, 13.0, 0.0)));
}

#[test]
fn world_transforms_follow_animated_pose() {
    let tree = arm_tree();
    let mut pose = Pose::new(&tree);
    // Yaw the shoulder by 90 degrees: +X children swing to -Z
    pose.get_mut(tree.root()).unwrap().rotation.y = FRAC_PI_2;

    let mut world = WorldTransforms::new();
    update_world_transforms(&tree, &pose, Affine3A::IDENTITY, &mut world);

    let upper = world.get(tree.find("upper").unwrap()).unwrap();
    assert!(approx_vec3(upper.translation.into(), Vec3::new(0.0, 10.0, -1.0)));
    let lower = world.get(tree.find("lower").unwrap()).unwrap();
    assert!(approx_vec3(lower.translation.into(), Vec3::new(0.0, 10.0, -3.0)));
}

#[test]
fn world_transforms_apply_root_matrix() {
    let tree = arm_tree();
    let pose = Pose::new(&tree);
    let mut world = WorldTransforms::new();
    let placement = Affine3A::from_translation(Vec3::new(100.0, 0.0, 0.0)) * Affine3A::from_scale(Vec3::splat(0.5));
    update_world_transforms(&tree, &pose, placement, &mut world);

    let upper = world.get(tree.find("upper").unwrap()).unwrap();
    assert!(approx_vec3(upper.translation.into(), Vec3::new(100.5, 5.0, 0.0)));
}

// ============================================================================
// PartSink
// ============================================================================

#[derive(Default)]
struct Recorder {
    parts: Vec<(String, Vec3)>,
}

impl PartSink for Recorder {
    fn submit_part(&mut self, part: &Part, world: &Affine3A) {
        self.parts.push((part.name().to_string(), world.translation.into()));
    }
}

#[test]
fn submit_hierarchy_visits_every_part_parent_first() {
    let tree = arm_tree();
    let pose = Pose::new(&tree);
    let mut world = WorldTransforms::new();
    update_world_transforms(&tree, &pose, Affine3A::IDENTITY, &mut world);

    let mut recorder = Recorder::default();
    submit_hierarchy(&tree, &world, &mut recorder);

    let names: Vec<_> = recorder.parts.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["shoulder", "upper", "lower", "hand"]);
    assert!(approx_vec3(recorder.parts[2].1, Vec3::new(3.0, 10.0, 0.0)));
}

#[test]
fn submit_hierarchy_accepts_trait_objects() {
    let tree = arm_tree();
    let pose = Pose::new(&tree);
    let mut world = WorldTransforms::new();
    update_world_transforms(&tree, &pose, Affine3A::IDENTITY, &mut world);

    let mut recorder = Recorder::default();
    let sink: &mut dyn PartSink = &mut recorder;
    submit_hierarchy(&tree, &world, sink);
    assert_eq!(recorder.parts.len(), 4);
}
