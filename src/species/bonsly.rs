//! Bonsly: a potted-tree pet with a leafy stem, blinking eyes and short legs.
//!
//! Only sitting selects a keyframe state (the curled-up sleep pose). Standing
//! and walking are procedural: legs and torso follow limb swing, while the
//! torso breathes and the stem and leaves wave with the entity's age. Head
//! look turns the whole model.

use crate::animation::{
    AnimationDefinition, Channel, HeadLookMode, HeadLookSpec, Keyframe, OscillatorSpec, degree_vec, pos_vec,
};
use crate::model::RigProfile;
use crate::rig::{Cuboid, PartPose, PartSpec};

fn rotated(x: f32, y: f32, z: f32, rx: f32, ry: f32, rz: f32) -> PartPose {
    PartPose::offset_and_rotation(x, y, z, rx, ry, rz)
}

#[must_use]
pub fn parts() -> Vec<PartSpec> {
    vec![
        PartSpec::root("bonsly", PartPose::offset(0.0, 24.0, 0.0)),
        PartSpec::child("body", "bonsly", PartPose::offset(0.0, -9.0, 0.0)),
        PartSpec::child("torso", "body", PartPose::offset(0.0, 4.0, 0.0))
            .with_cuboid(Cuboid::new(0, 12, [-4.0, -7.5, -4.0], [8.0, 9.0, 8.0]))
            .with_cuboid(Cuboid::new(0, 0, [-5.0, -2.5, -5.0], [10.0, 2.0, 10.0])),
        PartSpec::child("stem", "torso", rotated(0.0, -6.5, -3.5, -0.1745, 0.0, 0.0))
            .with_cuboid(Cuboid::new(26, 23, [-3.0, -5.0, 0.0], [6.0, 4.0, 6.0])),
        PartSpec::child("stem2", "stem", rotated(0.0, -4.0, 4.0, 0.1745, 0.0, 0.0))
            .with_cuboid(Cuboid::new(0, 0, [-2.5, -8.0, 0.0], [5.0, 7.0, 0.0])),
        PartSpec::child("leaf_left", "stem2", PartPose::offset(2.0, -3.5, -0.5))
            .with_cuboid(Cuboid::new(30, 0, [-0.5, -3.5, -2.5], [5.0, 5.0, 5.0])),
        PartSpec::child("leaf_right", "stem2", PartPose::offset(-2.0, -3.5, -0.5))
            .with_cuboid(Cuboid::new(0, 29, [-4.5, -3.5, -2.5], [5.0, 5.0, 5.0])),
        PartSpec::child("leaf_middle", "stem2", PartPose::offset(0.0, -7.0, -0.5))
            .with_cuboid(Cuboid::new(32, 12, [-2.5, -5.5, -2.5], [5.0, 5.0, 5.0])),
        PartSpec::child("eye_left", "torso", PartPose::offset(2.25, -3.75, -4.0125))
            .with_cuboid(Cuboid::new(6, 12, [-0.5, -2.0, -0.0025], [1.0, 2.0, 0.0]))
            .with_cuboid(Cuboid::new(24, 15, [-1.0, -2.5, 0.0025], [2.0, 3.0, 0.0])),
        PartSpec::child("eyelid_left", "eye_left", PartPose::offset(0.0, -1.0, 0.6025))
            .with_cuboid(Cuboid::new(0, 16, [-1.0, -1.5, -0.5], [2.0, 3.0, 1.0]).inflated(0.01)),
        PartSpec::child("eye_right", "torso", PartPose::offset(-2.25, -3.75, -4.0125))
            .with_cuboid(Cuboid::new(8, 7, [-0.5, -2.0, -0.0025], [1.0, 2.0, 0.0]))
            .with_cuboid(Cuboid::new(0, 7, [-1.0, -2.5, 0.0025], [2.0, 3.0, 0.0])),
        PartSpec::child("eyelid_right", "eye_right", PartPose::offset(0.0, -1.0, 0.6025))
            .with_cuboid(Cuboid::new(0, 12, [-1.0, -1.5, -0.5], [2.0, 3.0, 1.0]).inflated(0.01)),
        PartSpec::child("mouth_open", "torso", PartPose::offset(0.0, -3.0, -3.9125)),
        PartSpec::child("cube_r1", "mouth_open", rotated(0.0, -1.0, 0.0025, 0.0, 0.0, 0.1309))
            .with_cuboid(Cuboid::new(8, 9, [0.0, 0.0, 0.0], [1.0, 1.0, 0.0])),
        PartSpec::child("cube_r2", "mouth_open", rotated(0.0, -1.0, 0.0025, 0.0, 0.0, -0.1309))
            .with_cuboid(Cuboid::new(6, 14, [-1.0, 0.0, 0.0], [1.0, 1.0, 0.0])),
        PartSpec::child("mouth_closed", "torso", PartPose::offset(0.0, -3.0, -4.0125)),
        PartSpec::child("cube_r3", "mouth_closed", rotated(0.0, -1.0, 0.0025, 0.0, 0.0, 0.1309))
            .with_cuboid(Cuboid::new(6, 15, [0.0, 0.0, 0.0], [1.0, 1.0, 0.0])),
        PartSpec::child("cube_r4", "mouth_closed", rotated(0.0, -1.0, 0.0025, 0.0, 0.0, -0.1309))
            .with_cuboid(Cuboid::new(6, 16, [-1.0, 0.0, 0.0], [1.0, 1.0, 0.0])),
        PartSpec::child("leg_left", "body", PartPose::offset(3.0, 4.5, 0.0))
            .with_cuboid(Cuboid::new(12, 39, [-1.5, -1.5, -1.5], [3.0, 3.0, 3.0])),
        PartSpec::child("leg_left2", "leg_left", PartPose::offset(0.0, 1.5, -0.5))
            .with_cuboid(Cuboid::new(24, 12, [-0.5, -0.5, 0.0], [1.0, 2.0, 1.0])),
        PartSpec::child("foot_left", "leg_left2", PartPose::offset(0.0, 1.5, 0.5))
            .with_cuboid(Cuboid::new(34, 33, [-1.5, -0.5, -2.5], [3.0, 2.0, 4.0])),
        PartSpec::child("leg_right", "body", PartPose::offset(-3.0, 4.5, 0.0))
            .with_cuboid(Cuboid::new(0, 39, [-1.5, -1.5, -1.5], [3.0, 3.0, 3.0])),
        PartSpec::child("leg_right2", "leg_right", PartPose::offset(0.0, 1.5, -0.5))
            .with_cuboid(Cuboid::new(4, 7, [-0.5, -0.5, 0.0], [1.0, 2.0, 1.0])),
        PartSpec::child("foot_right", "leg_right2", PartPose::offset(0.0, 1.5, 0.5))
            .with_cuboid(Cuboid::new(20, 33, [-1.5, -0.5, -2.5], [3.0, 2.0, 4.0])),
    ]
}

fn rot(time: f32, x: f32, y: f32, z: f32) -> Keyframe {
    Keyframe::linear(time, degree_vec(x, y, z))
}

fn pos(time: f32, x: f32, y: f32, z: f32) -> Keyframe {
    Keyframe::linear(time, pos_vec(x, y, z))
}

/// The same five-key sway used by the torso and both stem segments.
fn sway(amount_x: f32, amount_z: f32) -> Vec<Keyframe> {
    vec![
        rot(0.0, 0.0, 0.0, 0.0),
        rot(1.0, amount_x, 0.0, -amount_z),
        rot(2.0, 0.0, 0.0, 0.0),
        rot(3.0, -amount_x, 0.0, amount_z),
        rot(4.0, 0.0, 0.0, 0.0),
    ]
}

#[must_use]
pub fn animations() -> Vec<AnimationDefinition> {
    let idle = AnimationDefinition::builder("idle", 4.0)
        .looping()
        .track("torso", Channel::Rotation, sway(2.5, 2.5))
        .track(
            "torso",
            Channel::Position,
            vec![
                pos(0.0, 0.0, 0.0, 0.0),
                pos(1.0, 0.0, 0.1, 0.0),
                pos(2.0, 0.0, 0.0, 0.0),
                pos(3.0, 0.0, -0.1, 0.0),
                pos(4.0, 0.0, 0.0, 0.0),
            ],
        )
        .track("stem", Channel::Rotation, sway(1.25, 0.0))
        .track("stem2", Channel::Rotation, sway(1.25, 0.0))
        .build();

    let walk = AnimationDefinition::builder("walk", 1.0)
        .looping()
        .track(
            "torso",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, -5.0),
                rot(0.25, 2.5, 10.0, 0.0),
                rot(0.5, 0.0, 0.0, 5.0),
                rot(0.75, -2.5, -10.0, 0.0),
                rot(1.0, 0.0, 0.0, -5.0),
            ],
        )
        .track(
            "torso",
            Channel::Position,
            vec![
                pos(0.0, 0.0, 0.4, -0.4),
                pos(0.5, 0.0, -0.4, 0.4),
                pos(1.0, 0.0, 0.4, -0.4),
            ],
        )
        .track(
            "leg_left",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.25, -25.0, 0.0, 0.0),
                rot(0.5, 0.0, 0.0, 0.0),
                rot(0.75, 25.0, 0.0, 0.0),
                rot(1.0, 0.0, 0.0, 0.0),
            ],
        )
        .track(
            "leg_left",
            Channel::Position,
            vec![
                pos(0.0, 0.0, 0.75, -2.0),
                pos(0.25, 0.0, -0.25, 0.0),
                pos(0.5, 0.0, 0.75, 2.0),
                pos(0.75, 0.0, -0.25, 0.0),
                pos(1.0, 0.0, 0.75, -2.0),
            ],
        )
        .track(
            "leg_right",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.25, 25.0, 0.0, 0.0),
                rot(0.5, 0.0, 0.0, 0.0),
                rot(0.75, -25.0, 0.0, 0.0),
                rot(1.0, 0.0, 0.0, 0.0),
            ],
        )
        .track(
            "leg_right",
            Channel::Position,
            vec![
                pos(0.0, 0.0, 0.75, 2.0),
                pos(0.25, 0.0, -0.25, 0.0),
                pos(0.5, 0.0, 0.75, -2.0),
                pos(0.75, 0.0, -0.25, 0.0),
                pos(1.0, 0.0, 0.75, 2.0),
            ],
        )
        .build();

    // Curled-up sleeping pose, held while ordered to sit
    let sleep = AnimationDefinition::builder("sleep", 2.0)
        .looping()
        .track(
            "torso",
            Channel::Rotation,
            vec![
                rot(0.0, -7.5, -2.5, 5.0),
                rot(1.0, -6.5, -2.5, 7.5),
                rot(2.0, -7.5, -2.5, 5.0),
            ],
        )
        .track("torso", Channel::Position, vec![pos(0.0, 0.0, -3.0, 0.0)])
        .track("leg_left", Channel::Rotation, vec![rot(0.0, -85.0, -50.0, 0.0)])
        .track("leg_left", Channel::Position, vec![pos(0.0, 1.0, -2.25, -2.0)])
        .track("leg_right", Channel::Rotation, vec![rot(0.0, -82.5, 50.0, 0.0)])
        .track("leg_right", Channel::Position, vec![pos(0.0, -1.0, -2.25, -2.0)])
        .build();

    vec![idle, walk, sleep]
}

#[must_use]
pub fn profile() -> RigProfile {
    let walk_speed = 1.5;
    let walk_degree = 1.0;
    let idle_speed = 0.05;
    let idle_degree = 0.05;

    let oscillators = vec![
        // Body sway while walking
        OscillatorSpec::walk("torso", walk_speed, walk_degree * 0.1, false, 0.0, 0.05),
        OscillatorSpec::swing("torso", walk_speed, walk_degree * 0.15, false, 0.0, 0.0),
        // Legs
        OscillatorSpec::walk("leg_left", walk_speed, walk_degree * 0.4, true, 1.0, 0.0),
        OscillatorSpec::walk("leg_right", walk_speed, walk_degree * 0.4, false, 1.0, 0.0),
        OscillatorSpec::walk("leg_left2", walk_speed, walk_degree * 0.6, false, 1.5, 0.6),
        OscillatorSpec::walk("leg_right2", walk_speed, walk_degree * 0.6, true, 1.5, 0.6),
        // Breathing
        OscillatorSpec::walk("torso", idle_speed * 3.0, idle_degree, false, 0.0, 0.0).driven_by_age(),
        OscillatorSpec::swing("torso", idle_speed * 1.5, idle_degree, false, 0.0, 0.0).driven_by_age(),
        // Stem and leaves
        OscillatorSpec::swing("stem2", idle_speed * 2.0, 0.15, false, 0.0, 0.0).driven_by_age(),
        OscillatorSpec::swing("leaf_left", idle_speed * 1.2, 0.1, false, 0.0, 0.0).driven_by_age(),
        OscillatorSpec::swing("leaf_right", idle_speed * 1.3, 0.1, true, 1.0, 0.0).driven_by_age(),
        OscillatorSpec::walk("leaf_middle", idle_speed * 0.8, 0.05, false, 0.0, 0.0).driven_by_age(),
    ];

    RigProfile {
        head: Some(HeadLookSpec {
            part: "bonsly".to_string(),
            mode: HeadLookMode::Additive,
        }),
        // Standing and walking are carried by the oscillators alone. The idle
        // and walk clips stay available for hosts that start them by name.
        idle: None,
        walk: None,
        sit: Some("sleep".to_string()),
        walk_drive: None,
        oscillators,
        render_scale: 0.8,
    }
}
