//! Seedot: an acorn-shaped pet with a large head and two stubby legs.

use crate::animation::{
    AnimationDefinition, Channel, HeadLookMode, HeadLookSpec, Keyframe, WalkDriveSpec, degree_vec, pos_vec,
};
use crate::model::RigProfile;
use crate::rig::{Cuboid, PartPose, PartSpec};

#[must_use]
pub fn parts() -> Vec<PartSpec> {
    vec![
        PartSpec::root("root", PartPose::IDENTITY),
        PartSpec::child("seedot", "root", PartPose::offset(-16.0, 22.0625, 0.0)),
        PartSpec::child("Head", "seedot", PartPose::offset(10.0, -5.0625, 6.0))
            .with_cuboid(Cuboid::new(0, 8, [-6.0, -10.0, -6.0], [12.0, 14.0, 12.0]))
            .with_cuboid(Cuboid::new(0, 46, [-1.0, -13.0, -1.0], [2.0, 3.0, 2.0]))
            .with_cuboid(Cuboid::new(29, 32, [-1.0, 2.0, -1.0], [2.0, 4.0, 2.0]))
            .with_cuboid(Cuboid::new(0, -10, [-7.0, -7.0, -7.25], [14.0, 3.0, 14.0])),
        PartSpec::child(
            "LeftLeg",
            "seedot",
            PartPose::offset_and_rotation(16.0, 1.9375, 0.0, 0.0, -0.1745, 0.0),
        ),
        PartSpec::child(
            "left_leg_r1",
            "LeftLeg",
            PartPose::offset_and_rotation(2.0, 0.0, 4.0, 0.0, -0.2182, 0.0),
        )
        .with_cuboid(Cuboid::new(21, 55, [-4.0, -3.0, 0.0], [4.0, 3.0, 6.0])),
        PartSpec::child(
            "RightLeg",
            "seedot",
            PartPose::offset_and_rotation(16.0, 1.9375, 0.0, 0.0, 0.1745, 0.0),
        ),
        PartSpec::child(
            "right_leg_r1",
            "RightLeg",
            PartPose::offset_and_rotation(-10.0, 0.0, 1.0, 0.0, 0.2182, 0.0),
        )
        .with_cuboid(Cuboid::new(0, 55, [-4.0, -3.0, 0.0], [4.0, 3.0, 6.0])),
    ]
}

fn rot(time: f32, x: f32, y: f32, z: f32) -> Keyframe {
    Keyframe::linear(time, degree_vec(x, y, z))
}

fn pos(time: f32, x: f32, y: f32, z: f32) -> Keyframe {
    Keyframe::linear(time, pos_vec(x, y, z))
}

#[must_use]
pub fn animations() -> Vec<AnimationDefinition> {
    let idle = AnimationDefinition::builder("idle", 2.0)
        .looping()
        .track(
            "Head",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.5, 0.0, 0.0, 15.0),
                rot(1.0, 0.0, 0.0, 0.0),
                rot(1.5, 0.0, 0.0, -15.0),
                rot(2.0, 0.0, 0.0, 0.0),
            ],
        )
        .build();

    let walk = AnimationDefinition::builder("walk", 1.0)
        .looping()
        .track(
            "LeftLeg",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.25, 22.5, 0.0, 0.0),
                rot(0.5, 0.0, 0.0, 0.0),
                rot(0.75, -22.5, 0.0, 0.0),
                rot(1.0, 0.0, 0.0, 0.0),
            ],
        )
        .track(
            "RightLeg",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.25, -22.5, 0.0, 0.0),
                rot(0.5, 0.0, 0.0, 0.0),
                rot(0.75, 22.5, 0.0, 0.0),
                rot(1.0, 0.0, 0.0, 0.0),
            ],
        )
        .track(
            "Head",
            Channel::Rotation,
            vec![
                rot(0.0, 0.0, 0.0, 0.0),
                rot(0.5, 0.0, 5.0, 0.0),
                rot(1.0, 0.0, -5.0, 0.0),
            ],
        )
        .build();

    let sit = AnimationDefinition::builder("sit", 1.0)
        .track(
            "Head",
            Channel::Position,
            vec![pos(0.0, 0.0, 0.0, 0.0), pos(1.0, 0.0, -2.0, 0.0)],
        )
        .track(
            "Head",
            Channel::Rotation,
            vec![rot(0.0, 0.0, 0.0, 0.0), rot(1.0, 10.0, 0.0, 0.0)],
        )
        .track(
            "LeftLeg",
            Channel::Rotation,
            vec![rot(0.0, 0.0, 0.0, 0.0), rot(1.0, 45.0, 0.0, 0.0)],
        )
        .track(
            "RightLeg",
            Channel::Rotation,
            vec![rot(0.0, 0.0, 0.0, 0.0), rot(1.0, 45.0, 0.0, 0.0)],
        )
        .build();

    vec![idle, walk, sit]
}

#[must_use]
pub fn profile() -> RigProfile {
    RigProfile {
        head: Some(HeadLookSpec {
            part: "Head".to_string(),
            mode: HeadLookMode::Override,
        }),
        idle: Some("idle".to_string()),
        walk: Some("walk".to_string()),
        sit: Some("sit".to_string()),
        walk_drive: Some(WalkDriveSpec {
            animation: "walk".to_string(),
            max_speed: 2.0,
            scale_factor: 2.5,
        }),
        render_scale: 0.8,
        ..RigProfile::default()
    }
}
