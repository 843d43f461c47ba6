//! Movement domain: input resources for the controlled actor.

use bevy::prelude::*;

/// Where the controlled actor is pointing its weapon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// Absolute direction in radians
    Angle(f32),
    /// Arena point to face, e.g. the pointer position
    Point(Vec2),
}

impl Default for Aim {
    fn default() -> Self {
        Aim::Angle(0.0)
    }
}

impl Aim {
    /// Aim angle in radians as seen from `origin`. A point sitting exactly on
    /// the origin keeps `fallback`.
    pub fn angle_from(&self, origin: Vec2, fallback: f32) -> f32 {
        match *self {
            Aim::Angle(angle) => angle,
            Aim::Point(point) => {
                let delta = point - origin;
                if delta == Vec2::ZERO {
                    fallback
                } else {
                    delta.y.atan2(delta.x)
                }
            }
        }
    }
}

/// Continuous input written by whatever drives the controlled actor.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Desired direction, each axis in `[-1, 1]`
    pub intent: Vec2,
    pub aim: Aim,
}
