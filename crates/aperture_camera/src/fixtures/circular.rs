// SPDX-License-Identifier: MIT OR Apache-2.0
//! Circular fixture: orbits around a point.

use super::{parse_number, reject_extra};
use crate::error::ConstructionError;
use crate::fixture::{CameraMotion, FixtureKind, Progress};
use crate::position::{Angle, Point, Position, DEFAULT_FOV};
use serde::{Deserialize, Serialize};

/// Orbits `center` on the horizontal plane while facing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularFixture {
    /// Point to orbit
    pub center: Point,
    /// Orbit radius
    pub distance: f64,
    /// Starting angle in degrees
    pub offset: f32,
    /// Degrees travelled over the whole fixture
    pub circles: f32,
    /// Camera pitch in degrees
    pub pitch: f32,
    /// Field of view in degrees
    pub fov: f32,
}

impl CircularFixture {
    /// Create a circular fixture with default angles
    pub fn new(center: Point, distance: f64) -> Self {
        Self {
            center,
            distance,
            ..Self::default()
        }
    }

    /// Camera location at local progress `t`
    pub fn point_at(&self, t: f32) -> Point {
        let degrees = f64::from(self.offset) + f64::from(self.circles) * f64::from(t);
        let radians = degrees.to_radians();

        Point::new(
            self.center.x + radians.cos() * self.distance,
            self.center.y,
            self.center.z + radians.sin() * self.distance,
        )
    }
}

impl Default for CircularFixture {
    fn default() -> Self {
        Self {
            center: Point::default(),
            distance: 5.0,
            offset: 0.0,
            circles: 360.0,
            pitch: 0.0,
            fov: DEFAULT_FOV,
        }
    }
}

impl CameraMotion for CircularFixture {
    fn apply(&self, progress: Progress, position: &mut Position) {
        let point = self.point_at(progress.smoothed());
        let facing = Angle::looking_at(&point, &self.center, self.fov);

        position.point = point;
        position.angle = Angle::new(facing.yaw, self.pitch, self.fov);
    }

    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError> {
        reject_extra(FixtureKind::Circular, args, 2)?;

        if let Some(token) = args.first() {
            self.distance = parse_number(FixtureKind::Circular, token)?;
        }
        if let Some(token) = args.get(1) {
            self.circles = parse_number(FixtureKind::Circular, token)?;
        }

        self.center = origin.point;
        self.pitch = origin.angle.pitch;
        self.fov = origin.angle.fov;
        Ok(())
    }
}
