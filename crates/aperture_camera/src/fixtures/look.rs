// SPDX-License-Identifier: MIT OR Apache-2.0
//! Look fixture: stays in place and faces a point.

use super::{parse_point, reject_extra, too_few};
use crate::error::ConstructionError;
use crate::fixture::{CameraMotion, FixtureKind, Progress};
use crate::position::{Angle, Point, Position};
use serde::{Deserialize, Serialize};

/// Keeps the camera at `position`, turned towards `target`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LookFixture {
    /// Camera placement; only the point and fov are used
    pub position: Position,
    /// Point to face
    pub target: Point,
}

impl LookFixture {
    /// Create a new look fixture
    pub fn new(position: Position, target: Point) -> Self {
        Self { position, target }
    }
}

impl CameraMotion for LookFixture {
    fn apply(&self, _progress: Progress, position: &mut Position) {
        position.point = self.position.point;
        position.angle = Angle::looking_at(&self.position.point, &self.target, self.position.angle.fov);
    }

    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError> {
        if args.len() < 3 {
            return Err(too_few(3, args.len()));
        }
        reject_extra(FixtureKind::Look, args, 3)?;

        self.target = parse_point(FixtureKind::Look, &args[..3])?;
        self.position = *origin;
        Ok(())
    }
}
