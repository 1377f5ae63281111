// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path fixture: travels through a list of positions.

use super::reject_extra;
use crate::error::ConstructionError;
use crate::fixture::{CameraMotion, FixtureKind, Progress};
use crate::interpolation::{Interpolation, InterpolationMode};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Moves the camera along its points, each gap taking an equal share of time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathFixture {
    /// Points to travel through, in order
    pub points: Vec<Position>,
    /// How to blend between points
    pub interpolation: InterpolationMode,
}

impl PathFixture {
    /// Create a new path fixture
    pub fn new(points: Vec<Position>, interpolation: InterpolationMode) -> Self {
        Self {
            points,
            interpolation,
        }
    }

    /// Append a point
    pub fn add_point(&mut self, point: Position) {
        self.points.push(point);
    }

    /// Remove the point at `index`
    pub fn remove_point(&mut self, index: usize) -> Option<Position> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Get point count
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl CameraMotion for PathFixture {
    fn apply(&self, progress: Progress, position: &mut Position) {
        if let Some(result) = Interpolation::along(&self.points, progress.smoothed(), self.interpolation) {
            position.set(&result);
        }
    }

    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError> {
        if let Some(token) = args.first() {
            self.interpolation = InterpolationMode::from_name(token).ok_or_else(|| {
                ConstructionError::InvalidArgument {
                    kind: FixtureKind::Path,
                    token: (*token).to_string(),
                }
            })?;
        }
        reject_extra(FixtureKind::Path, args, 1)?;

        self.points = vec![*origin];
        Ok(())
    }
}
