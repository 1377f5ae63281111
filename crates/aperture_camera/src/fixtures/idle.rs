// SPDX-License-Identifier: MIT OR Apache-2.0
//! Idle fixture: holds the camera still.

use super::reject_extra;
use crate::error::ConstructionError;
use crate::fixture::{CameraMotion, FixtureKind, Progress};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Holds a single camera position for its whole duration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleFixture {
    /// Position to hold
    pub position: Position,
}

impl IdleFixture {
    /// Create a new idle fixture
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl CameraMotion for IdleFixture {
    fn apply(&self, _progress: Progress, position: &mut Position) {
        position.set(&self.position);
    }

    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError> {
        reject_extra(FixtureKind::Idle, args, 0)?;
        self.position = *origin;
        Ok(())
    }
}
