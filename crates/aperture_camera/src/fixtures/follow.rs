// SPDX-License-Identifier: MIT OR Apache-2.0
//! Follow fixture: trails a moving target.
//!
//! The target travels in a straight line from `from` to `to`. When the
//! fixture becomes active it latches the camera's offset from the target
//! and its orientation, then keeps both while the target moves. Without a
//! latch (for example when playback seeks into the middle of the fixture)
//! the configured `offset` is used and the orientation is left alone.

use super::{parse_point, reject_extra, too_few};
use crate::error::ConstructionError;
use crate::fixture::{CameraMotion, FixtureKind, Progress};
use crate::position::{Angle, Point, Position};
use serde::{Deserialize, Serialize};

/// Camera state captured when the fixture became active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowLatch {
    /// Camera offset from the target
    pub offset: Point,
    /// Camera orientation
    pub angle: Angle,
}

/// Keeps the camera at a fixed offset from a moving target
///
/// Equality compares the configuration only, not the latched state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowFixture {
    /// Target location at the start
    pub from: Point,
    /// Target location at the end
    pub to: Point,
    /// Camera offset from the target when nothing is latched
    pub offset: Point,
    #[serde(skip)]
    latch: Option<FollowLatch>,
}

impl FollowFixture {
    /// Create a new follow fixture
    pub fn new(from: Point, to: Point, offset: Point) -> Self {
        Self {
            from,
            to,
            offset,
            latch: None,
        }
    }

    /// Target location at local progress `t`
    pub fn target_at(&self, t: f32) -> Point {
        self.from.lerp(&self.to, f64::from(t))
    }

    /// State latched on entry, if any
    pub fn latch(&self) -> Option<&FollowLatch> {
        self.latch.as_ref()
    }

    /// Forget the latched state
    pub fn clear_latch(&mut self) {
        self.latch = None;
    }
}

impl PartialEq for FollowFixture {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.offset == other.offset
    }
}

impl CameraMotion for FollowFixture {
    fn apply(&self, progress: Progress, position: &mut Position) {
        let target = self.target_at(progress.smoothed());

        match &self.latch {
            Some(latch) => {
                position.point = target + latch.offset;
                position.angle = latch.angle;
            }
            None => position.point = target + self.offset,
        }
    }

    fn pre_apply(&mut self, progress: Progress, position: &mut Position) {
        let target = self.target_at(progress.local);
        self.latch = Some(FollowLatch {
            offset: position.point - target,
            angle: position.angle,
        });
    }

    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError> {
        let (from, to) = match args.len() {
            0..=2 => return Err(too_few(3, args.len())),
            3 => {
                let from = parse_point(FixtureKind::Follow, args)?;
                (from, from)
            }
            4 | 5 => return Err(too_few(6, args.len())),
            _ => {
                reject_extra(FixtureKind::Follow, args, 6)?;
                (
                    parse_point(FixtureKind::Follow, &args[..3])?,
                    parse_point(FixtureKind::Follow, &args[3..6])?,
                )
            }
        };

        self.from = from;
        self.to = to;
        self.offset = origin.point - from;
        self.latch = None;
        Ok(())
    }
}
