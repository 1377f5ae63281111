// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interpolation used by path fixtures.

use crate::position::{Angle, Point, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Interpolation mode between path points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Straight segments
    #[default]
    Linear,
    /// Catmull-Rom spline through every point
    Cubic,
}

impl InterpolationMode {
    /// Get the name used in commands and data
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }

    /// Parse a mode name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "cubic" => Some(Self::Cubic),
            _ => None,
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two values
    pub fn lerp<T>(a: T, b: T, t: T) -> T
    where
        T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
    {
        a + (b - a) * t
    }

    /// Cubic Hermite blend of one path coordinate
    ///
    /// Runs from `from` to `to` as `t` goes from 0 to 1, leaving and arriving
    /// with the given tangents. Path segments get their tangents from the
    /// neighbouring points through [`Interpolation::catmull_rom`].
    pub fn hermite(from: f64, from_tangent: f64, to: f64, to_tangent: f64, t: f64) -> f64 {
        let (t2, t3) = (t * t, t * t * t);

        (2.0 * t3 - 3.0 * t2 + 1.0) * from
            + (t3 - 2.0 * t2 + t) * from_tangent
            + (3.0 * t2 - 2.0 * t3) * to
            + (t3 - t2) * to_tangent
    }

    /// Catmull-Rom interpolation between `p1` and `p2`
    pub fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
        let m1 = (p2 - p0) * 0.5;
        let m2 = (p3 - p1) * 0.5;

        Self::hermite(p1, m1, p2, m2, t)
    }

    /// Interpolate along a list of positions
    ///
    /// `t` in `[0, 1]` spans the whole list, each gap taking an equal share.
    /// Returns `None` for an empty list.
    pub fn along(points: &[Position], t: f32, mode: InterpolationMode) -> Option<Position> {
        let (first, last) = (points.first()?, points.last()?);

        if points.len() == 1 || t <= 0.0 {
            return Some(*first);
        }
        if t >= 1.0 {
            return Some(*last);
        }

        let segments = (points.len() - 1) as f32;
        let scaled = t * segments;
        let index = (scaled.floor() as usize).min(points.len() - 2);
        let local = scaled - index as f32;

        let a = &points[index];
        let b = &points[index + 1];

        Some(match mode {
            InterpolationMode::Linear => a.lerp(b, local),
            InterpolationMode::Cubic => {
                let before = &points[index.saturating_sub(1)];
                let after = &points[(index + 2).min(points.len() - 1)];
                Self::cubic_position(before, a, b, after, local)
            }
        })
    }

    fn cubic_position(p0: &Position, p1: &Position, p2: &Position, p3: &Position, t: f32) -> Position {
        let t = f64::from(t);
        let curve = |a: f64, b: f64, c: f64, d: f64| Self::catmull_rom(a, b, c, d, t);
        let curve32 = |a: f32, b: f32, c: f32, d: f32| {
            curve(f64::from(a), f64::from(b), f64::from(c), f64::from(d)) as f32
        };

        Position {
            point: Point {
                x: curve(p0.point.x, p1.point.x, p2.point.x, p3.point.x),
                y: curve(p0.point.y, p1.point.y, p2.point.y, p3.point.y),
                z: curve(p0.point.z, p1.point.z, p2.point.z, p3.point.z),
            },
            angle: Angle {
                yaw: curve32(p0.angle.yaw, p1.angle.yaw, p2.angle.yaw, p3.angle.yaw),
                pitch: curve32(p0.angle.pitch, p1.angle.pitch, p2.angle.pitch, p3.angle.pitch),
                fov: curve32(p0.angle.fov, p1.angle.fov, p2.angle.fov, p3.angle.fov),
            },
        }
    }
}
