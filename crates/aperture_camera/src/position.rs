// SPDX-License-Identifier: MIT OR Apache-2.0
//! Spatial camera state mutated by fixtures.

use crate::interpolation::Interpolation;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Default field of view in degrees
pub const DEFAULT_FOV: f32 = 70.0;

/// A point in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate (up)
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation towards another point
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: Interpolation::lerp(self.x, other.x, t),
            y: Interpolation::lerp(self.y, other.y, t),
            z: Interpolation::lerp(self.z, other.z, t),
        }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let d = *other - *self;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Camera orientation and lens
///
/// Yaw 0 faces +Z and grows clockwise when seen from above; positive pitch
/// looks down. Both are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Angle {
    /// Horizontal rotation in degrees
    pub yaw: f32,
    /// Vertical rotation in degrees
    pub pitch: f32,
    /// Field of view in degrees
    pub fov: f32,
}

impl Angle {
    /// Create a new angle
    pub const fn new(yaw: f32, pitch: f32, fov: f32) -> Self {
        Self { yaw, pitch, fov }
    }

    /// Orientation of a camera at `from` looking at `to`
    pub fn looking_at(from: &Point, to: &Point, fov: f32) -> Self {
        let d = *to - *from;
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();

        let yaw = wrap_degrees(d.z.atan2(d.x).to_degrees() - 90.0);
        let pitch = -d.y.atan2(horizontal).to_degrees();

        Self::new(yaw as f32, pitch as f32, fov)
    }

    /// Linear interpolation towards another angle
    pub fn lerp(&self, other: &Angle, t: f32) -> Angle {
        Angle {
            yaw: Interpolation::lerp(self.yaw, other.yaw, t),
            pitch: Interpolation::lerp(self.pitch, other.pitch, t),
            fov: Interpolation::lerp(self.fov, other.fov, t),
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_FOV)
    }
}

/// Wrap an angle in degrees into `(-180, 180]`
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Full camera placement: where it is and where it looks
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Location
    pub point: Point,
    /// Orientation
    pub angle: Angle,
}

impl Position {
    /// Create a new position
    pub const fn new(point: Point, angle: Angle) -> Self {
        Self { point, angle }
    }

    /// Create a position from raw coordinates and angles
    pub fn from_parts(x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self::new(Point::new(x, y, z), Angle::new(yaw, pitch, DEFAULT_FOV))
    }

    /// Copy another position into this one
    pub fn set(&mut self, other: &Position) {
        *self = *other;
    }

    /// Linear interpolation towards another position
    pub fn lerp(&self, other: &Position, t: f32) -> Position {
        Position {
            point: self.point.lerp(&other.point, f64::from(t)),
            angle: self.angle.lerp(&other.angle, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_default_position() {
        let position = Position::default();
        assert_eq!(position.point, Point::default());
        assert_eq!(position.angle.fov, DEFAULT_FOV);
    }

    #[test]
    fn test_looking_at() {
        let origin = Point::default();

        let forward = Angle::looking_at(&origin, &Point::new(0.0, 0.0, 10.0), 50.0);
        assert!(approx(forward.yaw, 0.0));
        assert!(approx(forward.pitch, 0.0));
        assert_eq!(forward.fov, 50.0);

        let below = Angle::looking_at(&origin, &Point::new(0.0, -10.0, 10.0), 50.0);
        assert!(approx(below.pitch, 45.0));

        let side = Angle::looking_at(&origin, &Point::new(-10.0, 0.0, 0.0), 50.0);
        assert!(approx(side.yaw, 90.0));
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(45.0), 45.0);
        assert_eq!(wrap_degrees(-450.0), -90.0);
    }

    #[test]
    fn test_position_lerp() {
        let a = Position::from_parts(0.0, 0.0, 0.0, 0.0, 0.0);
        let b = Position::from_parts(10.0, 20.0, -10.0, 90.0, 30.0);

        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.point, Point::new(5.0, 10.0, -5.0));
        assert!(approx(mid.angle.yaw, 45.0));
        assert!(approx(mid.angle.pitch, 15.0));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, 6.0, 3.0);
        assert_eq!(b - a, Point::new(3.0, 4.0, 0.0));
        assert_eq!(a + b, Point::new(5.0, 8.0, 6.0));
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
    }
}
