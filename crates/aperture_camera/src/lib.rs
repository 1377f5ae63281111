// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera profile sequencing for Aperture.
//!
//! This crate arranges camera fixtures end to end and plays them back:
//! - Idle, path, look, follow and circular fixtures
//! - Tick lookup and boundary snapping over a profile
//! - Two-phase (pre-apply / apply) entry into each fixture
//! - Structured data, RON and JSON conversion
//!
//! ## Architecture
//!
//! Playback is a pure function of a [`CameraProfile`] and a tick: the caller
//! drives time and passes a mutable [`Position`] to
//! [`CameraProfile::apply_at`]. Persistence is left to a [`Destination`]
//! owned by the caller.

pub mod destination;
pub mod error;
pub mod fixture;
pub mod fixtures;
pub mod interpolation;
pub mod position;
pub mod profile;

pub use destination::Destination;
pub use error::{BoundsError, ConstructionError, ProfileError};
pub use fixture::{CameraMotion, Fixture, FixtureData, FixtureId, FixtureKind, FixtureVariant, Progress};
pub use fixtures::{CircularFixture, FollowFixture, IdleFixture, LookFixture, PathFixture};
pub use interpolation::{Interpolation, InterpolationMode};
pub use position::{Angle, Point, Position, DEFAULT_FOV};
pub use profile::CameraProfile;

/// Number of ticks in one second of playback
pub const TICKS_PER_SECOND: u32 = 20;
