// SPDX-License-Identifier: MIT OR Apache-2.0
//! Concrete fixture variants.

pub mod idle;
pub mod path;
pub mod look;
pub mod follow;
pub mod circular;

pub use circular::CircularFixture;
pub use follow::FollowFixture;
pub use idle::IdleFixture;
pub use look::LookFixture;
pub use path::PathFixture;

use crate::error::ConstructionError;
use crate::fixture::{FixtureKind, COMMAND_PREFIX};
use crate::position::Point;
use std::str::FromStr;

/// Parse a finite number from a command token
pub(crate) fn parse_number<T>(kind: FixtureKind, token: &str) -> Result<T, ConstructionError>
where
    T: FromStr + Into<f64> + Copy,
{
    match token.parse::<T>() {
        Ok(value) if value.into().is_finite() => Ok(value),
        _ => Err(ConstructionError::InvalidArgument {
            kind,
            token: token.to_string(),
        }),
    }
}

/// Parse three tokens as a point
pub(crate) fn parse_point(kind: FixtureKind, tokens: &[&str]) -> Result<Point, ConstructionError> {
    match tokens {
        [x, y, z] => Ok(Point::new(
            parse_number(kind, x)?,
            parse_number(kind, y)?,
            parse_number(kind, z)?,
        )),
        _ => Err(too_few(3, tokens.len())),
    }
}

/// Error for a command with fewer trailing tokens than required
pub(crate) fn too_few(expected: usize, got: usize) -> ConstructionError {
    ConstructionError::TooFewArguments {
        expected: COMMAND_PREFIX + expected,
        got: COMMAND_PREFIX + got,
    }
}

/// Reject tokens past the accepted ones
pub(crate) fn reject_extra(kind: FixtureKind, args: &[&str], accepted: usize) -> Result<(), ConstructionError> {
    match args.get(accepted) {
        Some(token) => Err(ConstructionError::InvalidArgument {
            kind,
            token: (*token).to_string(),
        }),
        None => Ok(()),
    }
}
