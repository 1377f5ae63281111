// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera fixtures: time-boxed camera motion segments.
//!
//! Every fixture has a duration in ticks, an optional name and a variant
//! that decides how the camera moves while the fixture is active:
//! - Idle: hold a position
//! - Path: travel through a list of positions
//! - Look: stay in place and face a point
//! - Follow: trail a moving target
//! - Circular: orbit around a point
//!
//! Fixtures convert to and from [`FixtureData`], a mapping of named fields,
//! and can be built from whitespace separated command tokens.

use crate::error::ConstructionError;
use crate::fixtures::{CircularFixture, FollowFixture, IdleFixture, LookFixture, PathFixture};
use crate::position::Position;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Structured fixture data: a mapping of named fields
pub type FixtureData = serde_json::Map<String, Value>;

/// Number of leading command tokens shared by every kind (type and duration)
pub const COMMAND_PREFIX: usize = 2;

/// Unique identifier for a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureId(pub Uuid);

impl FixtureId {
    /// Create a new random fixture ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FixtureId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    /// Hold a position
    Idle,
    /// Travel through points
    Path,
    /// Face a point
    Look,
    /// Trail a moving target
    Follow,
    /// Orbit around a point
    Circular,
}

impl FixtureKind {
    /// Get the name used in commands and data
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Path => "path",
            Self::Look => "look",
            Self::Follow => "follow",
            Self::Circular => "circular",
        }
    }

    /// Get the numeric tag used by legacy profile data
    pub fn tag(&self) -> u8 {
        match self {
            Self::Idle => 1,
            Self::Path => 2,
            Self::Look => 3,
            Self::Follow => 4,
            Self::Circular => 5,
        }
    }

    /// Look up a kind by name
    pub fn from_name(name: &str) -> Result<Self, ConstructionError> {
        match name {
            "idle" => Ok(Self::Idle),
            "path" => Ok(Self::Path),
            "look" => Ok(Self::Look),
            "follow" => Ok(Self::Follow),
            "circular" => Ok(Self::Circular),
            _ => Err(ConstructionError::UnknownType(name.to_string())),
        }
    }

    /// Look up a kind by numeric tag
    pub fn from_tag(tag: u8) -> Result<Self, ConstructionError> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| ConstructionError::UnknownType(tag.to_string()))
    }

    /// Get all kinds
    pub fn all() -> &'static [FixtureKind] {
        &[
            FixtureKind::Idle,
            FixtureKind::Path,
            FixtureKind::Look,
            FixtureKind::Follow,
            FixtureKind::Circular,
        ]
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixtureKind {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Local progress handed to a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Elapsed fraction of the fixture in `[0, 1)`
    pub local: f32,
    /// Fraction of the current tick, for smooth rendering
    pub partial: f32,
    /// Duration of the fixture in ticks
    pub duration: u64,
}

impl Progress {
    /// Create a new progress value
    pub fn new(local: f32, partial: f32, duration: u64) -> Self {
        Self {
            local,
            partial,
            duration,
        }
    }

    /// Local progress advanced by the sub-tick fraction, clamped to `[0, 1]`
    pub fn smoothed(&self) -> f32 {
        let step = self.partial / self.duration.max(1) as f32;
        (self.local + step).clamp(0.0, 1.0)
    }
}

/// Behavior shared by every fixture variant
pub trait CameraMotion {
    /// Write the camera placement for the given progress
    fn apply(&self, progress: Progress, position: &mut Position);

    /// Called once when the fixture becomes active
    fn pre_apply(&mut self, _progress: Progress, _position: &mut Position) {}

    /// Configure from the variant specific command tokens
    ///
    /// `origin` is the placement the command is issued from.
    fn edit(&mut self, args: &[&str], origin: &Position) -> Result<(), ConstructionError>;
}

/// Variant specific part of a fixture
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureVariant {
    /// Idle fixture
    Idle(IdleFixture),
    /// Path fixture
    Path(PathFixture),
    /// Look fixture
    Look(LookFixture),
    /// Follow fixture
    Follow(FollowFixture),
    /// Circular fixture
    Circular(CircularFixture),
}

impl FixtureVariant {
    /// Default-configured variant of the given kind
    pub fn from_kind(kind: FixtureKind) -> Self {
        match kind {
            FixtureKind::Idle => Self::Idle(IdleFixture::default()),
            FixtureKind::Path => Self::Path(PathFixture::default()),
            FixtureKind::Look => Self::Look(LookFixture::default()),
            FixtureKind::Follow => Self::Follow(FollowFixture::default()),
            FixtureKind::Circular => Self::Circular(CircularFixture::default()),
        }
    }

    /// Get the kind of this variant
    pub fn kind(&self) -> FixtureKind {
        match self {
            Self::Idle(_) => FixtureKind::Idle,
            Self::Path(_) => FixtureKind::Path,
            Self::Look(_) => FixtureKind::Look,
            Self::Follow(_) => FixtureKind::Follow,
            Self::Circular(_) => FixtureKind::Circular,
        }
    }

    fn motion(&self) -> &dyn CameraMotion {
        match self {
            Self::Idle(f) => f,
            Self::Path(f) => f,
            Self::Look(f) => f,
            Self::Follow(f) => f,
            Self::Circular(f) => f,
        }
    }

    fn motion_mut(&mut self) -> &mut dyn CameraMotion {
        match self {
            Self::Idle(f) => f,
            Self::Path(f) => f,
            Self::Look(f) => f,
            Self::Follow(f) => f,
            Self::Circular(f) => f,
        }
    }

    fn read(kind: FixtureKind, data: &FixtureData) -> Result<Self, ConstructionError> {
        Ok(match kind {
            FixtureKind::Idle => Self::Idle(read_fields(data)?),
            FixtureKind::Path => Self::Path(read_fields(data)?),
            FixtureKind::Look => Self::Look(read_fields(data)?),
            FixtureKind::Follow => Self::Follow(read_fields(data)?),
            FixtureKind::Circular => Self::Circular(read_fields(data)?),
        })
    }

    fn write(&self, data: &mut FixtureData) {
        let fields = match self {
            Self::Idle(f) => serde_json::to_value(f),
            Self::Path(f) => serde_json::to_value(f),
            Self::Look(f) => serde_json::to_value(f),
            Self::Follow(f) => serde_json::to_value(f),
            Self::Circular(f) => serde_json::to_value(f),
        };

        match fields {
            Ok(Value::Object(fields)) => data.extend(fields),
            Ok(other) => tracing::warn!("{} fixture wrote non-object data: {}", self.kind(), other),
            Err(e) => tracing::warn!("Failed to write {} fixture data: {}", self.kind(), e),
        }
    }
}

macro_rules! variant_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for FixtureVariant {
                fn from(fixture: $ty) -> Self {
                    Self::$variant(fixture)
                }
            }
        )*
    };
}

variant_from! {
    IdleFixture => Idle,
    PathFixture => Path,
    LookFixture => Look,
    FollowFixture => Follow,
    CircularFixture => Circular,
}

fn read_fields<T: DeserializeOwned>(data: &FixtureData) -> Result<T, ConstructionError> {
    Ok(serde_json::from_value(Value::Object(data.clone()))?)
}

/// Parse a duration token: a whole number of ticks, at least 1
pub fn parse_duration(token: &str) -> Result<u64, ConstructionError> {
    match token.trim().parse::<u64>() {
        Ok(duration) if duration >= 1 => Ok(duration),
        _ => Err(ConstructionError::InvalidDuration(token.to_string())),
    }
}

/// Read a tick count written as an integer or as a whole float such as `10.0`
fn whole_ticks(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|ticks| ticks.fract() == 0.0 && *ticks >= 0.0 && *ticks < u64::MAX as f64)
            .map(|ticks| ticks as u64)
    })
}

fn validate_duration(duration: u64) -> Result<u64, ConstructionError> {
    if duration == 0 {
        return Err(ConstructionError::InvalidDuration(duration.to_string()));
    }
    Ok(duration)
}

/// A camera fixture
///
/// Cloning keeps the identity; use [`Fixture::duplicate`] for a distinct copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    id: FixtureId,
    duration: u64,
    name: String,
    variant: FixtureVariant,
}

impl Fixture {
    /// Create a new fixture
    ///
    /// Fails when `duration` is 0.
    pub fn new(duration: u64, variant: impl Into<FixtureVariant>) -> Result<Self, ConstructionError> {
        Ok(Self {
            id: FixtureId::new(),
            duration: validate_duration(duration)?,
            name: String::new(),
            variant: variant.into(),
        })
    }

    /// Create a default-configured fixture of the given kind
    pub fn from_kind(kind: FixtureKind, duration: u64) -> Result<Self, ConstructionError> {
        Self::new(duration, FixtureVariant::from_kind(kind))
    }

    /// Create a fixture from command tokens
    ///
    /// `args` is `[type, duration, ...]`, the remaining tokens are handed to
    /// the variant. `origin` is the placement the command is issued from.
    pub fn from_command(args: &[&str], origin: &Position) -> Result<Self, ConstructionError> {
        if args.len() < COMMAND_PREFIX {
            return Err(ConstructionError::TooFewArguments {
                expected: COMMAND_PREFIX,
                got: args.len(),
            });
        }

        let duration = parse_duration(args[1])?;
        let kind = FixtureKind::from_name(args[0])?;
        let mut fixture = Self::from_kind(kind, duration)?;
        fixture.variant.motion_mut().edit(&args[COMMAND_PREFIX..], origin)?;

        tracing::debug!("Built {} fixture ({} ticks) from command", kind, duration);
        Ok(fixture)
    }

    /// Create a fixture from structured data
    pub fn from_data(data: &FixtureData) -> Result<Self, ConstructionError> {
        let kind = match data.get("type") {
            Some(Value::String(name)) => FixtureKind::from_name(name)?,
            Some(Value::Number(tag)) => tag
                .as_u64()
                .and_then(|tag| u8::try_from(tag).ok())
                .map(FixtureKind::from_tag)
                .unwrap_or_else(|| Err(ConstructionError::UnknownType(tag.to_string())))?,
            Some(other) => return Err(ConstructionError::UnknownType(other.to_string())),
            None => return Err(ConstructionError::MissingField("type")),
        };

        let duration = match data.get("duration") {
            Some(value) => whole_ticks(value)
                .filter(|duration| *duration >= 1)
                .ok_or_else(|| ConstructionError::InvalidDuration(value.to_string()))?,
            None => return Err(ConstructionError::MissingField("duration")),
        };

        let mut fixture = Self::new(duration, FixtureVariant::read(kind, data)?)?;
        if let Some(name) = data.get("name").and_then(Value::as_str) {
            fixture.name = name.to_string();
        }

        Ok(fixture)
    }

    /// Convert to structured data
    pub fn to_data(&self) -> FixtureData {
        let mut data = FixtureData::new();
        data.insert("type".to_string(), Value::from(self.kind().name()));
        data.insert("duration".to_string(), Value::from(self.duration));
        data.insert("name".to_string(), Value::from(self.name.as_str()));
        self.variant.write(&mut data);
        data
    }

    /// Copy with a fresh identity and no playback state
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = FixtureId::new();
        if let FixtureVariant::Follow(follow) = &mut copy.variant {
            follow.clear_latch();
        }
        copy
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the identity
    pub fn id(&self) -> FixtureId {
        self.id
    }

    /// Get the duration in ticks
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Set the duration in ticks
    ///
    /// A duration of 0 is rejected and leaves the fixture unchanged.
    pub fn set_duration(&mut self, duration: u64) -> Result<(), ConstructionError> {
        self.duration = validate_duration(duration)?;
        Ok(())
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the kind
    pub fn kind(&self) -> FixtureKind {
        self.variant.kind()
    }

    /// Get the variant
    pub fn variant(&self) -> &FixtureVariant {
        &self.variant
    }

    /// Get the mutable variant
    pub fn variant_mut(&mut self) -> &mut FixtureVariant {
        &mut self.variant
    }

    /// Apply this fixture onto a position
    pub fn apply(&self, progress: f32, partial: f32, position: &mut Position) {
        self.variant
            .motion()
            .apply(Progress::new(progress, partial, self.duration), position);
    }

    /// Prepare this fixture before it becomes active
    pub fn pre_apply(&mut self, progress: f32, position: &mut Position) {
        let duration = self.duration;
        self.variant
            .motion_mut()
            .pre_apply(Progress::new(progress, 0.0, duration), position);
    }

    /// Pre-apply and apply this fixture
    pub fn pre_and_apply(&mut self, progress: f32, partial: f32, position: &mut Position) {
        self.pre_apply(progress, position);
        self.apply(progress, partial, position);
    }
}

impl Serialize for Fixture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_data().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fixture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = FixtureData::deserialize(deserializer)?;
        Fixture::from_data(&data).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::InterpolationMode;
    use crate::position::{Angle, Point};
    use serde_json::json;

    fn origin() -> Position {
        Position::from_parts(1.0, 64.0, -3.0, 45.0, 10.0)
    }

    fn sample_fixtures() -> Vec<Fixture> {
        vec![
            Fixture::new(20, IdleFixture::new(origin())).unwrap().with_name("hold"),
            Fixture::new(
                40,
                PathFixture::new(
                    vec![origin(), Position::from_parts(5.0, 70.0, 2.0, 90.0, -5.0)],
                    InterpolationMode::Cubic,
                ),
            )
            .unwrap(),
            Fixture::new(10, LookFixture::new(origin(), Point::new(0.0, 60.0, 8.0))).unwrap(),
            Fixture::new(
                15,
                FollowFixture::new(Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0), Point::new(0.0, 2.0, -4.0)),
            )
            .unwrap()
            .with_name("chase"),
            Fixture::new(
                60,
                CircularFixture {
                    center: Point::new(3.0, 65.0, 3.0),
                    distance: 8.0,
                    offset: 90.0,
                    circles: 720.0,
                    pitch: 20.0,
                    fov: 50.0,
                },
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_kind_names_and_tags() {
        for kind in FixtureKind::all() {
            assert_eq!(FixtureKind::from_name(kind.name()).unwrap(), *kind);
            assert_eq!(FixtureKind::from_tag(kind.tag()).unwrap(), *kind);
        }

        assert!(matches!(
            FixtureKind::from_name("dolly"),
            Err(ConstructionError::UnknownType(token)) if token == "dolly"
        ));
        assert!(matches!(
            FixtureKind::from_tag(9),
            Err(ConstructionError::UnknownType(token)) if token == "9"
        ));
        assert_eq!("look".parse::<FixtureKind>().unwrap(), FixtureKind::Look);
    }

    #[test]
    fn test_from_kind() {
        for kind in FixtureKind::all() {
            let fixture = Fixture::from_kind(*kind, 5).unwrap();
            assert_eq!(fixture.kind(), *kind);
            assert_eq!(fixture.duration(), 5);
            assert_eq!(fixture.name(), "");
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(
            Fixture::from_kind(FixtureKind::Idle, 0),
            Err(ConstructionError::InvalidDuration(_))
        ));

        let mut fixture = Fixture::from_kind(FixtureKind::Idle, 10).unwrap();
        assert!(fixture.set_duration(0).is_err());
        assert_eq!(fixture.duration(), 10);

        fixture.set_duration(25).unwrap();
        assert_eq!(fixture.duration(), 25);
    }

    #[test]
    fn test_duplicate_changes_identity() {
        let fixture = Fixture::from_kind(FixtureKind::Look, 10).unwrap();
        let same = fixture.clone();
        let copy = fixture.duplicate();

        assert_eq!(same.id(), fixture.id());
        assert_ne!(copy.id(), fixture.id());
        assert_eq!(copy.variant(), fixture.variant());
    }

    #[test]
    fn test_data_round_trip() {
        for fixture in sample_fixtures() {
            let data = fixture.to_data();
            let restored = Fixture::from_data(&data).unwrap();

            assert_eq!(restored.kind(), fixture.kind());
            assert_eq!(restored.duration(), fixture.duration());
            assert_eq!(restored.name(), fixture.name());
            assert_eq!(restored.variant(), fixture.variant());
        }
    }

    #[test]
    fn test_data_defaults() {
        let data = json!({ "type": "circular", "duration": 30 });
        let fixture = Fixture::from_data(data.as_object().unwrap()).unwrap();

        assert_eq!(fixture.name(), "");
        match fixture.variant() {
            FixtureVariant::Circular(circular) => assert_eq!(circular, &CircularFixture::default()),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn test_data_float_duration() {
        let data = json!({ "type": "idle", "duration": 10.0 });
        let fixture = Fixture::from_data(data.as_object().unwrap()).unwrap();
        assert_eq!(fixture.duration(), 10);

        for duration in [json!(10.5), json!(0.0), json!(-3.0), json!("10")] {
            let data = json!({ "type": "idle", "duration": duration });
            assert!(matches!(
                Fixture::from_data(data.as_object().unwrap()),
                Err(ConstructionError::InvalidDuration(_))
            ));
        }
    }

    #[test]
    fn test_data_numeric_type_tag() {
        let data = json!({ "type": 3, "duration": 12, "name": null });
        let fixture = Fixture::from_data(data.as_object().unwrap()).unwrap();
        assert_eq!(fixture.kind(), FixtureKind::Look);
        assert_eq!(fixture.name(), "");
    }

    #[test]
    fn test_data_errors() {
        let missing_type = json!({ "duration": 12 });
        assert!(matches!(
            Fixture::from_data(missing_type.as_object().unwrap()),
            Err(ConstructionError::MissingField("type"))
        ));

        let missing_duration = json!({ "type": "idle" });
        assert!(matches!(
            Fixture::from_data(missing_duration.as_object().unwrap()),
            Err(ConstructionError::MissingField("duration"))
        ));

        let zero = json!({ "type": "idle", "duration": 0 });
        assert!(matches!(
            Fixture::from_data(zero.as_object().unwrap()),
            Err(ConstructionError::InvalidDuration(_))
        ));

        let unknown = json!({ "type": "dolly", "duration": 5 });
        assert!(matches!(
            Fixture::from_data(unknown.as_object().unwrap()),
            Err(ConstructionError::UnknownType(token)) if token == "dolly"
        ));

        let malformed = json!({ "type": "path", "duration": 5, "points": "nope" });
        assert!(matches!(
            Fixture::from_data(malformed.as_object().unwrap()),
            Err(ConstructionError::Data(_))
        ));
    }

    #[test]
    fn test_from_command() {
        let fixture = Fixture::from_command(&["idle", "40"], &origin()).unwrap();
        assert_eq!(fixture.kind(), FixtureKind::Idle);
        assert_eq!(fixture.duration(), 40);

        let mut position = Position::default();
        fixture.apply(0.5, 0.0, &mut position);
        assert_eq!(position, origin());
    }

    #[test]
    fn test_from_command_errors() {
        assert!(matches!(
            Fixture::from_command(&["idle"], &origin()),
            Err(ConstructionError::TooFewArguments { expected: 2, got: 1 })
        ));
        assert!(matches!(
            Fixture::from_command(&["idle", "soon"], &origin()),
            Err(ConstructionError::InvalidDuration(token)) if token == "soon"
        ));
        assert!(matches!(
            Fixture::from_command(&["idle", "-4"], &origin()),
            Err(ConstructionError::InvalidDuration(token)) if token == "-4"
        ));
        assert!(matches!(
            Fixture::from_command(&["idle", "0"], &origin()),
            Err(ConstructionError::InvalidDuration(_))
        ));
        assert!(matches!(
            Fixture::from_command(&["dolly", "10"], &origin()),
            Err(ConstructionError::UnknownType(token)) if token == "dolly"
        ));
        assert!(matches!(
            Fixture::from_command(&["look", "10", "1", "x", "3"], &origin()),
            Err(ConstructionError::InvalidArgument { kind: FixtureKind::Look, token }) if token == "x"
        ));
    }

    #[test]
    fn test_progress_smoothing() {
        let progress = Progress::new(0.5, 0.5, 10);
        assert!((progress.smoothed() - 0.55).abs() < 1e-6);

        let end = Progress::new(0.95, 1.0, 10);
        assert_eq!(end.smoothed(), 1.0);
    }

    #[test]
    fn test_pre_and_apply_latches_follow() {
        let mut fixture = Fixture::new(
            10,
            FollowFixture::new(Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0), Point::default()),
        )
        .unwrap();

        let mut position = Position::new(Point::new(0.0, 5.0, -5.0), Angle::new(12.0, 30.0, 60.0));
        fixture.pre_and_apply(0.0, 0.0, &mut position);
        assert_eq!(position.point, Point::new(0.0, 5.0, -5.0));

        fixture.apply(0.5, 0.0, &mut position);
        assert_eq!(position.point, Point::new(5.0, 5.0, -5.0));
        assert_eq!(position.angle, Angle::new(12.0, 30.0, 60.0));
    }

    #[test]
    fn test_follow_latch_is_playback_state() {
        let mut fixture = Fixture::new(
            10,
            FollowFixture::new(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0)),
        )
        .unwrap();

        let mut position = Position::from_parts(2.0, 3.0, 4.0, 15.0, 5.0);
        fixture.pre_and_apply(0.0, 0.0, &mut position);

        let restored = Fixture::from_data(&fixture.to_data()).unwrap();
        assert_eq!(restored.variant(), fixture.variant());

        let copy = fixture.duplicate();
        match copy.variant() {
            FixtureVariant::Follow(follow) => assert!(follow.latch().is_none()),
            other => panic!("unexpected variant {other:?}"),
        }
        match fixture.variant() {
            FixtureVariant::Follow(follow) => assert!(follow.latch().is_some()),
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn test_serde_through_data() {
        let fixture = Fixture::from_kind(FixtureKind::Path, 8).unwrap().with_name("intro");
        let json = serde_json::to_string(&fixture).unwrap();
        let restored: Fixture = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name(), "intro");
        assert_eq!(restored.variant(), fixture.variant());
    }
}
