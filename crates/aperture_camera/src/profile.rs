// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera profile: an ordered timeline of fixtures.
//!
//! Fixtures play back to back in insertion order. Every query walks the
//! list from the start, so lookups stay correct across seeks, edits and
//! backwards scrubbing without any cached cursor.

use crate::destination::Destination;
use crate::error::{BoundsError, ProfileError};
use crate::fixture::{Fixture, FixtureId};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::{SystemTime, UNIX_EPOCH};

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// A timeline of camera fixtures
#[derive(Clone, Serialize, Deserialize)]
pub struct CameraProfile {
    /// Fixtures in playback order
    fixtures: Vec<Fixture>,
    /// Milliseconds since the Unix epoch of the last structural change
    #[serde(skip, default = "now_millis")]
    last_modified: u64,
    /// Where the profile is saved to; owned by the caller
    #[serde(skip)]
    destination: Option<Weak<dyn Destination>>,
}

impl CameraProfile {
    /// Create a new empty profile
    pub fn new() -> Self {
        Self {
            fixtures: Vec::new(),
            last_modified: now_millis(),
            destination: None,
        }
    }

    /// Create a new empty profile saving to `destination`
    pub fn with_destination(destination: &Arc<dyn Destination>) -> Self {
        let mut profile = Self::new();
        profile.set_destination(Some(destination));
        profile
    }

    /// Get the destination, if attached and still alive
    pub fn destination(&self) -> Option<Arc<dyn Destination>> {
        self.destination.as_ref().and_then(Weak::upgrade)
    }

    /// Attach or detach the destination
    pub fn set_destination(&mut self, destination: Option<&Arc<dyn Destination>>) {
        self.destination = destination.map(Arc::downgrade);
    }

    /// Milliseconds since the Unix epoch of the last structural change
    pub fn last_modified(&self) -> u64 {
        self.last_modified
    }

    /// Record a structural change
    ///
    /// The stamp strictly increases even within the same millisecond.
    pub fn touch(&mut self) {
        self.last_modified = now_millis().max(self.last_modified + 1);
    }

    /// Total duration in ticks, saturating at `u64::MAX`
    pub fn duration(&self) -> u64 {
        self.fixtures
            .iter()
            .fold(0u64, |total, fixture| total.saturating_add(fixture.duration()))
    }

    /// Offset in ticks of the fixture with the given identity
    ///
    /// Returns the full duration when the fixture is not in this profile.
    pub fn offset_of(&self, target: FixtureId) -> u64 {
        self.fixtures
            .iter()
            .take_while(|fixture| fixture.id() != target)
            .fold(0u64, |total, fixture| total.saturating_add(fixture.duration()))
    }

    /// Snap a tick to the boundaries of the fixture running at it
    ///
    /// Returns the start of that fixture, or its end when `next` is set.
    /// Ticks at or past the end snap to the full duration.
    pub fn calculate_offset(&self, tick: i64, next: bool) -> u64 {
        // Every fixture lasts at least one tick, so negative ticks land in the first
        let tick = tick.max(0) as u64;
        let mut start = 0u64;

        for fixture in &self.fixtures {
            let end = start.saturating_add(fixture.duration());

            if end > tick {
                return if next { end } else { start };
            }
            start = end;
        }

        start
    }

    /// Get the fixture running at the given tick
    ///
    /// At a seam between two fixtures the later one wins.
    pub fn fixture_at(&self, tick: i64) -> Option<&Fixture> {
        if tick < 0 || tick as u64 >= self.duration() {
            return None;
        }

        let tick = tick as u64;
        let mut start = 0;
        let mut found = None;

        for fixture in &self.fixtures {
            if tick < start {
                break;
            }
            start = start.saturating_add(fixture.duration());
            found = Some(fixture);
        }

        found
    }

    /// Get fixture count
    pub fn count(&self) -> usize {
        self.fixtures.len()
    }

    /// Check if there are no fixtures
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Get a fixture by index
    pub fn get(&self, index: usize) -> Result<&Fixture, BoundsError> {
        let count = self.fixtures.len();
        self.fixtures.get(index).ok_or(BoundsError { index, count })
    }

    /// Get a mutable fixture by index
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Fixture, BoundsError> {
        let count = self.fixtures.len();
        self.fixtures.get_mut(index).ok_or(BoundsError { index, count })
    }

    /// Check if a fixture exists at the given index
    pub fn has(&self, index: usize) -> bool {
        index < self.fixtures.len()
    }

    /// Get all fixtures
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Append a fixture
    pub fn add(&mut self, fixture: Fixture) {
        self.fixtures.push(fixture);
        self.touch();
    }

    /// Insert a fixture before `index`, appending when past the end
    pub fn insert(&mut self, index: usize, fixture: Fixture) {
        let index = index.min(self.fixtures.len());
        self.fixtures.insert(index, fixture);
        self.touch();
    }

    /// Move the fixture at `from` to `to`
    ///
    /// The fixture is removed first and then inserted, so fixtures between
    /// the two indices shift by one. Does nothing when either index is
    /// invalid. Returns whether a fixture moved.
    pub fn move_fixture(&mut self, from: usize, to: usize) -> bool {
        let moved = self.has(from) && self.has(to);

        if moved {
            let fixture = self.fixtures.remove(from);
            self.fixtures.insert(to, fixture);
        } else {
            tracing::debug!("Ignoring fixture move {} -> {} (count {})", from, to, self.count());
        }

        self.touch();
        moved
    }

    /// Remove the fixture at `index`
    pub fn remove(&mut self, index: usize) -> Option<Fixture> {
        let removed = if self.has(index) {
            Some(self.fixtures.remove(index))
        } else {
            tracing::debug!("Ignoring fixture removal at {} (count {})", index, self.count());
            None
        };

        self.touch();
        removed
    }

    /// Remove all fixtures
    pub fn reset(&mut self) {
        self.fixtures.clear();
        self.touch();
    }

    /// Apply the fixture running at `tick` onto `position`
    ///
    /// The fixture entered exactly at `tick` is pre-applied first. Ticks
    /// before the start or at and past the end leave `position` untouched.
    pub fn apply_at(&mut self, tick: i64, partial: f32, position: &mut Position) {
        if tick < 0 {
            return;
        }

        let mut progress = tick as u64;
        let mut index = 0;

        for fixture in &self.fixtures {
            let duration = fixture.duration();
            if progress < duration {
                break;
            }
            progress -= duration;
            index += 1;
        }

        let Some(fixture) = self.fixtures.get_mut(index) else {
            return;
        };

        if progress == 0 {
            tracing::trace!("Entering {} fixture {} at tick {}", fixture.kind(), index, tick);
            fixture.pre_apply(0.0, position);
        }

        fixture.apply(progress as f32 / fixture.duration() as f32, partial, position);
    }

    /// Save through the destination, if any
    pub fn save(&self) {
        match self.destination() {
            Some(destination) => destination.save(self),
            None => tracing::debug!("Profile has no destination, not saving"),
        }
    }

    /// Serialize to a pretty RON string
    pub fn to_ron(&self) -> Result<String, ProfileError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Deserialize from a RON string
    pub fn from_ron(s: &str) -> Result<Self, ProfileError> {
        Ok(ron::from_str(s)?)
    }

    /// Serialize to a pretty JSON string
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(s: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Default for CameraProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CameraProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraProfile")
            .field("fixtures", &self.fixtures)
            .field("last_modified", &self.last_modified)
            .field("destination", &self.destination().map(|d| d.filename().to_string()))
            .finish()
    }
}

impl fmt::Display for CameraProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Camera: {} fixtures, {} ticks.", self.count(), self.duration())?;

        if let Some(destination) = self.destination() {
            let place = if destination.is_local() { "Local" } else { "Server" };
            write!(f, " {} profile \"{}\"", place, destination.filename())?;
        }

        Ok(())
    }
}
