// SPDX-License-Identifier: MIT OR Apache-2.0
//! Preview settings, loaded from a RON file.

use aperture_camera::{Position, TICKS_PER_SECOND};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// How a profile is previewed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Settings format version
    pub version: u32,
    /// Ticks per second, used to print timestamps
    pub ticks_per_second: u32,
    /// Print every n-th tick
    pub sample_stride: u64,
    /// Sub-tick fraction passed to every sample
    pub partial: f32,
    /// Placement fixture commands are issued from, and the starting camera
    pub origin: Position,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            ticks_per_second: TICKS_PER_SECOND,
            sample_stride: 5,
            partial: 0.0,
            origin: Position::default(),
        }
    }
}

impl PreviewSettings {
    /// Load settings from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Parse settings from RON text
    pub fn from_ron(content: &str) -> std::io::Result<Self> {
        let settings: PreviewSettings = ron::from_str(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Settings version {} is newer than supported version {}",
                    settings.version, SETTINGS_FORMAT_VERSION
                ),
            ));
        }

        Ok(settings)
    }

    /// Convert a tick to seconds
    pub fn seconds(&self, tick: u64) -> f64 {
        tick as f64 / f64::from(self.ticks_per_second.max(1))
    }
}
