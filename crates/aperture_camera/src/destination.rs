// SPDX-License-Identifier: MIT OR Apache-2.0
//! Where camera profiles are saved to.

use crate::profile::CameraProfile;

/// External sink that persists camera profiles
///
/// Implemented by the persistence layer (local files, remote servers). A
/// profile only keeps a weak handle to its destination, so the caller owns it.
pub trait Destination: Send + Sync {
    /// Persist the profile
    ///
    /// Failures are reported by the destination itself.
    fn save(&self, profile: &CameraProfile);

    /// File name the profile is stored under
    fn filename(&self) -> &str;

    /// Whether the profile is stored locally rather than on a server
    fn is_local(&self) -> bool {
        true
    }
}
