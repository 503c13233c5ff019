use serde::{Deserialize, Serialize};

use crate::model::level::LevelStatus;
use crate::model::track::Track;

/// The single mutable fact of the system: which track is active and how many
/// of its levels have been completed.
///
/// `unlocked_count` uses 0-based frontier semantics: the level at ordinal
/// `unlocked_count` is the one unlocked-but-not-completed level; everything
/// below is completed, everything above is locked. `unlocked_count == n` is a
/// valid terminal state meaning the whole track is done.
///
/// Progress is single-track memory: switching tracks discards the previous
/// track's count entirely. That is the literal persisted contract, not an
/// accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(rename = "unlockedLevelIndex", default)]
    unlocked_count: u32,
    #[serde(rename = "language", default)]
    track: Track,
}

impl ProgressRecord {
    /// Fresh record for a track, with no levels completed.
    #[must_use]
    pub fn new(track: Track) -> Self {
        Self {
            unlocked_count: 0,
            track,
        }
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    /// Number of completed levels; also the frontier ordinal.
    #[must_use]
    pub fn unlocked_count(&self) -> u32 {
        self.unlocked_count
    }

    /// Switch the active track.
    ///
    /// Same track is an identity; a different track resets progress to a
    /// fresh record. Prior progress in the old track is discarded.
    #[must_use]
    pub fn switch_track(self, new_track: Track) -> Self {
        if new_track == self.track {
            self
        } else {
            Self::new(new_track)
        }
    }

    /// Frontier-only advance.
    ///
    /// Advances the unlock count by exactly one iff `completed_ordinal` is
    /// the current frontier. Completing an already-completed level (or a
    /// locked one the caller shouldn't have reached) is an identity no-op,
    /// so replaying a completion can never double-advance and levels can
    /// never be skipped.
    #[must_use]
    pub fn advance(self, completed_ordinal: usize) -> Self {
        if completed_ordinal == self.unlocked_count as usize {
            Self {
                unlocked_count: self.unlocked_count + 1,
                track: self.track,
            }
        } else {
            self
        }
    }

    /// Derived unlock state for the level at `ordinal`.
    #[must_use]
    pub fn status_of(&self, ordinal: usize) -> LevelStatus {
        let frontier = self.unlocked_count as usize;
        if ordinal < frontier {
            LevelStatus::Completed
        } else if ordinal == frontier {
            LevelStatus::Frontier
        } else {
            LevelStatus::Locked
        }
    }

    /// Restore the `unlocked_count <= catalog_len` invariant after loading
    /// persisted data that may have been written against a longer catalog.
    #[must_use]
    pub fn clamp_to(self, catalog_len: usize) -> Self {
        let cap = u32::try_from(catalog_len).unwrap_or(u32::MAX);
        Self {
            unlocked_count: self.unlocked_count.min(cap),
            track: self.track,
        }
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new(Track::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
