use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a level within one track's catalog.
///
/// Distinct from the level's ordinal: the id is display data, the ordinal is
/// the zero-based position in catalog order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(u32);

impl LevelId {
    /// Creates a new `LevelId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelId({})", self.0)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── LEVEL DEFINITION ──────────────────────────────────────────────────────────
//

/// Immutable curriculum entry: what a level is about, independent of any
/// user's progress.
///
/// The topic feeds the lesson-generation prompt; title and description are
/// display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDefinition {
    id: LevelId,
    title: &'static str,
    description: &'static str,
    topic: &'static str,
}

impl LevelDefinition {
    #[must_use]
    pub const fn new(
        id: u32,
        title: &'static str,
        description: &'static str,
        topic: &'static str,
    ) -> Self {
        Self {
            id: LevelId::new(id),
            title,
            description,
            topic,
        }
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn topic(&self) -> &'static str {
        self.topic
    }
}

//
// ─── MATERIALIZED VIEW ─────────────────────────────────────────────────────────
//

/// Unlock state of a level relative to the current progress frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    /// Above the frontier; not yet reachable.
    Locked,
    /// The single unlocked-but-not-completed level at the frontier ordinal.
    Frontier,
    /// Below the frontier.
    Completed,
}

impl LevelStatus {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, LevelStatus::Locked)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, LevelStatus::Completed)
    }

    #[must_use]
    pub fn is_frontier(&self) -> bool {
        matches!(self, LevelStatus::Frontier)
    }
}

/// A catalog entry annotated with its derived unlock state.
///
/// Derived on demand from the catalog and the progress record; never stored,
/// so the flags cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializedLevel {
    definition: &'static LevelDefinition,
    ordinal: usize,
    status: LevelStatus,
}

impl MaterializedLevel {
    #[must_use]
    pub(crate) fn new(
        definition: &'static LevelDefinition,
        ordinal: usize,
        status: LevelStatus,
    ) -> Self {
        Self {
            definition,
            ordinal,
            status,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &'static LevelDefinition {
        self.definition
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.definition.id()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.definition.title()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.definition.description()
    }

    #[must_use]
    pub fn topic(&self) -> &'static str {
        self.definition.topic()
    }

    /// Zero-based position within the active track's catalog order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn status(&self) -> LevelStatus {
        self.status
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status.is_locked()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
