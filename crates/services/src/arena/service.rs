use std::sync::Arc;

use tracing::debug;

use neon_core::{Catalog, LevelId, MaterializedLevel, ProgressRecord, Track};
use storage::progress_store::ProgressStore;

use crate::ai::{CodeJudge, JudgeVerdict, LessonGenerator};
use crate::error::ArenaError;

use super::session::{ArenaSession, AttemptTicket};

/// Which screen the host should be presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Track roster.
    Landing,
    /// Level map for the active track.
    Roadmap,
    /// The coding interface for an open level.
    Arena,
}

/// Single-writer state cell for the whole practice flow.
///
/// Owns the live progress record and the optional open-level session; the
/// host threads user intents through `&mut self`, which serializes every
/// mutation. Derived level state is recomputed from the record on each read,
/// never cached.
pub struct ArenaService {
    store: ProgressStore,
    lessons: Arc<dyn LessonGenerator>,
    judge: Arc<dyn CodeJudge>,
    progress: ProgressRecord,
    view: AppView,
    session: Option<ArenaSession>,
}

impl ArenaService {
    /// Build the controller, restoring persisted progress. Starts on the
    /// landing view with no level open.
    pub async fn restore(
        store: ProgressStore,
        lessons: Arc<dyn LessonGenerator>,
        judge: Arc<dyn CodeJudge>,
    ) -> Self {
        let progress = store.load().await;
        Self {
            store,
            lessons,
            judge,
            progress,
            view: AppView::Landing,
            session: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> AppView {
        self.view
    }

    #[must_use]
    pub fn progress(&self) -> ProgressRecord {
        self.progress
    }

    #[must_use]
    pub fn session(&self) -> Option<&ArenaSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::for_track(self.progress.track())
    }

    /// Materialize the active track's levels with their current unlock
    /// state. Fresh on every call.
    #[must_use]
    pub fn roadmap(&self) -> Vec<MaterializedLevel> {
        self.catalog().materialize(&self.progress)
    }

    /// Activate a track and show its roadmap.
    ///
    /// Picking the already-active track keeps its progress; any other track
    /// starts fresh and the previous track's progress is discarded, which is
    /// the persisted contract.
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::Storage` if persisting the reset record fails.
    pub async fn select_track(&mut self, track: Track) -> Result<(), ArenaError> {
        let next = self.progress.switch_track(track);
        if next != self.progress {
            self.progress = next;
            self.store.save(&self.progress).await?;
        }
        self.session = None;
        self.view = AppView::Roadmap;
        Ok(())
    }

    /// Open a level by id and generate its lesson.
    ///
    /// An id that does not exist in the active track (e.g. left over from a
    /// previously selected track) falls over to the first level. Lesson
    /// generation never fails past the collaborator boundary, so this always
    /// produces a session.
    pub async fn open_level(&mut self, id: LevelId) -> &ArenaSession {
        let level = self.catalog().resolve(&self.progress, id);
        let ticket = AttemptTicket::new(self.progress.track(), level.id(), level.ordinal());
        let lesson = self
            .lessons
            .generate(ticket.track(), level.topic(), level.id())
            .await;
        self.view = AppView::Arena;
        self.session.insert(ArenaSession::new(ticket, lesson))
    }

    /// Replace the open session's editor buffer. No-op when no level is open.
    pub fn set_code(&mut self, code: impl Into<String>) {
        if let Some(session) = &mut self.session {
            session.set_code(code.into());
        }
    }

    /// Judge the current buffer against the open lesson's task.
    ///
    /// The attempt ticket captured at open time travels with the request;
    /// the verdict is applied through [`Self::apply_verdict`] so a stale
    /// response cannot touch a different level or track.
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::NoActiveLevel` if no level is open.
    pub async fn run_code(&mut self) -> Result<&ArenaSession, ArenaError> {
        let Some(session) = &self.session else {
            return Err(ArenaError::NoActiveLevel);
        };
        let ticket = session.ticket();
        let task = session.lesson().task_description.clone();
        let code = session.code().to_owned();

        let verdict = self.judge.judge(ticket.track(), &task, &code).await;
        self.apply_verdict(ticket, verdict);

        self.session.as_ref().ok_or(ArenaError::NoActiveLevel)
    }

    /// Land a judge verdict on the attempt it was issued for.
    ///
    /// A verdict whose ticket no longer matches the open session (or whose
    /// track is no longer active) is dropped without mutating anything;
    /// progress can only ever move for the attempt the user is looking at.
    pub fn apply_verdict(&mut self, ticket: AttemptTicket, verdict: JudgeVerdict) {
        if ticket.track() != self.progress.track() {
            debug!(track = %ticket.track(), "dropping judge verdict for an abandoned track");
            return;
        }
        let Some(session) = &mut self.session else {
            debug!("dropping judge verdict with no level open");
            return;
        };
        if session.ticket() != ticket {
            debug!(level = %ticket.level_id(), "dropping judge verdict for a stale attempt");
            return;
        }
        session.record_verdict(verdict);
    }

    /// Leave the open level and advance past it if its attempt passed.
    ///
    /// The advance is frontier-only: completing an already-completed level
    /// (replayed via the roadmap) or anything else off the frontier leaves
    /// progress untouched. An unpassed attempt just returns to the roadmap.
    ///
    /// # Errors
    ///
    /// Returns `ArenaError::NoActiveLevel` if no level is open, or
    /// `ArenaError::Storage` if persisting the advanced record fails.
    pub async fn complete_level(&mut self) -> Result<(), ArenaError> {
        let Some(session) = self.session.take() else {
            return Err(ArenaError::NoActiveLevel);
        };
        if session.passed() {
            let next = self.progress.advance(session.ticket().ordinal());
            if next != self.progress {
                self.progress = next;
                self.store.save(&self.progress).await?;
            }
        }
        self.view = AppView::Roadmap;
        Ok(())
    }

    /// Abandon the open level without advancing.
    pub fn exit_level(&mut self) {
        self.session = None;
        self.view = AppView::Roadmap;
    }

    /// Return to the track roster. Any open level is abandoned.
    pub fn back_to_landing(&mut self) {
        self.session = None;
        self.view = AppView::Landing;
    }
}
