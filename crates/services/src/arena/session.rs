use neon_core::{LevelId, Track};

use crate::ai::{JudgeVerdict, LessonContent};

pub(crate) const CONSOLE_READY: &str = "// Console ready...";

/// Identifies the level attempt a judge request was issued for.
///
/// Captured when the level is opened and checked again when the verdict
/// lands, so a response that outlives the attempt (the user navigated away
/// or switched track mid-flight) can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTicket {
    track: Track,
    level_id: LevelId,
    ordinal: usize,
}

impl AttemptTicket {
    #[must_use]
    pub(crate) fn new(track: Track, level_id: LevelId, ordinal: usize) -> Self {
        Self {
            track,
            level_id,
            ordinal,
        }
    }

    #[must_use]
    pub fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub fn level_id(&self) -> LevelId {
        self.level_id
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

/// Live state of an open level: the lesson, the editor buffer, and the
/// console from the most recent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaSession {
    ticket: AttemptTicket,
    lesson: LessonContent,
    code: String,
    output: String,
    feedback: Option<String>,
    passed: bool,
}

impl ArenaSession {
    pub(crate) fn new(ticket: AttemptTicket, lesson: LessonContent) -> Self {
        let code = lesson.starter_code.clone();
        Self {
            ticket,
            lesson,
            code,
            output: CONSOLE_READY.to_string(),
            feedback: None,
            passed: false,
        }
    }

    #[must_use]
    pub fn ticket(&self) -> AttemptTicket {
        self.ticket
    }

    #[must_use]
    pub fn lesson(&self) -> &LessonContent {
        &self.lesson
    }

    /// Current editor buffer; starts as the lesson's starter code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Whether any run of this attempt has been judged successful. Latches:
    /// a later failed run does not revoke a pass.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Display name for the editor buffer, e.g. `main.py`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("main.{}", self.ticket.track.file_extension())
    }

    pub(crate) fn set_code(&mut self, code: String) {
        self.code = code;
    }

    pub(crate) fn record_verdict(&mut self, verdict: JudgeVerdict) {
        self.output = if verdict.output.is_empty() {
            "No output".to_string()
        } else {
            verdict.output
        };
        self.feedback = Some(verdict.feedback);
        if verdict.is_success {
            self.passed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ArenaSession {
        let ticket = AttemptTicket::new(Track::Python, LevelId::new(1), 0);
        ArenaSession::new(ticket, LessonContent::offline_fallback())
    }

    #[test]
    fn new_session_seeds_editor_and_console() {
        let session = session();
        assert_eq!(session.code(), session.lesson().starter_code);
        assert_eq!(session.output(), CONSOLE_READY);
        assert_eq!(session.feedback(), None);
        assert!(!session.passed());
        assert_eq!(session.file_name(), "main.py");
    }

    #[test]
    fn empty_judge_output_renders_as_no_output() {
        let mut session = session();
        session.record_verdict(JudgeVerdict {
            output: String::new(),
            is_success: false,
            feedback: "Nothing printed.".to_string(),
        });
        assert_eq!(session.output(), "No output");
        assert_eq!(session.feedback(), Some("Nothing printed."));
    }

    #[test]
    fn a_pass_latches_across_later_failures() {
        let mut session = session();
        session.record_verdict(JudgeVerdict {
            output: "ok".to_string(),
            is_success: true,
            feedback: "Nice.".to_string(),
        });
        assert!(session.passed());

        session.record_verdict(JudgeVerdict::connection_failure());
        assert!(session.passed());
    }
}
