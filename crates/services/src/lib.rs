#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod arena;
pub mod error;

pub use ai::{
    AiConfig, AiJudgeService, AiLessonService, CodeJudge, JudgeVerdict, LessonContent,
    LessonGenerator,
};
pub use app_services::AppServices;
pub use arena::{AppView, ArenaService, ArenaSession, AttemptTicket};
pub use error::{AiServiceError, AppServicesError, ArenaError};
