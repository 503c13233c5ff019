#![forbid(unsafe_code)]

pub mod curriculum;
pub mod model;

pub use curriculum::Catalog;
pub use model::{
    LevelDefinition, LevelId, LevelStatus, MaterializedLevel, ParseTrackError, ProgressRecord,
    Track,
};
