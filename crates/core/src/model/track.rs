use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named curriculum the user can practice: one of the fixed set of
/// language tracks plus the HTML and app-design paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Track {
    #[default]
    Python,
    JavaScript,
    Cpp,
    Java,
    Html,
    AppDesign,
}

impl Track {
    /// Every recognized track, in roster order.
    pub const ALL: [Track; 6] = [
        Track::Python,
        Track::JavaScript,
        Track::Cpp,
        Track::Java,
        Track::Html,
        Track::AppDesign,
    ];

    /// Wire name used in persisted state and collaborator prompts.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Track::Python => "Python",
            Track::JavaScript => "JavaScript",
            Track::Cpp => "C++",
            Track::Java => "Java",
            Track::Html => "HTML5",
            Track::AppDesign => "App Architect",
        }
    }

    /// Resolves a wire name back to a track, or `None` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|track| track.name() == name)
    }

    /// File extension for code written in this track's editor.
    #[must_use]
    pub fn file_extension(&self) -> &'static str {
        match self {
            Track::Python => "py",
            Track::JavaScript => "js",
            Track::Cpp => "cpp",
            Track::Java => "java",
            Track::Html => "html",
            Track::AppDesign => "txt",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for strictly parsing a track from its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrackError {
    raw: String,
}

impl fmt::Display for ParseTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized track name: {}", self.raw)
    }
}

impl std::error::Error for ParseTrackError {}

impl FromStr for Track {
    type Err = ParseTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::from_name(s).ok_or_else(|| ParseTrackError { raw: s.to_string() })
    }
}

impl Serialize for Track {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Persisted state may carry a name written by an older or newer build.
// Decoding is lenient: anything unrecognized becomes the default track.
impl<'de> Deserialize<'de> for Track {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Track::from_name(&raw).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_for_all_tracks() {
        for track in Track::ALL {
            assert_eq!(Track::from_name(track.name()), Some(track));
        }
    }

    #[test]
    fn default_track_is_python() {
        assert_eq!(Track::default(), Track::Python);
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "Rust".parse::<Track>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized track name: Rust");
    }

    #[test]
    fn deserialize_is_lenient_about_unknown_names() {
        let track: Track = serde_json::from_str("\"COBOL\"").unwrap();
        assert_eq!(track, Track::default());
    }

    #[test]
    fn serialize_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Track::Html).unwrap(), "\"HTML5\"");
        assert_eq!(
            serde_json::to_string(&Track::AppDesign).unwrap(),
            "\"App Architect\""
        );
    }

    #[test]
    fn file_extensions() {
        assert_eq!(Track::Python.file_extension(), "py");
        assert_eq!(Track::Html.file_extension(), "html");
        assert_eq!(Track::AppDesign.file_extension(), "txt");
    }
}
