use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use neon_core::{LevelId, Track};

use crate::error::AiServiceError;

use super::client::{AiClient, AiConfig, strip_code_fence};

const TUTOR_SYSTEM_PROMPT: &str =
    "You are a futuristic AI Tutor in a cyberpunk world. Be concise, encouraging, and stylish.";

/// Generated lesson for one level: theory, the task to solve, and editor
/// seed material. Field names match the JSON contract the model is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub title: String,
    pub theory_markdown: String,
    pub task_description: String,
    pub starter_code: String,
    pub hints: Vec<String>,
}

impl LessonContent {
    /// Fixed offline lesson substituted when generation fails, so the arena
    /// always has something to show.
    #[must_use]
    pub fn offline_fallback() -> Self {
        Self {
            title: "System Error: Offline Mode".to_string(),
            theory_markdown:
                "Could not establish uplink to AI Core. Please check your API Key configuration."
                    .to_string(),
            task_description: "Write 'print(\"Hello World\")' to test local systems.".to_string(),
            starter_code: "# AI Offline".to_string(),
            hints: vec![
                "Check internet connection".to_string(),
                "Check API Key".to_string(),
            ],
        }
    }
}

/// Lesson-authoring collaborator.
///
/// Implementations must tolerate their own failures: `generate` always
/// returns usable content, substituting a fallback rather than erroring.
#[async_trait]
pub trait LessonGenerator: Send + Sync {
    async fn generate(&self, track: Track, topic: &str, level_id: LevelId) -> LessonContent;
}

/// Lesson generator backed by the chat-completions API.
#[derive(Clone)]
pub struct AiLessonService {
    client: AiClient,
}

impl AiLessonService {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            client: AiClient::from_env(),
        }
    }

    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: AiClient::new(config),
        }
    }

    async fn request(
        &self,
        track: Track,
        topic: &str,
        level_id: LevelId,
    ) -> Result<LessonContent, AiServiceError> {
        let prompt = lesson_prompt(track, topic, level_id);
        let reply = self
            .client
            .complete(Some(TUTOR_SYSTEM_PROMPT), prompt)
            .await?;
        parse_lesson(&reply)
    }
}

#[async_trait]
impl LessonGenerator for AiLessonService {
    async fn generate(&self, track: Track, topic: &str, level_id: LevelId) -> LessonContent {
        match self.request(track, topic, level_id).await {
            Ok(lesson) => lesson,
            Err(err) => {
                warn!(error = %err, %track, %level_id, "lesson generation failed, serving offline lesson");
                LessonContent::offline_fallback()
            }
        }
    }
}

fn lesson_prompt(track: Track, topic: &str, level_id: LevelId) -> String {
    format!(
        r#"Create a programming lesson for {track} suitable for a cyberpunk-themed coding game.
Level {level_id}: Topic is "{topic}".

Return a JSON object with:
1. "title": A cool, tech-themed title for the lesson.
2. "theoryMarkdown": A concise explanation of the concept (approx 150-200 words). Use markdown for code blocks.
3. "taskDescription": A clear instruction on what the user needs to code to pass the level. Keep it engaging.
4. "starterCode": The initial code provided in the editor.
5. "hints": An array of 2 short hints strings."#
    )
}

pub(crate) fn parse_lesson(reply: &str) -> Result<LessonContent, AiServiceError> {
    Ok(serde_json::from_str(strip_code_fence(reply))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_reply_shape() {
        let reply = r###"{
            "title": "Ghost in the Shell Script",
            "theoryMarkdown": "## Output\nUse print.",
            "taskDescription": "Print your handle.",
            "starterCode": "# your code here",
            "hints": ["Use print", "Strings need quotes"]
        }"###;

        let lesson = parse_lesson(reply).unwrap();
        assert_eq!(lesson.title, "Ghost in the Shell Script");
        assert_eq!(lesson.hints.len(), 2);
    }

    #[test]
    fn parses_a_fenced_reply() {
        let reply = "```json\n{\"title\":\"T\",\"theoryMarkdown\":\"m\",\"taskDescription\":\"t\",\"starterCode\":\"s\",\"hints\":[]}\n```";
        let lesson = parse_lesson(reply).unwrap();
        assert_eq!(lesson.title, "T");
    }

    #[test]
    fn rejects_replies_missing_fields() {
        assert!(parse_lesson(r#"{"title": "only a title"}"#).is_err());
    }

    #[test]
    fn prompt_names_the_track_topic_and_level() {
        let prompt = lesson_prompt(Track::Html, "Anchor tags and Href attributes", LevelId::new(3));
        assert!(prompt.contains("HTML5"));
        assert!(prompt.contains("Level 3"));
        assert!(prompt.contains("Anchor tags and Href attributes"));
    }

    #[tokio::test]
    async fn unconfigured_generator_serves_the_offline_lesson() {
        let service = AiLessonService::new(None);
        let lesson = service
            .generate(Track::Python, "Printing output", LevelId::new(1))
            .await;
        assert_eq!(lesson, LessonContent::offline_fallback());
    }
}
