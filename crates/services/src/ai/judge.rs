use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use neon_core::Track;

use crate::error::AiServiceError;

use super::client::{AiClient, AiConfig, strip_code_fence};

/// Outcome of judging one submission: simulated output, pass/fail, and
/// feedback for the user. Field names match the model's JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeVerdict {
    pub output: String,
    pub is_success: bool,
    pub feedback: String,
}

impl JudgeVerdict {
    /// Fixed failure verdict substituted when the judge cannot be reached.
    #[must_use]
    pub fn connection_failure() -> Self {
        Self {
            output: "Execution Error".to_string(),
            is_success: false,
            feedback: "Failed to connect to judgment matrix.".to_string(),
        }
    }
}

/// Code-judging collaborator: an opaque oracle that simulates execution and
/// decides success. The arena never inspects code content itself.
///
/// Implementations must tolerate their own failures: `judge` always returns
/// a verdict, substituting a failed one rather than erroring.
#[async_trait]
pub trait CodeJudge: Send + Sync {
    async fn judge(&self, track: Track, task_description: &str, code: &str) -> JudgeVerdict;
}

/// Judge backed by the chat-completions API.
#[derive(Clone)]
pub struct AiJudgeService {
    client: AiClient,
}

impl AiJudgeService {
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
        task_description: &str,
        code: &str,
    ) -> Result<JudgeVerdict, AiServiceError> {
        let prompt = judge_prompt(track, task_description, code);
        let reply = self.client.complete(None, prompt).await?;
        parse_verdict(&reply)
    }
}

#[async_trait]
impl CodeJudge for AiJudgeService {
    async fn judge(&self, track: Track, task_description: &str, code: &str) -> JudgeVerdict {
        match self.request(track, task_description, code).await {
            Ok(verdict) => verdict,
            Err(err) => {
                warn!(error = %err, %track, "judging failed, serving failure verdict");
                JudgeVerdict::connection_failure()
            }
        }
    }
}

fn judge_prompt(track: Track, task_description: &str, code: &str) -> String {
    format!(
        r#"Act as a code execution engine and judge.
Language: {track}
Task: {task_description}
User Code:
```
{code}
```

1. Simulate the output of the code.
2. Determine if the code correctly solves the task.
3. Provide brief feedback.

Return a JSON object with "output" (simulated stdout or return value), "isSuccess" (boolean), and "feedback" (constructive feedback or error message)."#
    )
}

pub(crate) fn parse_verdict(reply: &str) -> Result<JudgeVerdict, AiServiceError> {
    Ok(serde_json::from_str(strip_code_fence(reply))?)
}
