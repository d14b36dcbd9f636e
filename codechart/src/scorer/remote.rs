use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{LineScorer, ScorerError};
use crate::config::ScorerConfig;

/// Line scorer backed by an OpenAI-compatible chat-completions endpoint.
///
/// One batch request per source text, JSON response format, bounded timeout.
/// All failures are absorbed: `score_lines` logs at debug level and returns
/// the empty map so the engine degrades to heuristic scoring.
pub struct RemoteScorer {
    config: ScorerConfig,
    api_key: String,
    agent: ureq::Agent,
}

fn make_agent(timeout: Duration) -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // We handle status codes ourselves
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

fn scoring_prompt(source: &str) -> String {
    format!(
        "Analyze the complexity of this code.\n\
         For each line containing control flow (if, for, while, return, etc.), \
         assign a complexity integer (1-10).\n\
         1 = Simple assignment/return.\n\
         3 = Basic condition.\n\
         5+ = Nested loop or complex logic.\n\n\
         Return ONLY a JSON object where keys are the EXACT trimmed lines of code \
         and values are scores.\n\
         Example: {{ \"if (x > 5):\": 2, \"for i in range(10):\": 4 }}\n\n\
         Code:\n{source}"
    )
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    response_format: ResponseFormat<'a>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl RemoteScorer {
    /// Creates a scorer with an explicit API key.
    #[must_use]
    pub fn new(config: ScorerConfig, api_key: impl Into<String>) -> Self {
        let agent = make_agent(Duration::from_secs(config.timeout_secs));
        Self {
            config,
            api_key: api_key.into(),
            agent,
        }
    }

    /// Creates a scorer reading the API key from the configured
    /// environment variable.
    pub fn from_env(config: ScorerConfig) -> Result<Self, ScorerError> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| ScorerError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self::new(config, api_key))
    }

    fn request_scores(&self, source: &str) -> Result<FxHashMap<String, usize>, ScorerError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![Message {
                role: "user",
                content: scoring_prompt(source),
            }],
            temperature: 0.1,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .agent
            .post(self.config.api_url.as_str())
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|err| ScorerError::Request(err.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|err| ScorerError::Request(err.to_string()))?;
        if status >= 400 {
            return Err(ScorerError::Api {
                status,
                message: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default();
        let raw: FxHashMap<String, serde_json::Value> = serde_json::from_str(content)?;

        // Non-integer values are skipped, scores clamped into 1..=10.
        Ok(raw
            .into_iter()
            .filter_map(|(line, value)| {
                value
                    .as_u64()
                    .map(|score| (line, usize::try_from(score.clamp(1, 10)).unwrap_or(10)))
            })
            .collect())
    }
}

impl LineScorer for RemoteScorer {
    fn score_lines(&self, source: &str) -> FxHashMap<String, usize> {
        match self.request_scores(source) {
            Ok(scores) => scores,
            Err(err) => {
                debug!(error = %err, "line scoring unavailable, falling back to heuristic");
                FxHashMap::default()
            }
        }
    }
}
