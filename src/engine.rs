use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::models::Answer;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::links;

/// Seam between the HTTP layer and answer generation, so the router can be
/// tested against a stub.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    async fn answer(&self, video_id: &str, user_question: &str) -> Result<Answer>;
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f64,
}

/// What the model is asked to produce: the answer text and the transcript
/// offset (seconds) where the answer is found.
#[derive(Debug, Deserialize)]
struct SpanOutput {
    answer: String,
    start_value: f64,
}

/// Answers questions by calling an OpenAI-compatible chat-completions API
/// and asking the model for a `{answer, start_value}` JSON object.
pub struct LlmEngine {
    api_key: String,
    model: String,
    chat_url: String,
}

impl LlmEngine {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .groq_api_key
            .clone()
            .ok_or_else(|| AppError::Config("GROQ_API_KEY is not set".to_string()))?;

        Ok(Self {
            api_key,
            model: config.groq_model.clone(),
            chat_url: config.chat_url.clone(),
        })
    }
}

#[async_trait]
impl AnswerEngine for LlmEngine {
    async fn answer(&self, video_id: &str, user_question: &str) -> Result<Answer> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".into(),
                content: build_prompt(video_id, user_question),
            }],
            temperature: 0.5,
        };

        let client = reqwest::Client::new();
        let res = client
            .post(&self.chat_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Engine(e.to_string()))?;

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::Engine(e.to_string()))?;
        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AppError::Engine("Invalid response format from LLM".to_string()))?;

        let span = parse_span_output(reply)?;
        let start = span.start_value.round() as u64;

        Ok(Answer {
            answer: span.answer,
            youtube_link: links::watch_url(video_id, start),
            start,
        })
    }
}

fn build_prompt(video_id: &str, user_question: &str) -> String {
    format!(
        "You are answering a question about YouTube video '{video_id}'. \
         Answer the user query and give a detailed explanation of the reasoning \
         for your 'answer'. You MUST provide the 'start_value' (in seconds) \
         associated to the best answer.\n\
         Respond with a single JSON object of the form \
         {{\"answer\": string, \"start_value\": number}} and nothing else.\n\
         Question: {user_question}\n"
    )
}

/// Models often wrap JSON in a Markdown fence; strip it before parsing.
fn parse_span_output(reply: &str) -> Result<SpanOutput> {
    let trimmed = reply.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);

    serde_json::from_str(trimmed.trim())
        .map_err(|e| AppError::Engine(format!("LLM output was not the expected JSON: {}", e)))
}
