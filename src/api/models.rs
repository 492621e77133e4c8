use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Fallback shown when an error reply carries no `error` field at all.
pub const MISSING_ERROR_DETAIL: &str = "service reply carried no answer and no error detail";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub video_id: String,
    pub user_question: String,
}

/// A well-shaped answer from the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub youtube_link: String,
    /// Playback offset in whole seconds.
    pub start: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

/// Raw `/process` reply as it appears on the wire. Every field is optional:
/// classification happens after parsing, not during it.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessReply {
    pub answer: Option<String>,
    pub youtube_link: Option<String>,
    pub start: Option<f64>,
    pub error: Option<String>,
}

impl ProcessReply {
    /// A reply is an answer when both `answer` and `youtube_link` are
    /// present; anything else is the error branch, whether the service
    /// reported a failure or the shape is simply wrong.
    pub fn into_result(self) -> Result<Answer> {
        match (self.answer, self.youtube_link) {
            (Some(answer), Some(youtube_link)) => Ok(Answer {
                answer,
                youtube_link,
                start: self.start.map(|s| s.round() as u64).unwrap_or(0),
            }),
            _ => Err(AppError::Service(
                self.error
                    .unwrap_or_else(|| MISSING_ERROR_DETAIL.to_string()),
            )),
        }
    }
}
