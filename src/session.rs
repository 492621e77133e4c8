use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::models::AskRequest;
use crate::client::QaClient;
use crate::links;
use crate::view::View;

/// Where a session stands with respect to its latest submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Waiting,
    Success,
    Error,
}

/// The submission handler: one instance per page/terminal session.
///
/// Submissions may overlap; each one takes a generation number, and a reply
/// whose generation is no longer current is dropped without rendering, so a
/// slow earlier request can never overwrite a newer one's output.
pub struct Session<V: View> {
    client: QaClient,
    view: V,
    generation: AtomicU64,
    phase: Mutex<Phase>,
}

impl<V: View> Session<V> {
    pub fn new(client: QaClient, view: V) -> Self {
        Self {
            client,
            view,
            generation: AtomicU64::new(0),
            phase: Mutex::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap()
    }

    fn set_phase(&self, phase: Phase) {
        *self.phase.lock().unwrap() = phase;
    }

    /// Run one submission to completion. The waiting indicator renders
    /// before the request is dispatched; the final render happens only if
    /// no newer submission has started in the meantime.
    pub async fn submit(&self, video_id: &str, user_question: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.set_phase(Phase::Waiting);
        self.view.waiting();

        let req = AskRequest {
            video_id: video_id.to_string(),
            user_question: user_question.to_string(),
        };
        let outcome = self.client.ask(&req).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "dropping stale reply");
            return;
        }

        match outcome {
            Ok(answer) => {
                let player_url = links::embed_url(&req.video_id, answer.start);
                self.view.success(&answer, &player_url);
                self.set_phase(Phase::Success);
            }
            Err(err) => {
                self.view.error(&err.to_string());
                self.set_phase(Phase::Error);
            }
        }
    }
}
