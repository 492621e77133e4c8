use std::sync::{Arc, Mutex};
use std::time::Duration;

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use tube_qa::api::models::Answer;
use tube_qa::client::QaClient;
use tube_qa::session::{Phase, Session};
use tube_qa::view::View;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Waiting,
    Success {
        answer: String,
        link: String,
        player: String,
    },
    Error(String),
}

/// Test double for the page: records every render call in order.
struct RecordingView {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingView {
    fn new() -> (Self, Arc<Mutex<Vec<Event>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

impl View for RecordingView {
    fn waiting(&self) {
        self.events.lock().unwrap().push(Event::Waiting);
    }

    fn success(&self, answer: &Answer, player_url: &str) {
        self.events.lock().unwrap().push(Event::Success {
            answer: answer.answer.clone(),
            link: answer.youtube_link.clone(),
            player: player_url.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Error(message.to_string()));
    }
}

fn session_for(server: &MockServer) -> (Session<RecordingView>, Arc<Mutex<Vec<Event>>>) {
    let (view, events) = RecordingView::new();
    let session = Session::new(QaClient::new(server.url("/process")), view);
    (session, events)
}

#[tokio::test]
async fn well_shaped_reply_renders_answer_link_and_player_url() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/process");
            then.status(200)
                .json_body(json!({"answer": "A", "youtube_link": "L", "start": 5}));
        })
        .await;

    let (session, events) = session_for(&server);
    session.submit("abc", "what happens?").await;

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            Event::Waiting,
            Event::Success {
                answer: "A".to_string(),
                link: "L".to_string(),
                player: "https://www.youtube.com/embed/abc?start=5".to_string(),
            },
        ]
    );
    assert_eq!(session.phase(), Phase::Success);
}

#[tokio::test]
async fn error_reply_renders_error_and_never_touches_the_player() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/process");
            then.status(400).json_body(json!({"error": "bad id"}));
        })
        .await;

    let (session, events) = session_for(&server);
    session.submit("abc", "what happens?").await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], Event::Waiting);
    match &events[1] {
        Event::Error(msg) => assert!(msg.contains("bad id"), "got {msg:?}"),
        other => panic!("expected error render, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Error);
}

#[tokio::test]
async fn unreachable_service_renders_transport_error() {
    // Nothing listens on port 1.
    let (view, events) = RecordingView::new();
    let session = Session::new(QaClient::new("http://127.0.0.1:1/process"), view);

    session.submit("abc", "what happens?").await;

    let events = events.lock().unwrap();
    assert_eq!(events[0], Event::Waiting);
    match &events[1] {
        Event::Error(msg) => assert!(!msg.is_empty()),
        other => panic!("expected error render, got {other:?}"),
    }
    assert_eq!(session.phase(), Phase::Error);
}

#[tokio::test]
async fn non_json_body_renders_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/process");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let (session, events) = session_for(&server);
    session.submit("abc", "what happens?").await;

    let events = events.lock().unwrap();
    assert_eq!(events[0], Event::Waiting);
    assert!(matches!(events[1], Event::Error(_)));
    assert_eq!(session.phase(), Phase::Error);
}

#[tokio::test]
async fn identical_submissions_render_identically() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/process");
            then.status(200)
                .json_body(json!({"answer": "A", "youtube_link": "L", "start": 5}));
        })
        .await;

    let (session, events) = session_for(&server);
    session.submit("abc", "what happens?").await;
    session.submit("abc", "what happens?").await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0], Event::Waiting);
    assert_eq!(events[2], Event::Waiting);
    assert_eq!(events[1], events[3]);
}

#[tokio::test]
async fn stale_reply_never_overwrites_a_newer_submission() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/process")
                .json_body_partial(r#"{"user_question": "first"}"#);
            then.status(200)
                .delay(Duration::from_millis(300))
                .json_body(json!({"answer": "OLD", "youtube_link": "L1", "start": 1}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/process")
                .json_body_partial(r#"{"user_question": "second"}"#);
            then.status(200)
                .json_body(json!({"answer": "NEW", "youtube_link": "L2", "start": 2}));
        })
        .await;

    let (session, events) = session_for(&server);
    let session = Arc::new(session);

    let slow = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("abc", "first").await })
    };
    // Let the first submission get its request on the wire.
    tokio::time::sleep(Duration::from_millis(100)).await;
    session.submit("abc", "second").await;
    slow.await.unwrap();

    let events = events.lock().unwrap();
    let successes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            Event::Success { answer, .. } => Some(answer.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(successes, vec!["NEW"], "stale reply must be dropped");
    assert_eq!(session.phase(), Phase::Success);
}
