pub mod api;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod links;
pub mod logging;
pub mod session;
pub mod view;

use std::sync::Arc;

use config::Config;
use engine::AnswerEngine;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<dyn AnswerEngine>,
}
