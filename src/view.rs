use crate::api::models::Answer;

/// Rendering surface for the three submission states. The real page is one
/// implementation; tests inject a recording double.
///
/// Each render call fully replaces whatever the previous call showed.
pub trait View: Send + Sync {
    fn waiting(&self);
    fn success(&self, answer: &Answer, player_url: &str);
    fn error(&self, message: &str);
}

/// Renders to stdout, mirroring the blocks the web page showed.
pub struct TerminalView;

impl View for TerminalView {
    fn waiting(&self) {
        println!("Just a sec ⏱️");
    }

    fn success(&self, answer: &Answer, player_url: &str) {
        println!();
        println!("RAG Answer 🧠");
        println!("{}", answer.answer);
        println!();
        println!("View on YouTube ↗️  {}", answer.youtube_link);
        println!("Player: {}", player_url);
    }

    fn error(&self, message: &str) {
        println!();
        println!("Error: {}", message);
    }
}
