use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use tube_qa::{
    AppState,
    api::routes::create_router,
    client::QaClient,
    config::Config,
    engine::LlmEngine,
    logging,
    session::{Phase, Session},
    view::TerminalView,
};

#[derive(Parser)]
#[command(name = "tube-qa", about = "Ask questions about a YouTube video")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one question and render the reply
    Ask {
        /// YouTube video id, e.g. X7gKBGVz4vs
        video_id: String,
        /// Free-text question about the video
        question: String,
        /// Override the /process endpoint URL
        #[arg(long, env = "TUBE_QA_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// Run the /process service
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Ask {
            video_id,
            question,
            endpoint,
        } => {
            let endpoint = endpoint.unwrap_or_else(|| config.endpoint.clone());
            let session = Session::new(QaClient::new(endpoint), TerminalView);
            session.submit(&video_id, &question).await;

            if session.phase() == Phase::Error {
                std::process::exit(1);
            }
        }
        Command::Serve => {
            let server_addr = config.server_addr;
            let engine = LlmEngine::from_config(&config)?;
            let app_state = AppState {
                config: Arc::new(config),
                engine: Arc::new(engine),
            };

            let app = create_router(app_state);
            let listener = TcpListener::bind(server_addr).await?;
            tracing::info!(%server_addr, "listening");
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
