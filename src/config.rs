use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{AppError, Result};

pub const DEFAULT_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Endpoint the `ask` command posts questions to.
    pub endpoint: String,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub chat_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;
        let server_addr = SocketAddr::new(ip, port);

        let endpoint = env::var("TUBE_QA_ENDPOINT")
            .unwrap_or_else(|_| format!("http://{}/process", server_addr));

        let groq_api_key = env::var("GROQ_API_KEY").ok();
        let groq_model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let chat_url = env::var("GROQ_CHAT_URL").unwrap_or_else(|_| DEFAULT_CHAT_URL.to_string());

        Ok(Config {
            server_addr,
            endpoint,
            groq_api_key,
            groq_model,
            chat_url,
        })
    }
}
