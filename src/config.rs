use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_path: PathBuf,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub session_secret_key: String,
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let data_path = env::var("DATA_PATH")
            .unwrap_or_else(|_| "./db.json".to_string())
            .into();

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let session_secret_key = env::var("SESSION_SECRET_KEY")
            .map_err(|_| "SESSION_SECRET_KEY must be set for session signing")?;
        if session_secret_key.is_empty() {
            return Err("SESSION_SECRET_KEY must not be empty".to_string());
        }

        let log_requests = match env::var("LOG_REQUESTS") {
            Ok(v) => parse_flag(&v).ok_or("Invalid LOG_REQUESTS")?,
            Err(_) => true,
        };

        Ok(Config {
            server_host,
            server_port,
            data_path,
            allowed_origins,
            environment,
            session_secret_key,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
