use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];

pub struct Config {
    pub database_url: String,

    pub bind_addr: String,
    pub cors_origins: Vec<String>,
    pub upload_dir: String,

    /// Whether the gallery collaborator is configured for this deployment.
    pub gallery_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            Err(_) => DEFAULT_CORS_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());

        let gallery_enabled = match std::env::var("GALLERY_ENABLED") {
            Ok(raw) => matches!(raw.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"),
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            bind_addr: format!("0.0.0.0:{port}"),
            cors_origins,
            upload_dir,
            gallery_enabled,
        })
    }
}
