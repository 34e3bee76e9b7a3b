use anyhow::{Context, Result};

/// Application configuration loaded once at startup from environment
/// variables and the mounted SMTP secret file, then treated as read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub port: u16,
    /// Asset root holding `templates/`, `images/` and `js/`.
    pub static_dir: String,
    /// From address for notification mail.
    pub sender: String,
    /// Path of the resume file attached to request-my-resume mail.
    pub resume_path: String,
    /// Domain the success cookie is issued for; a cookie set for one domain
    /// cannot be read from another, so local testing needs `localhost`.
    pub cookie_domain: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Debug-level logging when set (`LOG_VERBOSITY=y`).
    pub verbose: bool,
    /// Append logs to `log_file` instead of stdout (`FILE_LOG=y`).
    pub log_to_file: bool,
    pub log_file: String,
    /// Flush the store and reload seed data at startup (`DB_SEED=y`).
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secret_file = std::env::var("SMTP_SECRET_FILE")
            .unwrap_or_else(|_| "/run/secrets/smtp_secret".to_string());
        let smtp_password = std::fs::read_to_string(&secret_file)
            .with_context(|| format!("failed to load smtp secret from '{secret_file}'"))?
            .trim_end()
            .to_string();

        Ok(Config {
            mongo_uri: std::env::var("MONGO_URI")
                .unwrap_or_else(|_| "mongodb://mongostore:27017".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            static_dir: require_env("DIR_STATIC")?,
            sender: require_env("GMAIL_SENDER")?,
            resume_path: require_env("RESUME_PATH")?,
            cookie_domain: std::env::var("COOKIE_DOMAIN")
                .unwrap_or_else(|_| "localhost".to_string()),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            smtp_username: require_env("SMTP_USERNAME")?,
            smtp_password,
            verbose: env_flag("LOG_VERBOSITY"),
            log_to_file: env_flag("FILE_LOG"),
            log_file: std::env::var("LOGF").unwrap_or_default(),
            seed: env_flag("DB_SEED"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// `y` means on, anything else (or unset) means off.
fn env_flag(key: &str) -> bool {
    std::env::var(key).map(|v| v == "y").unwrap_or(false)
}
