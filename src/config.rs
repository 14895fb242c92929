use anyhow::Context;

/// Process-level settings, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_allow_origin: String,
    pub templates_dir: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let cors_allow_origin =
            std::env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());
        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());

        Ok(AppConfig {
            host,
            port,
            database_url,
            cors_allow_origin,
            templates_dir,
        })
    }
}
