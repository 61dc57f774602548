use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub hubspot_base_url: String,
    pub hubspot_token: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("DATABASE_URL cannot be empty");
                    }
                    if !url.starts_with("postgresql://") && !url.starts_with("postgres://") {
                        anyhow::bail!("DATABASE_URL must start with postgresql:// or postgres://");
                    }
                    Ok(url)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            hubspot_base_url: std::env::var("HUBSPOT_BASE_URL")
                .map_err(|_| anyhow::anyhow!("HUBSPOT_BASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("HUBSPOT_BASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("HUBSPOT_BASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            hubspot_token: std::env::var("HUBSPOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("HUBSPOT_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("HUBSPOT_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::debug!(
            "Database URL: {}...",
            &config.database_url[..20.min(config.database_url.len())]
        );
        tracing::debug!("HubSpot Base URL: {}", config.hubspot_base_url);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
