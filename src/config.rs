use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Sarvam.ai subscription key. Absent means translation is disabled and
    /// non-English users receive the English rendering.
    pub sarvam_api_key: Option<String>,
    pub sarvam_base_url: String,
    /// Optional path to an operator-supplied scheme catalog; the embedded
    /// catalog is used when unset.
    pub schemes_path: Option<String>,
    /// Timeout for a single translation call, in seconds. Expiry is treated
    /// like any other translation failure.
    pub translate_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            sarvam_api_key: std::env::var("SARVAM_AI")
                .or_else(|_| std::env::var("SARVAM_API_KEY"))
                .ok()
                .filter(|s| !s.trim().is_empty()),
            sarvam_base_url: std::env::var("SARVAM_BASE_URL")
                .unwrap_or_else(|_| "https://api.sarvam.ai".to_string())
                .trim_end_matches('/')
                .to_string(),
            schemes_path: std::env::var("SCHEMES_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("TRANSLATE_TIMEOUT_SECS must be a positive number of seconds")
                })
                .and_then(|secs: u64| {
                    if secs == 0 {
                        anyhow::bail!("TRANSLATE_TIMEOUT_SECS must be greater than zero");
                    }
                    Ok(secs)
                })?,
        };

        if !config.sarvam_base_url.starts_with("http://")
            && !config.sarvam_base_url.starts_with("https://")
        {
            anyhow::bail!("SARVAM_BASE_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Sarvam base URL: {}", config.sarvam_base_url);
        tracing::debug!("Server port: {}", config.port);
        if config.sarvam_api_key.is_none() {
            tracing::warn!("SARVAM_AI not set - translation disabled, replies stay in English");
        }
        if let Some(ref path) = config.schemes_path {
            tracing::info!("Using scheme catalog from: {}", path);
        }

        Ok(config)
    }
}
