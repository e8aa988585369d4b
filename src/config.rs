use serde::Deserialize;

/// Default chat-completions endpoint base, overridable for tests.
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_RISK_POLICY_PATH: &str = "policies/risk_policy.txt";
const DEFAULT_INTEREST_POLICY_PATH: &str = "policies/interest_rate_policy.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub risk_policy_path: String,
    pub interest_policy_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("OPENAI_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            openai_model: std::env::var("OPENAI_MODEL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            risk_policy_path: std::env::var("RISK_POLICY_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RISK_POLICY_PATH.to_string()),
            interest_policy_path: std::env::var("INTEREST_POLICY_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INTEREST_POLICY_PATH.to_string()),
        };

        let base = url::Url::parse(&config.openai_base_url)
            .map_err(|e| anyhow::anyhow!("OPENAI_BASE_URL is not a valid URL: {}", e))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!("OPENAI_BASE_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("OpenAI Base URL: {}", config.openai_base_url);
        tracing::debug!("OpenAI Model: {}", config.openai_model);
        tracing::debug!("Risk Policy Path: {}", config.risk_policy_path);
        tracing::debug!("Interest Policy Path: {}", config.interest_policy_path);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
