use crate::config::Config;

/// The two static policy documents, loaded once at startup.
///
/// Their text is embedded verbatim into every prompt for the life of the
/// process; it is never parsed, truncated, or reformatted.
#[derive(Debug, Clone)]
pub struct PolicyDocuments {
    /// Full text of the overall risk policy.
    pub risk: String,
    /// Full text of the interest-rate policy.
    pub interest: String,
}

impl PolicyDocuments {
    /// Reads both policy documents from the configured paths.
    ///
    /// A missing or empty document is a startup failure rather than a
    /// deferred per-request crash.
    pub async fn load(config: &Config) -> anyhow::Result<Self> {
        let risk = read_policy(&config.risk_policy_path).await?;
        let interest = read_policy(&config.interest_policy_path).await?;

        tracing::info!(
            "Policy documents loaded: risk ({} bytes), interest ({} bytes)",
            risk.len(),
            interest.len()
        );

        Ok(Self { risk, interest })
    }
}

async fn read_policy(path: &str) -> anyhow::Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read policy document {}: {}", path, e))?;

    if text.trim().is_empty() {
        anyhow::bail!("Policy document {} is empty", path);
    }

    Ok(text)
}
