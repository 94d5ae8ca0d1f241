use anyhow::Context;

/// Connection settings for the remote facts service, read from the
/// environment (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("FACTFEED_URL").context("FACTFEED_URL is not set")?;
        let api_key = std::env::var("FACTFEED_API_KEY").context("FACTFEED_API_KEY is not set")?;
        Ok(Self { base_url, api_key })
    }
}
