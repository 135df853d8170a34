use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub api_user_agent: String,
    pub api_request_timeout_secs: u64,
    pub api_max_retries: u32,
    pub api_retry_backoff_base_ms: u64,
    pub categories_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .field("api_user_agent", &self.api_user_agent)
            .field("api_request_timeout_secs", &self.api_request_timeout_secs)
            .field("api_max_retries", &self.api_max_retries)
            .field(
                "api_retry_backoff_base_ms",
                &self.api_retry_backoff_base_ms,
            )
            .field("categories_path", &self.categories_path)
            .finish()
    }
}
