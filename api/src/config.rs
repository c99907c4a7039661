//! HTTP surface configuration.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Permissive bearer token; `None` disables the auth check entirely
    /// (§6: "absence of auth configuration disables the check").
    pub api_key: Option<String>,
    /// Deadline for a single chat generation (§5 "Cancellation and
    /// timeouts"); the decode loop observes cancellation at each
    /// suspension point and returns whatever text was assembled so far.
    pub chat_timeout: Duration,
    /// Deadline for a single embedding request (§5); embedding has no
    /// internal loop to interrupt, so an elapsed deadline abandons the
    /// in-flight ONNX call and reports `Cancelled` to the client.
    pub embedding_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            api_key: None,
            chat_timeout: Duration::from_secs(120),
            embedding_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chat_timeout_exceeds_default_embedding_timeout() {
        let config = ApiConfig::default();
        assert!(config.chat_timeout > config.embedding_timeout);
    }
}
