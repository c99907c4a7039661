//! CLI configuration for the gateway binary (§10.3).

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;

/// Command-line arguments, each overridable via the matching environment
/// variable through clap's `env` feature.
#[derive(Parser, Debug, Clone)]
#[command(name = "tabagent-server")]
#[command(about = "OpenAI-compatible inference gateway")]
#[command(version)]
pub struct CliArgs {
    /// Host to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0", env = "GATEWAY_HOST")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, default_value = "8080", env = "GATEWAY_PORT")]
    pub port: u16,

    /// Path to the embedding model directory; falls back to
    /// `EMBEDDING_MODEL_PATH` then a well-known relative probe.
    #[arg(long, env = "EMBEDDING_MODEL_PATH")]
    pub embedding_model_path: Option<PathBuf>,

    /// Path to the chat model directory; falls back to `CHAT_MODEL_PATH`
    /// then a well-known relative probe.
    #[arg(long, env = "CHAT_MODEL_PATH")]
    pub chat_model_path: Option<PathBuf>,

    /// Tracing filter directive (e.g. `info`, `debug`, `tabagent_api=debug`).
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Bearer token guarding every route except `/health`; unset disables
    /// the check.
    #[arg(long, env = "GATEWAY_API_KEY")]
    pub api_key: Option<String>,

    /// Deadline in seconds for a single chat generation (§5); an elapsed
    /// deadline raises cancellation and the response carries whatever text
    /// had been assembled, with `finish_reason = "cancelled"`.
    #[arg(long, default_value = "120", env = "GATEWAY_CHAT_TIMEOUT_SECS")]
    pub chat_timeout_secs: u64,

    /// Deadline in seconds for a single embedding request (§5).
    #[arg(long, default_value = "30", env = "GATEWAY_EMBEDDING_TIMEOUT_SECS")]
    pub embedding_timeout_secs: u64,
}

/// Well-known relative locations probed when a model path isn't supplied
/// explicitly, in precedence order (§10.3, §6 "Filesystem layout consumed").
const EMBEDDING_MODEL_PROBE: &str = "models/bge-small-en-v1.5";
const CHAT_MODEL_PROBE: &str = "models/phi-3-mini-4k";

impl CliArgs {
    /// Resolves the embedding model directory: CLI flag/env var, else a
    /// filesystem probe relative to the current working directory.
    pub fn resolved_embedding_model_path(&self) -> Option<PathBuf> {
        resolve_model_path(self.embedding_model_path.as_deref(), EMBEDDING_MODEL_PROBE)
    }

    /// Resolves the chat model directory with the same precedence.
    pub fn resolved_chat_model_path(&self) -> Option<PathBuf> {
        resolve_model_path(self.chat_model_path.as_deref(), CHAT_MODEL_PROBE)
    }
}

fn resolve_model_path(explicit: Option<&Path>, probe: &str) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let cwd_candidate = PathBuf::from(probe);
    if cwd_candidate.exists() {
        return Some(cwd_candidate);
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let candidate = exe_dir.join(probe);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_takes_precedence_over_probe() {
        let explicit = PathBuf::from("/tmp/some-model");
        assert_eq!(resolve_model_path(Some(&explicit), EMBEDDING_MODEL_PROBE), Some(explicit));
    }

    #[test]
    fn missing_explicit_and_missing_probe_is_none() {
        assert_eq!(resolve_model_path(None, "definitely/does/not/exist"), None);
    }

    #[test]
    fn default_timeouts_parse_from_bare_binary_name() {
        let args = CliArgs::parse_from(["tabagent-server"]);
        assert_eq!(args.chat_timeout_secs, 120);
        assert_eq!(args.embedding_timeout_secs, 30);
    }
}
