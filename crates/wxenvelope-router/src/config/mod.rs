//! Router configuration: file lookup and strict YAML loading.
//!
//! The path comes from the command line, then `WXENVELOPE_CONFIG`, then
//! `wxenvelope.yaml` in the working directory. Unknown keys are rejected and
//! every document is validated before it is handed to the router.

pub mod schema;

use std::fs;
use std::path::Path;

use wxenvelope_core::error::{EnvelopeError, Result};

pub use schema::{AutoReply, Limits, RouterConfig};

pub const DEFAULT_PATH: &str = "wxenvelope.yaml";
pub const PATH_ENV: &str = "WXENVELOPE_CONFIG";

/// Pick the config path: explicit argument, then the environment, then
/// `DEFAULT_PATH`. Blank values are skipped.
pub fn resolve_path(arg: Option<String>) -> String {
    arg.into_iter()
        .chain(std::env::var(PATH_ENV).ok())
        .find(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PATH.to_string())
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<RouterConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| EnvelopeError::Config(format!("{}: {e}", path.display())))?;
    let cfg = load_from_str(&text)
        .map_err(|e| EnvelopeError::Config(format!("{}: {}", path.display(), detail(e))))?;
    tracing::debug!(
        path = %path.display(),
        platform = %cfg.platform,
        auto_replies = cfg.auto_replies.len(),
        "config loaded"
    );
    Ok(cfg)
}

pub fn load_from_str(text: &str) -> Result<RouterConfig> {
    let cfg: RouterConfig = serde_yaml::from_str(text)
        .map_err(|e| EnvelopeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

fn detail(err: EnvelopeError) -> String {
    match err {
        EnvelopeError::Config(msg) => msg,
        other => other.to_string(),
    }
}
