//! Configuration loader using Figment for layered config management.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML config file
//! 3. Environment variables (MIGRA_* prefix)

use crate::foundation::CoordinatorError;
use crate::infrastructure::config::types::AppConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_NODE_URL: &str = "http://127.0.0.1:4001";
const DEFAULT_INDEXER_URL: &str = "http://127.0.0.1:8980";

/// Environment variable prefix for config overrides.
///
/// Example: `MIGRA_NODE__URL` -> `node.url`
const ENV_PREFIX: &str = "MIGRA_";

/// Load configuration from a specific file path.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig, CoordinatorError> {
    info!(path = %path.display(), "loading configuration");
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    } else {
        debug!(path = %path.display(), "configuration file missing; using defaults and env only");
    }
    let figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
    let mut config: AppConfig =
        figment.extract().map_err(|e| CoordinatorError::Config(format!("config extraction failed: {e}")))?;
    postprocess(&mut config);
    debug!(
        node_url = %config.node.url,
        indexer_url = %config.indexer.url,
        app_id = config.app.id,
        asset_id = config.app.asset_id,
        "configuration loaded"
    );
    Ok(config)
}

fn postprocess(config: &mut AppConfig) {
    if config.node.url.trim().is_empty() {
        config.node.url = DEFAULT_NODE_URL.to_string();
    }
    if config.indexer.url.trim().is_empty() {
        config.indexer.url = DEFAULT_INDEXER_URL.to_string();
    }
}

/// Read compiled program bytecode from a configured path.
pub fn load_program(path: &str) -> Result<Vec<u8>, CoordinatorError> {
    std::fs::read(path).map_err(|err| CoordinatorError::Config(format!("cannot read program {path}: {err}")))
}
