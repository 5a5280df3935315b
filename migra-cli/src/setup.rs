use log::warn;
use migra_core::domain::KeyCredential;
use migra_core::foundation::util::encoding::parse_hex_32bytes;
use migra_core::foundation::{CONFIG_PATH_ENV, CREDENTIAL_SEED_ENV};
use migra_core::infrastructure::config::{load_config_from_file, AppConfig};
use migra_core::CoordinatorError;
use std::path::{Path, PathBuf};

pub fn init_logging(level: &str) -> Result<(), CoordinatorError> {
    let filter = tracing_subscriber::EnvFilter::try_new(level)
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .map_err(|err| CoordinatorError::Message(err.to_string()))?;
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig, CoordinatorError> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("migra.toml"));
    let config = load_config_from_file(&path)?;
    if let Err(errors) = config.validate() {
        for err in errors {
            warn!("config validation error: {}", err);
        }
    }
    Ok(config)
}

/// The operator's signing credential, from the environment - never argv.
pub fn operator_credential() -> Result<KeyCredential, CoordinatorError> {
    let seed_hex = std::env::var(CREDENTIAL_SEED_ENV)
        .map_err(|_| CoordinatorError::Config(format!("{CREDENTIAL_SEED_ENV} is not set")))?;
    let seed = parse_hex_32bytes(seed_hex.trim())?;
    Ok(KeyCredential::from_seed(seed))
}
