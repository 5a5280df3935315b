pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_config_from_file, load_program};
pub use types::{AppConfig, ApplicationConfig, IndexerConfig, NodeConfig, ProgramConfig};
