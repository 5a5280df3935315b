use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Every component receives the pieces it needs explicitly at construction
/// time; there are no process-level singletons.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub indexer: IndexerConfig,
    #[serde(default)]
    pub app: ApplicationConfig,
    #[serde(default)]
    pub programs: ProgramConfig,
}

/// Ledger node endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Historical-records indexer endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexerConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Deployed application and distributed asset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application identifier; 0 until the application is created.
    #[serde(default)]
    pub id: u64,
    /// Asset being distributed through the claim flow.
    #[serde(default)]
    pub asset_id: u64,
    /// Account that deploys and operates the application.
    #[serde(default)]
    pub operator_address: String,
}

/// Compiled program bytecode locations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default)]
    pub approval_path: String,
    #[serde(default)]
    pub clear_path: String,
}
