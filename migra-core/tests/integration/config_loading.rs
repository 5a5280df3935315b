use crate::fixtures::address;
use migra_core::infrastructure::config::load_config_from_file;
use std::io::Write;

#[test]
fn loads_toml_and_fills_endpoint_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("migra.toml");
    let mut file = std::fs::File::create(&path).expect("create config");
    writeln!(
        file,
        r#"
[app]
id = 42
asset_id = 77
operator_address = "{}"

[node]
url = "http://localhost:9100"
"#,
        address(1)
    )
    .expect("write config");

    let config = load_config_from_file(&path).expect("load");
    assert_eq!(config.app.id, 42);
    assert_eq!(config.app.asset_id, 77);
    assert_eq!(config.node.url, "http://localhost:9100");
    // Unset endpoint falls back to the compiled default.
    assert_eq!(config.indexer.url, "http://127.0.0.1:8980");
    assert!(config.validate().is_err()); // program paths missing
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_config_from_file(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config.node.url, "http://127.0.0.1:4001");
    assert_eq!(config.app.id, 0);
}

#[test]
fn environment_overrides_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("migra.toml");
    std::fs::write(&path, "[indexer]\nurl = \"http://localhost:8980\"\n").expect("write config");

    // Scoped to a key no other test asserts on, to stay parallel-safe.
    std::env::set_var("MIGRA_INDEXER__TOKEN", "sekrit");
    let config = load_config_from_file(&path).expect("load");
    std::env::remove_var("MIGRA_INDEXER__TOKEN");

    assert_eq!(config.indexer.token.as_deref(), Some("sekrit"));
    assert_eq!(config.indexer.url, "http://localhost:8980");
}

#[test]
fn validation_collects_every_problem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_config_from_file(&dir.path().join("absent.toml")).expect("load");
    let errors = config.validate().expect_err("empty config is invalid");
    assert!(errors.iter().any(|e| e.contains("operator_address")));
    assert!(errors.iter().any(|e| e.contains("asset_id")));
    assert!(errors.iter().any(|e| e.contains("approval_path")));
}
