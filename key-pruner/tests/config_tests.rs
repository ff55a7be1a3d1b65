//! Configuration loading tests
//!
//! Each test uses its own environment prefix so parallel tests never observe
//! each other's overrides.

use key_pruner::{PruneError, PrunerConfig, DEFAULT_MAX_DEPTH};
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(suffix: &str, contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_without_sources_uses_defaults() -> anyhow::Result<()> {
    let config = PrunerConfig::load_with_prefix(None, "KP_TEST_DEFAULTS")?;
    assert_eq!(config, PrunerConfig::default());
    assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    Ok(())
}

#[test]
fn test_load_toml_file() -> anyhow::Result<()> {
    let file = write_config(
        ".toml",
        r#"
keys = ["password", "token"]
max_depth = 32
"#,
    )?;

    let config = PrunerConfig::load_with_prefix(Some(file.path()), "KP_TEST_TOML")?;
    assert_eq!(config.keys, vec!["password".to_string(), "token".to_string()]);
    assert_eq!(config.max_depth, Some(32));

    let pruner = config.build()?;
    let pruned = pruner.prune(&json!({"password": 1, "data": {"token": 2, "id": 3}}))?;
    assert_eq!(pruned, json!({"data": {"id": 3}}));
    Ok(())
}

#[test]
fn test_load_json_file_without_depth_limit() -> anyhow::Result<()> {
    let file = write_config(".json", r#"{"keys": ["secret"], "max_depth": null}"#)?;

    let config = PrunerConfig::load_with_prefix(Some(file.path()), "KP_TEST_JSON")?;
    assert_eq!(config.keys, vec!["secret".to_string()]);
    assert_eq!(config.max_depth, None);
    assert_eq!(config.build()?.max_depth(), None);
    Ok(())
}

#[test]
fn test_environment_overrides_file() -> anyhow::Result<()> {
    let file = write_config(".toml", "keys = [\"password\"]\nmax_depth = 8\n")?;

    std::env::set_var("KP_TEST_ENV_KEYS", "api_key,token");
    std::env::set_var("KP_TEST_ENV_MAX_DEPTH", "5");
    let loaded = PrunerConfig::load_with_prefix(Some(file.path()), "KP_TEST_ENV");
    std::env::remove_var("KP_TEST_ENV_KEYS");
    std::env::remove_var("KP_TEST_ENV_MAX_DEPTH");

    let config = loaded?;
    assert_eq!(config.keys, vec!["api_key".to_string(), "token".to_string()]);
    assert_eq!(config.max_depth, Some(5));
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() {
    let err = PrunerConfig::load_with_prefix(
        Some(Path::new("/nonexistent/key-pruner.toml")),
        "KP_TEST_MISSING",
    )
    .unwrap_err();
    assert!(matches!(err, PruneError::Config(_)));
    assert_eq!(err.code(), "CONFIG_3001");
}

#[test]
fn test_wrongly_typed_file_is_config_error() -> anyhow::Result<()> {
    let file = write_config(".toml", "max_depth = \"deep\"\n")?;
    let err = PrunerConfig::load_with_prefix(Some(file.path()), "KP_TEST_TYPES").unwrap_err();
    assert!(matches!(err, PruneError::Config(_)));
    Ok(())
}

#[test]
fn test_zero_depth_in_file_fails_build() -> anyhow::Result<()> {
    let file = write_config(".toml", "keys = [\"a\"]\nmax_depth = 0\n")?;
    let config = PrunerConfig::load_with_prefix(Some(file.path()), "KP_TEST_ZERO")?;
    let err = config.build().unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: max_depth must be at least 1");
    Ok(())
}
