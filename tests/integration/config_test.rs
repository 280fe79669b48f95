use std::fs;
use symgraph::config::{load_config_with_env_prefix, CliArgs, FileConfig};
use symgraph::error::SymgraphError;
use symgraph::models::config::OracleStyle;
use symgraph::models::StdlibPolicy;
use tempfile::tempdir;

const ENV_PREFIX: &str = "SYMGRAPH_INTEGRATION";

#[test]
fn test_default_config_template_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".symgraph.toml");
    FileConfig::with_path(&path).create_default().unwrap();

    let settings = load_config_with_env_prefix(
        CliArgs {
            root: Some("example.com/app".to_string()),
            config: Some(path),
            ..Default::default()
        },
        ENV_PREFIX,
    )
    .unwrap();

    assert_eq!(settings.stdlib, StdlibPolicy::Edge);
    assert_eq!(settings.ranksep, 2);
    assert_eq!(settings.workers, 64);
    assert_eq!(settings.oracle_style, OracleStyle::Guru);
    assert!(settings.trim_structs);
    assert!(settings.view);
}

#[test]
fn test_file_values_apply() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("symgraph.toml");
    fs::write(
        &path,
        r#"
root = "example.com/app"
stdlib = "no"
include_external = true
match_pattern = "^example.com/app/"
workers = 4
oracle_command = "oracle"
oracle_style = "legacy"
view = false
"#,
    )
    .unwrap();

    let settings = load_config_with_env_prefix(
        CliArgs {
            config: Some(path),
            ..Default::default()
        },
        ENV_PREFIX,
    )
    .unwrap();

    assert_eq!(settings.root, "example.com/app");
    assert_eq!(settings.stdlib, StdlibPolicy::None);
    assert!(settings.include_external);
    assert_eq!(settings.match_pattern.as_deref(), Some("^example.com/app/"));
    assert_eq!(settings.workers, 4);
    assert_eq!(settings.oracle_command, "oracle");
    assert_eq!(settings.oracle_style, OracleStyle::Legacy);
    assert!(!settings.view);
}

#[test]
fn test_invalid_stdlib_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("symgraph.toml");
    fs::write(&path, "stdlib = \"sometimes\"\n").unwrap();

    let result = load_config_with_env_prefix(
        CliArgs {
            root: Some("example.com/app".to_string()),
            config: Some(path),
            ..Default::default()
        },
        ENV_PREFIX,
    );

    assert!(matches!(result, Err(SymgraphError::InvalidStdlibPolicy { .. })));
}

#[test]
fn test_invalid_match_pattern() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("symgraph.toml");
    fs::write(&path, "").unwrap();

    let result = load_config_with_env_prefix(
        CliArgs {
            root: Some("example.com/app".to_string()),
            match_pattern: Some("[unclosed".to_string()),
            config: Some(path),
            ..Default::default()
        },
        ENV_PREFIX,
    );

    assert!(matches!(
        result,
        Err(SymgraphError::InvalidPattern { ref pattern, .. }) if pattern == "[unclosed"
    ));
}

#[test]
fn test_missing_root() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("symgraph.toml");
    fs::write(&path, "ranksep = 3\n").unwrap();

    let result = load_config_with_env_prefix(
        CliArgs {
            config: Some(path),
            ..Default::default()
        },
        ENV_PREFIX,
    );

    assert!(matches!(result, Err(SymgraphError::Config { .. })));
}
