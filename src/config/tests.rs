//! Tests for configuration layering

use super::*;
use crate::error::SymgraphError;
use crate::models::config::{OracleStyle, PartialSettings};
use crate::models::StdlibPolicy;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_partial_settings_merge() {
    let mut base = PartialSettings {
        root: Some("example.com/base".to_string()),
        workers: Some(8),
        ..Default::default()
    };

    base.merge_from(PartialSettings {
        root: Some("example.com/override".to_string()),
        stdlib: Some(StdlibPolicy::None),
        ..Default::default()
    });

    assert_eq!(base.root.as_deref(), Some("example.com/override"));
    assert_eq!(base.workers, Some(8));
    assert_eq!(base.stdlib, Some(StdlibPolicy::None));
}

#[test]
fn test_partial_settings_to_settings() {
    let partial = PartialSettings {
        root: Some("example.com/app".to_string()),
        ranksep: Some(5),
        view: Some(false),
        ..Default::default()
    };

    let settings = partial.to_settings();

    assert_eq!(settings.root, "example.com/app");
    assert_eq!(settings.ranksep, 5);
    assert!(!settings.view);
    assert_eq!(settings.stdlib, StdlibPolicy::Edge);
    assert_eq!(settings.workers, 64);
    assert_eq!(settings.oracle_command, "guru");
    assert!(settings.trim_structs);
}

#[test]
fn test_config_builder_last_merge_wins() {
    let settings = ConfigBuilder::new()
        .merge(PartialSettings {
            root: Some("example.com/one".to_string()),
            match_pattern: Some("one".to_string()),
            ..Default::default()
        })
        .merge(PartialSettings {
            root: Some("example.com/two".to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(settings.root, "example.com/two");
    assert_eq!(settings.match_pattern.as_deref(), Some("one"));
}

#[test]
fn test_builder_validates() {
    let result = ConfigBuilder::new()
        .merge(PartialSettings {
            root: Some("example.com/app".to_string()),
            exclude_pattern: Some("(".to_string()),
            ..Default::default()
        })
        .build();

    assert!(matches!(result, Err(SymgraphError::InvalidPattern { .. })));
}

#[test]
fn test_missing_explicit_config_file() {
    let dir = tempdir().unwrap();
    let result = ConfigBuilder::new().add_config_file(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(SymgraphError::ConfigNotFound { .. })));
}

#[test]
fn test_cli_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("symgraph.toml");
    fs::write(
        &path,
        r#"
            root = "example.com/from-file"
            stdlib = "no"
            ranksep = 7
        "#,
    )
    .unwrap();

    let cli_args = CliArgs {
        root: Some("example.com/from-cli".to_string()),
        stdlib: Some("yes".to_string()),
        config: Some(path),
        ..Default::default()
    };

    let settings = load_config_with_env_prefix(cli_args, "SYMGRAPH_TEST_UNSET").unwrap();
    assert_eq!(settings.root, "example.com/from-cli");
    assert_eq!(settings.stdlib, StdlibPolicy::Deep);
    assert_eq!(settings.ranksep, 7);
}

#[test]
fn test_environment_layer() {
    let prefix = "SYMGRAPH_TEST_ENV_LAYER";
    std::env::set_var(format!("{}_WORKERS", prefix), "12");
    std::env::set_var(format!("{}_ORACLE_STYLE", prefix), "legacy");
    std::env::set_var(format!("{}_STDLIB", prefix), "no");

    let env = EnvConfig::new(prefix);
    assert!(env.is_available());
    let partial = env.load().unwrap();

    assert_eq!(partial.workers, Some(12));
    assert_eq!(partial.oracle_style, Some(OracleStyle::Legacy));
    assert_eq!(partial.stdlib, Some(StdlibPolicy::None));

    // Command line still wins over the environment
    let cli_args = CliArgs {
        root: Some("example.com/app".to_string()),
        workers: Some(3),
        ..Default::default()
    };
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.toml");
    fs::write(&empty, "").unwrap();
    let settings = load_config_with_env_prefix(
        CliArgs {
            config: Some(empty),
            ..cli_args
        },
        prefix,
    )
    .unwrap();
    assert_eq!(settings.workers, 3);
    assert_eq!(settings.stdlib, StdlibPolicy::None);
}

#[test]
fn test_environment_rejects_bad_stdlib() {
    let prefix = "SYMGRAPH_TEST_ENV_BAD";
    std::env::set_var(format!("{}_STDLIB", prefix), "sometimes");

    let result = EnvConfig::new(prefix).load();
    assert!(matches!(result, Err(SymgraphError::InvalidStdlibPolicy { .. })));
}

#[test]
fn test_unavailable_environment_is_skipped() {
    let env = EnvConfig::new("SYMGRAPH_TEST_NOTHING_SET");
    assert!(!env.is_available());

    let settings = ConfigBuilder::new()
        .load_from(&env)
        .unwrap()
        .merge(PartialSettings {
            root: Some("example.com/app".to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();
    assert_eq!(settings.workers, 64);
}
