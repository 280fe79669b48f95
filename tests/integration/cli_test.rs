use clap::Parser;
use std::fs;
use std::path::PathBuf;
use symgraph::cli::{Args, Command, OracleStyleArg};
use symgraph::config::{load_config_with_env_prefix, CliArgs};
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["symgraph", "example.com/app"]);
    assert_eq!(args.root.as_deref(), Some("example.com/app"));
    assert_eq!(args.stdlib, None);
    assert_eq!(args.workers, None);
    assert_eq!(args.oracle_style, None);
    assert!(!args.no_view);
    assert!(!args.quiet);

    let args = Args::parse_from([
        "symgraph",
        "--stdlib",
        "yes",
        "--include-external",
        "--no-trim-structs",
        "--exclude",
        "vendor",
        "--ranksep",
        "4",
        "--workers",
        "16",
        "--go",
        "go1.22",
        "--oracle-style",
        "guru",
        "--layout",
        "neato",
        "--format",
        "png",
        "--quiet",
        "example.com/app",
    ]);

    assert_eq!(args.stdlib.as_deref(), Some("yes"));
    assert!(args.include_external);
    assert!(args.no_trim_structs);
    assert_eq!(args.exclude_pattern.as_deref(), Some("vendor"));
    assert_eq!(args.ranksep, Some(4));
    assert_eq!(args.workers, Some(16));
    assert_eq!(args.go_command.as_deref(), Some("go1.22"));
    assert_eq!(args.oracle_style, Some(OracleStyleArg::Guru));
    assert_eq!(args.layout_program.as_deref(), Some("neato"));
    assert_eq!(args.layout_format.as_deref(), Some("png"));
    assert!(args.quiet);
}

#[test]
fn test_cli_config_option() {
    let args = Args::parse_from(["symgraph", "--config", "custom-config.toml", "example.com/app"]);
    assert_eq!(args.config, Some(PathBuf::from("custom-config.toml")));
}

#[test]
fn test_unknown_oracle_style_is_rejected() {
    assert!(Args::try_parse_from(["symgraph", "--oracle-style", "lsp", "example.com/app"]).is_err());
}

#[test]
fn test_missing_config_file_exit_code() {
    let dir = tempdir().unwrap();
    let args = Args::parse_from([
        "symgraph",
        "--config",
        dir.path().join("absent.toml").to_str().unwrap(),
        "example.com/app",
    ]);

    assert_eq!(Command::from_args(args).run(), 2);
}

#[test]
fn test_missing_go_toolchain_exit_code() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("symgraph.toml");
    fs::write(&config, "").unwrap();

    let args = Args::parse_from([
        "symgraph",
        "--go",
        dir.path().join("no-such-go").to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--no-view",
        "--quiet",
        "example.com/app",
    ]);

    assert_eq!(Command::from_args(args).run(), 2);
}

#[test]
fn test_missing_root_exit_code() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("symgraph.toml");
    fs::write(&config, "").unwrap();

    let args = Args::parse_from(["symgraph", "--config", config.to_str().unwrap(), "--no-view"]);
    assert_eq!(args.root, None);
    assert_eq!(Command::from_args(args).run(), 2);
}

#[test]
fn test_root_from_config_file_without_positional() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("symgraph.toml");
    fs::write(&config, "root = \"example.com/from-file\"\n").unwrap();

    let args = Args::parse_from(["symgraph", "--config", config.to_str().unwrap()]);
    let settings =
        load_config_with_env_prefix(CliArgs::from(&args), "SYMGRAPH_CLI_INTEGRATION").unwrap();
    assert_eq!(settings.root, "example.com/from-file");

    let args = Args::parse_from([
        "symgraph",
        "--config",
        config.to_str().unwrap(),
        "example.com/from-flag",
    ]);
    let settings =
        load_config_with_env_prefix(CliArgs::from(&args), "SYMGRAPH_CLI_INTEGRATION").unwrap();
    assert_eq!(settings.root, "example.com/from-flag");
}
