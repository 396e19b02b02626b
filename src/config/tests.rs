//! Tests for the config module

use super::loader::{load_for_root, with_env_overrides_from};
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.build.tool, "dotnet");
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(
        config.paths.engine_build_dir,
        Path::new("TheRealEngine/bin/Debug/net8.0")
    );
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[paths]
engine_build_dir = "out/engine"
game_assets_dir = "Game/Content"

[build]
tool = "/opt/dotnet/dotnet"

[output]
verbosity = "verbose"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.paths.engine_build_dir, Path::new("out/engine"));
    assert_eq!(config.paths.game_assets_dir, Path::new("Game/Content"));
    assert_eq!(
        config.paths.game_publish_dir,
        Path::new("TestGame/bin/Release/net8.0/publish")
    );
    assert_eq!(config.build.tool, "/opt/dotnet/dotnet");
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_config_empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rea.toml");
    fs::write(&path, "[build]\ntol = \"dotnet\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.build.tool, "dotnet");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "tol");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("tool"));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rea.toml");
    fs::write(&path, "[build\ntool = ").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, crate::error::AssembleError::Config { .. }));
}

#[test]
fn test_load_rejects_dangerous_paths() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rea.toml");
    fs::write(&path, "[paths]\nengine_build_dir = \".\"\n").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();

    match err {
        crate::error::AssembleError::Config { file, message } => {
            assert_eq!(file, path);
            assert!(message.contains("paths.engine_build_dir"), "{}", message);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_load_for_root_without_file_uses_defaults() {
    let dir = tempdir().unwrap();

    let (config, warnings) = load_for_root(dir.path(), None).unwrap();

    assert_eq!(config.paths, Config::default().paths);
    assert!(warnings.is_empty());
}

#[test]
fn test_load_for_root_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("rea.toml"),
        "[paths]\nengine_build_dir = \"engine-out\"\n",
    )
    .unwrap();

    let (config, _) = load_for_root(dir.path(), None).unwrap();

    assert_eq!(config.paths.engine_build_dir, Path::new("engine-out"));
}

#[test]
fn test_load_for_root_explicit_missing_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(load_for_root(dir.path(), Some(&missing)).is_err());
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("REA_BUILD_TOOL", "fake-dotnet"), ("REA_VERBOSITY", "QUIET")]),
    );

    assert_eq!(config.build.tool, "fake-dotnet");
    assert_eq!(config.output.verbosity, Verbosity::Quiet);
}

#[test]
fn test_env_override_blank_tool_ignored() {
    let config = with_env_overrides_from(Config::default(), env(&[("REA_BUILD_TOOL", "  ")]));
    assert_eq!(config.build.tool, "dotnet");
}

#[test]
fn test_verbosity_ordering_and_flags() {
    assert!(Verbosity::Quiet < Verbosity::Normal);
    assert!(Verbosity::Normal < Verbosity::Verbose);
    assert_eq!(Verbosity::Normal.with_flag_count(0), Verbosity::Normal);
    assert_eq!(Verbosity::Normal.with_flag_count(2), Verbosity::Verbose);
    assert_eq!(Verbosity::Quiet.with_flag_count(1), Verbosity::Verbose);
    assert_eq!(Verbosity::from_name("nonsense"), Verbosity::Normal);
}
