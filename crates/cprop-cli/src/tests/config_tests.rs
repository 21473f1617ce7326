use super::*;
use clap::Parser;
use tempfile::TempDir;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["cprop", "input.json"];
    argv.extend_from_slice(extra);
    CliArgs::parse_from(argv)
}

#[test]
fn test_parse_config_accepts_bool_and_string_values() {
    let config = parse_config(r#"{ "loose": "yes", "emitHelpers": false }"#).expect("valid config");
    assert_eq!(config.loose, Some(true));
    assert_eq!(config.emit_helpers, Some(false));

    let config = parse_config(r#"{ "loose": true, "emitHelpers": "0" }"#).expect("valid config");
    assert_eq!(config.loose, Some(true));
    assert_eq!(config.emit_helpers, Some(false));
}

#[test]
fn test_parse_config_empty_object() {
    assert_eq!(parse_config("{}").expect("valid config"), CpropConfig::default());
}

#[test]
fn test_parse_config_rejects_invalid_boolean() {
    let err = parse_config(r#"{ "loose": "maybe" }"#).expect_err("invalid boolean");
    assert!(err.to_string().contains("invalid boolean value"), "{err}");
}

#[test]
fn test_resolve_defaults_without_config() {
    let resolved = resolve_options(None, &args(&[]));
    assert_eq!(resolved, ResolvedOptions::default());
    assert!(!resolved.transform.loose);
    assert!(resolved.emit_helpers);
}

#[test]
fn test_flags_override_config() {
    let config = CpropConfig {
        loose: Some(false),
        emit_helpers: Some(true),
    };
    let resolved = resolve_options(Some(&config), &args(&["--loose", "--no-helpers"]));
    assert!(resolved.transform.loose);
    assert!(!resolved.emit_helpers);
}

#[test]
fn test_config_applies_when_flags_absent() {
    let config = CpropConfig {
        loose: Some(true),
        emit_helpers: Some(false),
    };
    let resolved = resolve_options(Some(&config), &args(&[]));
    assert!(resolved.transform.loose);
    assert!(!resolved.emit_helpers);
}

#[test]
fn test_find_and_load_config() {
    let dir = TempDir::new().expect("temp dir");
    assert!(find_config(dir.path()).is_none());

    std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "loose": "on" }"#)
        .expect("write config");
    let path = find_config(dir.path()).expect("config found");
    let config = load_config(&path).expect("config loads");
    assert_eq!(config.loose, Some(true));
    assert_eq!(config.emit_helpers, None);
}

#[test]
fn test_load_config_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write config");
    let err = load_config(&path).expect_err("malformed config");
    assert!(format!("{err:#}").contains("failed to parse config"), "{err:#}");
}
