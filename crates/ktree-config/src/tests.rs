use std::io::Write;

use super::*;

#[test]
fn embedded_defaults_parse() {
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.general.tick_rate_ms, 250);
    assert_eq!(config.general.log_tail_lines, 100);
}

#[test]
fn default_config_has_all_general_fields() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
    assert!(!config.general.show_managed_fields);
    assert_eq!(config.general.min_column_width, 15);
    assert_eq!(config.general.detail_min_width, 40);
}

#[test]
fn default_keybindings_cover_every_group() {
    let config = AppConfig::default();
    assert_eq!(config.keybindings.global.get("quit").unwrap(), "q");
    assert_eq!(config.keybindings.global.get("help").unwrap(), "ctrl+b");
    assert_eq!(config.keybindings.navigation.get("focus_down_alt").unwrap(), "j");
    assert_eq!(config.keybindings.browse.get("filter_alt").unwrap(), "?");
    assert_eq!(config.keybindings.clipboard.len(), 4);
}

#[test]
fn default_keybindings_are_valid_and_unique() {
    let config = AppConfig::default();
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn parse_general_with_kebab_aliases() {
    let raw = r#"
[general]
tick-rate-ms = 100
log-tail-lines = 500
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.general.log_tail_lines, 500);
    assert_eq!(config.general.min_column_width, 15);
}

#[test]
fn partial_toml_only_keybindings_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user: AppConfig = toml::from_str(
        r#"
[keybindings.browse]
logs = "L"
"#,
    )
    .unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.browse.get("logs").unwrap(), "L");
    assert_eq!(base.keybindings.browse.get("refresh").unwrap(), "r");
    assert_eq!(base.keybindings.global.get("quit").unwrap(), "q");
}

#[test]
fn theme_defaults_when_section_missing() {
    let config = AppConfig::default();
    assert_eq!(config.theme.accent, "#89b4fa");
    assert_eq!(config.theme.bg, "default");
}

#[test]
fn load_from_reads_user_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general]\nlog_tail_lines = 42\n\n[theme]\naccent = \"red\"").unwrap();

    let config = AppConfig::load_from(file.path()).unwrap();
    assert_eq!(config.general.log_tail_lines, 42);
    assert_eq!(config.theme.accent, "red");
    assert_eq!(config.keybindings.global.get("quit").unwrap(), "q");
}

#[test]
fn load_from_reports_path_on_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[general\nbroken").unwrap();

    let err = AppConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn load_from_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(AppConfig::load_from(&dir.path().join("absent.toml")).is_err());
}
