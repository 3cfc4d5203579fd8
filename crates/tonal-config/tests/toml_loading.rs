//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directories and env vars.

use figment::Jail;
use pretty_assertions::assert_eq;
use tonal_config::{ConfigError, TonalConfig};

/// Point the user-level config directory into the jail and drop inherited
/// variables, so a developer's own `~/.config/tonal` never leaks in.
fn isolate(jail: &mut Jail) -> figment::error::Result<()> {
    jail.clear_env();
    let home = jail.directory().to_path_buf();
    let config_home = jail.create_dir("xdg")?;
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(config_home).display());
    Ok(())
}

#[test]
fn loads_project_config_from_dot_tonal() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
bearer_token = "toml-token"
api_url = "http://127.0.0.1:9999"
following_page_size = 50
timeline_page_size = 20
timeout_secs = 3
"#,
        )?;

        let config = TonalConfig::load().expect("config loads");
        assert_eq!(config.twitter.bearer_token, "toml-token");
        assert_eq!(config.twitter.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.twitter.following_page_size, 50);
        assert_eq!(config.twitter.timeline_page_size, 20);
        assert_eq!(config.twitter.timeout_secs, 3);
        assert!(config.twitter.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
timeline_page_size = 10
"#,
        )?;

        let config = TonalConfig::load().expect("config loads");
        assert_eq!(config.twitter.timeline_page_size, 10);
        assert_eq!(config.twitter.following_page_size, 1000);
        assert_eq!(config.twitter.api_url, "https://api.twitter.com");
        Ok(())
    });
}

#[test]
fn explicit_file_replaces_project_file() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
bearer_token = "project-token"
"#,
        )?;
        jail.create_file(
            "custom.toml",
            r#"
[twitter]
bearer_token = "custom-token"
"#,
        )?;

        let path = jail.directory().join("custom.toml");
        let config = TonalConfig::load_file(&path).expect("config loads");
        assert_eq!(config.twitter.bearer_token, "custom-token");
        Ok(())
    });
}

#[test]
fn out_of_range_value_fails_validation() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
timeline_page_size = 500
"#,
        )?;

        let err = TonalConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
following_page_size = "lots"
"#,
        )?;

        let err = TonalConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_layered_under_project_config() {
    Jail::expect_with(|jail| {
        isolate(jail)?;
        jail.create_dir("xdg/tonal")?;
        jail.create_file(
            "xdg/tonal/config.toml",
            r#"
[twitter]
bearer_token = "user-token"
timeout_secs = 7
"#,
        )?;
        jail.create_dir(".tonal")?;
        jail.create_file(
            ".tonal/config.toml",
            r#"
[twitter]
timeout_secs = 4
"#,
        )?;

        let config = TonalConfig::load().expect("config loads");
        assert_eq!(config.twitter.bearer_token, "user-token");
        assert_eq!(config.twitter.timeout_secs, 4);
        Ok(())
    });
}
