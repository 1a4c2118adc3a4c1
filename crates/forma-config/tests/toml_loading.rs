//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed env var and working-directory changes.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use forma_config::{DEFAULT_TYPES, FormaConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "data/content.db"
url = "libsql://forma.turso.io"
auth_token = "turso-token"
"#,
        )?;

        let config: FormaConfig = Figment::from(Serialized::defaults(FormaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "data/content.db");
        assert_eq!(config.database.url, "libsql://forma.turso.io");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn loads_registration_list_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registration]
enabled = true
types = ["Tile", "Skin"]
"#,
        )?;

        let config: FormaConfig = Figment::from(Serialized::defaults(FormaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.registration.enabled);
        assert_eq!(config.registration.types, vec!["Tile", "Skin"]);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[registration]
enabled = true
"#,
        )?;

        let config: FormaConfig = Figment::from(Serialized::defaults(FormaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.registration.enabled);
        assert_eq!(config.registration.types, DEFAULT_TYPES);
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMA_DATABASE__PATH", "from-env.db");

        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"

[general]
default_format = "raw"
"#,
        )?;

        let config: FormaConfig = Figment::from(Serialized::defaults(FormaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FORMA_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMA_DATABASE__PATHH", "typo.db");

        let config: FormaConfig = Figment::from(Serialized::defaults(FormaConfig::default()))
            .merge(Env::prefixed("FORMA_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, ".forma/forma.db");
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        let home = jail.directory().join("home");
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());

        jail.create_dir(".forma")?;
        jail.create_file(
            ".forma/config.toml",
            r#"
[database]
path = "project.db"

[registration]
enabled = true
types = ["Offer"]
"#,
        )?;

        let config = FormaConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.database.path, "project.db");
        assert!(config.registration.enabled);
        assert_eq!(config.registration.types, vec!["Offer"]);
        Ok(())
    });
}

#[test]
fn invalid_format_in_toml_fails_load() {
    Jail::expect_with(|jail| {
        let home = jail.directory().join("home");
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());

        jail.create_dir(".forma")?;
        jail.create_file(
            ".forma/config.toml",
            r#"
[general]
default_format = "yaml"
"#,
        )?;

        let err = FormaConfig::load().expect_err("yaml is not a format");
        assert!(err.to_string().contains("general.default_format"));
        Ok(())
    });
}
