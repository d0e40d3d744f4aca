//! Tests for configuration loading and validation.

use figment::Jail;

use crate::config::{ConfigError, SupplyConfig};

#[test]
fn test_defaults() {
    Jail::expect_with(|_jail| {
        let config = SupplyConfig::load().unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.traversal.max_depth, 3);
        assert_eq!(config.traversal.limit, 100);
        Ok(())
    });
}

#[test]
fn test_toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "supplygraph.toml",
            r#"
            [logging]
            level = "debug"

            [traversal]
            max_depth = 5
            "#,
        )?;
        let config = SupplyConfig::load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.traversal.max_depth, 5);
        // Keys absent from the file keep their defaults.
        assert_eq!(config.traversal.limit, 100);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("supplygraph.toml", "[logging]\nlevel = \"debug\"\n")?;
        jail.set_env("SUPPLYGRAPH_LOGGING__LEVEL", "warn");
        let config = SupplyConfig::load().unwrap();
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_env_sets_nested_traversal_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPPLYGRAPH_TRAVERSAL__MAX_DEPTH", "7");
        jail.set_env("SUPPLYGRAPH_TRAVERSAL__LIMIT", "10");
        let config = SupplyConfig::load().unwrap();
        assert_eq!(config.traversal.max_depth, 7);
        assert_eq!(config.traversal.limit, 10);
        Ok(())
    });
}

#[test]
fn test_load_from_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nlevel = \"trace\"\n")?;
        let config = SupplyConfig::load_from(std::path::Path::new("custom.toml")).unwrap();
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn test_rejects_unknown_log_level() {
    Jail::expect_with(|jail| {
        jail.create_file("supplygraph.toml", "[logging]\nlevel = \"verbose\"\n")?;
        let err = SupplyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        Ok(())
    });
}

#[test]
fn test_rejects_zero_max_depth() {
    Jail::expect_with(|jail| {
        jail.create_file("supplygraph.toml", "[traversal]\nmax_depth = 0\n")?;
        let err = SupplyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        Ok(())
    });
}

#[test]
fn test_rejects_zero_limit() {
    Jail::expect_with(|jail| {
        jail.create_file("supplygraph.toml", "[traversal]\nlimit = 0\n")?;
        let err = SupplyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        Ok(())
    });
}
