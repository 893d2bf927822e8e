//! Integration tests for `HABITAT_*` environment variable overrides.

use figment::Jail;
use hab_config::HabConfig;
use std::path::{Path, PathBuf};

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("HABITAT_CONTENT__HABITS_DIR", "env/habits");
        jail.set_env("HABITAT_PIPELINE__CONCURRENCY", "3");

        let config = HabConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.content.habits_dir, PathBuf::from("env/habits"));
        assert_eq!(config.pipeline.concurrency, 3);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".habitat")?;
        jail.create_file(
            ".habitat/config.toml",
            r#"
[reports]
dir = "toml-reports"
"#,
        )?;
        jail.set_env("HABITAT_REPORTS__DIR", "env-reports");

        let config = HabConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.reports.dir, PathBuf::from("env-reports"));
        Ok(())
    });
}

#[test]
fn project_toml_beats_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".habitat")?;
        jail.create_file(
            ".habitat/config.toml",
            r#"
[validation]
stale_before_year = 2020
"#,
        )?;

        let config = HabConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.validation.stale_before_year, 2020);
        Ok(())
    });
}
