//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir.
const APP_DIR: &str = "consultation-assistant";

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["consult.toml", ".consult.toml"];

/// Prefix of environment overrides, e.g. `CONSULT_STREAM__IDLE_TIMEOUT_SECS`.
const ENV_PREFIX: &str = "CONSULT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `CONSULT_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./consult.toml` or `./.consult.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/consultation-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // An explicitly requested file must exist; discovered ones are optional.
        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Render the effective configuration as TOML (for --show-config)
    pub fn render(config: &FileConfig) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(config)
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        out.push_str(&format!(
            "  [ENV  ] Environment: {}<SECTION>__<KEY>\n",
            ENV_PREFIX
        ));

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project: {}\n", path.display())),
            None => out.push_str("  [     ] Project: ./consult.toml or ./.consult.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_names_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "consult.toml",
                r#"
[endpoint]
url = "https://consult.example.com/api/consultation"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(
                config.endpoint.url,
                "https://consult.example.com/api/consultation"
            );
            assert_eq!(config.stream.idle_timeout_secs, 60);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".consult.toml", "[stream]\nidle_timeout_secs = 30\n")?;
            jail.create_file("custom.toml", "[stream]\nidle_timeout_secs = 45\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.stream.idle_timeout_secs, 45);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("consult.toml", "[stream]\nidle_timeout_secs = 30\n")?;

            let err = ConfigLoader::load(Some(Path::new("missing.toml"))).unwrap_err();
            assert!(err.to_string().contains("missing.toml"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("consult.toml", "[stream]\nidle_timeout_secs = 30\n")?;
            jail.set_env("CONSULT_STREAM__IDLE_TIMEOUT_SECS", "5");
            jail.set_env("CONSULT_ENTITLEMENT__REQUIRED_PLAN", "clinic_plan");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.stream.idle_timeout_secs, 5);
            assert_eq!(config.entitlement.required_plan, "clinic_plan");
            Ok(())
        });
    }

    #[test]
    fn test_render_round_trips_through_toml() {
        let config = ConfigLoader::load_defaults();
        let text = ConfigLoader::render(&config).unwrap();
        assert!(text.contains("[stream]"));
        assert!(text.contains("idle_timeout_secs = 60"));
        let parsed: FileConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_describe_lists_sources() {
        let text = ConfigLoader::describe_config_sources();
        assert!(text.contains("consult.toml"));
        assert!(text.contains("CONSULT_"));
    }
}
