//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate never sees it, only the values derived
//! from it ([`DependencySettings`], the toolchain program, the template tree).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA_` prefix, `__` between nested keys,
//!    e.g. `STRATA_TOOLCHAIN__PROGRAM=/usr/local/go/bin/go`
//! 3. Config file (`--config`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use strata_core::domain::{
    DependencySettings,
    dependency::{DEFAULT_FRAMEWORK_MODULE, DEFAULT_SIBLING_DIR},
};

/// Environment variable naming a local framework checkout.
pub const FRAMEWORK_PATH_ENV: &str = "STRATA_FRAMEWORK_PATH";

/// Prefix for configuration overrides from the environment.
const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// External toolchain settings.
    pub toolchain: ToolchainConfig,
    /// Framework dependency settings.
    pub framework: FrameworkConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory with `skeleton/` and `context/` that replaces the built-ins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Go binary, looked up on `PATH` unless absolute.
    pub program: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: strata_adapters::toolchain::DEFAULT_PROGRAM.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Module coordinate generated projects depend on.
    pub module: String,
    /// Sibling checkout probed when no explicit path is given.
    pub sibling_dir: PathBuf,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_FRAMEWORK_MODULE.into(),
            sibling_dir: PathBuf::from(DEFAULT_SIBLING_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `STRATA_*`
    /// environment variables.
    ///
    /// `config_file` is the path the user passed via `--config`; `None` uses
    /// [`AppConfig::config_path`]. A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        if config_file.is_some() && !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config = Self::build(&path, environment())?;
        Ok(config)
    }

    fn build(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".strata.toml"))
    }

    /// Framework settings for the scaffold service.
    ///
    /// `env_value` is the raw value of [`FRAMEWORK_PATH_ENV`].
    pub fn dependency_settings(&self, env_value: Option<String>) -> DependencySettings {
        DependencySettings::new(self.framework.module.as_str())
            .with_env_value(env_value)
            .with_sibling_dir(self.framework.sibling_dir.as_path())
    }

    /// Look up a dotted key, e.g. `toolchain.program`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "output.no_color" => self.output.no_color.to_string(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "toolchain.program" => self.toolchain.program.clone(),
            "framework.module" => self.framework.module.clone(),
            "framework.sibling_dir" => self.framework.sibling_dir.display().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`AppConfig::get`].
    pub const KEYS: [&'static str; 5] = [
        "output.no_color",
        "templates.local_path",
        "toolchain.program",
        "framework.module",
        "framework.sibling_dir",
    ];
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join("strata-no-such-config.toml")
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.toolchain.program, "go");
        assert_eq!(cfg.framework.module, "github.com/strata-go/framework");
        assert_eq!(cfg.framework.sibling_dir, PathBuf::from("../go-framework"));
        assert!(cfg.templates.local_path.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn build_without_file_returns_defaults() {
        let cfg = AppConfig::build(&missing_file(), env_from(&[])).unwrap();
        assert_eq!(cfg.toolchain.program, "go");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[toolchain]\nprogram = \"/opt/go/bin/go\"\n\n[templates]\nlocal_path = \"/srv/tpl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::build(&path, env_from(&[])).unwrap();
        assert_eq!(cfg.toolchain.program, "/opt/go/bin/go");
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/srv/tpl")));
        assert_eq!(cfg.framework.module, DEFAULT_FRAMEWORK_MODULE);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nprogram = \"from-file\"\n").unwrap();

        let env = env_from(&[
            ("STRATA_TOOLCHAIN__PROGRAM", "from-env"),
            ("STRATA_FRAMEWORK__SIBLING_DIR", "../fw"),
        ]);
        let cfg = AppConfig::build(&path, env).unwrap();
        assert_eq!(cfg.toolchain.program, "from-env");
        assert_eq!(cfg.framework.sibling_dir, PathBuf::from("../fw"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(&missing_file())).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("toolchain.program").as_deref(), Some("go"));
        assert_eq!(cfg.get("templates.local_path").as_deref(), Some(""));
        assert_eq!(cfg.get("defaults.lang"), None);
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key} should resolve");
        }
    }

    #[test]
    fn dependency_settings_carry_config_and_env() {
        let cfg = AppConfig::default();
        let settings = cfg.dependency_settings(Some("/work/fw".into()));
        assert_eq!(settings.module, DEFAULT_FRAMEWORK_MODULE);
        assert_eq!(settings.env_value.as_deref(), Some("/work/fw"));
        assert_eq!(settings.sibling_dir, PathBuf::from("../go-framework"));
    }

    #[test]
    fn defaults_serialize_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[toolchain]"));
        assert!(text.contains("program = \"go\""));
        assert!(!text.contains("local_path"));
    }
}
