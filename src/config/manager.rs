use super::{
    evolution::EvolutionConfig, paths::PathsConfig, robot::RobotConfig, traits::ConfigSection,
};
use crate::error::HormodularError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Prefix of environment variables overriding file values, e.g. `HORMODULAR__ROBOT__MODULES`
pub const ENV_PREFIX: &str = "HORMODULAR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub robot: RobotConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), HormodularError> {
        self.paths.validate()?;
        self.robot.validate()?;
        self.evolution.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, with `HORMODULAR__<SECTION>__<KEY>` variables taking precedence.
    ///
    /// A missing file is not an error: defaults and environment overrides still apply.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), HormodularError> {
        self.load(path.as_ref(), None)
    }

    fn load(
        &self,
        path: &Path,
        environment: Option<config::Map<String, String>>,
    ) -> Result<(), HormodularError> {
        if !path.exists() {
            log::warn!("{} not found, using defaults and environment", path.display());
        }

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(environment),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                HormodularError::Configuration(format!(
                    "Failed to load config {}: {}",
                    path.display(),
                    e
                ))
            })?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), HormodularError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| HormodularError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| HormodularError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply a change; rejected changes leave the stored config untouched
    pub fn update<F>(&self, f: F) -> Result<(), HormodularError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hormodular-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_file("saved.toml");
        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.robot.name = "snake".to_string();
                c.robot.modules = 8;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let loaded = ConfigManager::new();
        loaded.load_from_file(&path).unwrap();
        assert_eq!(loaded.get().robot.name, "snake");
        assert_eq!(loaded.get().robot.modules, 8);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = scratch_file("partial.toml");
        std::fs::write(&path, "[robot]\nname = \"cube\"\nmodules = 2\n").unwrap();

        let manager = ConfigManager::new();
        manager.load_from_file(&path).unwrap();
        let config = manager.get();

        assert_eq!(config.robot.modules, 2);
        assert_eq!(config.evolution, EvolutionConfig::default());
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = scratch_file("invalid.toml");
        std::fs::write(&path, "[robot]\nmodules = 0\n").unwrap();

        let manager = ConfigManager::new();
        assert!(manager.load_from_file(&path).is_err());
        assert_eq!(manager.get(), AppConfig::default());
    }

    fn environment(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = scratch_file("overridden.toml");
        std::fs::write(&path, "[robot]\nname = \"cube\"\nmodules = 2\n").unwrap();

        let manager = ConfigManager::new();
        manager
            .load(&path, environment(&[("HORMODULAR__ROBOT__MODULES", "12")]))
            .unwrap();
        assert_eq!(manager.get().robot.modules, 12);
        assert_eq!(manager.get().robot.name, "cube");
    }

    #[test]
    fn test_environment_applies_without_file() {
        let path = scratch_file("does-not-exist.toml");
        let _ = std::fs::remove_file(&path);

        let manager = ConfigManager::new();
        manager
            .load(&path, environment(&[("HORMODULAR__EVOLUTION__LOG_LEVEL", "3")]))
            .unwrap();
        assert_eq!(manager.get().evolution.log_level, 3);
        assert_eq!(manager.get().robot, RobotConfig::default());
    }

    #[test]
    fn test_rejected_update_keeps_config() {
        let manager = ConfigManager::new();
        assert!(manager.update(|c| c.evolution.log_level = 0).is_err());
        assert_eq!(manager.get().evolution.log_level, 5);
    }
}
