use super::traits::{invalid, ConfigSection};
use crate::error::{HormodularError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Description of the robot being evolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub name: String,
    pub modules: usize,
    pub runtime: f64,  // ms
    pub timestep: f64, // ms
    pub simulation_file: PathBuf,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            name: "robot".to_string(),
            modules: 3,
            runtime: 10000.0,
            timestep: 1.0,
            simulation_file: PathBuf::from("../data/models/Minicube-II.env.xml"),
        }
    }
}

impl ConfigSection for RobotConfig {
    fn section_name() -> &'static str {
        "robot"
    }

    fn validate(&self) -> std::result::Result<(), HormodularError> {
        let section = Self::section_name();
        if self.name.trim().is_empty() {
            return Err(invalid(section, "name must not be empty"));
        }
        if self.modules == 0 {
            return Err(invalid(section, "modules must be at least 1"));
        }
        if !(self.runtime > 0.0) {
            return Err(invalid(section, "runtime must be positive"));
        }
        if !(self.timestep > 0.0) {
            return Err(invalid(section, "timestep must be positive"));
        }
        Ok(())
    }
}

impl RobotConfig {
    /// Read the `key=value` robot description used by older runs.
    ///
    /// Recognized keys are `name`, `simulationfile`, `runtime`, `timestep` and
    /// `nModules`. Unknown keys are skipped with a warning.
    pub fn from_legacy_str(text: &str) -> Result<Self> {
        let mut name = None;
        let mut simulation_file = None;
        let mut runtime = None;
        let mut timestep = None;
        let mut modules = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("Ignoring robot description line without '=': {}", line);
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "name" => name = Some(value.to_string()),
                "simulationfile" => simulation_file = Some(PathBuf::from(value)),
                "runtime" => runtime = Some(parse_value::<f64>(key, value)?),
                "timestep" => timestep = Some(parse_value::<f64>(key, value)?),
                "nModules" => modules = Some(parse_value::<usize>(key, value)?),
                other => log::warn!("Tag not recognized: {}", other),
            }
        }

        let config = Self {
            name: name.ok_or_else(|| missing("name"))?,
            modules: modules.ok_or_else(|| missing("nModules"))?,
            runtime: runtime.ok_or_else(|| missing("runtime"))?,
            timestep: timestep.ok_or_else(|| missing("timestep"))?,
            simulation_file: simulation_file.ok_or_else(|| missing("simulationfile"))?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_legacy_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_legacy_str(&text)?;
        log::info!("Read robot parameters from file: {}", path.as_ref().display());
        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        HormodularError::Configuration(format!("invalid value '{}' for {}", value, key.trim()))
    })
}

fn missing(key: &str) -> HormodularError {
    HormodularError::Configuration(format!("robot description is missing '{}'", key))
}
