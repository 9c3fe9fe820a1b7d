use super::traits::{invalid, ConfigSection};
use crate::error::HormodularError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of run artifacts and of the external binaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_root: PathBuf,
    pub evolve_binary: PathBuf,
    pub simulator_binary: PathBuf,
    pub parameters_template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("../data"),
            evolve_binary: PathBuf::from("./evolve-gaits"),
            simulator_binary: PathBuf::from("./evaluate-gaits-sim"),
            parameters_template: PathBuf::from("./parameters.xml"),
        }
    }
}

impl ConfigSection for PathsConfig {
    fn section_name() -> &'static str {
        "paths"
    }

    fn validate(&self) -> Result<(), HormodularError> {
        let section = Self::section_name();
        if self.data_root.as_os_str().is_empty() {
            return Err(invalid(section, "data_root must not be empty"));
        }
        if self.evolve_binary.as_os_str().is_empty() {
            return Err(invalid(section, "evolve_binary must not be empty"));
        }
        if self.simulator_binary.as_os_str().is_empty() {
            return Err(invalid(section, "simulator_binary must not be empty"));
        }
        Ok(())
    }
}
