use super::traits::{invalid, ConfigSection};
use crate::error::HormodularError;
use serde::{Deserialize, Serialize};

/// Logging and milestone settings injected into the evolution parameter file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub log_level: u8,          // 1 (minimal) to 5 (verbose)
    pub log_frequency: u32,     // log every n generations
    pub milestone_interval: u32, // 0 saves only at the end
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            log_level: 5,
            log_frequency: 1,
            milestone_interval: 1,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), HormodularError> {
        let section = Self::section_name();
        if !(1..=5).contains(&self.log_level) {
            return Err(invalid(section, "log_level must be between 1 and 5"));
        }
        if self.log_frequency == 0 {
            return Err(invalid(section, "log_frequency must be at least 1"));
        }
        Ok(())
    }
}
