use crate::error::HormodularError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), HormodularError>;
}

pub(crate) fn invalid(section: &str, message: &str) -> HormodularError {
    HormodularError::Configuration(format!("[{}] {}", section, message))
}
