use super::workspace::RunWorkspace;
use crate::config::{EvolutionConfig, RobotConfig};
use crate::error::{HormodularError, Result};
use crate::gait::GENES_PER_MODULE;
use crate::markup::{attribute, elements, escape, unescape};
use std::borrow::Cow;
use std::fmt::Display;
use std::path::Path;

const REGISTRY_CLOSE: &str = "</Registry>";

/// Evolution parameter file, edited by text substitution before a run
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterFile {
    text: String,
}

impl ParameterFile {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            HormodularError::Configuration(format!(
                "Failed to read parameter file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Value of a registry entry, if present, with entities decoded
    pub fn registry_entry(&self, key: &str) -> Option<Cow<'_, str>> {
        let registry = elements(&self.text, "Registry").into_iter().next()?;
        elements(registry.body?, "Entry")
            .into_iter()
            .rev()
            .find(|entry| attribute(entry.attributes, "key") == Some(key))
            .and_then(|entry| entry.body)
            .map(|body| unescape(body.trim()))
    }

    /// Append `<Entry key="...">value</Entry>` to the registry section
    pub fn add_registry_entry(&mut self, key: &str, value: impl Display) -> Result<()> {
        let close = self.text.find(REGISTRY_CLOSE).ok_or_else(|| {
            HormodularError::Configuration("parameter file has no Registry section".to_string())
        })?;

        // Keep the closing tag at its own indentation
        let line_start = self.text[..close].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let indent = &self.text[line_start..close];
        let indent = if indent.trim().is_empty() { indent.to_string() } else { String::new() };

        let entry = format!(
            "\t<Entry key=\"{}\">{}</Entry>\n{}",
            escape(key),
            escape(&value.to_string()),
            indent
        );
        self.text.insert_str(close, &entry);
        log::debug!("Added registry entry {} = {}", key, value);
        Ok(())
    }

    /// Set the `dimension` entry of the Genotype section
    pub fn set_genotype_dimension(&mut self, dimension: usize) -> Result<()> {
        let genotype_range = elements(&self.text, "Genotype")
            .into_iter()
            .next()
            .and_then(|genotype| genotype.body_range)
            .ok_or_else(|| {
                HormodularError::Configuration("parameter file has no Genotype section".to_string())
            })?;

        let section = &self.text[genotype_range.clone()];
        let entry_range = elements(section, "Entry")
            .into_iter()
            .find(|entry| attribute(entry.attributes, "key") == Some("dimension"))
            .and_then(|entry| entry.body_range)
            .ok_or_else(|| {
                HormodularError::Configuration(
                    "Genotype section has no dimension entry".to_string(),
                )
            })?;

        let start = genotype_range.start + entry_range.start;
        let end = genotype_range.start + entry_range.end;
        self.text.replace_range(start..end, &dimension.to_string());
        Ok(())
    }

    /// Log and milestone entries pointing into the run folder
    pub fn apply_run_defaults(
        &mut self,
        workspace: &RunWorkspace,
        evolution: &EvolutionConfig,
    ) -> Result<()> {
        self.add_registry_entry("log.level", evolution.log_level)?;
        self.add_registry_entry("log.filename", workspace.log_path().display())?;
        self.add_registry_entry("log.frequency", evolution.log_frequency)?;
        self.add_registry_entry("milestone.filename", workspace.milestone_path().display())?;
        self.add_registry_entry("milestone.interval", evolution.milestone_interval)?;
        Ok(())
    }

    /// Robot entries, and a genotype sized for the robot's modules
    pub fn apply_robot(&mut self, robot: &RobotConfig, workspace: &RunWorkspace) -> Result<()> {
        self.add_registry_entry("robot.modules", robot.modules)?;
        self.add_registry_entry("robot.runtime", robot.runtime)?;
        self.add_registry_entry("robot.timestep", robot.timestep)?;
        self.add_registry_entry("robot.simulationfile", robot.simulation_file.display())?;
        self.add_registry_entry("robot.gaittablefile", workspace.gait_table_path().display())?;
        self.set_genotype_dimension(robot.modules * GENES_PER_MODULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<ECF>
    <Algorithm>
        <RouletteWheel>
            <Entry key="crxprob">0.5</Entry>
        </RouletteWheel>
    </Algorithm>
    <Genotype>
        <FloatingPoint>
            <Entry key="lbound">-1</Entry>
            <Entry key="ubound">1</Entry>
            <Entry key="dimension">1</Entry>
        </FloatingPoint>
    </Genotype>
    <Registry>
        <Entry key="population.size">30</Entry>
    </Registry>
</ECF>
"#;

    #[test]
    fn test_add_registry_entry() {
        let mut file = ParameterFile::new(TEMPLATE);
        file.add_registry_entry("robot.modules", 4).unwrap();
        file.add_registry_entry("log.filename", "a&b/log.txt").unwrap();

        assert_eq!(file.registry_entry("population.size").as_deref(), Some("30"));
        assert_eq!(file.registry_entry("robot.modules").as_deref(), Some("4"));
        assert_eq!(file.registry_entry("log.filename").as_deref(), Some("a&b/log.txt"));
        assert!(file.as_str().contains(">a&amp;b/log.txt</Entry>"));
        assert!(file.as_str().contains("\n    </Registry>"));
    }

    #[test]
    fn test_set_genotype_dimension() {
        let mut file = ParameterFile::new(TEMPLATE);
        file.set_genotype_dimension(12).unwrap();

        assert!(file.as_str().contains(r#"<Entry key="dimension">12</Entry>"#));
        assert!(file.as_str().contains(r#"<Entry key="lbound">-1</Entry>"#));
    }

    #[test]
    fn test_missing_sections() {
        let mut file = ParameterFile::new("<ECF></ECF>");
        assert!(matches!(
            file.add_registry_entry("a", 1),
            Err(HormodularError::Configuration(_))
        ));
        assert!(matches!(
            file.set_genotype_dimension(3),
            Err(HormodularError::Configuration(_))
        ));
    }
}
