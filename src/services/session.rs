use super::launcher::{Invocation, LaunchOutcome, Launcher};
use super::parameters::ParameterFile;
use super::workspace::RunWorkspace;
use crate::config::AppConfig;
use crate::error::Result;
use crate::gait::GaitTable;
use crate::results::Individual;

/// Result of one launched run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub workspace: RunWorkspace,
    pub invocation: Invocation,
    pub outcome: LaunchOutcome,
}

/// Prepares run folders and drives the external binaries for one configuration
pub struct Session<L: Launcher> {
    config: AppConfig,
    launcher: L,
}

impl<L: Launcher> Session<L> {
    pub fn new(config: AppConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Create the run folder and write the customized parameter file into it
    pub fn prepare_evolution(
        &self,
        template: &ParameterFile,
        timestamp: &str,
    ) -> Result<(RunWorkspace, ParameterFile)> {
        let workspace = RunWorkspace::create(&self.config.paths.data_root, timestamp)?;

        let mut parameters = template.clone();
        parameters.apply_run_defaults(&workspace, &self.config.evolution)?;
        parameters.apply_robot(&self.config.robot, &workspace)?;
        workspace.write_parameters(parameters.as_str())?;
        workspace.write_gait_table(&GaitTable::zeroed(self.config.robot.modules))?;

        Ok((workspace, parameters))
    }

    pub fn run_evolution(&self, timestamp: &str) -> Result<RunReport> {
        let template = ParameterFile::load(&self.config.paths.parameters_template)?;
        let (workspace, _) = self.prepare_evolution(&template, timestamp)?;

        let invocation = Invocation::evolution(&self.config.paths, &workspace.parameters_path());
        let outcome = self.launcher.launch(&invocation)?;
        Ok(RunReport {
            workspace,
            invocation,
            outcome,
        })
    }

    /// Decode an individual into a gait table and run the simulator on it
    pub fn evaluate_individual(
        &self,
        individual: &Individual,
        timestamp: &str,
    ) -> Result<RunReport> {
        let robot = &self.config.robot;
        let table = individual.gait_table(robot.modules)?;
        log::info!("Evaluating {}", individual);

        let workspace = RunWorkspace::create(&self.config.paths.data_root, timestamp)?;
        let gait_table = workspace.write_gait_table(&table)?;

        let invocation = Invocation::simulation(
            &self.config.paths,
            &robot.simulation_file,
            &gait_table,
            robot.runtime,
        );
        let outcome = self.launcher.launch(&invocation)?;
        Ok(RunReport {
            workspace,
            invocation,
            outcome,
        })
    }
}
