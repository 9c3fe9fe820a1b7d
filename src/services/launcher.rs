use crate::config::PathsConfig;
use crate::error::{HormodularError, Result};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A call to one of the external binaries
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// `<simulator> <scene file> <gait table> <runtime ms>`
    pub fn simulation(paths: &PathsConfig, scene: &Path, gait_table: &Path, runtime: f64) -> Self {
        Self {
            program: paths.simulator_binary.clone(),
            args: vec![
                scene.as_os_str().to_owned(),
                gait_table.as_os_str().to_owned(),
                OsString::from(format!("{}", runtime.round() as i64)),
            ],
        }
    }

    /// `<evolve> <parameter file>`
    pub fn evolution(paths: &PathsConfig, parameters_file: &Path) -> Self {
        Self {
            program: paths.evolve_binary.clone(),
            args: vec![parameters_file.as_os_str().to_owned()],
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What came back from an external binary. Not interpreted beyond logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub exit_code: Option<i32>, // None when killed by a signal
}

impl LaunchOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait Launcher {
    fn launch(&self, invocation: &Invocation) -> Result<LaunchOutcome>;
}

/// Runs invocations as child processes, inheriting stdio, and waits for them
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<LaunchOutcome> {
        log::info!("Launching: {}", invocation);
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|e| {
                HormodularError::Launch(format!(
                    "could not start {}: {}",
                    invocation.program.display(),
                    e
                ))
            })?;

        let outcome = LaunchOutcome {
            exit_code: status.code(),
        };
        if outcome.success() {
            log::info!("{} finished", invocation.program.display());
        } else {
            log::warn!("{} exited with {:?}", invocation.program.display(), outcome.exit_code);
        }
        Ok(outcome)
    }
}
