pub mod launcher;
pub mod parameters;
pub mod session;
pub mod workspace;

pub use launcher::{Invocation, LaunchOutcome, Launcher, ProcessLauncher};
pub use parameters::ParameterFile;
pub use session::{RunReport, Session};
pub use workspace::{run_timestamp, RunWorkspace};
