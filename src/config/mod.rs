pub mod traits;
pub mod paths;
pub mod robot;
pub mod evolution;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use paths::PathsConfig;
pub use robot::RobotConfig;
pub use evolution::EvolutionConfig;
