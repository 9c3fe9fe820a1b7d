use crate::error::Result;
use crate::gait::GaitTable;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use std::fs;
use std::path::{Path, PathBuf};

pub const GAIT_TABLE_FILE: &str = "gait_table.txt";
pub const PARAMETERS_FILE: &str = "evolution_parameters.xml";
pub const LOG_FILE: &str = "log.txt";
pub const MILESTONE_FILE: &str = "milestonefile.txt";

/// Run id built from the local time, e.g. `2024-3-7-9-5-0`
pub fn run_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!(
        "{}-{}-{}-{}-{}-{}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Folder holding the artifacts of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunWorkspace {
    folder: PathBuf,
}

impl RunWorkspace {
    /// Create `<data_root>/tmp/data-<timestamp>`, reusing it if it already exists
    pub fn create<P: AsRef<Path>>(data_root: P, timestamp: &str) -> Result<Self> {
        let folder = data_root
            .as_ref()
            .join("tmp")
            .join(format!("data-{}", timestamp));
        fs::create_dir_all(&folder)?;
        log::info!("Run folder: {}", folder.display());
        Ok(Self { folder })
    }

    pub fn create_now<P: AsRef<Path>>(data_root: P) -> Result<Self> {
        Self::create(data_root, &run_timestamp(&Local::now()))
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn gait_table_path(&self) -> PathBuf {
        self.folder.join(GAIT_TABLE_FILE)
    }

    pub fn parameters_path(&self) -> PathBuf {
        self.folder.join(PARAMETERS_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.folder.join(LOG_FILE)
    }

    pub fn milestone_path(&self) -> PathBuf {
        self.folder.join(MILESTONE_FILE)
    }

    pub fn write_gait_table(&self, table: &GaitTable) -> Result<PathBuf> {
        let path = self.gait_table_path();
        fs::write(&path, table.render())?;
        log::debug!("Wrote {} rows to {}", table.n_modules(), path.display());
        Ok(path)
    }

    pub fn write_parameters(&self, contents: &str) -> Result<PathBuf> {
        let path = self.parameters_path();
        fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_run_timestamp_is_unpadded() {
        let time = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(run_timestamp(&time), "2024-3-7-9-5-0");
    }

    #[test]
    fn test_create_and_write() {
        let root = std::env::temp_dir().join(format!("hormodular-ws-{}", std::process::id()));
        let workspace = RunWorkspace::create(&root, "2024-1-2-3-4-5").unwrap();

        assert_eq!(workspace.folder(), root.join("tmp").join("data-2024-1-2-3-4-5"));
        assert!(workspace.folder().is_dir());

        let path = workspace.write_gait_table(&GaitTable::zeroed(2)).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(GaitTable::parse(&written).unwrap(), GaitTable::zeroed(2));

        // creating the same run again reuses the folder
        assert!(RunWorkspace::create(&root, "2024-1-2-3-4-5").is_ok());
        fs::remove_dir_all(&root).unwrap();
    }
}
