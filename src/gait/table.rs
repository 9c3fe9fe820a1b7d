use crate::error::{HormodularError, Result};
use crate::types::GaitEntry;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const TOOL_NAME: &str = "Hormodular";
pub const SOURCE_URL: &str = "https://github.com/David-Estevez/hormodular.git";
pub const COLUMNS: usize = 3;

/// Actuator parameters for every module of a robot, one row per module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaitTable {
    entries: Vec<GaitEntry>,
}

impl GaitTable {
    /// Build a table for `n_modules` modules. A row count mismatch is an error.
    pub fn new(entries: Vec<GaitEntry>, n_modules: usize) -> Result<Self> {
        if entries.len() != n_modules {
            return Err(HormodularError::ShapeMismatch {
                expected: n_modules,
                actual: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    /// Table with every parameter at zero
    pub fn zeroed(n_modules: usize) -> Self {
        Self {
            entries: vec![GaitEntry::zero(); n_modules],
        }
    }

    pub fn entries(&self) -> &[GaitEntry] {
        &self.entries
    }

    pub fn n_modules(&self) -> usize {
        self.entries.len()
    }

    /// Render in the matrix text format the simulator reads
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "# Gait Table created by {} [{}]", TOOL_NAME, SOURCE_URL);
        let _ = writeln!(out, "# name: gaitTable");
        let _ = writeln!(out, "# type: matrix");
        let _ = writeln!(out, "# rows: {}", self.entries.len());
        let _ = writeln!(out, "# columns: {}", COLUMNS);

        for entry in &self.entries {
            let _ = writeln!(out, "{} {} {}", entry.amplitude, entry.offset, entry.phase);
        }
        out
    }

    /// Read a gait table file.
    ///
    /// Comment lines are skipped, except `# rows:` and `# columns:` which must
    /// agree with the data that follows.
    pub fn parse(text: &str) -> Result<Self> {
        let mut declared_rows: Option<usize> = None;
        let mut entries = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim();
                if let Some(rows) = comment.strip_prefix("rows:") {
                    declared_rows = Some(parse_header_count(rows, line_no)?);
                } else if let Some(columns) = comment.strip_prefix("columns:") {
                    let columns = parse_header_count(columns, line_no)?;
                    if columns != COLUMNS {
                        return Err(HormodularError::GaitTableFormat(format!(
                            "line {}: expected {} columns, header declares {}",
                            line_no + 1,
                            COLUMNS,
                            columns
                        )));
                    }
                }
                continue;
            }

            let values = line
                .split_whitespace()
                .map(|field| {
                    field.parse::<f64>().map_err(|_| {
                        HormodularError::GaitTableFormat(format!(
                            "line {}: '{}' is not a number",
                            line_no + 1,
                            field
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            if values.len() != COLUMNS {
                return Err(HormodularError::GaitTableFormat(format!(
                    "line {}: expected {} values, found {}",
                    line_no + 1,
                    COLUMNS,
                    values.len()
                )));
            }

            entries.push(GaitEntry {
                amplitude: values[0],
                offset: values[1],
                phase: values[2],
            });
        }

        let rows = declared_rows.unwrap_or(entries.len());
        Self::new(entries, rows)
    }
}

fn parse_header_count(value: &str, line_no: usize) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        HormodularError::GaitTableFormat(format!(
            "line {}: '{}' is not a valid count",
            line_no + 1,
            value.trim()
        ))
    })
}
