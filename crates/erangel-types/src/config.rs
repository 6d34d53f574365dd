use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{ErangelError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of timeline entries printed per winner.
    pub timeline_limit: usize,
    #[serde(default)]
    pub pretty_dump: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErangelConfig {
    pub ops: OpsConfig,
    pub report: ReportConfig,
}

impl Default for ErangelConfig {
    fn default() -> Self {
        Self {
            ops: OpsConfig {
                log_level: "info".into(),
            },
            report: ReportConfig {
                timeline_limit: 50,
                pretty_dump: true,
            },
        }
    }
}

impl ErangelConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            ErangelError::Configuration(format!(
                "unable to read config file {}: {err}",
                path_ref.display()
            ))
        })?;
        toml::from_str(&contents).map_err(|err| {
            ErangelError::Configuration(format!(
                "failed to parse config file {}: {err}",
                path_ref.display()
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.ops.log_level.trim().is_empty() {
            return Err(ErangelError::Configuration(
                "ops.log_level must not be empty".into(),
            ));
        }
        if self.report.timeline_limit == 0 {
            return Err(ErangelError::Configuration(
                "report.timeline_limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
