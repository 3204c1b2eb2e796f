//! Summary of a finished injection run

use crate::gradle::Dialect;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub project_dir: PathBuf,
    pub build_script: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_asset: Option<PathBuf>,
    pub tasks_run: Vec<String>,
}

impl PipelineReport {
    pub fn new(project_dir: PathBuf, build_script: PathBuf) -> Self {
        Self {
            project_dir,
            build_script,
            ..Default::default()
        }
    }
}
