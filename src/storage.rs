//! Report persistence seam. The engine is pure; whatever keeps results
//! around is an injected collaborator behind [`ReportStore`]. Two
//! implementations ship: an in-memory map for embedding and tests, and a
//! JSON-file-per-report directory store used by the CLI's `--store` flag.

use crate::engine::types::CalculationResult;
use crate::errors::RoicastError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait ReportStore {
    fn put(&mut self, report_id: &str, result: &CalculationResult) -> Result<()>;
    fn get(&self, report_id: &str) -> Result<Option<CalculationResult>>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    reports: HashMap<String, CalculationResult>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ReportStore for InMemoryStore {
    fn put(&mut self, report_id: &str, result: &CalculationResult) -> Result<()> {
        self.reports.insert(report_id.to_string(), result.clone());
        Ok(())
    }

    fn get(&self, report_id: &str) -> Result<Option<CalculationResult>> {
        Ok(self.reports.get(report_id).cloned())
    }
}

/// One pretty-printed JSON file per report under a directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create report store at {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn report_path(&self, report_id: &str) -> Result<PathBuf> {
        // Report ids become file names; path separators would escape the
        // store directory.
        if report_id.is_empty()
            || report_id
                .chars()
                .any(|c| c == '/' || c == '\\' || c == '\0')
        {
            return Err(RoicastError::storage(format!(
                "report id {report_id:?} is not a valid store key"
            ))
            .into());
        }
        Ok(self.dir.join(format!("{report_id}.json")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportStore for JsonFileStore {
    fn put(&mut self, report_id: &str, result: &CalculationResult) -> Result<()> {
        let path = self.report_path(report_id)?;
        let json = serde_json::to_string_pretty(result)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        log::debug!("stored report {report_id} at {}", path.display());
        Ok(())
    }

    fn get(&self, report_id: &str) -> Result<Option<CalculationResult>> {
        let path = self.report_path(report_id)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read report {}", path.display()))?;
        let result = serde_json::from_str(&content)
            .with_context(|| format!("malformed stored report {}", path.display()))?;
        Ok(Some(result))
    }
}
