use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{AnalysisReport, ReportId};
use super::fixtures::demo_report;

type ReportMap = HashMap<ReportId, AnalysisReport>;

/// Storage for generated reports. Unknown ids are `Ok(None)`.
pub trait ReportRepository: Send + Sync {
    fn fetch(&self, id: &ReportId) -> Result<Option<AnalysisReport>, RepositoryError>;
    fn insert(&self, report: AnalysisReport) -> Result<AnalysisReport, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// In-process report store standing in for the analysis backend.
#[derive(Debug, Default, Clone)]
pub struct MockReportRepository {
    reports: Arc<Mutex<ReportMap>>,
}

impl MockReportRepository {
    /// Store holding only the demo report.
    pub fn seeded() -> Self {
        let repository = Self::default();
        let report = demo_report();
        if let Ok(mut guard) = repository.reports.lock() {
            guard.insert(report.id.clone(), report);
        }
        repository
    }

    fn lock(&self) -> Result<MutexGuard<'_, ReportMap>, RepositoryError> {
        self.reports
            .lock()
            .map_err(|_| RepositoryError::Unavailable("report store poisoned".to_string()))
    }
}

impl ReportRepository for MockReportRepository {
    fn fetch(&self, id: &ReportId) -> Result<Option<AnalysisReport>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn insert(&self, report: AnalysisReport) -> Result<AnalysisReport, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&report.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(report.id.clone(), report.clone());
        Ok(report)
    }
}
