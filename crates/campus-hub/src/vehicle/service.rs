use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{AnalysisReport, ReportId};
use super::fixtures::demo_report;
use super::intake::{ImageBatch, IntakeError, VehicleForm};
use super::report::ReportAssessment;
use super::repository::{ReportRepository, RepositoryError};
use super::scoring::ReportScorer;
use crate::config::AnalysisConfig;

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rpt-{id:06}"))
}

/// Uploaded file names plus the details form, as posted by the wizard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub image_names: Vec<String>,
    #[serde(default)]
    pub vehicle: VehicleForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisTicket {
    pub report_id: ReportId,
    pub images_accepted: usize,
    pub images_dropped: usize,
}

/// Mock analysis backend: looks reports up and turns submissions into reports
/// after the configured round-trip delay.
pub struct VehicleAnalysisService<R> {
    repository: Arc<R>,
    scorer: ReportScorer,
    config: AnalysisConfig,
}

impl<R> VehicleAnalysisService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AnalysisConfig) -> Self {
        Self::with_scorer(repository, ReportScorer::default(), config)
    }

    pub fn with_scorer(repository: Arc<R>, scorer: ReportScorer, config: AnalysisConfig) -> Self {
        Self {
            repository,
            scorer,
            config,
        }
    }

    pub fn scorer(&self) -> &ReportScorer {
        &self.scorer
    }

    pub async fn report(&self, id: &ReportId) -> Result<AnalysisReport, AnalysisServiceError> {
        self.simulate_round_trip().await;

        match self.repository.fetch(id)? {
            Some(report) => {
                info!(report_id = %id, "serving analysis report");
                Ok(report)
            }
            None => {
                warn!(report_id = %id, "analysis report not found");
                Err(AnalysisServiceError::NotFound(id.clone()))
            }
        }
    }

    /// Looks a report up and derives the full page view from it.
    pub async fn assessment(&self, id: &ReportId) -> Result<ReportAssessment, AnalysisServiceError> {
        let report = self.report(id).await?;
        Ok(self.assess(&report))
    }

    pub fn assess(&self, report: &AnalysisReport) -> ReportAssessment {
        ReportAssessment::build(report, &self.scorer)
    }

    /// Validates the wizard input and stores a new report built on the canned
    /// findings with the submitted vehicle details.
    pub async fn submit(
        &self,
        request: AnalysisRequest,
    ) -> Result<AnalysisTicket, AnalysisServiceError> {
        let mut batch = ImageBatch::new();
        let added = batch.add(&request.image_names);

        let vehicle = batch
            .ensure_ready()
            .and_then(|()| request.vehicle.validate())
            .map_err(|error| {
                warn!(%error, "analysis submission rejected");
                error
            })?;

        self.simulate_round_trip().await;

        let report = AnalysisReport {
            id: next_report_id(),
            created_at: Utc::now(),
            vehicle_details: vehicle,
            ..demo_report()
        };
        let stored = self.repository.insert(report)?;

        info!(
            report_id = %stored.id,
            images = batch.len(),
            dropped = added.dropped,
            "analysis accepted"
        );

        Ok(AnalysisTicket {
            report_id: stored.id,
            images_accepted: batch.len(),
            images_dropped: added.dropped,
        })
    }

    async fn simulate_round_trip(&self) {
        if self.config.latency > Duration::ZERO {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error("analysis report {0} not found")]
    NotFound(ReportId),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl AnalysisServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
