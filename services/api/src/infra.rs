use campus_hub::catalog::{InMemoryProjectRepository, ProjectCatalogService};
use campus_hub::config::AnalysisConfig;
use campus_hub::error::AppError;
use campus_hub::vehicle::{MockReportRepository, VehicleAnalysisService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type CatalogService = ProjectCatalogService<InMemoryProjectRepository>;
pub(crate) type AnalysisService = VehicleAnalysisService<MockReportRepository>;

/// In-memory adapters wired into the shared services.
pub(crate) struct Services {
    pub(crate) catalog: Arc<CatalogService>,
    pub(crate) analysis: Arc<AnalysisService>,
}

impl Services {
    pub(crate) fn in_memory(analysis: AnalysisConfig) -> Result<Self, AppError> {
        let catalog = ProjectCatalogService::new(Arc::new(InMemoryProjectRepository::seeded()))?;
        let analysis =
            VehicleAnalysisService::new(Arc::new(MockReportRepository::seeded()), analysis);

        Ok(Self {
            catalog: Arc::new(catalog),
            analysis: Arc::new(analysis),
        })
    }
}

/// Parses a positive project id from the command line.
pub(crate) fn parse_project_id(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| format!("'{raw}' is not a valid project id"))
}

/// Parses a rupee amount, accepting `,` and `_` digit separators.
pub(crate) fn parse_rupees(raw: &str) -> Result<u64, String> {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '_'))
        .collect::<String>()
        .parse::<u64>()
        .map_err(|err| format!("failed to parse '{raw}' as a rupee amount ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_must_be_positive() {
        assert_eq!(parse_project_id(" 4 "), Ok(4));
        assert!(parse_project_id("0").is_err());
        assert!(parse_project_id("four").is_err());
    }

    #[test]
    fn rupee_amounts_accept_separators() {
        assert_eq!(parse_rupees("6,50,000"), Ok(650_000));
        assert_eq!(parse_rupees("700_000"), Ok(700_000));
        assert!(parse_rupees("lots").is_err());
    }
}
