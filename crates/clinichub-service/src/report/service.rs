//! Clinical report issuance and lookups.

use std::sync::Arc;

use tracing::info;

use clinichub_core::error::AppError;
use clinichub_core::types::pagination::{PageRequest, PageResponse};
use clinichub_database::repositories::record::RecordRepository;
use clinichub_database::repositories::report::ReportRepository;
use clinichub_entity::report::{ClinicalReport, CreateReport};

use crate::context::RequestContext;

/// Handles clinical reports.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Report repository.
    report_repo: Arc<ReportRepository>,
    /// Record repository (existence checks).
    record_repo: Arc<RecordRepository>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(report_repo: Arc<ReportRepository>, record_repo: Arc<RecordRepository>) -> Self {
        Self {
            report_repo,
            record_repo,
        }
    }

    /// Issues a new clinical report against a record.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateReport,
    ) -> Result<ClinicalReport, AppError> {
        ctx.require_authority("report:write")?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Report title is required"));
        }

        self.record_repo
            .find_by_id(data.record_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Medical record {} not found", data.record_id))
            })?;

        let report = self.report_repo.create(&data).await?;
        info!(
            report_id = report.id,
            record_id = report.record_id,
            actor = %ctx.email,
            "Clinical report issued"
        );
        Ok(report)
    }

    /// Gets a report by ID.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ClinicalReport, AppError> {
        ctx.require_authority("report:read")?;

        self.report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Clinical report {id} not found")))
    }

    /// Lists reports issued against a record.
    pub async fn list_for_record(
        &self,
        ctx: &RequestContext,
        record_id: i64,
        page: PageRequest,
    ) -> Result<PageResponse<ClinicalReport>, AppError> {
        ctx.require_authority("report:read")?;
        self.report_repo.find_by_record(record_id, &page).await
    }

    /// Deletes a report.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        ctx.require_authority("report:write")?;

        if !self.report_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Clinical report {id} not found")));
        }
        info!(report_id = id, actor = %ctx.email, "Clinical report deleted");
        Ok(())
    }
}
