/**
 * Financial Service
 *
 * The report's `total_balance` is computed per response from the returned
 * entries and is never stored. Payment history is not tracked yet, so
 * `GetPaymentHistory` always answers with an empty list.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db::financial;
use crate::backend::error::BackendError;
use crate::backend::services::mapping;
use crate::shared::parse_id;
use crate::shared::proto::financial_service_server::FinancialService;
use crate::shared::proto::{FinancialReport, GetFinancialReportRequest, GetPaymentHistoryRequest, PaymentHistory};

/// `FinancialService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct FinancialServiceImpl {
    pool: PgPool,
}

impl FinancialServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn build_report(&self, raw_building_id: &str) -> Result<FinancialReport, BackendError> {
        let building_id = parse_id("building_id", raw_building_id)?;

        let entries = financial::financial_report(&self.pool, building_id).await.map_err(|e| {
            tracing::error!("Failed to load financial report of building {}: {}", building_id, e);
            BackendError::from(e)
        })?;

        Ok(mapping::financial_report(&entries))
    }
}

#[tonic::async_trait]
impl FinancialService for FinancialServiceImpl {
    async fn get_financial_report(
        &self,
        request: Request<GetFinancialReportRequest>,
    ) -> Result<Response<FinancialReport>, Status> {
        let request = request.into_inner();
        tracing::info!("GetFinancialReport request for building: {}", request.building_id);

        let report = self.build_report(&request.building_id).await?;
        tracing::debug!(
            "Financial report: {} entries, total balance {:.2}",
            report.entries.len(),
            report.total_balance
        );
        Ok(Response::new(report))
    }

    async fn get_payment_history(
        &self,
        request: Request<GetPaymentHistoryRequest>,
    ) -> Result<Response<PaymentHistory>, Status> {
        let request = request.into_inner();
        tracing::info!("GetPaymentHistory request for user: {}", request.user_id);

        parse_id("user_id", &request.user_id).map_err(BackendError::from)?;
        Ok(Response::new(PaymentHistory { payments: Vec::new() }))
    }
}
