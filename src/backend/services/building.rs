/**
 * Building Service
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db::buildings;
use crate::backend::error::BackendError;
use crate::shared::parse_id;
use crate::shared::proto::building_service_server::BuildingService;
use crate::shared::proto::{self, GetBuildingRequest, ListApartmentsRequest, ListApartmentsResponse};

/// `BuildingService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct BuildingServiceImpl {
    pool: PgPool,
}

impl BuildingServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_building(&self, raw_building_id: &str) -> Result<proto::Building, BackendError> {
        let building_id = parse_id("building_id", raw_building_id)?;

        let building = buildings::get_building(&self.pool, building_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load building {}: {}", building_id, e);
                BackendError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("Building not found: {}", building_id);
                BackendError::not_found("Building")
            })?;

        Ok(proto::Building::from(&building))
    }

    async fn fetch_apartments(&self, raw_building_id: &str) -> Result<Vec<proto::Apartment>, BackendError> {
        let building_id = parse_id("building_id", raw_building_id)?;

        let apartments = buildings::list_apartments(&self.pool, building_id).await.map_err(|e| {
            tracing::error!("Failed to list apartments of building {}: {}", building_id, e);
            BackendError::from(e)
        })?;

        Ok(apartments.iter().map(proto::Apartment::from).collect())
    }
}

#[tonic::async_trait]
impl BuildingService for BuildingServiceImpl {
    async fn get_building(&self, request: Request<GetBuildingRequest>) -> Result<Response<proto::Building>, Status> {
        let request = request.into_inner();
        tracing::info!("GetBuilding request for building: {}", request.building_id);

        let building = self.fetch_building(&request.building_id).await?;
        Ok(Response::new(building))
    }

    async fn list_apartments(
        &self,
        request: Request<ListApartmentsRequest>,
    ) -> Result<Response<ListApartmentsResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("ListApartments request for building: {}", request.building_id);

        let apartments = self.fetch_apartments(&request.building_id).await?;
        Ok(Response::new(ListApartmentsResponse { apartments }))
    }
}
