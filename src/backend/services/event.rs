/**
 * Event Service
 *
 * Listing returns the newest events first. The requested limit is
 * normalised before it reaches the query: unset or non-positive means
 * `DEFAULT_EVENT_LIMIT`, anything above `MAX_EVENT_LIMIT` is clamped.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db::events;
use crate::backend::error::{ActionOutcome, BackendError};
use crate::shared::parse_id;
use crate::shared::proto::event_service_server::EventService;
use crate::shared::proto::{self, CreateEventRequest, CreateEventResponse, ListEventsRequest, ListEventsResponse};

/// Events returned when no positive limit is given
pub const DEFAULT_EVENT_LIMIT: i64 = 10;

/// Upper bound on events returned by one call
pub const MAX_EVENT_LIMIT: i64 = 100;

pub const EVENT_CREATED: &str = "Event created successfully";

/// Turn a requested limit into the number of rows to fetch
pub fn normalize_limit(requested: i32) -> i64 {
    if requested <= 0 {
        DEFAULT_EVENT_LIMIT
    } else {
        i64::from(requested).min(MAX_EVENT_LIMIT)
    }
}

/// `EventService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct EventServiceImpl {
    pool: PgPool,
}

impl EventServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_events(&self, request: &ListEventsRequest) -> Result<Vec<proto::Event>, BackendError> {
        let building_id = parse_id("building_id", &request.building_id)?;
        let limit = normalize_limit(request.limit);

        let rows = events::list_events(&self.pool, building_id, limit).await.map_err(|e| {
            tracing::error!("Failed to list events of building {}: {}", building_id, e);
            BackendError::from(e)
        })?;

        Ok(rows.iter().map(proto::Event::from).collect())
    }

    async fn insert_event(&self, request: &CreateEventRequest) -> Result<i32, BackendError> {
        let building_id = parse_id("building_id", &request.building_id)?;
        let event_id = events::create_event(
            &self.pool,
            building_id,
            &request.date,
            &request.title,
            &request.description,
        )
        .await?;
        Ok(event_id)
    }
}

#[tonic::async_trait]
impl EventService for EventServiceImpl {
    async fn list_events(&self, request: Request<ListEventsRequest>) -> Result<Response<ListEventsResponse>, Status> {
        let request = request.into_inner();
        tracing::info!(
            "ListEvents request for building: {} (limit {})",
            request.building_id,
            request.limit
        );

        let events = self.fetch_events(&request).await?;
        Ok(Response::new(ListEventsResponse { events }))
    }

    async fn create_event(
        &self,
        request: Request<CreateEventRequest>,
    ) -> Result<Response<CreateEventResponse>, Status> {
        let request = request.into_inner();
        tracing::info!(
            "CreateEvent request for building: {} on {}",
            request.building_id,
            request.date
        );

        let result = self.insert_event(&request).await;
        let event_id = match &result {
            Ok(id) => {
                tracing::info!("Event created: {}", id);
                id.to_string()
            }
            Err(e) => {
                tracing::error!("Failed to create event: {}", e);
                String::new()
            }
        };

        let outcome = ActionOutcome::from_result(&result, EVENT_CREATED);
        Ok(Response::new(CreateEventResponse {
            success: outcome.success,
            message: outcome.message,
            event_id,
        }))
    }
}
