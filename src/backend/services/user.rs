/**
 * User Service
 *
 * Profile lookup and profile update.
 *
 * `GetProfile` is a read: a malformed id is `INVALID_ARGUMENT` and an unknown
 * user is `NOT_FOUND`. `UpdateProfile` is a write and reports every failure
 * as `success: false`.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db::users;
use crate::backend::error::{ActionOutcome, BackendError};
use crate::backend::services::mapping;
use crate::shared::parse_id;
use crate::shared::proto::user_service_server::UserService;
use crate::shared::proto::{GetProfileRequest, UpdateProfileRequest, UpdateProfileResponse, UserProfile};

pub const PROFILE_UPDATED: &str = "Profile updated successfully";

/// `UserService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct UserServiceImpl {
    pool: PgPool,
}

impl UserServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_profile(&self, raw_user_id: &str) -> Result<UserProfile, BackendError> {
        let user_id = parse_id("user_id", raw_user_id)?;

        let user = users::get_user_by_id(&self.pool, user_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load user {}: {}", user_id, e);
                BackendError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", user_id);
                BackendError::not_found("User")
            })?;

        let residence = users::find_residence(&self.pool, user_id).await.map_err(|e| {
            tracing::error!("Failed to load residence of user {}: {}", user_id, e);
            BackendError::from(e)
        })?;

        let details = users::get_profile_details(&self.pool, user_id).await.map_err(|e| {
            tracing::error!("Failed to load profile details of user {}: {}", user_id, e);
            BackendError::from(e)
        })?;

        Ok(mapping::user_profile(&user, residence.as_ref(), details.as_ref()))
    }

    async fn save_profile(&self, request: &UpdateProfileRequest) -> Result<u64, BackendError> {
        let user_id = parse_id("user_id", &request.user_id)?;
        let updated = users::update_contact_details(&self.pool, user_id, &request.full_name, &request.phone).await?;
        Ok(updated)
    }
}

#[tonic::async_trait]
impl UserService for UserServiceImpl {
    async fn get_profile(&self, request: Request<GetProfileRequest>) -> Result<Response<UserProfile>, Status> {
        let request = request.into_inner();
        tracing::info!("GetProfile request for user: {}", request.user_id);

        let profile = self.load_profile(&request.user_id).await?;
        Ok(Response::new(profile))
    }

    async fn update_profile(
        &self,
        request: Request<UpdateProfileRequest>,
    ) -> Result<Response<UpdateProfileResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("UpdateProfile request for user: {}", request.user_id);

        let result = self.save_profile(&request).await;
        match &result {
            Ok(0) => tracing::warn!("UpdateProfile matched no user: {}", request.user_id),
            Ok(_) => tracing::info!("Profile updated for user: {}", request.user_id),
            Err(e) => tracing::error!("Failed to update profile of user {}: {}", request.user_id, e),
        }

        let outcome = ActionOutcome::from_result(&result, PROFILE_UPDATED);
        Ok(Response::new(UpdateProfileResponse {
            success: outcome.success,
            message: outcome.message,
        }))
    }
}
