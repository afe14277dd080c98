/**
 * Auth Service
 *
 * gRPC handlers for registration, login, token refresh and password reset.
 *
 * # Failure reporting
 *
 * Every auth RPC answers with a successful gRPC status; failures travel as
 * `success: false` with a fixed message. Login never reveals whether the
 * email exists: unknown email and wrong password produce the same message.
 * Causes are logged server-side only.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::db::models::User;
use crate::backend::db::users;
use crate::backend::error::BackendError;
use crate::shared::proto::auth_service_server::AuthService;
use crate::shared::proto::{
    self, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse, RefreshTokenRequest,
    RefreshTokenResponse, RegisterRequest, RegisterResponse,
};

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const LOGIN_FAILED: &str = "Login failed";
pub const RESET_INSTRUCTIONS_SENT: &str = "Password reset instructions sent to your email";

/// `AuthService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct AuthServiceImpl {
    pool: PgPool,
    sessions: SessionKeys,
}

impl AuthServiceImpl {
    pub fn new(pool: PgPool, sessions: SessionKeys) -> Self {
        Self { pool, sessions }
    }

    async fn create_account(&self, request: &RegisterRequest) -> Result<i32, BackendError> {
        let password_hash = hash_password(&request.password)?;
        let user_id = users::create_user(
            &self.pool,
            &request.email,
            &password_hash,
            &request.full_name,
            &request.phone,
        )
        .await?;
        Ok(user_id)
    }

    fn issue_tokens(&self, user: &User) -> Result<(String, String), BackendError> {
        let access_token = self.sessions.create_access_token(user.id, &user.email)?;
        let refresh_token = self.sessions.create_refresh_token(user.id)?;
        Ok((access_token, refresh_token))
    }
}

fn login_failure(message: &str) -> Response<LoginResponse> {
    Response::new(LoginResponse {
        success: false,
        message: message.to_string(),
        ..Default::default()
    })
}

#[tonic::async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: Request<RegisterRequest>) -> Result<Response<RegisterResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("Register request");
        tracing::debug!("Register request for: {}", request.email);

        match self.create_account(&request).await {
            Ok(user_id) => {
                tracing::info!("User registered successfully (id {})", user_id);
                Ok(Response::new(RegisterResponse {
                    success: true,
                    message: REGISTRATION_SUCCESSFUL.to_string(),
                    user_id: user_id.to_string(),
                }))
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                Ok(Response::new(RegisterResponse {
                    success: false,
                    message: REGISTRATION_FAILED.to_string(),
                    user_id: String::new(),
                }))
            }
        }
    }

    async fn login(&self, request: Request<LoginRequest>) -> Result<Response<LoginResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("Login request");
        tracing::debug!("Login request for: {}", request.email);

        let user = match users::get_user_by_email(&self.pool, &request.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!("Login rejected: unknown email");
                tracing::debug!("User not found: {}", request.email);
                return Ok(login_failure(INVALID_CREDENTIALS));
            }
            Err(e) => {
                tracing::error!("Database error during login: {}", e);
                return Ok(login_failure(LOGIN_FAILED));
            }
        };

        if !verify_password(&request.password, &user.password_hash) {
            tracing::warn!("Invalid password for user {}", user.id);
            return Ok(login_failure(INVALID_CREDENTIALS));
        }

        let (access_token, refresh_token) = match self.issue_tokens(&user) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::error!("Failed to create tokens: {}", e);
                return Ok(login_failure(LOGIN_FAILED));
            }
        };

        tracing::info!("User logged in successfully (id {})", user.id);

        Ok(Response::new(LoginResponse {
            success: true,
            message: LOGIN_SUCCESSFUL.to_string(),
            access_token,
            refresh_token,
            user: Some(proto::User::from(&user)),
        }))
    }

    async fn refresh_token(
        &self,
        request: Request<RefreshTokenRequest>,
    ) -> Result<Response<RefreshTokenResponse>, Status> {
        let request = request.into_inner();

        match self.sessions.refresh_access_token(&request.refresh_token) {
            Ok(access_token) => {
                tracing::info!("Access token refreshed");
                Ok(Response::new(RefreshTokenResponse {
                    success: true,
                    access_token,
                }))
            }
            Err(e) => {
                tracing::warn!("Refresh token rejected: {}", e);
                Ok(Response::new(RefreshTokenResponse {
                    success: false,
                    access_token: String::new(),
                }))
            }
        }
    }

    async fn forgot_password(
        &self,
        request: Request<ForgotPasswordRequest>,
    ) -> Result<Response<ForgotPasswordResponse>, Status> {
        let request = request.into_inner();
        // Delivery is handled outside this service; the request is only acknowledged.
        tracing::info!("Password reset requested");
        tracing::debug!("Password reset requested for: {}", request.email);

        Ok(Response::new(ForgotPasswordResponse {
            success: true,
            message: RESET_INSTRUCTIONS_SENT.to_string(),
        }))
    }
}
