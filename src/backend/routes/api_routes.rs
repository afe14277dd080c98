/**
 * JSON API Routes
 *
 * A REST facade over the gRPC services for browser code that does not
 * speak gRPC-Web. Bodies are the wire messages in JSON form (field names as
 * in `proto/domunity.proto`) and each handler forwards to the same service
 * implementation the gRPC server uses.
 *
 * # Routes
 *
 * - `POST /api/auth/login` - 200, or 401 with `success: false`
 * - `POST /api/auth/register` - 201, or 400 with `success: false`
 * - `POST /api/auth/refresh` - 200, or 401 with `success: false`
 * - `GET /api/user/profile` - bearer token required, 401 without one
 * - `POST /api/contact/form`, `/api/contact/offer`,
 *   `/api/contact/presentation` - always 200, outcome in the body
 *
 * A body that is not valid JSON for the route answers 400. A service that
 * fails the call answers with the HTTP status matching its gRPC code.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tonic::Request;

use crate::backend::auth::AuthServiceImpl;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::services::{ContactServiceImpl, UserServiceImpl};
use crate::shared::proto::auth_service_server::AuthService;
use crate::shared::proto::contact_service_server::ContactService;
use crate::shared::proto::user_service_server::UserService;
use crate::shared::proto::{
    ContactFormRequest, ContactFormResponse, GetProfileRequest, LoginRequest, LoginResponse, OfferRequest,
    OfferResponse, PresentationRequest, PresentationResponse, RefreshTokenRequest, RefreshTokenResponse,
    RegisterRequest, RegisterResponse, UserProfile,
};

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type ApiResult<T> = Result<(StatusCode, Json<T>), BackendError>;

/// Routes mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/refresh", post(refresh))
        .route("/user/profile", get(profile))
        .route("/contact/form", post(contact_form))
        .route("/contact/offer", post(offer))
        .route("/contact/presentation", post(presentation))
}

fn status_for(success: bool, failure: StatusCode) -> StatusCode {
    if success {
        StatusCode::OK
    } else {
        failure
    }
}

pub async fn login(State(auth): State<AuthServiceImpl>, body: JsonBody<LoginRequest>) -> ApiResult<LoginResponse> {
    let Json(request) = body?;
    let response = auth.login(Request::new(request)).await?.into_inner();
    Ok((status_for(response.success, StatusCode::UNAUTHORIZED), Json(response)))
}

pub async fn register(
    State(auth): State<AuthServiceImpl>,
    body: JsonBody<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    let Json(request) = body?;
    let response = auth.register(Request::new(request)).await?.into_inner();
    let status = if response.success {
        StatusCode::CREATED
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(response)))
}

pub async fn refresh(
    State(auth): State<AuthServiceImpl>,
    body: JsonBody<RefreshTokenRequest>,
) -> ApiResult<RefreshTokenResponse> {
    let Json(request) = body?;
    let response = auth.refresh_token(Request::new(request)).await?.into_inner();
    Ok((status_for(response.success, StatusCode::UNAUTHORIZED), Json(response)))
}

/// Profile of the token's owner
pub async fn profile(State(users): State<UserServiceImpl>, user: AuthUser) -> ApiResult<UserProfile> {
    let request = GetProfileRequest {
        user_id: user.user_id.to_string(),
    };
    let profile = users.get_profile(Request::new(request)).await?.into_inner();
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn contact_form(
    State(contacts): State<ContactServiceImpl>,
    body: JsonBody<ContactFormRequest>,
) -> ApiResult<ContactFormResponse> {
    let Json(request) = body?;
    let response = contacts.send_contact_form(Request::new(request)).await?.into_inner();
    Ok((StatusCode::OK, Json(response)))
}

pub async fn offer(State(contacts): State<ContactServiceImpl>, body: JsonBody<OfferRequest>) -> ApiResult<OfferResponse> {
    let Json(request) = body?;
    let response = contacts.request_offer(Request::new(request)).await?.into_inner();
    Ok((StatusCode::OK, Json(response)))
}

pub async fn presentation(
    State(contacts): State<ContactServiceImpl>,
    body: JsonBody<PresentationRequest>,
) -> ApiResult<PresentationResponse> {
    let Json(request) = body?;
    let response = contacts.request_presentation(Request::new(request)).await?.into_inner();
    Ok((StatusCode::OK, Json(response)))
}
