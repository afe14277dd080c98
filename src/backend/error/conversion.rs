/**
 * Error Conversion
 *
 * This module turns backend errors into the two transport formats the
 * server speaks.
 *
 * # gRPC
 *
 * `BackendError` converts into `tonic::Status`, so service methods can use
 * `?` directly. The status message is the error message unchanged.
 *
 * # HTTP
 *
 * `BackendError` implements axum's `IntoResponse`, producing:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use tonic::Status;

use crate::backend::error::types::BackendError;

impl From<BackendError> for Status {
    fn from(err: BackendError) -> Self {
        Status::new(err.grpc_code(), err.message())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, [(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
    }
}
