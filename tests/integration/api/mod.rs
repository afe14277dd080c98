//! API integration tests
//!
//! One file per gRPC service, plus the JSON routes.

mod contact_test;
mod logging_test;
mod profile_test;
mod rest_test;
