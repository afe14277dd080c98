//! gRPC Services
//!
//! One implementation per service in `proto/domunity.proto`. Each holds a
//! clone of the connection pool, injected at construction, and implements
//! the trait generated by `tonic-build`.
//!
//! # Error shapes
//!
//! Read operations return `Err(Status)` converted from `BackendError`
//! (not found, invalid argument, internal). Write operations always return a
//! response and report failure as `success: false` through `ActionOutcome`.
//!
//! `AuthService` lives in `backend::auth`.

/// Row to message conversions shared by every service
pub mod mapping;

pub mod building;
pub mod contact;
pub mod event;
pub mod financial;
pub mod health;
pub mod user;

pub use building::BuildingServiceImpl;
pub use contact::ContactServiceImpl;
pub use event::EventServiceImpl;
pub use financial::FinancialServiceImpl;
pub use health::HealthServiceImpl;
pub use user::UserServiceImpl;
