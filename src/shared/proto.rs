//! Generated gRPC Types
//!
//! Messages, server traits and clients compiled by `build.rs` from
//! `proto/domunity.proto` (package `domunity`).
//!
//! Server side, each service is exposed as a trait (e.g.
//! `auth_service_server::AuthService`) plus a wrapper
//! (`auth_service_server::AuthServiceServer`) that tonic can route to.
//! The matching clients live under `*_client` modules.

#![allow(clippy::all)]

tonic::include_proto!("domunity");
