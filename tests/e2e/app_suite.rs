//! E2E test suite for DomUnity
//!
//! Starts the real gRPC server on an ephemeral port and drives it with the
//! generated clients, the same way a frontend would. The gRPC-Web tests talk
//! plain HTTP/1.1, like a browser.

use std::net::SocketAddr;

use prost::Message;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;

use domunity::backend::server::{grpc_router, AppState};
use domunity::shared::proto::auth_service_client::AuthServiceClient;
use domunity::shared::proto::building_service_client::BuildingServiceClient;
use domunity::shared::proto::event_service_client::EventServiceClient;
use domunity::shared::proto::health_service_client::HealthServiceClient;
use domunity::shared::proto::user_service_client::UserServiceClient;
use domunity::shared::proto::{
    CreateEventRequest, GetBuildingRequest, GetProfileRequest, HealthCheckRequest, HealthCheckResponse,
    ListEventsRequest, LoginRequest, RegisterRequest,
};
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;

use crate::common::{test_config, unique_email, unreachable_pool, TestDatabase};

/// A server running on a background task until dropped
struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(pool: PgPool) -> Self {
        let state = AppState::new(pool, test_config());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, stopped) = oneshot::channel::<()>();

        let router = grpc_router(&state).await;
        tokio::spawn(async move {
            router
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown: Some(shutdown),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn channel(&self) -> Channel {
        Channel::from_shared(format!("http://{}", self.addr))
            .unwrap()
            .connect()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

#[tokio::test]
async fn test_health_without_database() {
    let server = TestServer::start(unreachable_pool()).await;

    let response = HealthServiceClient::new(server.channel().await)
        .check(HealthCheckRequest {})
        .await
        .unwrap()
        .into_inner();

    assert!(response.healthy);
    assert_eq!(response.database_status, "unhealthy");
}

#[tokio::test]
async fn test_standard_health_service_reports_serving() {
    let server = TestServer::start(unreachable_pool()).await;
    let mut client = HealthClient::new(server.channel().await);

    for service in ["domunity.AuthService", "domunity.EventService", "domunity.HealthService"] {
        let status = client
            .check(tonic_health::pb::HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner()
            .status;
        assert_eq!(status, ServingStatus::Serving as i32, "{} not serving", service);
    }
}

const BROWSER_ORIGIN: &str = "http://localhost:3000";

#[tokio::test]
async fn test_grpc_web_preflight_allows_any_origin() {
    let server = TestServer::start(unreachable_pool()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, server.url("/domunity.HealthService/Check"))
        .header("origin", BROWSER_ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-grpc-web")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success(), "preflight answered {}", response.status());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_grpc_web_call_over_http1() {
    let server = TestServer::start(unreachable_pool()).await;

    // One uncompressed frame holding the empty HealthCheckRequest
    let frame = vec![0u8, 0, 0, 0, 0];
    let response = reqwest::Client::new()
        .post(server.url("/domunity.HealthService/Check"))
        .header("origin", BROWSER_ORIGIN)
        .header("content-type", "application/grpc-web+proto")
        .header("x-grpc-web", "1")
        .body(frame)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/grpc-web"), "content-type {}", content_type);

    let body = response.bytes().await.unwrap();
    assert_eq!(body[0], 0, "first frame carries the message");
    let length = u32::from_be_bytes([body[1], body[2], body[3], body[4]]) as usize;
    let message = HealthCheckResponse::decode(&body[5..5 + length]).unwrap();
    assert!(message.healthy);
    assert_eq!(message.database_status, "unhealthy");

    let trailers = &body[5 + length..];
    assert_eq!(trailers[0], 0x80, "second frame carries the trailers");
    assert!(String::from_utf8_lossy(&trailers[5..]).contains("grpc-status:0"));
}

#[tokio::test]
async fn test_malformed_id_over_the_wire() {
    let server = TestServer::start(unreachable_pool()).await;

    let status = BuildingServiceClient::new(server.channel().await)
        .get_building(GetBuildingRequest {
            building_id: "abc".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert_eq!(status.message(), "Invalid building_id: must be a positive integer");
}

#[tokio::test]
async fn test_resident_journey() {
    let Some(db) = TestDatabase::connect().await else { return };
    let building_id = db.create_building().await;
    let server = TestServer::start(db.pool().clone()).await;
    let channel = server.channel().await;

    let mut auth = AuthServiceClient::new(channel.clone());
    let email = unique_email();

    let registered = auth
        .register(RegisterRequest {
            email: email.clone(),
            password: "Passw0rd!".to_string(),
            full_name: "A B".to_string(),
            phone: "+1234567890".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(registered.success);

    let login = auth
        .login(LoginRequest {
            email: email.clone(),
            password: "Passw0rd!".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(login.success);
    let user = login.user.unwrap();
    assert_eq!(user.email, email);
    assert_eq!(user.id, registered.user_id);

    let wrong = auth
        .login(LoginRequest {
            email: email.clone(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!wrong.success);
    assert_eq!(wrong.message, "Invalid email or password");

    let profile = UserServiceClient::new(channel.clone())
        .get_profile(GetProfileRequest {
            user_id: registered.user_id.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(profile.user.unwrap().full_name, "A B");

    let mut events = EventServiceClient::new(channel);
    let created = events
        .create_event(CreateEventRequest {
            building_id: building_id.to_string(),
            date: "2025-11-05".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(created.success);

    let listed = events
        .list_events(ListEventsRequest {
            building_id: building_id.to_string(),
            limit: 0,
        })
        .await
        .unwrap()
        .into_inner()
        .events;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.event_id);
    assert_eq!(listed[0].date, "2025-11-05");
}
