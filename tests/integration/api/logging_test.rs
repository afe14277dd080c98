//! Log hygiene
//!
//! Email addresses stay out of the default (`info`) log output of the auth
//! and contact services.

use std::io::Write;
use std::sync::{Arc, Mutex};

use tonic::Request;

use domunity::backend::services::ContactServiceImpl;
use domunity::shared::proto::auth_service_server::AuthService;
use domunity::shared::proto::contact_service_server::ContactService;
use domunity::shared::proto::{ContactFormRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest};

use crate::common::{auth_service, unreachable_pool};

const EMAIL: &str = "private.person@example.com";

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_info_logs_do_not_contain_email() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let pool = unreachable_pool();
    let auth = auth_service(&pool);

    auth.forgot_password(Request::new(ForgotPasswordRequest {
        email: EMAIL.to_string(),
    }))
    .await
    .unwrap();
    auth.login(Request::new(LoginRequest {
        email: EMAIL.to_string(),
        password: "pw".to_string(),
    }))
    .await
    .unwrap();
    auth.register(Request::new(RegisterRequest {
        email: EMAIL.to_string(),
        password: "pw".to_string(),
        full_name: "Private Person".to_string(),
        phone: "1".to_string(),
    }))
    .await
    .unwrap();
    ContactServiceImpl::new(pool.clone())
        .send_contact_form(Request::new(ContactFormRequest {
            name: "Private Person".to_string(),
            phone: "1".to_string(),
            email: EMAIL.to_string(),
            message: "hello".to_string(),
        }))
        .await
        .unwrap();

    let output = logs.contents();
    assert!(output.contains("Password reset requested"), "nothing captured: {}", output);
    assert!(output.contains("Login request"));
    assert!(!output.contains(EMAIL), "email leaked into logs:\n{}", output);
}
