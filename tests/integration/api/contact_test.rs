//! Contact API integration tests

use pretty_assertions::assert_eq;
use tonic::Request;

use domunity::backend::services::contact::{CONTACT_RECEIVED, OFFER_RECEIVED, PRESENTATION_RECEIVED};
use domunity::backend::services::ContactServiceImpl;
use domunity::shared::proto::contact_service_server::ContactService;
use domunity::shared::proto::{ContactFormRequest, OfferRequest, PresentationRequest};

use crate::common::{unique_email, unreachable_pool, TestDatabase};

#[tokio::test]
async fn test_each_form_stores_its_type() {
    let Some(db) = TestDatabase::connect().await else { return };
    let service = ContactServiceImpl::new(db.pool().clone());
    let email = unique_email();

    let contact = service
        .send_contact_form(Request::new(ContactFormRequest {
            name: "Ivan".to_string(),
            phone: "123".to_string(),
            email: email.clone(),
            message: "Hello".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(contact.success);
    assert_eq!(contact.message, CONTACT_RECEIVED);

    let offer = service
        .request_offer(Request::new(OfferRequest {
            city: "Sofia".to_string(),
            num_properties: 4,
            address: "Main St 1".to_string(),
            phone: "123".to_string(),
            email: email.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(offer.success);
    assert_eq!(offer.message, OFFER_RECEIVED);

    let presentation = service
        .request_presentation(Request::new(PresentationRequest {
            date: "2025-12-01".to_string(),
            building_type: "Residential".to_string(),
            address: "Main St 2".to_string(),
            phone: "123".to_string(),
            email: email.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(presentation.success);
    assert_eq!(presentation.message, PRESENTATION_RECEIVED);

    assert_eq!(db.count_contact_requests(&email, "contact").await, 1);
    assert_eq!(db.count_contact_requests(&email, "offer").await, 1);
    assert_eq!(db.count_contact_requests(&email, "presentation").await, 1);

    let (message,): (String,) = sqlx::query_as("SELECT message FROM contact_requests WHERE email = $1 AND type = 'offer'")
        .bind(&email)
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(message, "City: Sofia, Properties: 4, Address: Main St 1");
}

#[tokio::test]
async fn test_submissions_are_not_deduplicated() {
    let Some(db) = TestDatabase::connect().await else { return };
    let service = ContactServiceImpl::new(db.pool().clone());
    let email = unique_email();

    for _ in 0..2 {
        let response = service
            .send_contact_form(Request::new(ContactFormRequest {
                name: "Same".to_string(),
                phone: String::new(),
                email: email.clone(),
                message: "Same message".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(response.success);
    }

    assert_eq!(db.count_contact_requests(&email, "contact").await, 2);
}

#[tokio::test]
async fn test_datastore_failure_is_reported_in_payload() {
    let response = ContactServiceImpl::new(unreachable_pool())
        .send_contact_form(Request::new(ContactFormRequest {
            name: "Ivan".to_string(),
            phone: String::new(),
            email: "ivan@example.com".to_string(),
            message: "Hello".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!response.success);
    assert!(!response.message.is_empty());
}
