//! User profile API integration tests

use pretty_assertions::assert_eq;
use tonic::{Code, Request};

use domunity::backend::services::user::PROFILE_UPDATED;
use domunity::backend::services::UserServiceImpl;
use domunity::shared::proto::user_service_server::UserService;
use domunity::shared::proto::{GetProfileRequest, UpdateProfileRequest};

use crate::assert_status;
use crate::common::{register_test_user, TestDatabase};

fn get_profile(user_id: impl Into<String>) -> Request<GetProfileRequest> {
    Request::new(GetProfileRequest { user_id: user_id.into() })
}

#[tokio::test]
async fn test_profile_without_residence() {
    let Some(db) = TestDatabase::connect().await else { return };
    let user = register_test_user(db.pool()).await;

    let profile = UserServiceImpl::new(db.pool().clone())
        .get_profile(get_profile(user.id.to_string()))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(profile.user.unwrap().email, user.email);
    assert!(profile.building.is_none());
    assert!(profile.apartment.is_none());
    assert_eq!(profile.account_manager, "");
    assert_eq!(profile.balance, 0.0);
}

#[tokio::test]
async fn test_profile_with_residence_and_details() {
    let Some(db) = TestDatabase::connect().await else { return };
    let user = register_test_user(db.pool()).await;
    let building_id = db.create_building().await;
    let first = db.create_apartment(building_id, 12, Some(user.id)).await;
    db.create_apartment(building_id, 13, Some(user.id)).await;
    db.create_profile(user.id, "Maria", 42.5, "2026-06-30").await;

    let profile = UserServiceImpl::new(db.pool().clone())
        .get_profile(get_profile(user.id.to_string()))
        .await
        .unwrap()
        .into_inner();

    let apartment = profile.apartment.expect("apartment");
    assert_eq!(apartment.id, first.to_string());
    assert_eq!(apartment.number, 12);
    assert_eq!(profile.building.expect("building").id, building_id.to_string());
    assert_eq!(profile.account_manager, "Maria");
    assert_eq!(profile.balance, 42.5);
    assert_eq!(profile.client_number, format!("C-{}", user.id));
    assert_eq!(profile.contract_end_date, "2026-06-30");
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let Some(db) = TestDatabase::connect().await else { return };

    let result = UserServiceImpl::new(db.pool().clone())
        .get_profile(get_profile(i32::MAX.to_string()))
        .await;

    assert_status!(result, Code::NotFound);
}

#[tokio::test]
async fn test_malformed_user_id_is_invalid_argument() {
    let service = UserServiceImpl::new(crate::common::unreachable_pool());

    let result = service.get_profile(get_profile("not-a-number")).await;
    assert_status!(result, Code::InvalidArgument);
}

#[tokio::test]
async fn test_update_profile_overwrites_fields() {
    let Some(db) = TestDatabase::connect().await else { return };
    let user = register_test_user(db.pool()).await;
    let service = UserServiceImpl::new(db.pool().clone());

    let response = service
        .update_profile(Request::new(UpdateProfileRequest {
            user_id: user.id.to_string(),
            full_name: "New Name".to_string(),
            phone: "not validated".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(response.success);
    assert_eq!(response.message, PROFILE_UPDATED);

    let profile = service
        .get_profile(get_profile(user.id.to_string()))
        .await
        .unwrap()
        .into_inner();
    let updated = profile.user.unwrap();
    assert_eq!(updated.full_name, "New Name");
    assert_eq!(updated.phone, "not validated");
}

#[tokio::test]
async fn test_update_profile_malformed_id_names_field() {
    let response = UserServiceImpl::new(crate::common::unreachable_pool())
        .update_profile(Request::new(UpdateProfileRequest {
            user_id: "abc".to_string(),
            full_name: "X".to_string(),
            phone: "Y".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(!response.success);
    assert!(response.message.contains("user_id"));
}
