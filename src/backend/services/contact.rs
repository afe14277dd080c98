/**
 * Contact Service
 *
 * The three marketing forms share one table. Each handler turns its form
 * into a `NewContactRequest`, differing only in how the free-text message is
 * composed and which type tag is stored.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db::contacts;
use crate::backend::db::models::{ContactKind, NewContactRequest};
use crate::backend::error::{ActionOutcome, BackendError};
use crate::shared::proto::contact_service_server::ContactService;
use crate::shared::proto::{
    ContactFormRequest, ContactFormResponse, OfferRequest, OfferResponse, PresentationRequest, PresentationResponse,
};

pub const CONTACT_RECEIVED: &str = "Your message has been sent successfully";
pub const OFFER_RECEIVED: &str = "Your offer request has been received";
pub const PRESENTATION_RECEIVED: &str = "Your presentation request has been received";

/// A general contact form, stored as written
pub fn contact_form(request: ContactFormRequest) -> NewContactRequest {
    NewContactRequest {
        name: request.name,
        phone: request.phone,
        email: request.email,
        message: request.message,
        kind: ContactKind::Contact,
    }
}

/// An offer request; the form fields are folded into the message
pub fn offer(request: OfferRequest) -> NewContactRequest {
    NewContactRequest {
        name: String::new(),
        message: format!(
            "City: {}, Properties: {}, Address: {}",
            request.city, request.num_properties, request.address
        ),
        phone: request.phone,
        email: request.email,
        kind: ContactKind::Offer,
    }
}

/// A presentation request; the form fields are folded into the message
pub fn presentation(request: PresentationRequest) -> NewContactRequest {
    NewContactRequest {
        name: String::new(),
        message: format!(
            "Date: {}, Type: {}, Address: {}",
            request.date, request.building_type, request.address
        ),
        phone: request.phone,
        email: request.email,
        kind: ContactKind::Presentation,
    }
}

/// `ContactService` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct ContactServiceImpl {
    pool: PgPool,
}

impl ContactServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn store(&self, request: NewContactRequest, ok_message: &str) -> ActionOutcome {
        let result = contacts::insert_contact_request(&self.pool, &request)
            .await
            .map_err(BackendError::from);

        match &result {
            Ok(id) => tracing::info!("Stored {} request {}", request.kind.as_str(), id),
            Err(e) => tracing::error!("Failed to store {} request: {}", request.kind.as_str(), e),
        }

        ActionOutcome::from_result(&result, ok_message)
    }
}

#[tonic::async_trait]
impl ContactService for ContactServiceImpl {
    async fn send_contact_form(
        &self,
        request: Request<ContactFormRequest>,
    ) -> Result<Response<ContactFormResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("SendContactForm request");
        tracing::debug!("SendContactForm request from: {}", request.email);

        let outcome = self.store(contact_form(request), CONTACT_RECEIVED).await;
        Ok(Response::new(ContactFormResponse {
            success: outcome.success,
            message: outcome.message,
        }))
    }

    async fn request_offer(&self, request: Request<OfferRequest>) -> Result<Response<OfferResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("RequestOffer request for {}", request.city);
        tracing::debug!("RequestOffer request from: {}", request.email);

        let outcome = self.store(offer(request), OFFER_RECEIVED).await;
        Ok(Response::new(OfferResponse {
            success: outcome.success,
            message: outcome.message,
        }))
    }

    async fn request_presentation(
        &self,
        request: Request<PresentationRequest>,
    ) -> Result<Response<PresentationResponse>, Status> {
        let request = request.into_inner();
        tracing::info!("RequestPresentation request");
        tracing::debug!("RequestPresentation request from: {}", request.email);

        let outcome = self.store(presentation(request), PRESENTATION_RECEIVED).await;
        Ok(Response::new(PresentationResponse {
            success: outcome.success,
            message: outcome.message,
        }))
    }
}
