/**
 * Row Types
 *
 * One struct per shape read from PostgreSQL. Every handler that touches an
 * entity decodes into the same struct, and `services::mapping` owns the
 * conversion from these rows to the wire messages.
 *
 * Nullable columns are `Option`s; the wire defaults ("" / 0) are applied in
 * the mapping layer, not here.
 */

use chrono::{NaiveDate, NaiveDateTime};

/// A row of `users`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// bcrypt hash, never leaves the backend
    pub password_hash: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// A row of `buildings`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Building {
    pub id: i32,
    pub address: String,
    pub entrance: Option<String>,
    /// Denormalized summary, not recomputed from `apartments`
    pub total_apartments: Option<i32>,
    /// Denormalized summary, not recomputed from `apartments`
    pub total_residents: Option<i32>,
}

/// A row of `apartments`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Apartment {
    pub id: i32,
    pub building_id: Option<i32>,
    pub number: i32,
    pub floor: Option<i32>,
    #[sqlx(rename = "type")]
    pub apartment_type: Option<String>,
    pub residents: Option<i32>,
    pub user_id: Option<i32>,
}

/// A row of `events`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Event {
    pub id: i32,
    pub building_id: Option<i32>,
    pub date: NaiveDate,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// An apartment owned by a user, joined with its building
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Residence {
    pub apartment_id: i32,
    pub building_id: i32,
    pub number: i32,
    pub floor: Option<i32>,
    pub apartment_type: Option<String>,
    pub residents: Option<i32>,
    pub address: String,
    pub entrance: Option<String>,
    pub total_apartments: Option<i32>,
    pub total_residents: Option<i32>,
}

impl Residence {
    /// The building half of the join
    pub fn building(&self) -> Building {
        Building {
            id: self.building_id,
            address: self.address.clone(),
            entrance: self.entrance.clone(),
            total_apartments: self.total_apartments,
            total_residents: self.total_residents,
        }
    }

    /// The apartment half of the join
    pub fn apartment(&self, owner: i32) -> Apartment {
        Apartment {
            id: self.apartment_id,
            building_id: Some(self.building_id),
            number: self.number,
            floor: self.floor,
            apartment_type: self.apartment_type.clone(),
            residents: self.residents,
            user_id: Some(owner),
        }
    }
}

/// Account details from `user_profiles`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileDetails {
    pub account_manager: Option<String>,
    pub balance: Option<f64>,
    pub client_number: Option<String>,
    pub contract_end_date: Option<NaiveDate>,
}

/// One line of a building's financial report
///
/// Monetary columns are already coalesced to 0 by the query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FinancialEntry {
    pub number: i32,
    pub floor: Option<i32>,
    pub apartment_type: Option<String>,
    pub residents: Option<i32>,
    pub full_name: Option<String>,
    pub elevator_gtp: f64,
    pub elevator_electricity: f64,
    pub common_area_electricity: f64,
    pub elevator_maintenance: f64,
    pub management_fee: f64,
    pub repair_fund: f64,
    pub total_due: f64,
}

/// Which marketing form produced a contact request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Contact,
    Offer,
    Presentation,
}

impl ContactKind {
    /// Value stored in `contact_requests.type`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Offer => "offer",
            Self::Presentation => "presentation",
        }
    }
}

/// A contact request ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub kind: ContactKind,
}
