/**
 * Row to Message Mapping
 *
 * The single place where database rows become gRPC messages. Handlers never
 * build wire messages field by field; they convert rows through the `From`
 * impls below.
 *
 * # Conventions
 *
 * - ids become decimal strings
 * - absent text becomes `""`, absent numbers become `0`
 * - dates are `YYYY-MM-DD`, timestamps RFC 3339 UTC with milliseconds
 */

use chrono::{NaiveDate, NaiveDateTime, SecondsFormat};

use crate::backend::db::models::{Apartment, Building, Event, FinancialEntry, ProfileDetails, Residence, User};
use crate::backend::db::schema::DEFAULT_APARTMENT_TYPE;
use crate::shared::proto;

/// Report client name for apartments without an owner
pub const UNKNOWN_CLIENT: &str = "N/A";

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a stored (UTC) timestamp as RFC 3339 with milliseconds
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<&User> for proto::User {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            full_name: user.full_name.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            created_at: user.created_at.map(format_timestamp).unwrap_or_default(),
        }
    }
}

impl From<&Building> for proto::Building {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id.to_string(),
            address: building.address.clone(),
            entrance: building.entrance.clone().unwrap_or_default(),
            total_apartments: building.total_apartments.unwrap_or(0),
            total_residents: building.total_residents.unwrap_or(0),
        }
    }
}

impl From<&Apartment> for proto::Apartment {
    fn from(apartment: &Apartment) -> Self {
        Self {
            id: apartment.id.to_string(),
            building_id: apartment.building_id.map(|id| id.to_string()).unwrap_or_default(),
            number: apartment.number,
            floor: apartment.floor.unwrap_or(0),
            r#type: apartment.apartment_type.clone().unwrap_or_default(),
            residents: apartment.residents.unwrap_or(0),
        }
    }
}

impl From<&Event> for proto::Event {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            date: format_date(event.date),
            title: event.title.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            building_id: event.building_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

impl From<&FinancialEntry> for proto::FinancialReportEntry {
    fn from(entry: &FinancialEntry) -> Self {
        Self {
            apartment_number: entry.number,
            r#type: entry
                .apartment_type
                .clone()
                .unwrap_or_else(|| DEFAULT_APARTMENT_TYPE.to_string()),
            floor: entry.floor.unwrap_or(0),
            client_name: entry.full_name.clone().unwrap_or_else(|| UNKNOWN_CLIENT.to_string()),
            residents: entry.residents.unwrap_or(0),
            elevator_gtp: entry.elevator_gtp,
            elevator_electricity: entry.elevator_electricity,
            common_area_electricity: entry.common_area_electricity,
            elevator_maintenance: entry.elevator_maintenance,
            management_fee: entry.management_fee,
            repair_fund: entry.repair_fund,
            total_due: entry.total_due,
        }
    }
}

/// Assemble a profile from the user row and its optional related rows
///
/// Missing residence or details leave the corresponding sections empty.
pub fn user_profile(user: &User, residence: Option<&Residence>, details: Option<&ProfileDetails>) -> proto::UserProfile {
    let mut profile = proto::UserProfile {
        user: Some(proto::User::from(user)),
        ..Default::default()
    };

    if let Some(residence) = residence {
        profile.building = Some(proto::Building::from(&residence.building()));
        profile.apartment = Some(proto::Apartment::from(&residence.apartment(user.id)));
    }

    if let Some(details) = details {
        profile.account_manager = details.account_manager.clone().unwrap_or_default();
        profile.balance = details.balance.unwrap_or(0.0);
        profile.client_number = details.client_number.clone().unwrap_or_default();
        profile.contract_end_date = details.contract_end_date.map(format_date).unwrap_or_default();
    }

    profile
}

/// Build a report whose balance is the sum of every entry's `total_due`
pub fn financial_report(entries: &[FinancialEntry]) -> proto::FinancialReport {
    proto::FinancialReport {
        entries: entries.iter().map(proto::FinancialReportEntry::from).collect(),
        total_balance: entries.iter().map(|entry| entry.total_due).sum(),
    }
}
