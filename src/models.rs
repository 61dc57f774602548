use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============ Database Models ============

/// A pet record, linked to the CRM pet it was synchronized with.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Unique identifier for the pet.
    pub id: Uuid,
    /// Pet name.
    pub name: String,
    /// Pet age in years.
    pub age: i32,
    /// Foreign key to the `breeds` table.
    pub breed_id: Uuid,
    /// Foreign key to the `contacts` table.
    pub contact_id: Uuid,
    /// External CRM pet id.
    pub hub_spot_id: String,
    /// Timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// Timestamp of last update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A contact imported from the CRM when its first pet was created.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier for the contact.
    pub id: Uuid,
    /// Display name derived from the CRM first/last name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// External CRM contact id.
    pub hub_spot_id: String,
    /// Timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// Timestamp of last update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// A breed row. One row is written per pet creation; names are not unique.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    /// Unique identifier for the breed.
    pub id: Uuid,
    /// Breed name.
    pub name: String,
    /// Timestamp of creation.
    pub created_at: DateTime<Utc>,
    /// Timestamp of last update.
    pub updated_at: Option<DateTime<Utc>>,
}

// ============ Request / Response Models ============

/// Raw create-pet payload. Every field is optional so that missing fields can
/// be reported with the legacy per-field messages instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub contact_id: Option<String>,
}

/// A create-pet payload that passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub contact_id: String,
}

/// Partial update payload for a pet. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
}

/// Pagination query parameters for the pet listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

impl PageParams {
    /// Requested page, 1-based. Values below 1 are treated as 1.
    pub fn page(&self) -> i64 {
        i64::from(self.page.unwrap_or(1).max(1))
    }

    /// Page size, default 10, clamped to 1..=100.
    pub fn page_size(&self) -> i64 {
        i64::from(
            self.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        )
    }
}

/// Paginated pet listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPage {
    pub items: Vec<Pet>,
    pub total_items: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub page_size: i64,
}

impl PetPage {
    pub fn new(items: Vec<Pet>, total_items: i64, page: i64, page_size: i64) -> Self {
        // Ceiling division; an empty table still reports zero pages
        let total_pages = (total_items + page_size - 1) / page_size;
        Self {
            items,
            total_items,
            total_pages,
            current_page: page,
            page_size,
        }
    }
}
