use crate::config::Config;
use crate::crm_client::HubSpotClient;
use crate::errors::AppError;
use crate::models::{CreatePetRequest, NewPet, PageParams, Pet, PetPage, UpdatePetRequest};
use crate::repositories::{BreedRepository, ContactRepository, PetRepository};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
    /// Client for the HubSpot CRM API.
    pub crm: HubSpotClient,
}

/// GET /
///
/// Static hello message kept for parity with the legacy service.
pub async fn hello() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "message": "Hello World" })))
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "pet-sync-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Checks the create-pet payload field by field, short-circuiting on the
/// first failure. Order and messages match the legacy API: clients parse
/// these strings.
pub fn validate_create_pet(request: &CreatePetRequest) -> Result<NewPet, AppError> {
    let name = match request.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(AppError::BadRequest(
                "Name is not provided. Ensure a non-empty text is provided.".to_string(),
            ))
        }
    };

    let age = match request.age {
        Some(age) if age > 0 => age,
        _ => {
            return Err(AppError::BadRequest(
                "Age is not provided. Ensure a value greater than 0 is provided.".to_string(),
            ))
        }
    };

    let breed = match request.breed.as_deref() {
        Some(breed) if !breed.is_empty() => breed.to_string(),
        _ => {
            return Err(AppError::BadRequest(
                "BreedId is not provided. Ensure a value of type uuid is provided.".to_string(),
            ))
        }
    };

    let contact_id = match request.contact_id.as_deref() {
        Some(contact_id) if !contact_id.is_empty() => contact_id.to_string(),
        _ => {
            return Err(AppError::BadRequest(
                "ContactId is not provided. Ensure a value of type integer is provided. \
                 Read more about Contacts from HubSpot"
                    .to_string(),
            ))
        }
    };

    Ok(NewPet {
        name,
        age,
        breed,
        contact_id,
    })
}

/// Local display name for a CRM contact: firstname plus the first
/// space-delimited token of lastname.
pub fn contact_display_name(firstname: &str, lastname: &str) -> String {
    let first_token = lastname.split(' ').next().unwrap_or_default();
    format!("{} {}", firstname, first_token)
}

/// POST /pet
///
/// Validates the payload, creates the pet in the CRM, imports its owning
/// contact, then persists contact, breed and pet rows.
///
/// The three local writes run after the CRM calls with no surrounding
/// transaction: if a later step fails, earlier writes (and the CRM record)
/// are left in place.
pub async fn create_pet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    tracing::info!("POST /pet - name: {:?}", request.name);

    let new_pet = validate_create_pet(&request)?;

    let crm_pet_id = state
        .crm
        .create_pet(
            &new_pet.name,
            new_pet.age,
            &new_pet.breed,
            &new_pet.contact_id,
        )
        .await?;

    let crm_contact = state.crm.get_contact(&new_pet.contact_id).await?;

    let contact = ContactRepository::new(state.db.clone())
        .create(
            &contact_display_name(&crm_contact.firstname, &crm_contact.lastname),
            &crm_contact.email,
            &crm_contact.id,
        )
        .await?;

    // One breed row per creation, repeated names included
    let breed = BreedRepository::new(state.db.clone())
        .create(&new_pet.breed)
        .await?;

    let pet = PetRepository::new(state.db.clone())
        .create(&new_pet.name, new_pet.age, breed.id, contact.id, &crm_pet_id)
        .await?;

    tracing::info!("Pet {} created (CRM id {})", pet.id, pet.hub_spot_id);
    Ok((StatusCode::CREATED, Json(pet)))
}

/// GET /pet
///
/// Paginated pet listing. `page` defaults to 1, `pageSize` to 10 (capped at
/// 100); pets are returned oldest first.
pub async fn list_pets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PetPage>, AppError> {
    let page = params.page();
    let page_size = params.page_size();
    tracing::info!("GET /pet - page: {}, page_size: {}", page, page_size);

    let (items, total_items) = PetRepository::new(state.db.clone())
        .list(page, page_size)
        .await?;

    Ok(Json(PetPage::new(items, total_items, page, page_size)))
}

/// PUT /pet/:id
///
/// Partial update of name/age/breed. A `breed` value renames the breed row
/// the pet already references.
pub async fn update_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, AppError> {
    tracing::info!("PUT /pet/{}", id);

    let pets = PetRepository::new(state.db.clone());

    let existing = pets
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pet with id {} not found", id)))?;

    if let Some(breed_name) = request.breed.as_deref() {
        BreedRepository::new(state.db.clone())
            .rename(existing.breed_id, breed_name)
            .await?;
    }

    let updated = pets
        .update(id, request.name.as_deref(), request.age)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pet with id {} not found", id)))?;

    Ok(Json(updated))
}

/// DELETE /pet/:id
pub async fn delete_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    tracing::info!("DELETE /pet/{}", id);

    let deleted = PetRepository::new(state.db.clone()).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Pet with id {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
