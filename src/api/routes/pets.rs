use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::api::{error::ApiError, routes::SearchQuery, state::PetsState};
use crate::domain::Pet;

#[derive(Debug, Serialize)]
pub struct PetSearchResponse {
    pub status: &'static str,
    pub pets: Vec<Pet>,
}

pub async fn list_pets(State(state): State<PetsState>) -> Result<Json<Vec<Pet>>, ApiError> {
    let pets = state.pet_service.list().await?;
    Ok(Json(pets))
}

pub async fn search_pets(
    State(state): State<PetsState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<PetSearchResponse>, ApiError> {
    let pets = state.pet_service.search(query.search.as_deref()).await?;

    Ok(Json(PetSearchResponse {
        status: "success",
        pets,
    }))
}
