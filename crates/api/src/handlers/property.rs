//! Handlers for the `/properties` resource.
//!
//! Request bodies deserialize as `Option<T>` so a JSON `null` body reaches
//! the service as an absent payload (a validation failure) instead of
//! dying in the extractor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use finca_core::filter::PropertyFilter;
use finca_core::types::{DbId, Money};
use finca_db::models::property::{
    CreateProperty, Property, PropertyDetail, PropertyInfo, UpdateProperty,
};
use finca_db::models::property_image::{AddPropertyImage, PropertyImage};

use crate::error::AppResult;
use crate::service::PropertyService;
use crate::state::AppState;

/// POST /api/v1/properties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Option<CreateProperty>>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = PropertyService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /api/v1/properties
///
/// Criteria come from query params (`?year=&price=&owner_id=`); a value
/// that is absent or not strictly positive leaves that dimension
/// unconstrained.
pub async fn search(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<Vec<PropertyInfo>>> {
    let properties = PropertyService::search(&state.pool, &filter).await?;
    Ok(Json(properties))
}

/// PUT /api/v1/properties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Option<UpdateProperty>>,
) -> AppResult<Json<PropertyDetail>> {
    let property = PropertyService::update(&state.pool, id, input).await?;
    Ok(Json(property))
}

/// PUT /api/v1/properties/{id}/price
///
/// The body is the bare new price, e.g. `185000.50`.
pub async fn change_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(new_price): Json<Money>,
) -> AppResult<Json<Property>> {
    let property = PropertyService::change_price(&state.pool, id, new_price).await?;
    Ok(Json(property))
}

/// POST /api/v1/properties/{id}/images
pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Option<AddPropertyImage>>,
) -> AppResult<(StatusCode, Json<PropertyImage>)> {
    let image = PropertyService::add_image(&state.pool, id, input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}
