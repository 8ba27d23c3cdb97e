//! Property service: validation, search projection, and the update merge.
//!
//! Every operation is one synchronous read-check-mutate-commit sequence
//! against the pool; multi-statement writes commit as a single transaction
//! inside the repository layer.

use std::collections::HashMap;

use finca_core::error::CoreError;
use finca_core::filter::PropertyFilter;
use finca_core::types::{DbId, Money};
use finca_core::validation;
use finca_db::models::property::{
    CreateProperty, Property, PropertyDetail, PropertyInfo, UpdateProperty,
};
use finca_db::models::property_image::{AddPropertyImage, PropertyImage, PropertyImageInfo};
use finca_db::models::property_trace::PropertyTraceInfo;
use finca_db::repositories::{PropertyImageRepo, PropertyRepo, PropertyTraceRepo};
use finca_db::DbPool;

use crate::error::AppResult;

/// The five public operations over property listings. This is the only
/// component the route handlers call.
pub struct PropertyService;

impl PropertyService {
    /// Create a new listing.
    ///
    /// Fail-fast check order: payload present, name present, price
    /// positive, name not already taken -- all before any write. The
    /// uniqueness probe is check-then-act; see
    /// [`PropertyRepo::name_exists`].
    pub async fn create(pool: &DbPool, input: Option<CreateProperty>) -> AppResult<Property> {
        let input = validation::require_payload(input, "property")?;
        let name = validation::require_name(input.name.as_deref())?;
        validation::require_positive_price(input.price)?;

        if PropertyRepo::name_exists(pool, name).await? {
            return Err(CoreError::DuplicateName(format!(
                "a property named \"{name}\" already exists"
            ))
            .into());
        }

        Ok(PropertyRepo::create(pool, &input).await?)
    }

    /// List properties matching the filter, projected into the
    /// denormalized read model (owner name resolved, children inlined).
    ///
    /// Never fails on an empty match; the result carries no ordering
    /// guarantee.
    pub async fn search(pool: &DbPool, filter: &PropertyFilter) -> AppResult<Vec<PropertyInfo>> {
        let rows = PropertyRepo::search(pool, filter).await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = rows.iter().map(|row| row.id).collect();

        let mut images: HashMap<DbId, Vec<PropertyImageInfo>> = HashMap::new();
        for image in PropertyImageRepo::list_by_properties(pool, &ids).await? {
            images
                .entry(image.property_id)
                .or_default()
                .push(image.into());
        }

        let mut traces: HashMap<DbId, Vec<PropertyTraceInfo>> = HashMap::new();
        for trace in PropertyTraceRepo::list_by_properties(pool, &ids).await? {
            traces
                .entry(trace.property_id)
                .or_default()
                .push(trace.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| PropertyInfo {
                images: images.remove(&row.id).unwrap_or_default(),
                traces: traces.remove(&row.id).unwrap_or_default(),
                id: row.id,
                name: row.name,
                address: row.address,
                price: row.price,
                code_internal: row.code_internal,
                year: row.year,
                owner_name: row.owner_name,
            })
            .collect())
    }

    /// Replace a property's scalars and merge its nested collections.
    ///
    /// Check order: payload present, property exists, name present, price
    /// positive. Validation failures leave the persisted record untouched.
    /// Supplied trace/image entries update the existing child with the
    /// same id in place; unmatched entries are silently discarded, never
    /// inserted.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: Option<UpdateProperty>,
    ) -> AppResult<PropertyDetail> {
        let input = validation::require_payload(input, "property")?;

        PropertyRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })?;

        validation::require_name(input.name.as_deref())?;
        validation::require_positive_price(input.price)?;

        let property = PropertyRepo::update_with_children(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })?;

        let images = PropertyImageRepo::list_by_property(pool, id).await?;
        let traces = PropertyTraceRepo::list_by_property(pool, id).await?;

        Ok(PropertyDetail {
            property,
            images,
            traces,
        })
    }

    /// Overwrite only the price field. Nested collections are untouched.
    ///
    /// Existence is checked before the price: a non-positive price for a
    /// missing id still reports not-found.
    pub async fn change_price(pool: &DbPool, id: DbId, new_price: Money) -> AppResult<Property> {
        PropertyRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })?;

        validation::require_positive_price(Some(new_price))?;

        let property = PropertyRepo::update_price(pool, id, new_price)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })?;

        Ok(property)
    }

    /// Attach a new image to a property. The image is always created
    /// enabled.
    ///
    /// An absent payload is rejected; an empty-but-present byte sequence
    /// is accepted.
    pub async fn add_image(
        pool: &DbPool,
        id: DbId,
        input: Option<AddPropertyImage>,
    ) -> AppResult<PropertyImage> {
        PropertyRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Property",
                id,
            })?;

        let file_data = input.and_then(|image| image.file_data).ok_or_else(|| {
            CoreError::Validation("image payload is required".to_string())
        })?;

        Ok(PropertyImageRepo::create(pool, id, &file_data).await?)
    }
}
