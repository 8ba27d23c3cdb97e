//! Repository for the `properties` table, including the update merge.

use finca_core::filter::PropertyFilter;
use finca_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::property::{CreateProperty, Property, PropertySearchRow, UpdateProperty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, price, code_internal, year, owner_id, \
    created_at, updated_at";

/// Provides persistence operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// The service validates `name` and `price` before calling this.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (name, address, price, code_internal, year, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.price)
            .bind(&input.code_internal)
            .bind(input.year)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a property by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any property already carries this exact name.
    ///
    /// Case-sensitive equality, no trimming. This is a check-then-act
    /// uniqueness test: there is no unique index behind it, so two
    /// concurrent creates with the same name can both pass.
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM properties WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List properties matching the filter, each joined with its owner's
    /// name. Unconstrained dimensions are bound as NULL and skipped by the
    /// predicate; an all-NULL bind set returns every row.
    pub async fn search(
        pool: &PgPool,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertySearchRow>, sqlx::Error> {
        sqlx::query_as::<_, PropertySearchRow>(
            "SELECT p.id, p.name, p.address, p.price, p.code_internal, p.year, p.owner_id, \
                    o.name AS owner_name \
             FROM properties p \
             LEFT JOIN owners o ON o.id = p.owner_id \
             WHERE ($1::integer IS NULL OR p.year = $1) \
               AND ($2::numeric IS NULL OR p.price = $2) \
               AND ($3::bigint IS NULL OR p.owner_id = $3)",
        )
        .bind(filter.year())
        .bind(filter.price())
        .bind(filter.owner_id())
        .fetch_all(pool)
        .await
    }

    /// Replace a property's scalars and merge its nested collections, as
    /// one transaction.
    ///
    /// Every scalar is overwritten from `input`. Each supplied trace or
    /// image entry updates the existing child row with the same id; the
    /// `property_id` guard means an entry whose id matches nothing owned by
    /// this property affects zero rows -- it is discarded, never inserted.
    /// The collections can neither grow nor shrink here.
    ///
    /// Returns `None` if no property with the given `id` exists.
    pub async fn update_with_children(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE properties SET
                name = $2,
                address = $3,
                price = $4,
                code_internal = $5,
                year = $6,
                owner_id = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let property = match sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.price)
            .bind(&input.code_internal)
            .bind(input.year)
            .bind(input.owner_id)
            .fetch_optional(&mut *tx)
            .await?
        {
            Some(property) => property,
            None => return Ok(None),
        };

        for trace in &input.traces {
            sqlx::query(
                "UPDATE property_traces SET
                    sale_date = $3, name = $4, value = $5, tax = $6, updated_at = NOW()
                 WHERE id = $1 AND property_id = $2",
            )
            .bind(trace.id)
            .bind(id)
            .bind(trace.sale_date)
            .bind(&trace.name)
            .bind(trace.value)
            .bind(trace.tax)
            .execute(&mut *tx)
            .await?;
        }

        for image in &input.images {
            sqlx::query(
                "UPDATE property_images SET file_data = $3, updated_at = NOW()
                 WHERE id = $1 AND property_id = $2",
            )
            .bind(image.id)
            .bind(id)
            .bind(&image.file_data)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(Some(property))
    }

    /// Overwrite only the price field. Returns `None` if no row matches.
    pub async fn update_price(
        pool: &PgPool,
        id: DbId,
        new_price: Money,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET price = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(new_price)
            .fetch_optional(pool)
            .await
    }
}
