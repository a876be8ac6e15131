//! Repository for the `advertisements` table.
//!
//! Every function takes a generic executor so the same queries run against
//! the pool directly or inside the transaction opened by
//! [`AdvertContext::save_changes`](crate::context::AdvertContext::save_changes).

use annos_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::advertisement::Advertisement;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, date_added";

/// Provides CRUD operations for advertisements.
pub struct AdvertisementRepo;

impl AdvertisementRepo {
    /// Insert a new advertisement, returning the created row.
    ///
    /// The incoming `id` is ignored; the store assigns one.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        advert: &Advertisement,
    ) -> Result<Advertisement, sqlx::Error> {
        let query = format!(
            "INSERT INTO advertisements (name, description, price, date_added)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(&advert.name)
            .bind(&advert.description)
            .bind(advert.price)
            .bind(advert.date_added)
            .fetch_one(executor)
            .await
    }

    /// Find an advertisement by its ID.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisements WHERE id = $1");
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all advertisements ordered by ID.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
    ) -> Result<Vec<Advertisement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisements ORDER BY id");
        sqlx::query_as::<_, Advertisement>(&query)
            .fetch_all(executor)
            .await
    }

    /// Overwrite every mutable column, returning the row as stored.
    ///
    /// Returns `None` if no row has the given id.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        advert: &Advertisement,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!(
            "UPDATE advertisements SET
                name = $2,
                description = $3,
                price = $4,
                date_added = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(advert.id)
            .bind(&advert.name)
            .bind(&advert.description)
            .bind(advert.price)
            .bind(advert.date_added)
            .fetch_optional(executor)
            .await
    }

    /// Permanently delete an advertisement by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM advertisements WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
