//! Listing repository backed by Postgres

use sqlx::PgPool;

use wayfare_core::{Listing, ListingDraft, ListingPatch, ListingStatus};

use crate::error::{Result, StoreError};

/// Filters and pagination for listing queries
#[derive(Debug, Clone)]
pub struct ListingQuery {
    /// Page number (1-indexed)
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Only return listings in this status
    pub status: Option<ListingStatus>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 50,
            status: None,
        }
    }
}

impl ListingQuery {
    fn limit(&self) -> i64 {
        self.per_page as i64
    }

    fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64) as i64
    }
}

/// Repository for `Listing` rows
#[derive(Debug, Clone)]
pub struct ListingStore {
    pool: PgPool,
}

impl ListingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a new listing; the database assigns id and both timestamps
    ///
    /// # Errors
    /// Returns `StoreError::Database` on connection or query failure.
    pub async fn create(&self, draft: &ListingDraft) -> Result<Listing> {
        let listing = sqlx::query_as::<_, Listing>(
            r#"
            INSERT INTO listings (title, description, location, price, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, location, price, status, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.location)
        .bind(draft.price)
        .bind(draft.status)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = listing.id, "listing created");
        Ok(listing)
    }

    /// Fetch a single listing by id
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row matches.
    pub async fn get(&self, id: i64) -> Result<Listing> {
        sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, title, description, location, price, status, created_at, updated_at
            FROM listings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Fetch a page of listings, newest first, with the total row count
    ///
    /// # Errors
    /// Returns `StoreError::Database` on connection or query failure.
    pub async fn list(&self, query: &ListingQuery) -> Result<(Vec<Listing>, u64)> {
        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM listings
            WHERE $1::listing_status IS NULL OR status = $1
            "#,
        )
        .bind(query.status)
        .fetch_one(&self.pool)
        .await?;

        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, title, description, location, price, status, created_at, updated_at
            FROM listings
            WHERE $1::listing_status IS NULL OR status = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.status)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((listings, total as u64))
    }

    /// Replace every writable field; `created_at` is untouched
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row matches.
    pub async fn update(&self, id: i64, draft: &ListingDraft) -> Result<Listing> {
        sqlx::query_as::<_, Listing>(
            r#"
            UPDATE listings
            SET title = $2,
                description = $3,
                location = $4,
                price = $5,
                status = $6,
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, location, price, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.location)
        .bind(draft.price)
        .bind(draft.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Apply a partial update; absent fields keep their stored value
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row matches.
    pub async fn patch(&self, id: i64, patch: &ListingPatch) -> Result<Listing> {
        sqlx::query_as::<_, Listing>(
            r#"
            UPDATE listings
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                price = COALESCE($5, price),
                status = COALESCE($6, status),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, location, price, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.location.as_deref())
        .bind(patch.price)
        .bind(patch.status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Delete a listing
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row matches.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        tracing::debug!(id, "listing deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_offset_is_zero_based() {
        let query = ListingQuery::default();
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 50);

        let query = ListingQuery {
            page: 3,
            per_page: 20,
            status: None,
        };
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let query = ListingQuery {
            page: 0,
            per_page: 50,
            status: None,
        };
        assert_eq!(query.offset(), 0);
    }
}
