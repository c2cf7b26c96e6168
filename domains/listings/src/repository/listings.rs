//! Job listing repository

use crate::domain::entities::{JobListing, ListingFields};
use crate::domain::filter::ListingFilter;
use async_trait::async_trait;
use jobboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Job listing store
#[async_trait]
pub trait JobListingRepository: Send + Sync {
    async fn insert(&self, fields: ListingFields, created_by: Uuid) -> Result<JobListing>;

    /// Replace every business field. `None` when no listing has `id`.
    async fn replace(&self, id: Uuid, fields: ListingFields) -> Result<Option<JobListing>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobListing>>;

    /// Listings matching `filter`, newest first
    async fn list(&self, filter: &ListingFilter) -> Result<Vec<JobListing>>;
}

const LISTING_COLUMNS: &str = "id, company_name, add_logo_url, job_position, monthly_salary, \
     job_type, remote_onsite, job_location, job_description, about_company, \
     skills_required, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PgJobListingRepository {
    pool: PgPool,
}

impl PgJobListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobListingRepository for PgJobListingRepository {
    async fn insert(&self, fields: ListingFields, created_by: Uuid) -> Result<JobListing> {
        let sql = format!(
            r#"
            INSERT INTO job_listings (
                company_name, add_logo_url, job_position, monthly_salary,
                job_type, remote_onsite, job_location, job_description,
                about_company, skills_required, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {LISTING_COLUMNS}
            "#
        );

        let listing = sqlx::query_as::<_, JobListing>(&sql)
            .bind(&fields.company_name)
            .bind(&fields.add_logo_url)
            .bind(&fields.job_position)
            .bind(&fields.monthly_salary)
            .bind(&fields.job_type)
            .bind(&fields.remote_onsite)
            .bind(&fields.job_location)
            .bind(&fields.job_description)
            .bind(&fields.about_company)
            .bind(&fields.skills_required)
            .bind(created_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(listing)
    }

    async fn replace(&self, id: Uuid, fields: ListingFields) -> Result<Option<JobListing>> {
        let sql = format!(
            r#"
            UPDATE job_listings SET
                company_name = $2,
                add_logo_url = $3,
                job_position = $4,
                monthly_salary = $5,
                job_type = $6,
                remote_onsite = $7,
                job_location = $8,
                job_description = $9,
                about_company = $10,
                skills_required = $11,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {LISTING_COLUMNS}
            "#
        );

        let listing = sqlx::query_as::<_, JobListing>(&sql)
            .bind(id)
            .bind(&fields.company_name)
            .bind(&fields.add_logo_url)
            .bind(&fields.job_position)
            .bind(&fields.monthly_salary)
            .bind(&fields.job_type)
            .bind(&fields.remote_onsite)
            .bind(&fields.job_location)
            .bind(&fields.job_description)
            .bind(&fields.about_company)
            .bind(&fields.skills_required)
            .fetch_optional(&self.pool)
            .await?;

        Ok(listing)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JobListing>> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM job_listings WHERE id = $1");

        let listing = sqlx::query_as::<_, JobListing>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(listing)
    }

    async fn list(&self, filter: &ListingFilter) -> Result<Vec<JobListing>> {
        // Empty skill array and NULL term disable their predicate
        let sql = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM job_listings
            WHERE (cardinality($1::text[]) = 0 OR skills_required && $1::text[])
              AND ($2::text IS NULL OR POSITION(LOWER($2::text) IN LOWER(job_position)) > 0)
            ORDER BY created_at DESC, insert_seq DESC
            "#
        );

        let listings = sqlx::query_as::<_, JobListing>(&sql)
            .bind(&filter.skills)
            .bind(filter.search_term.as_deref())
            .fetch_all(&self.pool)
            .await?;

        Ok(listings)
    }
}
