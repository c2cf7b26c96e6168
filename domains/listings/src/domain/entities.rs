//! Listings domain entities

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored job listing
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: Uuid,
    pub company_name: String,
    #[serde(rename = "addLogoURL")]
    pub add_logo_url: String,
    pub job_position: String,
    pub monthly_salary: String,
    pub job_type: String,
    pub remote_onsite: String,
    pub job_location: String,
    pub job_description: String,
    pub about_company: String,
    pub skills_required: Vec<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated, normalised business fields of a listing.
///
/// Create and update both write the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFields {
    pub company_name: String,
    pub add_logo_url: String,
    pub job_position: String,
    pub monthly_salary: String,
    pub job_type: String,
    pub remote_onsite: String,
    pub job_location: String,
    pub job_description: String,
    pub about_company: String,
    pub skills_required: Vec<String>,
}

impl JobListing {
    /// Build a listing from fields, as the database would on insert
    pub fn from_fields(fields: ListingFields, created_by: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_name: fields.company_name,
            add_logo_url: fields.add_logo_url,
            job_position: fields.job_position,
            monthly_salary: fields.monthly_salary,
            job_type: fields.job_type,
            remote_onsite: fields.remote_onsite,
            job_location: fields.job_location,
            job_description: fields.job_description,
            about_company: fields.about_company,
            skills_required: fields.skills_required,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every business field. Identity, creator and creation time are kept.
    pub fn apply(&mut self, fields: ListingFields) {
        self.company_name = fields.company_name;
        self.add_logo_url = fields.add_logo_url;
        self.job_position = fields.job_position;
        self.monthly_salary = fields.monthly_salary;
        self.job_type = fields.job_type;
        self.remote_onsite = fields.remote_onsite;
        self.job_location = fields.job_location;
        self.job_description = fields.job_description;
        self.about_company = fields.about_company;
        self.skills_required = fields.skills_required;
        self.updated_at = Utc::now();
    }
}
