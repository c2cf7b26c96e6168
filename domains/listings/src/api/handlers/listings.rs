//! Job listing API handlers
//!
//! Implements:
//! - POST /job-posting - Create a listing (authenticated)
//! - PUT /job-posting/{id} - Replace a listing (authenticated)
//! - GET /jobs - Search listings
//! - GET /jobs/{job_id} - Get a single listing

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use jobboard_auth::AuthUser;
use jobboard_common::{validate_not_blank, Error, Result, ValidatedJson};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ListingsState;
use crate::domain::entities::{JobListing, ListingFields};
use crate::domain::filter::ListingFilter;
use crate::domain::validation::{
    clean_skills, normalize_location, normalize_logo_url, split_comma_list,
};
use crate::repository::JobListingRepository;

const LISTING_NOT_FOUND: &str = "Job listing not found";

/// `skillsRequired` as either a JSON array or a comma-separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Csv(String),
}

impl SkillsInput {
    pub fn into_skills(self) -> Vec<String> {
        match self {
            SkillsInput::List(skills) => clean_skills(skills),
            SkillsInput::Csv(raw) => split_comma_list(&raw),
        }
    }
}

/// Request body for creating or replacing a listing
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobListingRequest {
    #[validate(
        required(message = "Company name is required"),
        custom(function = "validate_not_blank", message = "Company name is required")
    )]
    pub company_name: Option<String>,

    #[serde(rename = "addLogoURL")]
    pub add_logo_url: Option<String>,

    #[validate(
        required(message = "Job position is required"),
        custom(function = "validate_not_blank", message = "Job position is required")
    )]
    pub job_position: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        required(message = "Monthly salary is required"),
        custom(function = "validate_not_blank", message = "Monthly salary is required")
    )]
    pub monthly_salary: Option<String>,

    #[validate(
        required(message = "Job type is required"),
        custom(function = "validate_not_blank", message = "Job type is required")
    )]
    pub job_type: Option<String>,

    #[validate(
        required(message = "Remote/onsite is required"),
        custom(function = "validate_not_blank", message = "Remote/onsite is required")
    )]
    pub remote_onsite: Option<String>,

    #[validate(required(message = "Job location is required"))]
    pub job_location: Option<String>,

    #[validate(
        required(message = "Job description is required"),
        custom(function = "validate_not_blank", message = "Job description is required")
    )]
    pub job_description: Option<String>,

    #[validate(
        required(message = "About company is required"),
        custom(function = "validate_not_blank", message = "About company is required")
    )]
    pub about_company: Option<String>,

    pub skills_required: Option<SkillsInput>,
}

impl JobListingRequest {
    /// Apply defaults and normalisation. Call after validation.
    pub fn into_fields(self, default_logo_url: &str) -> ListingFields {
        ListingFields {
            company_name: trimmed(self.company_name),
            add_logo_url: normalize_logo_url(self.add_logo_url.as_deref(), default_logo_url),
            job_position: trimmed(self.job_position),
            monthly_salary: trimmed(self.monthly_salary),
            job_type: trimmed(self.job_type),
            remote_onsite: trimmed(self.remote_onsite),
            job_location: normalize_location(self.job_location.as_deref().unwrap_or_default()),
            job_description: trimmed(self.job_description),
            about_company: trimmed(self.about_company),
            skills_required: self
                .skills_required
                .map(SkillsInput::into_skills)
                .unwrap_or_default(),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

/// Salaries arrive as text or as a bare number
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::Str(s) => s,
        Text::Num(n) => n.to_string(),
    }))
}

/// Query parameters for listing search
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsQuery {
    pub skills: Option<String>,
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub job_listings: Vec<JobListing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub job_listing: JobListing,
}

/// Listing ids are UUIDs; anything else cannot name a listing
fn parse_listing_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(LISTING_NOT_FOUND.to_string()))
}

/// POST /job-posting - Create a listing
pub async fn create_listing(
    AuthUser(auth_context): AuthUser,
    State(state): State<ListingsState>,
    ValidatedJson(request): ValidatedJson<JobListingRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let fields = request.into_fields(&state.default_logo_url);

    let listing = state
        .listings
        .insert(fields, auth_context.user_id)
        .await?;

    tracing::info!(
        listing_id = %listing.id,
        user_id = %auth_context.user_id,
        "Job listing created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Job listing created successfully".to_string(),
        }),
    ))
}

/// PUT /job-posting/{id} - Replace every field of a listing
pub async fn update_listing(
    AuthUser(auth_context): AuthUser,
    State(state): State<ListingsState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<JobListingRequest>,
) -> Result<Json<MessageResponse>> {
    let id = parse_listing_id(&id)?;
    let fields = request.into_fields(&state.default_logo_url);

    let listing = state
        .listings
        .replace(id, fields)
        .await?
        .ok_or_else(|| Error::NotFound(LISTING_NOT_FOUND.to_string()))?;

    tracing::info!(
        listing_id = %listing.id,
        user_id = %auth_context.user_id,
        "Job listing updated"
    );

    Ok(Json(MessageResponse {
        message: "Job listing updated successfully".to_string(),
    }))
}

/// GET /jobs - Search listings, newest first
pub async fn list_listings(
    State(state): State<ListingsState>,
    Query(query): Query<ListingsQuery>,
) -> Result<Json<ListingsResponse>> {
    let filter = ListingFilter::from_params(query.skills.as_deref(), query.search_term.as_deref());

    let job_listings = state.listings.list(&filter).await?;
    tracing::debug!(count = job_listings.len(), ?filter, "Listed job listings");

    Ok(Json(ListingsResponse { job_listings }))
}

/// GET /jobs/{job_id} - Get a single listing
pub async fn get_listing(
    State(state): State<ListingsState>,
    Path(job_id): Path<String>,
) -> Result<Json<ListingResponse>> {
    let id = parse_listing_id(&job_id)?;

    let job_listing = state
        .listings
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(LISTING_NOT_FOUND.to_string()))?;

    Ok(Json(ListingResponse { job_listing }))
}
