//! Listing search filter

use super::entities::JobListing;
use super::validation::split_comma_list;

/// Criteria for listing search. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Matches listings requiring at least one of these skills (exact match)
    pub skills: Vec<String>,
    /// Case-insensitive substring of the job position
    pub search_term: Option<String>,
}

impl ListingFilter {
    /// Build a filter from raw query parameters
    pub fn from_params(skills: Option<&str>, search_term: Option<&str>) -> Self {
        Self {
            skills: skills.map(split_comma_list).unwrap_or_default(),
            search_term: search_term
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.search_term.is_none()
    }

    /// Whether a listing satisfies every criterion
    pub fn matches(&self, listing: &JobListing) -> bool {
        let skills_match = self.skills.is_empty()
            || listing
                .skills_required
                .iter()
                .any(|skill| self.skills.contains(skill));

        let term_match = match &self.search_term {
            Some(term) => listing
                .job_position
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };

        skills_match && term_match
    }
}
