//! Normalisation helpers for listing input

use regex::Regex;

lazy_static::lazy_static! {
    /// Logo URL validation regex
    /// http or https scheme, no spaces or double quotes
    pub static ref LOGO_URL_REGEX: Regex =
        Regex::new(r#"^(http|https)://[^ "]+$"#).unwrap();
}

/// Location stored when the submitted one is blank
pub const REMOTE_LOCATION: &str = "Remote";

/// Validate a logo URL according to the rules
pub fn is_valid_logo_url(url: &str) -> bool {
    LOGO_URL_REGEX.is_match(url)
}

/// Submitted logo URL if usable, otherwise the default
pub fn normalize_logo_url(url: Option<&str>, default_logo_url: &str) -> String {
    match url.map(str::trim) {
        Some(url) if is_valid_logo_url(url) => url.to_string(),
        _ => default_logo_url.to_string(),
    }
}

/// Blank locations become "Remote"
pub fn normalize_location(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        REMOTE_LOCATION.to_string()
    } else {
        location.to_string()
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim entries and drop empty ones
pub fn clean_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
