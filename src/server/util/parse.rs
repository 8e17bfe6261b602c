use crate::server::error::AppError;

/// Parses an optional non-negative integer query value.
///
/// Absent or blank values fall back to `default`.
///
/// # Arguments
/// - `name` - Query parameter name used in the error message
/// - `value` - Raw query string value, if supplied
/// - `default` - Value used when nothing was supplied
///
/// # Returns
/// - `Ok(u64)` - Parsed or default value
/// - `Err(AppError::BadRequest)` - Value is non-numeric or negative
pub fn parse_query_u64(name: &str, value: Option<&str>, default: u64) -> Result<u64, AppError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };

    value.parse::<u64>().map_err(|_| {
        AppError::BadRequest(format!(
            "Query parameter '{}' must be a non-negative integer",
            name
        ))
    })
}

/// Lowercases `value` and keeps ASCII alphanumerics, collapsing every other run
/// of characters into a single `-`. Leading and trailing dashes are removed and
/// the result is truncated to `max_len` characters.
pub fn slugify(value: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug.truncate(max_len);
    slug.trim_end_matches('-').to_string()
}
