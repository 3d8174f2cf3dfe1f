use super::ApiError;

/// Reads a path id. Anything that is not an `i32` names no resource, so it
/// is reported with the resource's not-found message.
pub fn parse_id(raw: &str, not_found: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::not_found(not_found))
}
