//! Artist field limits and validation.
//!
//! Column widths match the `artists` table; checks run before any store
//! access so oversize input is rejected as a 400 rather than a database error.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an artist display name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of an external identifier.
pub const MAX_SPOTIFY_ID_LENGTH: usize = 255;

/// Maximum length of `spotify_url` and `image_url`.
pub const MAX_URL_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the user-supplied fields of a new artist.
pub fn validate_create_fields(
    spotify_id: &str,
    name: &str,
    spotify_url: &str,
    image_url: Option<&str>,
    genres: &[String],
) -> Result<(), CoreError> {
    validate_required("spotify_id", spotify_id, MAX_SPOTIFY_ID_LENGTH)?;
    validate_required("name", name, MAX_NAME_LENGTH)?;
    validate_required("spotify_url", spotify_url, MAX_URL_LENGTH)?;
    if let Some(image_url) = image_url {
        validate_max_length("image_url", image_url, MAX_URL_LENGTH)?;
    }
    if genres.iter().any(|g| g.trim().is_empty()) {
        return Err(CoreError::Validation(
            "genres must not contain empty labels".to_string(),
        ));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    validate_max_length(field, value, max)
}

fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn genres() -> Vec<String> {
        vec!["Pop".to_string(), "Rock".to_string()]
    }

    #[test]
    fn accepts_minimal_artist() {
        assert!(validate_create_fields("abc", "Name", "spotify:artist:abc", None, &[]).is_ok());
    }

    #[test]
    fn accepts_full_artist() {
        let result = validate_create_fields(
            "abc",
            "Name",
            "https://open.spotify.com/artist/abc",
            Some("https://img.example/a.png"),
            &genres(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate_create_fields("abc", "  ", "u", None, &[]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("name"));
    }

    #[test]
    fn rejects_empty_spotify_id() {
        let err = validate_create_fields("", "Name", "u", None, &[]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("spotify_id"));
    }

    #[test]
    fn rejects_oversize_name() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_create_fields("abc", &name, "u", None, &[]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("256"));
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_create_fields("abc", &name, "u", None, &[]).is_ok());
    }

    #[test]
    fn rejects_oversize_image_url() {
        let image = "x".repeat(MAX_URL_LENGTH + 1);
        let err = validate_create_fields("abc", "Name", "u", Some(&image), &[]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("image_url"));
    }

    #[test]
    fn rejects_blank_genre() {
        let genres = vec!["Pop".to_string(), " ".to_string()];
        let err = validate_create_fields("abc", "Name", "u", None, &genres).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }
}
