//! Common validation utilities.

use validator::ValidationError;

/// Maximum length accepted for a package identifier.
const MAX_PACKAGE_NAME_LEN: usize = 255;

lazy_static::lazy_static! {
    /// Canonical package identifiers: two or more dot-separated segments,
    /// each starting with a letter.
    static ref PACKAGE_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").unwrap();
}

/// Validates that a string is a platform-canonical package identifier.
pub fn validate_package_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.len() > MAX_PACKAGE_NAME_LEN || !PACKAGE_NAME_REGEX.is_match(name) {
        let mut err = ValidationError::new("package_name");
        err.message = Some("Package name must be a dot-separated identifier".into());
        return Err(err);
    }
    Ok(())
}
