//! Validatori custom condivisi dai DTO

use std::borrow::Cow;
use validator::ValidationError;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const MAX_255: &str = "Ensure this field has no more than 255 characters.";
pub const MAX_10: &str = "Ensure this field has no more than 10 characters.";

/// Rifiuta stringhe vuote o composte solo da spazi
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed(BLANK));
        return Err(err);
    }
    Ok(())
}

/// Toglie gli spazi iniziali e finali da un campo opzionale
pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
