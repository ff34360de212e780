use validator::ValidationError;

pub mod health;
pub mod message;
pub mod project;

/// Rejects empty and whitespace-only text.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
