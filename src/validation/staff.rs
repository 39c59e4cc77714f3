use crate::error::AppError;

/// Staff IDs are opaque alphanumeric codes of at least five characters.
pub fn validate_staff_code(staff_code: &str) -> Result<(), AppError> {
    if staff_code.len() < 5 {
        return Err(AppError::validation(
            "Staff ID must be at least 5 characters long",
        ));
    }
    if !staff_code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation("Staff ID must be alphanumeric"));
    }
    Ok(())
}
