use crate::models::BookingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    IncompleteFields,
    InvalidEmail,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::IncompleteFields => write!(f, "All fields are required."),
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks a candidate booking before it is persisted. Completeness is
/// checked first, so a missing field wins over a malformed email.
pub fn validate(record: &BookingRecord) -> Result<(), ValidationError> {
    if record.date.is_empty()
        || record.time.is_empty()
        || record.name.is_empty()
        || record.email.is_empty()
    {
        return Err(ValidationError::IncompleteFields);
    }

    if !is_well_formed_email(&record.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Minimal shape check: exactly one `@`, a non-empty local part, and a dot
/// inside the domain with at least one character on each side.
fn is_well_formed_email(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i + 1 < bytes.len())
}
