use rusqlite::Connection;

use crate::db::queries::{self, StoreError};
use crate::models::BookingRecord;
use crate::services::validation::{self, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Runs one submission attempt: validate, then persist. A validation
/// failure stops before anything is written.
pub fn submit_booking(conn: &Connection, record: &BookingRecord) -> Result<(), SubmitError> {
    validation::validate(record)?;

    queries::save_booking(conn, record)?;

    tracing::info!(
        date = %record.date,
        time = %record.time,
        name = %record.name,
        "booking confirmed"
    );

    Ok(())
}
