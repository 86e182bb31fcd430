use rusqlite::{params, Connection};

use crate::models::BookingRecord;

/// Slot the active booking lives under. Saving always replaces it.
pub const BOOKING_SLOT: &str = "booking";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage rejected the write: {0}")]
    WriteFailed(#[source] rusqlite::Error),

    #[error("storage read failed: {0}")]
    ReadFailed(#[source] rusqlite::Error),

    #[error("stored booking is corrupt: {0}")]
    CorruptData(#[from] serde_json::Error),
}

pub fn save_booking(conn: &Connection, record: &BookingRecord) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(record)?;

    conn.execute(
        "INSERT INTO bookings (slot, record) VALUES (?1, ?2)
         ON CONFLICT(slot) DO UPDATE SET record = excluded.record",
        params![BOOKING_SLOT, encoded],
    )
    .map_err(StoreError::WriteFailed)?;

    Ok(())
}

pub fn load_booking(conn: &Connection) -> Result<Option<BookingRecord>, StoreError> {
    let result = conn.query_row(
        "SELECT record FROM bookings WHERE slot = ?1",
        params![BOOKING_SLOT],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::ReadFailed(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn sample_record() -> BookingRecord {
        BookingRecord {
            date: "2024-05-01".to_string(),
            time: "14:30".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_load_empty_store() {
        let conn = setup_db();
        assert_eq!(load_booking(&conn).unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let conn = setup_db();
        let record = sample_record();

        save_booking(&conn, &record).unwrap();
        assert_eq!(load_booking(&conn).unwrap(), Some(record));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let conn = setup_db();
        let first = sample_record();
        let second = BookingRecord {
            date: "2024-06-02".to_string(),
            time: "09:00".to_string(),
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        };

        save_booking(&conn, &first).unwrap();
        save_booking(&conn, &second).unwrap();

        assert_eq!(load_booking(&conn).unwrap(), Some(second));
    }

    #[test]
    fn test_load_rejects_non_json_slot() {
        let conn = setup_db();
        conn.execute(
            "INSERT INTO bookings (slot, record) VALUES (?1, ?2)",
            params![BOOKING_SLOT, "not json"],
        )
        .unwrap();

        let err = load_booking(&conn).unwrap_err();
        assert!(matches!(err, StoreError::CorruptData(_)));
    }

    #[test]
    fn test_load_rejects_missing_fields() {
        let conn = setup_db();
        conn.execute(
            "INSERT INTO bookings (slot, record) VALUES (?1, ?2)",
            params![BOOKING_SLOT, r#"{"date":"2024-05-01","time":"14:30"}"#],
        )
        .unwrap();

        let err = load_booking(&conn).unwrap_err();
        assert!(matches!(err, StoreError::CorruptData(_)));
    }

    #[test]
    fn test_save_surfaces_write_failure() {
        let conn = setup_db();
        conn.execute_batch("DROP TABLE bookings;").unwrap();

        let err = save_booking(&conn, &sample_record()).unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed(_)));
    }
}
