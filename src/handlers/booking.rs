use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::BookingRecord;
use crate::services::booking::submit_booking;
use crate::state::AppState;

// POST /api/booking
#[derive(Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct BookingResponse {
    date: String,
    time: String,
    name: String,
    email: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(record: BookingRecord) -> Self {
        Self {
            date: record.date,
            time: record.time,
            name: record.name,
            email: record.email,
        }
    }
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let record = BookingRecord {
        date: req.date,
        time: req.time,
        name: req.name,
        email: req.email,
    };

    {
        let db = state.db.lock().unwrap();
        submit_booking(&db, &record)?;
    }

    Ok(Json(BookingResponse::from(record)))
}

// GET /api/booking
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BookingResponse>, AppError> {
    let record = {
        let db = state.db.lock().unwrap();
        queries::load_booking(&db)?
    };

    match record {
        Some(record) => Ok(Json(BookingResponse::from(record))),
        None => Err(AppError::NotFound("no booking on file".to_string())),
    }
}
