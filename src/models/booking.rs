use serde::{Deserialize, Serialize};

/// A single appointment as the customer entered it. `date` and `time` are
/// kept as the raw form tokens; only presence is checked before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
}
