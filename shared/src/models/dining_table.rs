//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status
///
/// Invariant: a table is OCCUPIED iff at least one order referencing it is in
/// an active (non-terminal) status. Only the reservation guard mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    Available,
    Occupied,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: String,
    pub branch_id: String,
    /// Display label, e.g. "T1"
    pub code: String,
    pub seats: i64,
    pub status: TableStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&TableStatus::Available).unwrap();
        assert_eq!(json, "\"AVAILABLE\"");
        let back: TableStatus = serde_json::from_str("\"OCCUPIED\"").unwrap();
        assert_eq!(back, TableStatus::Occupied);
    }
}
