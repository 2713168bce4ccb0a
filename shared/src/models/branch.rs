//! Branch Model

use serde::{Deserialize, Serialize};

/// Branch entity (门店)
///
/// Owns tables and menu items. Immutable as far as the order engine is
/// concerned; catalog management lives outside this backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Branch {
    pub id: String,
    pub name: String,
    /// Unix millis
    pub created_at: i64,
}
