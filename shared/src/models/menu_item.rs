//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity (菜品)
///
/// `base_price` is the price snapshotted onto order items at add time;
/// changing it later never rewrites existing order items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub branch_id: String,
    pub sku: String,
    pub name: String,
    pub base_price: Decimal,
}
