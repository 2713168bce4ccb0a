//! Domain models
//!
//! Entities stored in the branch database plus their create payloads.
//! Money is always [`rust_decimal::Decimal`]; identifiers are opaque strings;
//! timestamps are Unix milliseconds.

pub mod branch;
pub mod dining_table;
pub mod menu_item;
pub mod order;

pub use branch::Branch;
pub use dining_table::{DiningTable, TableStatus};
pub use menu_item::MenuItem;
pub use order::{
    Order, OrderDetail, OrderItem, OrderItemDetail, OrderStatus, OrderType, Payment,
    PaymentMethod, TaxLine, TaxLineInput, TicketView, Tip,
};
