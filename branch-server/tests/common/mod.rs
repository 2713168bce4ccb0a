//! Shared test fixtures
//!
//! Catalog rows (branch, tables, menu items) are seeded with raw SQL because
//! catalog management is outside this backend; the engine only reads them.

#![allow(dead_code)]

use branch_server::DbService;

pub struct Fixture {
    pub branch_id: String,
    pub t1: String,
    pub t2: String,
    pub noodles: String,
    pub rice: String,
    pub tea: String,
}

/// Fresh database in a temp dir; keep the dir handle alive for the test.
pub async fn test_db() -> (tempfile::TempDir, DbService) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.db");
    let db = DbService::new(path.to_str().expect("utf8 path"))
        .await
        .expect("open db");
    (dir, db)
}

pub async fn insert_branch(db: &DbService, name: &str) -> String {
    let id = shared::util::new_id();
    sqlx::query("INSERT INTO branch (id, name, created_at) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(name)
        .bind(shared::util::now_millis())
        .execute(&db.pool)
        .await
        .expect("insert branch");
    id
}

pub async fn insert_table(db: &DbService, branch_id: &str, code: &str, seats: i64) -> String {
    let id = shared::util::new_id();
    sqlx::query("INSERT INTO dining_table (id, branch_id, code, seats) VALUES (?, ?, ?, ?)")
        .bind(&id)
        .bind(branch_id)
        .bind(code)
        .bind(seats)
        .execute(&db.pool)
        .await
        .expect("insert table");
    id
}

pub async fn insert_menu_item(
    db: &DbService,
    branch_id: &str,
    sku: &str,
    name: &str,
    base_price: &str,
) -> String {
    let id = shared::util::new_id();
    sqlx::query("INSERT INTO menu_item (id, branch_id, sku, name, base_price) VALUES (?, ?, ?, ?, ?)")
        .bind(&id)
        .bind(branch_id)
        .bind(sku)
        .bind(name)
        .bind(base_price)
        .execute(&db.pool)
        .await
        .expect("insert menu item");
    id
}

/// One branch, two tables, three menu items.
pub async fn seed(db: &DbService) -> Fixture {
    let branch_id = insert_branch(db, "Main Branch").await;
    let t1 = insert_table(db, &branch_id, "T1", 2).await;
    let t2 = insert_table(db, &branch_id, "T2", 4).await;
    let noodles = insert_menu_item(db, &branch_id, "FOOD-001", "Beef Noodles", "180").await;
    let rice = insert_menu_item(db, &branch_id, "FOOD-002", "Fried Rice", "120").await;
    let tea = insert_menu_item(db, &branch_id, "DRINK-001", "Iced Tea", "40").await;
    Fixture {
        branch_id,
        t1,
        t2,
        noodles,
        rice,
        tea,
    }
}

pub async fn table_status(db: &DbService, table_id: &str) -> String {
    sqlx::query_scalar("SELECT status FROM dining_table WHERE id = ?")
        .bind(table_id)
        .fetch_one(&db.pool)
        .await
        .expect("table status")
}

pub async fn order_status(db: &DbService, order_id: &str) -> String {
    sqlx::query_scalar("SELECT status FROM orders WHERE id = ?")
        .bind(order_id)
        .fetch_one(&db.pool)
        .await
        .expect("order status")
}

pub async fn payment_count(db: &DbService, order_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM payment WHERE order_id = ?")
        .bind(order_id)
        .fetch_one(&db.pool)
        .await
        .expect("payment count")
}

/// Stand-in for the out-of-scope admin path (e.g. forcing CANCELED).
pub async fn force_status(db: &DbService, order_id: &str, status: &str) {
    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(order_id)
        .execute(&db.pool)
        .await
        .expect("force status");
}

pub async fn set_opened_at(db: &DbService, order_id: &str, opened_at: i64) {
    sqlx::query("UPDATE orders SET opened_at = ? WHERE id = ?")
        .bind(opened_at)
        .bind(order_id)
        .execute(&db.pool)
        .await
        .expect("set opened_at");
}

/// Insert a second active order on a table directly, bypassing the guard.
/// Lets tests exercise release_if_idle sibling counting.
pub async fn insert_raw_active_order(db: &DbService, branch_id: &str, table_id: &str) -> String {
    let id = shared::util::new_id();
    sqlx::query(
        "INSERT INTO orders (id, branch_id, table_id, type, status, opened_at) \
         VALUES (?, ?, ?, 'DINE_IN', 'OPEN', ?)",
    )
    .bind(&id)
    .bind(branch_id)
    .bind(table_id)
    .bind(shared::util::now_millis())
    .execute(&db.pool)
    .await
    .expect("insert raw order");
    id
}
