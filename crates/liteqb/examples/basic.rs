//! Statement builder walkthrough for liteqb
//!
//! Run with: cargo run --example basic -p liteqb
//!
//! Uses an in-memory SQLite database; no setup required. Set
//! RUST_LOG=liteqb=debug to see the generated SQL.

use liteqb::{QbError, Record, Value, bind, table};

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn main() -> Result<(), QbError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let conn = rusqlite::Connection::open_in_memory()?;
    conn.execute_batch(
        "CREATE TABLE products (
            id       INTEGER PRIMARY KEY,
            name     TEXT NOT NULL,
            price    REAL NOT NULL,
            category TEXT
        )",
    )?;

    // ============================================
    // Insert
    // ============================================
    println!("=== Insert ===");

    table("products").insert(
        &record(&[
            ("id", Value::Integer(1)),
            ("name", Value::Text("Laptop".into())),
            ("price", Value::Real(999.0)),
            ("category", Value::Text("Electronics".into())),
        ]),
        &conn,
    )?;

    let more = vec![
        record(&[
            ("id", Value::Integer(2)),
            ("name", Value::Text("Phone".into())),
            ("price", Value::Real(599.0)),
            ("category", Value::Text("Electronics".into())),
        ]),
        record(&[
            ("id", Value::Integer(3)),
            ("name", Value::Text("Desk".into())),
            ("price", Value::Real(249.0)),
            ("category", Value::Null),
        ]),
    ];
    let inserted = table("products").insert_many(&more, &conn)?;
    println!("Bulk-inserted {} rows", inserted);

    // ============================================
    // Select
    // ============================================
    println!("\n=== Select ===");

    let all = table("products").order_by("price ASC").fetch_all(&conn)?;
    println!("All products: {} items", all.len());

    let pricey = table("products")
        .select(&["name", "price"])
        .filter("price > ?", bind![500.0])
        .order_by("price DESC")
        .fetch_all(&conn)?;
    println!("Over $500: {:?}", pricey);

    let first = table("products")
        .in_list("name", ["Laptop", "Phone"])
        .order_by("name ASC")
        .fetch_first(&conn)?;
    println!("First match: {:?}", first);

    // ============================================
    // Aggregates
    // ============================================
    println!("\n=== Aggregates ===");

    let electronics = table("products").filter("category = ?", bind!["Electronics"]);
    println!("Electronics count: {}", electronics.count(&conn)?);
    println!("Electronics total: {}", electronics.sum("price", &conn)?);
    println!("Cheapest overall: {}", table("products").min("price", &conn)?);

    // ============================================
    // Update and delete
    // ============================================
    println!("\n=== Update and delete ===");

    let updated = table("products")
        .filter("name = ?", bind!["Phone"])
        .update(&record(&[("price", Value::Real(549.0))]), &conn)?;
    println!("Updated {} row(s)", updated);

    let deleted = table("products")
        .is_null("category")
        .delete(&conn)?;
    println!("Deleted {} uncategorized row(s)", deleted);

    println!("\nFinal count: {}", table("products").count(&conn)?);

    Ok(())
}
