//! # liteqb
//!
//! A fluent, parameter-safe SQL statement builder for SQLite.
//!
//! `liteqb` builds parameterized SQL from chained clause methods. Values
//! never get interpolated into the statement text; every dynamic value binds
//! through a `?` placeholder, and placeholder/parameter parity is checked
//! before anything touches the database.
//!
//! ## Building statements
//!
//! ```ignore
//! use liteqb::{bind, table};
//!
//! let (sql, params) = table("users")
//!     .select(&["id", "name"])
//!     .filter("age > ?", bind![18])
//!     .in_list("city", ["berlin", "paris"])
//!     .order_by("id DESC")
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE age > ? AND city IN (?, ?) \
//!      ORDER BY id DESC LIMIT 10"
//! );
//! ```
//!
//! ## Executing statements
//!
//! Terminal methods run against anything implementing [`Executor`], which
//! covers both [`rusqlite::Connection`] and [`rusqlite::Transaction`]:
//!
//! ```ignore
//! use liteqb::{bind, table, Record, Value};
//!
//! let conn = rusqlite::Connection::open_in_memory()?;
//! conn.execute_batch("CREATE TABLE users (id INTEGER, name TEXT, age INTEGER)")?;
//!
//! let mut alice = Record::new();
//! alice.insert("id".into(), Value::Integer(1));
//! alice.insert("name".into(), Value::Text("alice".into()));
//! alice.insert("age".into(), Value::Integer(30));
//! table("users").insert(&alice, &conn)?;
//!
//! let adults = table("users").filter("age >= ?", bind![18]).fetch_all(&conn)?;
//! let total = table("users").count(&conn)?;
//! ```

mod client;
mod error;
mod row;
mod stmt;
mod value;

pub use client::Executor;
pub use error::{QbError, QbResult};
pub use stmt::{table, Statement};
pub use value::{IntoValue, Record, Value};
