//! Execution capability trait for unified database access.

use crate::error::{QbError, QbResult};
use crate::row::record_from_row;
use crate::value::{Record, Value};
use rusqlite::types::FromSql;

/// A trait that unifies database connections and transactions.
///
/// The builder only ever hands an `Executor` a finished SQL string with its
/// positional parameters; it never inspects driver-specific result metadata
/// beyond column names and generic value decoding. This lets statement
/// methods accept either a direct connection or a transaction, making it
/// easy to compose operations within transactions.
pub trait Executor {
    /// Execute a statement and return the number of affected rows.
    fn execute(&self, sql: &str, params: &[Value]) -> QbResult<usize>;

    /// Execute a query and return all rows as generic records.
    fn query_rows(&self, sql: &str, params: &[Value]) -> QbResult<Vec<Record>>;

    /// Execute a query and decode the first column of the first row.
    ///
    /// Returns [`QbError::NotFound`] when the result set is empty, and
    /// [`QbError::Decode`] when the column cannot be read as `T`.
    fn query_scalar<T: FromSql>(&self, sql: &str, params: &[Value]) -> QbResult<T>;
}

impl Executor for rusqlite::Connection {
    fn execute(&self, sql: &str, params: &[Value]) -> QbResult<usize> {
        tracing::debug!(sql = %sql, params = params.len(), "executing statement");
        let affected =
            rusqlite::Connection::execute(self, sql, rusqlite::params_from_iter(params.iter()))?;
        Ok(affected)
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> QbResult<Vec<Record>> {
        tracing::debug!(sql = %sql, params = params.len(), "running query");
        let mut stmt = self.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(record_from_row(row, &columns)?);
        }
        Ok(records)
    }

    fn query_scalar<T: FromSql>(&self, sql: &str, params: &[Value]) -> QbResult<T> {
        tracing::debug!(sql = %sql, params = params.len(), "running scalar query");
        let mut stmt = self.prepare(sql)?;
        let column = stmt
            .column_names()
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();
        let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;
        let row = rows
            .next()?
            .ok_or_else(|| QbError::not_found("expected one row, got none"))?;
        row.get::<_, T>(0)
            .map_err(|e| QbError::decode(column, e.to_string()))
    }
}

impl Executor for rusqlite::Transaction<'_> {
    fn execute(&self, sql: &str, params: &[Value]) -> QbResult<usize> {
        Executor::execute(&**self, sql, params)
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> QbResult<Vec<Record>> {
        Executor::query_rows(&**self, sql, params)
    }

    fn query_scalar<T: FromSql>(&self, sql: &str, params: &[Value]) -> QbResult<T> {
        Executor::query_scalar(&**self, sql, params)
    }
}

impl<E: Executor> Executor for &E {
    fn execute(&self, sql: &str, params: &[Value]) -> QbResult<usize> {
        (*self).execute(sql, params)
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> QbResult<Vec<Record>> {
        (*self).query_rows(sql, params)
    }

    fn query_scalar<T: FromSql>(&self, sql: &str, params: &[Value]) -> QbResult<T> {
        (*self).query_scalar(sql, params)
    }
}
