//! The fluent statement builder.
//!
//! A [`Statement`] accumulates clause fragments (projection, joins, WHERE
//! predicates, grouping, ordering, pagination) together with their bind
//! values, then renders everything into one parameterized SQL string with
//! `?` placeholders. Clause order in the rendered text is fixed by clause
//! kind, never by call order; order *within* a kind follows call order.
//!
//! Chaining methods consume and return the builder. Terminal methods take
//! `&self`, so a configured statement can be rendered or executed more than
//! once; aggregate terminals clone internally and never mutate the original.
//!
//! A `Statement` is a plain value type with no internal synchronization:
//! share one across threads only behind external synchronization, or build
//! one per operation.

use crate::client::Executor;
use crate::error::{QbError, QbResult};
use crate::value::{IntoValue, Record, Value};

/// How a predicate fragment joins onto the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conjunction {
    And,
    Or,
}

#[derive(Clone, Debug)]
struct Predicate {
    conj: Conjunction,
    fragment: String,
}

/// Fluent SQL statement builder bound to a single table.
///
/// # Example
/// ```ignore
/// let (sql, params) = liteqb::table("users")
///     .select(&["id", "name"])
///     .filter("age > ?", bind![18])
///     .order_by("id DESC")
///     .limit(10)
///     .build();
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Statement {
    /// Target table, immutable after construction
    table: String,
    /// SELECT columns (empty renders as `*`), cumulative
    columns: Vec<String>,
    /// Pre-rendered JOIN fragments, in call order
    joins: Vec<String>,
    /// WHERE fragments with their joining conjunction, in call order
    predicates: Vec<Predicate>,
    /// GROUP BY clause (last call wins)
    group_by: String,
    /// HAVING fragments, AND-joined at render time
    having: Vec<String>,
    /// ORDER BY clause (last call wins)
    order_by: String,
    /// LIMIT; -1 means unset, rendered only when >= 0
    limit: i64,
    /// OFFSET; -1 means unset, rendered only when >= 0
    offset: i64,
    /// Bind values for WHERE fragments, in fragment append order
    where_params: Vec<Value>,
    /// Bind values for HAVING fragments, kept separate so placeholder order
    /// matches parameter order with HAVING rendered after WHERE
    having_params: Vec<Value>,
}

/// Create a statement builder for the given table.
///
/// # Example
/// ```ignore
/// let stmt = liteqb::table("users").filter("id = ?", bind![1]);
/// ```
pub fn table(name: impl Into<String>) -> Statement {
    Statement::new(name)
}

impl Statement {
    /// Create a new statement builder bound to a table.
    ///
    /// The table name is not validated or quoted; it must not come from
    /// untrusted input.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            joins: Vec::new(),
            predicates: Vec::new(),
            group_by: String::new(),
            having: Vec::new(),
            order_by: String::new(),
            limit: -1,
            offset: -1,
            where_params: Vec::new(),
            having_params: Vec::new(),
        }
    }

    // ==================== Projection ====================

    /// Append columns to the SELECT projection.
    ///
    /// Cumulative across calls. With no columns selected, the statement
    /// renders `SELECT *`.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    // ==================== Filtering ====================

    /// Append a raw WHERE fragment with its bind values.
    ///
    /// The fragment is taken verbatim; the caller supplies the `?`
    /// placeholders inside it. A placeholder/value count mismatch is caught
    /// by the pre-flight parity check when the statement executes.
    pub fn filter(mut self, condition: &str, params: impl IntoIterator<Item = Value>) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: condition.to_string(),
        });
        self.where_params.extend(params);
        self
    }

    /// Like [`filter`](Statement::filter), but joins onto the previous
    /// predicate with `OR` instead of `AND`.
    ///
    /// The conjunction only applies between fragments; on the first
    /// predicate it is ignored.
    pub fn or_filter(mut self, condition: &str, params: impl IntoIterator<Item = Value>) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::Or,
            fragment: condition.to_string(),
        });
        self.where_params.extend(params);
        self
    }

    /// Add WHERE: column IN (values...), one placeholder per value.
    ///
    /// An empty `values` renders `column IN ()` verbatim (always false, and
    /// rejected as a syntax error by most engines). This is a deliberate
    /// pass-through: check for emptiness before calling if you need
    /// "match nothing" semantics.
    pub fn in_list<T, I>(self, column: &str, values: I) -> Self
    where
        T: IntoValue,
        I: IntoIterator<Item = T>,
    {
        self.list_predicate(column, "IN", values)
    }

    /// Add WHERE: column NOT IN (values...), one placeholder per value.
    ///
    /// Empty `values` renders `column NOT IN ()`, same pass-through caveat
    /// as [`in_list`](Statement::in_list).
    pub fn not_in<T, I>(self, column: &str, values: I) -> Self
    where
        T: IntoValue,
        I: IntoIterator<Item = T>,
    {
        self.list_predicate(column, "NOT IN", values)
    }

    fn list_predicate<T, I>(mut self, column: &str, op: &str, values: I) -> Self
    where
        T: IntoValue,
        I: IntoIterator<Item = T>,
    {
        let values: Vec<Value> = values.into_iter().map(IntoValue::into_value).collect();
        let placeholders = vec!["?"; values.len()].join(", ");
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: format!("{} {} ({})", column, op, placeholders),
        });
        self.where_params.extend(values);
        self
    }

    /// Add WHERE: column IS NULL (no parameter).
    pub fn is_null(mut self, column: &str) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: format!("{} IS NULL", column),
        });
        self
    }

    /// Add WHERE: column LIKE ?
    pub fn like(mut self, column: &str, value: impl IntoValue) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: format!("{} LIKE ?", column),
        });
        self.where_params.push(value.into_value());
        self
    }

    /// Add WHERE: column NOT LIKE ?
    pub fn not_like(mut self, column: &str, value: impl IntoValue) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: format!("{} NOT LIKE ?", column),
        });
        self.where_params.push(value.into_value());
        self
    }

    /// Add WHERE: column BETWEEN ? AND ?, binding `start` then `end`.
    pub fn between(mut self, column: &str, start: impl IntoValue, end: impl IntoValue) -> Self {
        self.predicates.push(Predicate {
            conj: Conjunction::And,
            fragment: format!("{} BETWEEN ? AND ?", column),
        });
        self.where_params.push(start.into_value());
        self.where_params.push(end.into_value());
        self
    }

    /// Add WHERE: column BETWEEN ? AND ? for date columns.
    pub fn date_between(self, column: &str, start: impl IntoValue, end: impl IntoValue) -> Self {
        self.between(column, start, end)
    }

    // ==================== Joins ====================

    /// Add a JOIN clause: `<kind> JOIN <table> ON <on>`.
    ///
    /// Joins accumulate in call order; repeated joins are not deduplicated.
    pub fn join(mut self, kind: &str, table: &str, on: &str) -> Self {
        self.joins.push(format!("{} JOIN {} ON {}", kind, table, on));
        self
    }

    /// Add an INNER JOIN clause.
    pub fn inner_join(self, table: &str, on: &str) -> Self {
        self.join("INNER", table, on)
    }

    /// Add a LEFT JOIN clause.
    pub fn left_join(self, table: &str, on: &str) -> Self {
        self.join("LEFT", table, on)
    }

    /// Add a RIGHT JOIN clause.
    pub fn right_join(self, table: &str, on: &str) -> Self {
        self.join("RIGHT", table, on)
    }

    // ==================== Grouping, ordering, pagination ====================

    /// Set the GROUP BY clause, joining columns with `, `.
    ///
    /// Unlike [`select`](Statement::select) this overwrites: the last call
    /// wins.
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.group_by = columns.join(", ");
        self
    }

    /// Append a HAVING fragment with its bind values.
    ///
    /// Fragments are AND-joined at render time, after GROUP BY.
    pub fn having(mut self, condition: &str, params: impl IntoIterator<Item = Value>) -> Self {
        self.having.push(condition.to_string());
        self.having_params.extend(params);
        self
    }

    /// Set the ORDER BY clause (last call wins).
    pub fn order_by(mut self, expr: &str) -> Self {
        self.order_by = expr.to_string();
        self
    }

    /// Set the LIMIT. Negative values are stored but not rendered.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = n;
        self
    }

    /// Set the OFFSET. Negative values are stored but not rendered.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = n;
        self
    }

    // ==================== Rendering ====================

    fn render_where(&self) -> String {
        let mut out = String::new();
        for (i, pred) in self.predicates.iter().enumerate() {
            if i > 0 {
                out.push_str(match pred.conj {
                    Conjunction::And => " AND ",
                    Conjunction::Or => " OR ",
                });
            }
            out.push_str(&pred.fragment);
        }
        out
    }

    /// Render the SELECT core: projection, FROM, joins, WHERE, GROUP BY and
    /// HAVING, but no ORDER BY/LIMIT/OFFSET. Also the inner query for
    /// [`count`](Statement::count).
    fn render_select_core(&self) -> String {
        let mut sql = String::from("SELECT ");
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(", "));
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.render_where());
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by);
        }

        if !self.having.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&self.having.join(" AND "));
        }

        sql
    }

    /// WHERE parameters followed by HAVING parameters, matching placeholder
    /// order in the rendered text.
    fn params(&self) -> Vec<Value> {
        let mut params = self.where_params.clone();
        params.extend(self.having_params.iter().cloned());
        params
    }

    /// Render the full SELECT statement and its bind values.
    ///
    /// Pure: calling `build` twice without intervening mutation returns
    /// identical text and parameters. Render order is always
    /// `SELECT .. FROM .. [JOIN ..] [WHERE ..] [GROUP BY ..] [HAVING ..]
    /// [ORDER BY ..] [LIMIT n] [OFFSET n]`.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut sql = self.render_select_core();

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by);
        }

        if self.limit >= 0 {
            sql.push_str(&format!(" LIMIT {}", self.limit));
        }

        if self.offset >= 0 {
            sql.push_str(&format!(" OFFSET {}", self.offset));
        }

        (sql, self.params())
    }

    /// Get the rendered SQL string (for debugging).
    pub fn to_sql(&self) -> String {
        self.build().0
    }

    /// Pre-flight placeholder parity check: `?` occurrences in WHERE
    /// fragments must match the WHERE parameter count, and likewise for
    /// HAVING. Runs before any SQL is sent to an executor.
    fn validate(&self) -> QbResult<()> {
        let where_slots: usize = self
            .predicates
            .iter()
            .map(|p| p.fragment.matches('?').count())
            .sum();
        if where_slots != self.where_params.len() {
            return Err(QbError::config(format!(
                "WHERE placeholders({}) != params({})",
                where_slots,
                self.where_params.len()
            )));
        }

        let having_slots: usize = self.having.iter().map(|h| h.matches('?').count()).sum();
        if having_slots != self.having_params.len() {
            return Err(QbError::config(format!(
                "HAVING placeholders({}) != params({})",
                having_slots,
                self.having_params.len()
            )));
        }

        Ok(())
    }

    // ==================== Aggregate terminals ====================

    fn aggregate(&self, func: &str, column: &str, conn: &impl Executor) -> QbResult<f64> {
        self.validate()?;
        // Clone so the caller's projection is untouched.
        let mut agg = self.clone();
        agg.columns = vec![format!("{}({})", func, column)];
        let (sql, params) = agg.build();
        conn.query_scalar(&sql, &params)
    }

    /// Execute `SELECT SUM(column)` over this statement's rows.
    pub fn sum(&self, column: &str, conn: &impl Executor) -> QbResult<f64> {
        self.aggregate("SUM", column, conn)
    }

    /// Execute `SELECT MAX(column)` over this statement's rows.
    pub fn max(&self, column: &str, conn: &impl Executor) -> QbResult<f64> {
        self.aggregate("MAX", column, conn)
    }

    /// Execute `SELECT MIN(column)` over this statement's rows.
    pub fn min(&self, column: &str, conn: &impl Executor) -> QbResult<f64> {
        self.aggregate("MIN", column, conn)
    }

    /// Execute `SELECT AVG(column)` over this statement's rows.
    pub fn avg(&self, column: &str, conn: &impl Executor) -> QbResult<f64> {
        self.aggregate("AVG", column, conn)
    }

    /// Count the rows matching this statement.
    ///
    /// Wraps the ORDER BY/LIMIT/OFFSET-free rendering as a subquery:
    /// `SELECT COUNT(*) FROM (<inner>) AS count_query`.
    pub fn count(&self, conn: &impl Executor) -> QbResult<i64> {
        self.validate()?;
        let sql = format!(
            "SELECT COUNT(*) FROM ({}) AS count_query",
            self.render_select_core()
        );
        conn.query_scalar(&sql, &self.params())
            .map_err(|e| QbError::Other(format!("counting rows: {}", e)))
    }

    // ==================== Mutation terminals ====================

    /// Insert one record, returning the number of affected rows.
    ///
    /// Column order in the generated SQL is the record's lexical key order,
    /// so the statement text is stable across runs.
    pub fn insert(&self, record: &Record, conn: &impl Executor) -> QbResult<usize> {
        if record.is_empty() {
            return Err(QbError::config("insert requires at least one column"));
        }

        let columns: Vec<&str> = record.keys().map(String::as_str).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders
        );
        let params: Vec<Value> = record.values().cloned().collect();
        conn.execute(&sql, &params)
    }

    /// Insert many records in a single statement, returning affected rows.
    ///
    /// The column list is taken from the first record. Fails with
    /// [`QbError::Config`] when `records` is empty or when any record's key
    /// set differs from the first one's — a mismatched row is rejected
    /// outright instead of being silently padded.
    pub fn insert_many(&self, records: &[Record], conn: &impl Executor) -> QbResult<usize> {
        let Some(first) = records.first() else {
            return Err(QbError::config("insert_many requires at least one record"));
        };
        if first.is_empty() {
            return Err(QbError::config("insert_many requires at least one column"));
        }

        let columns: Vec<&str> = first.keys().map(String::as_str).collect();
        let group = format!("({})", vec!["?"; columns.len()].join(", "));

        let mut params: Vec<Value> = Vec::with_capacity(records.len() * columns.len());
        for (idx, record) in records.iter().enumerate() {
            if record.len() != columns.len() {
                return Err(QbError::config(format!(
                    "insert_many: record {} has {} columns, expected {}",
                    idx,
                    record.len(),
                    columns.len()
                )));
            }
            for column in &columns {
                let Some(value) = record.get(*column) else {
                    return Err(QbError::config(format!(
                        "insert_many: record {} is missing column '{}'",
                        idx, column
                    )));
                };
                params.push(value.clone());
            }
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.table,
            columns.join(", "),
            vec![group; records.len()].join(", ")
        );
        conn.execute(&sql, &params)
    }

    /// Update the rows matching this statement's predicates.
    ///
    /// Requires at least one predicate; updating a whole table must be
    /// spelled out with an explicit always-true filter. SET values are bound
    /// first, then the WHERE values.
    pub fn update(&self, record: &Record, conn: &impl Executor) -> QbResult<usize> {
        if record.is_empty() {
            return Err(QbError::config("update requires at least one column"));
        }
        if self.predicates.is_empty() {
            return Err(QbError::config("update requires at least one predicate"));
        }
        self.validate()?;

        let assignments: Vec<String> = record.keys().map(|c| format!("{} = ?", c)).collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            assignments.join(", "),
            self.render_where()
        );

        let mut params: Vec<Value> = record.values().cloned().collect();
        params.extend(self.where_params.iter().cloned());
        conn.execute(&sql, &params)
    }

    /// Delete the rows matching this statement's predicates.
    ///
    /// With no predicates the WHERE clause is omitted and every row is
    /// deleted.
    pub fn delete(&self, conn: &impl Executor) -> QbResult<usize> {
        self.validate()?;

        let mut sql = format!("DELETE FROM {}", self.table);
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.render_where());
        }

        tracing::debug!(sql = %sql, params = self.where_params.len(), "delete statement");
        conn.execute(&sql, &self.where_params)
    }

    // ==================== Fetch terminals ====================

    /// Execute the statement and return every row as a generic record.
    ///
    /// Returns an empty vec (not an error) when no rows match. BLOB values
    /// are decoded to text; all other kinds pass through.
    pub fn fetch_all(&self, conn: &impl Executor) -> QbResult<Vec<Record>> {
        self.validate()?;
        let (sql, params) = self.build();
        conn.query_rows(&sql, &params)
    }

    /// Execute the statement and return the first row.
    ///
    /// No implicit `LIMIT 1` is added; which row comes first is up to the
    /// statement's own ORDER BY/LIMIT/OFFSET. Returns [`QbError::NotFound`]
    /// when the result set is empty.
    pub fn fetch_first(&self, conn: &impl Executor) -> QbResult<Record> {
        self.validate()?;
        let (sql, params) = self.build();
        let rows = conn.query_rows(&sql, &params)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| QbError::not_found("expected one row, got none"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind;

    #[test]
    fn empty_state_default() {
        let (sql, params) = table("users").build();
        assert_eq!(sql, "SELECT * FROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn select_is_cumulative() {
        let stmt = table("users").select(&["id"]).select(&["name", "email"]);
        assert_eq!(stmt.to_sql(), "SELECT id, name, email FROM users");
    }

    #[test]
    fn where_order_limit_offset() {
        let (sql, params) = table("users")
            .filter("age > ?", bind![18])
            .order_by("id DESC")
            .limit(10)
            .offset(5)
            .build();
        assert_eq!(
            sql,
            "SELECT * FROM users WHERE age > ? ORDER BY id DESC LIMIT 10 OFFSET 5"
        );
        assert_eq!(params, vec![Value::Integer(18)]);
    }

    #[test]
    fn in_list_expansion() {
        let (sql, params) = table("t").in_list("id", [1, 2, 3]).build();
        assert_eq!(sql, "SELECT * FROM t WHERE id IN (?, ?, ?)");
        assert_eq!(
            params,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn in_list_empty_passes_through() {
        let (sql, params) = table("t").in_list("id", Vec::<i64>::new()).build();
        assert_eq!(sql, "SELECT * FROM t WHERE id IN ()");
        assert!(params.is_empty());
    }

    #[test]
    fn not_in_renders_not() {
        let stmt = table("t").not_in("status", ["gone"]);
        assert_eq!(stmt.to_sql(), "SELECT * FROM t WHERE status NOT IN (?)");
    }

    #[test]
    fn clause_order_is_kind_fixed() {
        let a = table("users")
            .select(&["u.id"])
            .filter("u.age > ?", bind![18])
            .inner_join("orders o", "u.id = o.user_id");
        let b = table("users")
            .inner_join("orders o", "u.id = o.user_id")
            .filter("u.age > ?", bind![18])
            .select(&["u.id"]);
        assert_eq!(a.build(), b.build());
        assert_eq!(
            a.to_sql(),
            "SELECT u.id FROM users INNER JOIN orders o ON u.id = o.user_id WHERE u.age > ?"
        );
    }

    #[test]
    fn build_is_deterministic() {
        let stmt = table("users")
            .filter("age > ?", bind![18])
            .having("COUNT(*) > ?", bind![5])
            .group_by(&["city"]);
        assert_eq!(stmt.build(), stmt.build());
    }

    #[test]
    fn or_filter_joins_with_or() {
        let stmt = table("users")
            .filter("age > ?", bind![18])
            .or_filter("role = ?", bind!["admin"]);
        assert_eq!(stmt.to_sql(), "SELECT * FROM users WHERE age > ? OR role = ?");
    }

    #[test]
    fn leading_or_filter_has_no_dangling_or() {
        let stmt = table("users").or_filter("role = ?", bind!["admin"]);
        assert_eq!(stmt.to_sql(), "SELECT * FROM users WHERE role = ?");
    }

    #[test]
    fn group_by_and_having_render_after_where() {
        let (sql, params) = table("orders")
            .select(&["user_id", "COUNT(*) AS n"])
            .filter("status = ?", bind!["paid"])
            .group_by(&["user_id"])
            .having("COUNT(*) > ?", bind![5])
            .order_by("n DESC")
            .build();
        assert_eq!(
            sql,
            "SELECT user_id, COUNT(*) AS n FROM orders WHERE status = ? \
             GROUP BY user_id HAVING COUNT(*) > ? ORDER BY n DESC"
        );
        // WHERE params come before HAVING params, matching placeholder order.
        assert_eq!(
            params,
            vec![Value::Text("paid".to_string()), Value::Integer(5)]
        );
    }

    #[test]
    fn having_params_follow_where_params_regardless_of_call_order() {
        let (_, params) = table("orders")
            .having("COUNT(*) > ?", bind![5])
            .filter("status = ?", bind!["paid"])
            .group_by(&["user_id"])
            .build();
        assert_eq!(
            params,
            vec![Value::Text("paid".to_string()), Value::Integer(5)]
        );
    }

    #[test]
    fn group_by_overwrites() {
        let stmt = table("t").group_by(&["a", "b"]).group_by(&["c"]);
        assert_eq!(stmt.to_sql(), "SELECT * FROM t GROUP BY c");
    }

    #[test]
    fn order_by_overwrites() {
        let stmt = table("t").order_by("a ASC").order_by("b DESC");
        assert_eq!(stmt.to_sql(), "SELECT * FROM t ORDER BY b DESC");
    }

    #[test]
    fn negative_limit_not_rendered() {
        let stmt = table("t").limit(-5).offset(-3);
        assert_eq!(stmt.to_sql(), "SELECT * FROM t");
    }

    #[test]
    fn zero_limit_renders() {
        let stmt = table("t").limit(0);
        assert_eq!(stmt.to_sql(), "SELECT * FROM t LIMIT 0");
    }

    #[test]
    fn is_null_has_no_param() {
        let (sql, params) = table("t").is_null("deleted_at").build();
        assert_eq!(sql, "SELECT * FROM t WHERE deleted_at IS NULL");
        assert!(params.is_empty());
    }

    #[test]
    fn like_and_not_like() {
        let (sql, params) = table("t")
            .like("name", "%ali%")
            .not_like("email", "%spam%")
            .build();
        assert_eq!(sql, "SELECT * FROM t WHERE name LIKE ? AND email NOT LIKE ?");
        assert_eq!(
            params,
            vec![
                Value::Text("%ali%".to_string()),
                Value::Text("%spam%".to_string())
            ]
        );
    }

    #[test]
    fn between_binds_start_then_end() {
        let (sql, params) = table("t").between("age", 18, 65).build();
        assert_eq!(sql, "SELECT * FROM t WHERE age BETWEEN ? AND ?");
        assert_eq!(params, vec![Value::Integer(18), Value::Integer(65)]);
    }

    #[test]
    fn date_between_matches_between() {
        let (sql, params) = table("t")
            .date_between("created_at", "2024-01-01", "2024-12-31")
            .build();
        assert_eq!(sql, "SELECT * FROM t WHERE created_at BETWEEN ? AND ?");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn joins_accumulate_in_call_order() {
        let stmt = table("users u")
            .left_join("orders o", "u.id = o.user_id")
            .right_join("payments p", "o.id = p.order_id");
        assert_eq!(
            stmt.to_sql(),
            "SELECT * FROM users u LEFT JOIN orders o ON u.id = o.user_id \
             RIGHT JOIN payments p ON o.id = p.order_id"
        );
    }

    #[test]
    fn parity_check_rejects_missing_param() {
        let stmt = table("t").filter("a = ? AND b = ?", bind![1]);
        let err = stmt.validate().unwrap_err();
        assert!(err.is_config(), "expected config error, got {err:?}");
    }

    #[test]
    fn parity_check_rejects_extra_having_param() {
        let stmt = table("t")
            .group_by(&["a"])
            .having("COUNT(*) > ?", bind![1, 2]);
        assert!(stmt.validate().is_err());
    }

    #[test]
    fn parity_check_accepts_matching_counts() {
        let stmt = table("t")
            .filter("a = ?", bind![1])
            .in_list("b", [1, 2])
            .group_by(&["a"])
            .having("SUM(b) > ?", bind![10]);
        assert!(stmt.validate().is_ok());
    }
}
