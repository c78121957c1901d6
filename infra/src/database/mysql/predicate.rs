//! Conjunctive WHERE-clause builder for dynamic queries.
//!
//! A condition is appended only when the corresponding filter field is
//! present; the accumulated list renders as `WHERE a AND b AND c` with
//! positional binds applied in append order. An empty builder renders
//! as no clause at all, so absent fields impose no constraint.

use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;

/// A bind value carried alongside its clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BindValue {
    Text(String),
    UInt(u32),
}

/// Accumulates optional predicates into a conjunctive WHERE clause
#[derive(Debug, Default)]
pub(crate) struct SqlConditions {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl SqlConditions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `column LIKE '%value%'`
    pub(crate) fn and_contains(&mut self, column: &str, value: &str) {
        self.clauses.push(format!("{} LIKE ?", column));
        self.binds.push(BindValue::Text(format!("%{}%", value)));
    }

    /// `column > value`
    pub(crate) fn and_gt(&mut self, column: &str, value: u32) {
        self.clauses.push(format!("{} > ?", column));
        self.binds.push(BindValue::UInt(value));
    }

    /// `column = value`
    pub(crate) fn and_eq(&mut self, column: &str, value: &str) {
        self.clauses.push(format!("{} = ?", column));
        self.binds.push(BindValue::Text(value.to_string()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Render the WHERE clause; empty when no condition was added
    pub(crate) fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Apply the accumulated binds to a query, in append order
    pub(crate) fn bind_to<'q>(
        &self,
        mut query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        for bind in &self.binds {
            query = match bind {
                BindValue::Text(value) => query.bind(value.clone()),
                BindValue::UInt(value) => query.bind(*value),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_no_clause() {
        let conditions = SqlConditions::new();
        assert!(conditions.is_empty());
        assert_eq!(conditions.where_sql(), "");
    }

    #[test]
    fn test_single_condition() {
        let mut conditions = SqlConditions::new();
        conditions.and_gt("price", 10000);

        assert_eq!(conditions.where_sql(), " WHERE price > ?");
        assert_eq!(conditions.binds, vec![BindValue::UInt(10000)]);
    }

    #[test]
    fn test_conditions_join_with_and_in_append_order() {
        let mut conditions = SqlConditions::new();
        conditions.and_contains("detail", "desc");
        conditions.and_gt("price", 10003);
        conditions.and_eq("sell_status", "ON_SALE");

        assert_eq!(
            conditions.where_sql(),
            " WHERE detail LIKE ? AND price > ? AND sell_status = ?"
        );
        assert_eq!(
            conditions.binds,
            vec![
                BindValue::Text("%desc%".to_string()),
                BindValue::UInt(10003),
                BindValue::Text("ON_SALE".to_string()),
            ]
        );
    }

    #[test]
    fn test_contains_wraps_value_in_wildcards() {
        let mut conditions = SqlConditions::new();
        conditions.and_contains("detail", "lamp");
        assert_eq!(conditions.binds, vec![BindValue::Text("%lamp%".to_string())]);
    }
}
