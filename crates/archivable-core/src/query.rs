// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query description passed from managers to stores.
//!
//! A [`Query`] is a conjunction of field conditions plus optional ordering
//! and pagination. It is data, not execution: a store either evaluates it in
//! memory with [`Query::apply`] or renders it with [`Query::to_sql`].
//!
//! # SQL Pattern
//!
//! ```sql
//! SELECT id, name, archive_identifier FROM tags
//! WHERE archive_identifier = $1 AND name = $2
//! ORDER BY name ASC
//! LIMIT 10 OFFSET 0
//! ```

use std::{cmp::Ordering, fmt, marker::PhantomData};

use crate::{model::Model, value::Value};

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use archivable_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page.
    ///
    /// # Example
    ///
    /// ```rust
    /// use archivable_core::Pagination;
    ///
    /// let page_2 = Pagination::page(2, 25); // offset=50, limit=25
    /// assert_eq!(page_2.offset, 50);
    /// ```
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit:  per_page,
            offset: page.saturating_mul(per_page)
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}

/// A single field condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Field equals value.
    Eq(String, Value),

    /// Field differs from value.
    Ne(String, Value)
}

impl Condition {
    /// Field the condition tests.
    pub fn field(&self) -> &str {
        match self {
            Self::Eq(field, _) | Self::Ne(field, _) => field
        }
    }

    /// Value the condition compares against.
    pub fn value(&self) -> &Value {
        match self {
            Self::Eq(_, value) | Self::Ne(_, value) => value
        }
    }

    /// Evaluate against an entity. Unknown fields never match.
    pub fn matches<E: Model>(&self, entity: &E) -> bool {
        let Some(actual) = entity.field_value(self.field()) else {
            return false;
        };
        match self {
            Self::Eq(_, expected) => actual == *expected,
            Self::Ne(_, expected) => actual != *expected
        }
    }

    fn to_sql(&self, placeholder: usize) -> String {
        let op = match self {
            Self::Eq(..) => "=",
            Self::Ne(..) => "<>"
        };
        format!("{} {} ${}", self.field(), op, placeholder)
    }
}

/// Query over entities of type `E`.
pub struct Query<E> {
    conditions: Vec<Condition>,
    order:      Vec<(String, SortDirection)>,
    pagination: Option<Pagination>,
    _entity:    PhantomData<fn() -> E>
}

impl<E> Query<E> {
    /// Query matching every row.
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            order:      Vec::new(),
            pagination: None,
            _entity:    PhantomData
        }
    }

    /// Restrict to rows where `field == value`.
    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Eq(field.into(), value.into()));
        self
    }

    /// Restrict to rows where `field != value`.
    #[must_use]
    pub fn exclude(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions
            .push(Condition::Ne(field.into(), value.into()));
        self
    }

    /// Add an ordering key. Keys apply in the order they are added.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order.push((field.into(), direction));
        self
    }

    /// Limit the result window.
    #[must_use]
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Conditions in the order they were added.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Ordering keys.
    pub fn ordering(&self) -> &[(String, SortDirection)] {
        &self.order
    }

    /// Result window, if any.
    pub const fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    /// Check if the query has a condition on `field`.
    pub fn constrains(&self, field: &str) -> bool {
        self.conditions.iter().any(|c| c.field() == field)
    }
}

impl<E: Model> Query<E> {
    /// Check if an entity satisfies every condition.
    pub fn matches(&self, entity: &E) -> bool {
        self.conditions.iter().all(|c| c.matches(entity))
    }

    /// Evaluate the query over in-memory rows.
    pub fn apply<I>(&self, rows: I) -> Vec<E>
    where
        I: IntoIterator<Item = E>
    {
        let mut rows: Vec<E> = rows.into_iter().filter(|e| self.matches(e)).collect();

        if !self.order.is_empty() {
            rows.sort_by(|a, b| self.compare(a, b));
        }

        match self.pagination {
            Some(page) => rows
                .into_iter()
                .skip(usize::try_from(page.offset).unwrap_or(0))
                .take(usize::try_from(page.limit).unwrap_or(0))
                .collect(),
            None => rows
        }
    }

    /// Render as a PostgreSQL `SELECT` with `$n` placeholders.
    ///
    /// Returns the statement and its bind values in placeholder order.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let meta = E::meta();
        let columns: Vec<&str> = meta.fields.iter().map(|f| f.name.as_str()).collect();
        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), meta.table);
        let mut binds = Vec::with_capacity(self.conditions.len());

        if !self.conditions.is_empty() {
            let clauses: Vec<String> = self
                .conditions
                .iter()
                .enumerate()
                .map(|(i, c)| c.to_sql(i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
            binds.extend(self.conditions.iter().map(|c| c.value().clone()));
        }

        if !self.order.is_empty() {
            let keys: Vec<String> = self
                .order
                .iter()
                .map(|(field, dir)| format!("{} {}", field, dir.as_sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&keys.join(", "));
        }

        if let Some(page) = self.pagination {
            sql.push_str(&format!(" LIMIT {} OFFSET {}", page.limit, page.offset));
        }

        (sql, binds)
    }

    fn compare(&self, a: &E, b: &E) -> Ordering {
        for (field, direction) in &self.order {
            let left = a.field_value(field).unwrap_or(Value::Null);
            let right = b.field_value(field).unwrap_or(Value::Null);
            let ord = match direction {
                SortDirection::Asc => left.cmp(&right),
                SortDirection::Desc => right.cmp(&left)
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl<E> Default for Query<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Query<E> {
    fn clone(&self) -> Self {
        Self {
            conditions: self.conditions.clone(),
            order:      self.order.clone(),
            pagination: self.pagination,
            _entity:    PhantomData
        }
    }
}

impl<E> fmt::Debug for Query<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("conditions", &self.conditions)
            .field("order", &self.order)
            .field("pagination", &self.pagination)
            .finish()
    }
}
