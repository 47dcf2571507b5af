//! This module exposes all the types related to the assembly of a Gambit [`QueryBody`].

mod args;
mod body;
mod builder;
mod column;

use candid::CandidType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::args::{
    Columns, GroupByArgs, JoinArgs, OrderByArgs, SelectArgs, WhereArgs, WhereValue,
};
pub use self::body::{
    Condition, ConditionValue, DEFAULT_LIMIT, JoinArg, JoinSide, OrderByArg, QueryBody, SelectArg,
    WhereGroup,
};
pub use self::builder::QueryBuilder;
pub use self::column::ColumnRef;

/// The result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// An enum representing possible errors that can occur while building a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The primary table was never set or did not resolve to a physical table name.
    #[error("Table name is required")]
    MissingTableName,
}

/// Aggregation applied to a selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum Aggregation {
    #[serde(rename = "SUM")]
    Sum,
    #[serde(rename = "COUNT")]
    Count,
}

/// Comparison operator of a where condition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "lt")]
    LessThan,
    #[default]
    #[serde(rename = "eq")]
    Equal,
    #[serde(rename = "neq")]
    NotEqual,
}

/// Boolean combinator joining the conditions of a where group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum Combinator {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Kind of join between the master and the slave table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum JoinKind {
    #[default]
    #[serde(rename = "INNER")]
    Inner,
    #[serde(rename = "LEFT OUTER")]
    LeftOuter,
    #[serde(rename = "RIGHT OUTER")]
    RightOuter,
    #[serde(rename = "FULL OUTER")]
    FullOuter,
}

/// An enum representing the direction of ordering in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum OrderDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}
