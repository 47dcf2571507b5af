//! Prelude exposes all the types for `gambit-api` crate.

pub use crate::config::{ConfigError, ConfigResult, ConfigStore, TABLE_NAMESPACE, TableConfig};
pub use crate::query::{
    Aggregation, ColumnRef, Columns, Combinator, Comparison, Condition, ConditionValue,
    DEFAULT_LIMIT, GroupByArgs, JoinArg, JoinArgs, JoinKind, JoinSide, OrderByArg, OrderByArgs,
    OrderDirection, QueryBody, QueryBuilder, QueryError, QueryResult, SelectArg, SelectArgs,
    WhereArgs, WhereGroup, WhereValue,
};
pub use crate::table::{NamespacedResolver, TableResolver};
pub use crate::{GambitError, GambitResult};
