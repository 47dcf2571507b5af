use tracing::{debug, warn};

use crate::query::{
    ColumnRef, Condition, GroupByArgs, JoinArg, JoinArgs, JoinSide, OrderByArg, OrderByArgs,
    QueryBody, QueryError, QueryResult, SelectArg, SelectArgs, WhereArgs, WhereGroup, WhereValue,
};
use crate::table::TableResolver;

/// A builder for constructing a Gambit [`QueryBody`].
///
/// Every configuration call mutates the body in place and returns the builder, so calls can be
/// chained. Calls missing a required argument are skipped without touching the body, which lets
/// callers wire optional filters without checking them first.
///
/// Logical table identifiers are resolved to physical names through the [`TableResolver`].
#[derive(Debug, Clone)]
pub struct QueryBuilder<R>
where
    R: TableResolver,
{
    resolver: R,
    query: QueryBody,
}

impl<R> QueryBuilder<R>
where
    R: TableResolver,
{
    /// Creates a new [`QueryBuilder`] resolving table names with `resolver`.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            query: QueryBody::default(),
        }
    }

    /// Returns the [`TableResolver`] used by the builder.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns the body assembled so far, without finalizing it.
    pub fn query_body(&self) -> &QueryBody {
        &self.query
    }

    /// Sets the primary table of the query.
    ///
    /// An unresolved table leaves an empty table name, which makes [`QueryBuilder::build`] fail.
    pub fn set_table(&mut self, table: impl AsRef<str>) -> &mut Self {
        self.query.table_name = self.physical_table(table.as_ref());
        self
    }

    /// Adds one select entry per column.
    pub fn add_select(&mut self, args: SelectArgs) -> &mut Self {
        if args.columns.is_empty() {
            debug!("add_select: no columns given; skipping");
            return self;
        }

        let table = self.physical_table(&args.table_name);
        let alias = args.alias.filter(|alias| !alias.is_empty());
        self.query
            .select_args
            .extend(args.columns.into_vec().into_iter().map(|column| SelectArg {
                column_name: ColumnRef::new(table.clone(), column),
                alias: alias.clone(),
                agg: args.agg,
            }));
        self
    }

    /// Adds a new group of conditions.
    ///
    /// A list value yields one condition per element, all in the same group. Groups added by
    /// different calls are never merged.
    pub fn add_where(&mut self, args: WhereArgs) -> &mut Self {
        if args.value.is_falsy() {
            debug!(
                column = %args.column_name,
                "add_where: empty or false value; skipping"
            );
            return self;
        }

        let table = args
            .table_name
            .as_deref()
            .and_then(|table| self.resolve(table))
            .unwrap_or_else(|| self.query.table_name.clone());
        let comparison = args.comparison.unwrap_or_default();
        let values = match args.value {
            WhereValue::One(value) => vec![value],
            WhereValue::Many(values) => values,
        };
        let conditions = values
            .into_iter()
            .map(|value| Condition {
                column_name: ColumnRef::new(table.clone(), args.column_name.clone()),
                value,
                comparison,
            })
            .collect();

        self.query
            .where_args
            .get_or_insert_with(Vec::new)
            .push(WhereGroup {
                conditions,
                combinator: args.combinator.unwrap_or_default(),
            });
        self
    }

    /// Sets a limit on the number of rows to return, replacing the previous one.
    pub fn set_limit(&mut self, limit: u64) -> &mut Self {
        self.query.limit_args = limit;
        self
    }

    /// Adds a join between two tables.
    pub fn add_join(&mut self, args: JoinArgs) -> &mut Self {
        if args.primary_table_name.is_empty()
            || args.secondary_table_name.is_empty()
            || args.join_column.is_empty()
        {
            debug!("add_join: missing table or join column; skipping");
            return self;
        }

        let slave_column = args
            .secondary_join_column
            .filter(|column| !column.is_empty())
            .unwrap_or_else(|| args.join_column.clone());
        let join = JoinArg {
            master: JoinSide {
                table_name: self.physical_table(&args.primary_table_name),
                join_column: args.join_column,
            },
            slave: JoinSide {
                table_name: self.physical_table(&args.secondary_table_name),
                join_column: slave_column,
            },
            type_of_join: args.type_of_join.unwrap_or_default(),
        };

        self.query.join_args.get_or_insert_with(Vec::new).push(join);
        self
    }

    /// Adds an order by clause; the direction is left to the executor when not given.
    pub fn add_order_by(&mut self, args: OrderByArgs) -> &mut Self {
        if args.column_name.is_empty() || args.table_name.is_empty() {
            debug!("add_order_by: missing table or column; skipping");
            return self;
        }

        let order_by = OrderByArg {
            column_name: ColumnRef::new(self.physical_table(&args.table_name), args.column_name),
            order_direction: args.order_direction,
        };
        self.query
            .order_by_args
            .get_or_insert_with(Vec::new)
            .push(order_by);
        self
    }

    /// Adds a group by clause.
    pub fn add_group_by(&mut self, args: GroupByArgs) -> &mut Self {
        if args.column_name.is_empty() || args.table_name.is_empty() {
            debug!("add_group_by: missing table or column; skipping");
            return self;
        }

        let column = ColumnRef::new(self.physical_table(&args.table_name), args.column_name);
        self.query
            .group_by_args
            .get_or_insert_with(Vec::new)
            .push(column);
        self
    }

    /// Validates and returns the [`QueryBody`].
    ///
    /// When no column was selected, a wildcard selection of the primary table is stored in the
    /// builder, so calling this again yields the same body.
    pub fn build(&mut self) -> QueryResult<QueryBody> {
        if self.query.table_name.is_empty() {
            return Err(QueryError::MissingTableName);
        }
        if self.query.select_args.is_empty() {
            self.query.select_args = vec![SelectArg::wildcard(self.query.table_name.clone())];
        }

        debug!(table = %self.query.table_name, "query body built");
        Ok(self.query.clone())
    }

    fn resolve(&self, logical: &str) -> Option<String> {
        let table = self
            .resolver
            .resolve_table(logical)
            .filter(|table| !table.is_empty());
        if table.is_none() {
            warn!(table = logical, "table is not mapped to a physical table name");
        }
        table
    }

    fn physical_table(&self, logical: &str) -> String {
        self.resolve(logical).unwrap_or_default()
    }
}
