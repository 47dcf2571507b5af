//! Arguments accepted by the [`super::QueryBuilder`] configuration calls.
//!
//! Tables are always given as logical identifiers; the builder resolves them.

use crate::query::{Aggregation, Combinator, Comparison, ConditionValue, JoinKind, OrderDirection};

/// One or more column names to select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columns {
    One(String),
    Many(Vec<String>),
}

impl Columns {
    /// Returns whether there is nothing to select.
    pub fn is_empty(&self) -> bool {
        match self {
            Columns::One(column) => column.is_empty(),
            Columns::Many(columns) => columns.is_empty(),
        }
    }

    /// Converts the columns into a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Columns::One(column) => vec![column],
            Columns::Many(columns) => columns,
        }
    }
}

impl From<&str> for Columns {
    fn from(column: &str) -> Self {
        Columns::One(column.to_string())
    }
}

impl From<String> for Columns {
    fn from(column: String) -> Self {
        Columns::One(column)
    }
}

impl From<Vec<String>> for Columns {
    fn from(columns: Vec<String>) -> Self {
        Columns::Many(columns)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(columns: Vec<&str>) -> Self {
        Columns::Many(columns.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(columns: [&str; N]) -> Self {
        Columns::Many(columns.into_iter().map(str::to_string).collect())
    }
}

/// Arguments of [`super::QueryBuilder::add_select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectArgs {
    pub columns: Columns,
    pub table_name: String,
    pub alias: Option<String>,
    pub agg: Option<Aggregation>,
}

impl SelectArgs {
    /// Selects `columns` from the logical table `table`.
    pub fn new(table: impl AsRef<str>, columns: impl Into<Columns>) -> Self {
        Self {
            columns: columns.into(),
            table_name: table.as_ref().to_string(),
            alias: None,
            agg: None,
        }
    }

    /// Sets the alias of the selected columns.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the aggregation applied to the selected columns.
    pub fn agg(mut self, agg: Aggregation) -> Self {
        self.agg = Some(agg);
        self
    }
}

/// Value of a where clause: a single value or a list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhereValue {
    One(ConditionValue),
    Many(Vec<ConditionValue>),
}

impl WhereValue {
    /// Returns whether the value is empty text, `false` or an empty list.
    ///
    /// A `false` boolean is therefore never expressible as a filter value.
    pub fn is_falsy(&self) -> bool {
        match self {
            WhereValue::One(value) => value.is_falsy(),
            WhereValue::Many(values) => values.is_empty(),
        }
    }
}

impl From<ConditionValue> for WhereValue {
    fn from(value: ConditionValue) -> Self {
        WhereValue::One(value)
    }
}

impl From<&str> for WhereValue {
    fn from(value: &str) -> Self {
        WhereValue::One(value.into())
    }
}

impl From<String> for WhereValue {
    fn from(value: String) -> Self {
        WhereValue::One(value.into())
    }
}

impl From<bool> for WhereValue {
    fn from(value: bool) -> Self {
        WhereValue::One(value.into())
    }
}

impl From<Vec<String>> for WhereValue {
    fn from(values: Vec<String>) -> Self {
        WhereValue::Many(values.into_iter().map(ConditionValue::from).collect())
    }
}

impl From<Vec<&str>> for WhereValue {
    fn from(values: Vec<&str>) -> Self {
        WhereValue::Many(values.into_iter().map(ConditionValue::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for WhereValue {
    fn from(values: [&str; N]) -> Self {
        WhereValue::Many(values.into_iter().map(ConditionValue::from).collect())
    }
}

/// Arguments of [`super::QueryBuilder::add_where`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereArgs {
    pub value: WhereValue,
    pub column_name: String,
    pub combinator: Option<Combinator>,
    pub comparison: Option<Comparison>,
    /// Logical table of the column; the primary table is used when unset or unresolved.
    pub table_name: Option<String>,
}

impl WhereArgs {
    /// Filters `column` against `value`.
    pub fn new(column: impl Into<String>, value: impl Into<WhereValue>) -> Self {
        Self {
            value: value.into(),
            column_name: column.into(),
            combinator: None,
            comparison: None,
            table_name: None,
        }
    }

    /// Sets the combinator of the resulting group.
    pub fn combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = Some(combinator);
        self
    }

    /// Sets the comparison operator.
    pub fn comparison(mut self, comparison: Comparison) -> Self {
        self.comparison = Some(comparison);
        self
    }

    /// Sets the logical table the column belongs to.
    pub fn table(mut self, table: impl AsRef<str>) -> Self {
        self.table_name = Some(table.as_ref().to_string());
        self
    }
}

/// Arguments of [`super::QueryBuilder::add_join`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinArgs {
    pub primary_table_name: String,
    pub secondary_table_name: String,
    pub join_column: String,
    pub secondary_join_column: Option<String>,
    pub type_of_join: Option<JoinKind>,
}

impl JoinArgs {
    /// Joins the logical tables `primary` and `secondary` on `join_column`.
    pub fn new(
        primary: impl AsRef<str>,
        secondary: impl AsRef<str>,
        join_column: impl Into<String>,
    ) -> Self {
        Self {
            primary_table_name: primary.as_ref().to_string(),
            secondary_table_name: secondary.as_ref().to_string(),
            join_column: join_column.into(),
            secondary_join_column: None,
            type_of_join: None,
        }
    }

    /// Sets the join column of the secondary table, when it differs from the primary one.
    pub fn secondary_join_column(mut self, column: impl Into<String>) -> Self {
        self.secondary_join_column = Some(column.into());
        self
    }

    /// Sets the kind of join.
    pub fn type_of_join(mut self, kind: JoinKind) -> Self {
        self.type_of_join = Some(kind);
        self
    }
}

/// Arguments of [`super::QueryBuilder::add_order_by`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByArgs {
    pub column_name: String,
    pub table_name: String,
    pub order_direction: Option<OrderDirection>,
}

impl OrderByArgs {
    /// Orders by `column` of the logical table `table`.
    pub fn new(table: impl AsRef<str>, column: impl Into<String>) -> Self {
        Self {
            column_name: column.into(),
            table_name: table.as_ref().to_string(),
            order_direction: None,
        }
    }

    /// Sets the sort direction.
    pub fn direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = Some(direction);
        self
    }
}

/// Arguments of [`super::QueryBuilder::add_group_by`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupByArgs {
    pub column_name: String,
    pub table_name: String,
}

impl GroupByArgs {
    /// Groups by `column` of the logical table `table`.
    pub fn new(table: impl AsRef<str>, column: impl Into<String>) -> Self {
        Self {
            column_name: column.into(),
            table_name: table.as_ref().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::tests::Tables;

    #[test]
    fn test_should_tell_empty_columns() {
        assert!(Columns::from("").is_empty());
        assert!(Columns::from(Vec::<String>::new()).is_empty());
        assert!(!Columns::from("id").is_empty());
        assert_eq!(Columns::from(["id", "name"]).into_vec(), vec!["id", "name"]);
    }

    #[test]
    fn test_should_tell_falsy_where_values() {
        assert!(WhereValue::from("").is_falsy());
        assert!(WhereValue::from(false).is_falsy());
        assert!(WhereValue::from(Vec::<String>::new()).is_falsy());
        assert!(!WhereValue::from(true).is_falsy());
        assert!(!WhereValue::from(vec![""]).is_falsy());
    }

    #[test]
    fn test_should_build_args_with_optional_fields() {
        let select = SelectArgs::new(Tables::Orders, "amount")
            .alias("total")
            .agg(Aggregation::Sum);
        assert_eq!(select.table_name, "Orders");
        assert_eq!(select.alias.as_deref(), Some("total"));
        assert_eq!(select.agg, Some(Aggregation::Sum));

        let filter = WhereArgs::new("status", "paid")
            .table(Tables::Orders)
            .combinator(Combinator::Or)
            .comparison(Comparison::NotEqual);
        assert_eq!(filter.table_name.as_deref(), Some("Orders"));
        assert_eq!(filter.combinator, Some(Combinator::Or));
        assert_eq!(filter.comparison, Some(Comparison::NotEqual));

        let join = JoinArgs::new(Tables::Users, Tables::Orders, "id")
            .secondary_join_column("user_id")
            .type_of_join(JoinKind::LeftOuter);
        assert_eq!(join.primary_table_name, "Users");
        assert_eq!(join.secondary_table_name, "Orders");
        assert_eq!(join.secondary_join_column.as_deref(), Some("user_id"));

        let order = OrderByArgs::new(Tables::Users, "name").direction(OrderDirection::Ascending);
        assert_eq!(order.order_direction, Some(OrderDirection::Ascending));
    }
}
