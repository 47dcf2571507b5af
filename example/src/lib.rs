//! Example consumer of `gambit-api`.
//!
//! It owns the closed set of logical tables and the configuration mapping them to the physical
//! tables, and exposes a couple of ready-made queries.

use gambit_api::prelude::*;

/// Configuration shipped with the application.
const CONFIG: &str = r#"{
    "gambitTable": {
        "Customers": "crm_customers_v2",
        "Orders": "sales_orders",
        "OrderItems": "sales_order_items"
    }
}"#;

/// Logical tables known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tables {
    Customers,
    Orders,
    OrderItems,
}

impl AsRef<str> for Tables {
    fn as_ref(&self) -> &str {
        match self {
            Tables::Customers => "Customers",
            Tables::Orders => "Orders",
            Tables::OrderItems => "OrderItems",
        }
    }
}

/// Filters accepted by [`orders_query`]. Unset filters are simply not applied.
#[derive(Debug, Default, Clone)]
pub struct OrderFilters {
    pub countries: Vec<String>,
    pub status: Option<String>,
    pub min_amount: Option<String>,
}

/// Creates a [`QueryBuilder`] backed by the shipped configuration.
pub fn builder() -> GambitResult<QueryBuilder<NamespacedResolver<TableConfig>>> {
    let config = TableConfig::from_json_str(CONFIG)?;
    Ok(QueryBuilder::new(NamespacedResolver::new(config)))
}

/// Lists the orders of the customers matching `filters`, newest first.
pub fn orders_query(filters: &OrderFilters, limit: u64) -> GambitResult<QueryBody> {
    let mut builder = builder()?;
    builder
        .set_table(Tables::Orders)
        .add_select(SelectArgs::new(Tables::Orders, ["id", "status", "amount"]))
        .add_select(SelectArgs::new(Tables::Customers, "name").alias("customer"))
        .add_join(
            JoinArgs::new(Tables::Orders, Tables::Customers, "customer_id")
                .secondary_join_column("id"),
        )
        .add_where(WhereArgs::new("country", filters.countries.clone()).table(Tables::Customers))
        .add_where(WhereArgs::new(
            "status",
            filters.status.clone().unwrap_or_default(),
        ))
        .add_where(
            WhereArgs::new("amount", filters.min_amount.clone().unwrap_or_default())
                .comparison(Comparison::GreaterThan),
        )
        .add_order_by(
            OrderByArgs::new(Tables::Orders, "created_at").direction(OrderDirection::Descending),
        )
        .set_limit(limit);

    Ok(builder.build()?)
}

/// Sums the ordered quantity of every product.
pub fn sold_quantity_query() -> GambitResult<QueryBody> {
    let mut builder = builder()?;
    builder
        .set_table(Tables::OrderItems)
        .add_select(SelectArgs::new(Tables::OrderItems, "product_id"))
        .add_select(
            SelectArgs::new(Tables::OrderItems, "quantity")
                .alias("sold")
                .agg(Aggregation::Sum),
        )
        .add_group_by(GroupByArgs::new(Tables::OrderItems, "product_id"));

    Ok(builder.build()?)
}
