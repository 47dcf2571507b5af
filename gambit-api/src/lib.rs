#![crate_name = "gambit_api"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Gambit API
//!
//! This crate exposes the [`query::QueryBuilder`], a fluent builder which assembles a declarative
//! [`query::QueryBody`] (table, columns, filters, joins, ordering, grouping and limit) to be handed
//! to a Gambit query-execution layer.
//!
//! Logical table identifiers are translated to physical table names through a
//! [`table::TableResolver`], usually a [`config::TableConfig`] loaded from the application
//! configuration.
//!
//! ```rust
//! use gambit_api::prelude::*;
//!
//! let config = TableConfig::from_json_str(r#"{ "gambitTable": { "Users": "tbl_users" } }"#)
//!     .expect("valid config");
//! let mut builder = QueryBuilder::new(NamespacedResolver::new(config));
//! let body = builder
//!     .set_table("Users")
//!     .add_where(WhereArgs::new("country", "IT"))
//!     .set_limit(10)
//!     .build()
//!     .expect("table is set");
//!
//! assert_eq!(body.table_name, "tbl_users");
//! assert_eq!(body.limit_args, 10);
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

pub mod config;
mod error;
pub mod prelude;
pub mod query;
pub mod table;
#[cfg(test)]
mod tests;

pub use self::error::{GambitError, GambitResult};
