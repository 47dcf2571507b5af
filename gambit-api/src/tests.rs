use crate::config::TableConfig;
use crate::table::NamespacedResolver;

/// Logical tables used in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tables {
    Users,
    Orders,
    Products,
    /// Not present in [`table_config`].
    Unmapped,
}

impl AsRef<str> for Tables {
    fn as_ref(&self) -> &str {
        match self {
            Tables::Users => "Users",
            Tables::Orders => "Orders",
            Tables::Products => "Products",
            Tables::Unmapped => "Unmapped",
        }
    }
}

pub fn table_config() -> TableConfig {
    TableConfig::from_json_str(
        r#"{
            "gambitTable": {
                "Users": "tbl_users",
                "Orders": "tbl_orders",
                "Products": "tbl_products"
            }
        }"#,
    )
    .expect("test config should be valid")
}

pub fn resolver() -> NamespacedResolver<TableConfig> {
    NamespacedResolver::new(table_config())
}
