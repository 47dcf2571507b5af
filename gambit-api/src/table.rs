//! Translation of logical table identifiers into physical table names.

use crate::config::{ConfigStore, TABLE_NAMESPACE};

/// This trait defines the behavior of a table resolver, which maps the logical table identifiers
/// used by callers to the physical table names understood by the query-execution layer.
pub trait TableResolver {
    /// Resolves the logical table identifier.
    ///
    /// # Returns
    ///
    /// The physical table name, or [`None`] if the identifier is not mapped.
    fn resolve_table(&self, logical: &str) -> Option<String>;
}

impl<F> TableResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_table(&self, logical: &str) -> Option<String> {
        self(logical)
    }
}

/// A [`TableResolver`] looking up `"<namespace>.<logical>"` keys in a [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct NamespacedResolver<C>
where
    C: ConfigStore,
{
    store: C,
    namespace: String,
}

impl<C> NamespacedResolver<C>
where
    C: ConfigStore,
{
    /// Creates a resolver looking up tables in the [`TABLE_NAMESPACE`] namespace.
    pub fn new(store: C) -> Self {
        Self::with_namespace(store, TABLE_NAMESPACE)
    }

    /// Creates a resolver looking up tables in a custom namespace.
    pub fn with_namespace(store: C, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Returns the namespace used for lookups.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the underlying [`ConfigStore`].
    pub fn store(&self) -> &C {
        &self.store
    }
}

impl<C> TableResolver for NamespacedResolver<C>
where
    C: ConfigStore,
{
    fn resolve_table(&self, logical: &str) -> Option<String> {
        self.store.get(&format!("{}.{logical}", self.namespace))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::config::TableConfig;
    use crate::tests::{Tables, table_config};

    #[test]
    fn test_should_resolve_through_namespace() {
        let resolver = NamespacedResolver::new(table_config());
        assert_eq!(resolver.namespace(), TABLE_NAMESPACE);
        assert_eq!(
            resolver.resolve_table(Tables::Users.as_ref()).as_deref(),
            Some("tbl_users")
        );
        assert!(resolver.resolve_table(Tables::Unmapped.as_ref()).is_none());
    }

    #[test]
    fn test_should_resolve_with_custom_namespace() {
        let mut config = TableConfig::new();
        config.insert("legacyTable", "Users", "legacy_users");

        let resolver = NamespacedResolver::with_namespace(&config, "legacyTable");
        assert_eq!(
            resolver.resolve_table("Users").as_deref(),
            Some("legacy_users")
        );
        assert!(
            NamespacedResolver::new(&config)
                .resolve_table("Users")
                .is_none()
        );
    }

    #[test]
    fn test_should_resolve_with_closure() {
        let resolver = |logical: &str| (logical == "Users").then(|| "people".to_string());
        assert_eq!(resolver.resolve_table("Users").as_deref(), Some("people"));
        assert!(resolver.resolve_table("Orders").is_none());
    }
}
