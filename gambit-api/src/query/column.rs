use std::fmt;

use candid::CandidType;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference to a column of a physical table.
///
/// On the wire it is a single-key mapping `{ <table>: <column> }`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    /// Creates a new [`ColumnRef`].
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a reference to all the columns (`*`) of `table`.
    pub fn wildcard(table: impl Into<String>) -> Self {
        Self::new(table, "*")
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

impl Serialize for ColumnRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.table, &self.column)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ColumnRefVisitor)
    }
}

struct ColumnRefVisitor;

impl<'de> Visitor<'de> for ColumnRefVisitor {
    type Value = ColumnRef;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with exactly one table-to-column entry")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((table, column)) = map.next_entry::<String, String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };
        if map.next_entry::<String, String>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }

        Ok(ColumnRef { table, column })
    }
}

impl CandidType for ColumnRef {
    fn _ty() -> candid::types::Type {
        <Vec<(String, String)> as CandidType>::ty()
    }

    fn idl_serialize<S>(&self, serializer: S) -> Result<(), S::Error>
    where
        S: candid::types::Serializer,
    {
        vec![(self.table.clone(), self.column.clone())].idl_serialize(serializer)
    }
}
