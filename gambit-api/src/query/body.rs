use std::fmt;

use candid::CandidType;
use serde::de::{self, EnumAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::GambitResult;
use crate::query::{Aggregation, ColumnRef, Combinator, Comparison, JoinKind, OrderDirection};

/// Row cap applied when the limit is never set.
pub const DEFAULT_LIMIT: u64 = 100;

/// The declarative query body consumed by the Gambit query-execution layer.
///
/// Field names and nesting are part of the wire contract: the optional arrays are omitted
/// until the first entry is pushed into them.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct QueryBody {
    /// Physical name of the primary table.
    #[serde(rename = "tableName")]
    pub table_name: String,
    /// Columns to select.
    #[serde(rename = "selectArgs")]
    pub select_args: Vec<SelectArg>,
    /// Maximum number of rows to return.
    #[serde(rename = "limitArgs")]
    pub limit_args: u64,
    /// Condition groups; conditions in a group are joined by the group combinator.
    #[serde(
        rename = "whereArgs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub where_args: Option<Vec<WhereGroup>>,
    /// Joins with other tables.
    #[serde(rename = "joinArgs", default, skip_serializing_if = "Option::is_none")]
    pub join_args: Option<Vec<JoinArg>>,
    /// Order by clauses, applied in order.
    #[serde(
        rename = "orderByArgs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_by_args: Option<Vec<OrderByArg>>,
    /// Columns to group by.
    #[serde(
        rename = "groupByArgs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub group_by_args: Option<Vec<ColumnRef>>,
}

impl Default for QueryBody {
    fn default() -> Self {
        Self {
            table_name: String::new(),
            select_args: Vec::new(),
            limit_args: DEFAULT_LIMIT,
            where_args: None,
            join_args: None,
            order_by_args: None,
            group_by_args: None,
        }
    }
}

impl QueryBody {
    /// Renders the body as a JSON document.
    pub fn to_json(&self) -> GambitResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the body as a [`serde_json::Value`].
    pub fn to_json_value(&self) -> GambitResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parses a body previously rendered with [`QueryBody::to_json`].
    pub fn from_json(json: &str) -> GambitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A selected column, optionally aliased and aggregated.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct SelectArg {
    #[serde(rename = "columnName")]
    pub column_name: ColumnRef,
    #[serde(rename = "Alias", default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(rename = "Agg", default, skip_serializing_if = "Option::is_none")]
    pub agg: Option<Aggregation>,
}

impl SelectArg {
    /// Selects every column of `table`.
    pub fn wildcard(table: impl Into<String>) -> Self {
        Self {
            column_name: ColumnRef::wildcard(table),
            alias: None,
            agg: None,
        }
    }
}

/// A group of conditions joined by a single [`Combinator`].
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct WhereGroup {
    pub conditions: Vec<Condition>,
    #[serde(rename = "type")]
    pub combinator: Combinator,
}

/// A single comparison between a column and a value.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "columnName")]
    pub column_name: ColumnRef,
    pub value: ConditionValue,
    pub comparison: Comparison,
}

/// Value compared in a [`Condition`].
///
/// It is a plain string or boolean in JSON and a `Text`/`Bool` variant in Candid; both forms
/// are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, CandidType, Serialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Text(String),
    Bool(bool),
}

impl<'de> Deserialize<'de> for ConditionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ConditionValueVisitor)
    }
}

#[derive(Deserialize)]
enum ConditionValueTag {
    Text,
    Bool,
}

struct ConditionValueVisitor;

impl<'de> Visitor<'de> for ConditionValueVisitor {
    type Value = ConditionValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a boolean or a Text/Bool variant")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ConditionValue::Bool(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ConditionValue::Text(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ConditionValue::Text(value))
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        match data.variant()? {
            (ConditionValueTag::Text, variant) => {
                variant.newtype_variant().map(ConditionValue::Text)
            }
            (ConditionValueTag::Bool, variant) => {
                variant.newtype_variant().map(ConditionValue::Bool)
            }
        }
    }
}

impl ConditionValue {
    /// Returns whether the value is empty text or `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            ConditionValue::Text(text) => text.is_empty(),
            ConditionValue::Bool(value) => !value,
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Text(text) => write!(f, "{text}"),
            ConditionValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        ConditionValue::Text(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        ConditionValue::Text(value)
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        ConditionValue::Bool(value)
    }
}

/// One side of a join.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct JoinSide {
    #[serde(rename = "tableName")]
    pub table_name: String,
    #[serde(rename = "joinColumn")]
    pub join_column: String,
}

/// A join between the master and the slave table.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct JoinArg {
    pub master: JoinSide,
    pub slave: JoinSide,
    #[serde(rename = "typeOfJoin")]
    pub type_of_join: JoinKind,
}

/// An order by clause.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct OrderByArg {
    #[serde(rename = "columnName")]
    pub column_name: ColumnRef,
    #[serde(
        rename = "orderDirection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_direction: Option<OrderDirection>,
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_build_default_body() {
        let body = QueryBody::default();
        assert!(body.table_name.is_empty());
        assert!(body.select_args.is_empty());
        assert_eq!(body.limit_args, DEFAULT_LIMIT);
        assert!(body.where_args.is_none());
        assert!(body.join_args.is_none());
        assert!(body.order_by_args.is_none());
        assert!(body.group_by_args.is_none());
    }

    #[test]
    fn test_should_omit_unset_arrays() {
        let body = QueryBody {
            table_name: "tbl_users".to_string(),
            select_args: vec![SelectArg::wildcard("tbl_users")],
            ..Default::default()
        };

        assert_eq!(
            body.to_json_value().unwrap(),
            serde_json::json!({
                "tableName": "tbl_users",
                "selectArgs": [{ "columnName": { "tbl_users": "*" } }],
                "limitArgs": 100
            })
        );
    }

    #[test]
    fn test_should_serialize_optional_select_fields() {
        let select = SelectArg {
            column_name: ColumnRef::new("tbl_orders", "amount"),
            alias: Some("total".to_string()),
            agg: Some(Aggregation::Sum),
        };

        assert_eq!(
            serde_json::to_value(&select).unwrap(),
            serde_json::json!({
                "columnName": { "tbl_orders": "amount" },
                "Alias": "total",
                "Agg": "SUM"
            })
        );
    }

    #[test]
    fn test_should_serialize_condition_values_untagged() {
        let condition = Condition {
            column_name: ColumnRef::new("tbl_users", "active"),
            value: ConditionValue::Bool(true),
            comparison: Comparison::Equal,
        };

        assert_eq!(
            serde_json::to_value(&condition).unwrap(),
            serde_json::json!({
                "columnName": { "tbl_users": "active" },
                "value": true,
                "comparison": "eq"
            })
        );
    }

    #[test]
    fn test_should_deserialize_condition_values() {
        let text: ConditionValue = serde_json::from_str(r#""IT""#).unwrap();
        assert_eq!(text, ConditionValue::from("IT"));
        let flag: ConditionValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, ConditionValue::Bool(true));
        assert!(serde_json::from_str::<ConditionValue>("42").is_err());
    }

    #[test]
    fn test_should_candid_encode_decode_condition_value() {
        for src in [ConditionValue::from("John"), ConditionValue::Bool(true)] {
            let buf = candid::encode_one(&src).expect("Candid encoding failed");
            let decoded: ConditionValue =
                candid::decode_one(&buf).expect("Candid decoding failed");
            assert_eq!(src, decoded);
        }
    }

    #[test]
    fn test_should_tell_falsy_values() {
        assert!(ConditionValue::from("").is_falsy());
        assert!(ConditionValue::from(false).is_falsy());
        assert!(!ConditionValue::from("0").is_falsy());
        assert!(!ConditionValue::from(true).is_falsy());
    }

    #[test]
    fn test_should_parse_body_from_json() {
        let json = r#"{
            "tableName": "tbl_users",
            "selectArgs": [{ "columnName": { "tbl_users": "id" }, "Alias": "user_id" }],
            "limitArgs": 5,
            "whereArgs": [{
                "conditions": [{
                    "columnName": { "tbl_users": "name" },
                    "value": "Bob",
                    "comparison": "neq"
                }],
                "type": "OR"
            }],
            "joinArgs": [{
                "master": { "tableName": "tbl_users", "joinColumn": "id" },
                "slave": { "tableName": "tbl_orders", "joinColumn": "user_id" },
                "typeOfJoin": "LEFT OUTER"
            }]
        }"#;

        let body = QueryBody::from_json(json).expect("should parse body");
        assert_eq!(body.limit_args, 5);
        assert_eq!(body.select_args[0].alias.as_deref(), Some("user_id"));
        let groups = body.where_args.as_ref().expect("should have where args");
        assert_eq!(groups[0].combinator, Combinator::Or);
        assert_eq!(groups[0].conditions[0].comparison, Comparison::NotEqual);
        let joins = body.join_args.as_ref().expect("should have join args");
        assert_eq!(joins[0].type_of_join, JoinKind::LeftOuter);
        assert_eq!(joins[0].slave.join_column, "user_id");
        assert!(body.order_by_args.is_none());
        assert!(body.group_by_args.is_none());
    }

    #[test]
    fn test_should_candid_encode_decode_select() {
        let src = SelectArg {
            column_name: ColumnRef::new("tbl_orders", "id"),
            alias: None,
            agg: Some(Aggregation::Count),
        };
        let buf = candid::encode_one(&src).expect("Candid encoding failed");
        let decoded: SelectArg = candid::decode_one(&buf).expect("Candid decoding failed");
        assert_eq!(src, decoded);
    }
}
