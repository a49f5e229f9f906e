//! Column decoders for loosely typed backend rows
//!
//! The backend sends every column on every row, with `null` for unset
//! values, and older rows carry columns of the wrong type. These helpers are
//! used through `#[serde(deserialize_with = ...)]` so that one bad column
//! degrades to a default instead of failing the whole row.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a column, treating `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a column, treating `null` and any value of the wrong type as absent
pub(crate) fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a column, treating `null` and any value of the wrong type as the default
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(or_none(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,

        #[serde(default, deserialize_with = "or_none")]
        count: Option<u32>,

        #[serde(default, deserialize_with = "or_default")]
        order: i64,
    }

    #[test]
    fn test_null_and_missing_columns() {
        let row: Row =
            serde_json::from_str(r#"{"label": null, "count": null, "order": null}"#).unwrap();
        assert_eq!(row.label, "");
        assert_eq!(row.count, None);
        assert_eq!(row.order, 0);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.label, "");
        assert_eq!(row.count, None);
    }

    #[test]
    fn test_wrong_type_degrades() {
        let row: Row =
            serde_json::from_str(r#"{"label": "x", "count": -1, "order": "first"}"#).unwrap();
        assert_eq!(row.label, "x");
        assert_eq!(row.count, None);
        assert_eq!(row.order, 0);

        let row: Row = serde_json::from_str(r#"{"count": 3, "order": 2}"#).unwrap();
        assert_eq!(row.count, Some(3));
        assert_eq!(row.order, 2);
    }

    #[test]
    fn test_null_as_default_still_rejects_wrong_type() {
        assert!(serde_json::from_str::<Row>(r#"{"label": 5}"#).is_err());
    }
}
