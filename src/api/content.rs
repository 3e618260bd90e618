//! Response content normalization
//!
//! Handlers hand the helpers plain JSON, keyed collections or their own
//! resource types. Everything is reduced to a single JSON value before any
//! emptiness check happens.

use serde_json::{Map, Value};

/// Convertible to a plain ordered mapping
pub trait Arrayable {
    fn to_array(&self) -> Map<String, Value>;
}

/// Convertible straight to a JSON value (object or sequence)
pub trait JsonSerializable {
    fn json_serialize(&self) -> Value;
}

impl Arrayable for Map<String, Value> {
    fn to_array(&self) -> Map<String, Value> {
        self.clone()
    }
}

impl<T: JsonSerializable> JsonSerializable for Vec<T> {
    fn json_serialize(&self) -> Value {
        Value::Array(self.iter().map(JsonSerializable::json_serialize).collect())
    }
}

/// Input accepted by the content-carrying helpers
#[derive(Clone, Copy)]
pub enum Content<'a> {
    /// Nothing was supplied
    Absent,
    /// Already a JSON value
    Plain(&'a Value),
    Arrayable(&'a dyn Arrayable),
    Serializable(&'a dyn JsonSerializable),
}

impl<'a> Content<'a> {
    pub fn arrayable(value: &'a impl Arrayable) -> Self {
        Self::Arrayable(value)
    }

    pub fn serializable(value: &'a impl JsonSerializable) -> Self {
        Self::Serializable(value)
    }

    /// Convert to a JSON value; `None` when nothing (or `null`) was supplied
    pub fn normalize(self) -> Option<Value> {
        let value = match self {
            Self::Absent => return None,
            Self::Plain(value) => value.clone(),
            Self::Arrayable(value) => Value::Object(value.to_array()),
            Self::Serializable(value) => value.json_serialize(),
        };

        match value {
            Value::Null => None,
            value => Some(value),
        }
    }
}

impl<'a> From<&'a Value> for Content<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Plain(value)
    }
}

impl<'a, T> From<Option<T>> for Content<'a>
where
    T: Into<Content<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl From<()> for Content<'_> {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

/// A mapping or sequence with no entries
///
/// Scalars are never empty, including `false`, `0` and `""`.
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct UserResource {
        name: &'static str,
        age: u32,
    }

    impl JsonSerializable for UserResource {
        fn json_serialize(&self) -> Value {
            json!({ "nameAndAge": format!("{} & {}", self.name, self.age) })
        }
    }

    struct Nothing;

    impl JsonSerializable for Nothing {
        fn json_serialize(&self) -> Value {
            Value::Null
        }
    }

    #[test]
    fn test_absent_and_null() {
        assert_eq!(Content::Absent.normalize(), None);
        assert_eq!(Content::from(()).normalize(), None);
        assert_eq!(Content::from(&Value::Null).normalize(), None);
        assert_eq!(Content::from(None::<&Value>).normalize(), None);
        assert_eq!(Content::serializable(&Nothing).normalize(), None);
    }

    #[test]
    fn test_plain_passes_through() {
        let value = json!({"id": 123});
        assert_eq!(Content::from(&value).normalize(), Some(json!({"id": 123})));
        assert_eq!(Content::from(Some(&value)).normalize(), Some(json!({"id": 123})));
    }

    #[test]
    fn test_arrayable_converted() {
        let mut collection = Map::new();
        collection.insert("super".to_string(), json!("response"));
        collection.insert("yes".to_string(), json!(123));

        let normalized = Content::arrayable(&collection).normalize().unwrap();
        assert_eq!(normalized.to_string(), r#"{"super":"response","yes":123}"#);
    }

    #[test]
    fn test_serializable_collection_becomes_sequence() {
        let users = vec![
            UserResource { name: "Ada", age: 36 },
            UserResource { name: "Alan", age: 41 },
        ];
        assert_eq!(
            Content::serializable(&users).normalize(),
            Some(json!([{"nameAndAge": "Ada & 36"}, {"nameAndAge": "Alan & 41"}]))
        );
    }

    #[test]
    fn test_empty_collection_is_empty_sequence() {
        let users: Vec<UserResource> = Vec::new();
        let normalized = Content::serializable(&users).normalize().unwrap();
        assert_eq!(normalized, json!([]));
        assert!(is_empty_container(&normalized));
    }

    #[test]
    fn test_is_empty_container() {
        assert!(is_empty_container(&json!({})));
        assert!(is_empty_container(&json!([])));
        assert!(!is_empty_container(&json!({"a": 1})));
        assert!(!is_empty_container(&json!([0])));
        assert!(!is_empty_container(&json!(false)));
        assert!(!is_empty_container(&json!(0)));
        assert!(!is_empty_container(&json!("")));
    }
}
