//! Primitive types shared by every resource.
//!
//! [`Param`] carries the three states an optional request field can be in,
//! [`Ref`] is the provider's reference to another resource, and
//! [`ApiVersion`] is the value of the `Ngrok-Version` header.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An optional request field.
///
/// Request bodies distinguish between a field that was never configured
/// (omitted from the JSON entirely), a field that was explicitly cleared
/// (sent as `null`) and a field with a value.
///
/// Struct fields of this type should be annotated with
/// `#[serde(default, skip_serializing_if = "Param::is_unset")]`.
///
/// # Example
///
/// ```
/// use ngrok_api_rs::models::Param;
///
/// let description: Param<String> = Param::Value("ssh for ops".into());
/// assert!(description.is_set());
/// assert!(Param::<String>::Unset.is_unset());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param<T> {
    /// Not configured; omitted from the request.
    Unset,
    /// Explicitly cleared; serialized as `null`.
    Null,
    /// Explicit value.
    Value(T),
}

impl<T> Param<T> {
    /// Returns `true` if the field was never configured.
    pub fn is_unset(&self) -> bool {
        matches!(self, Param::Unset)
    }

    /// Returns `true` if the field was configured, either with a value or as `null`.
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// Borrow the explicit value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Param::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Map the explicit value, keeping `Unset` and `Null` as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Param<U> {
        match self {
            Param::Unset => Param::Unset,
            Param::Null => Param::Null,
            Param::Value(v) => Param::Value(f(v)),
        }
    }
}

impl<T> Default for Param<T> {
    fn default() -> Self {
        Param::Unset
    }
}

impl<T> From<Option<T>> for Param<T> {
    /// `None` clears the field; `Some` sets it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Param::Value(v),
            None => Param::Null,
        }
    }
}

impl<T: Serialize> Serialize for Param<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Param::Value(v) => v.serialize(serializer),
            Param::Unset | Param::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Param<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Param::from)
    }
}

/// Helper to deserialize fields the API may send as `null` instead of empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    /// a resource identifier
    pub id: String,
    /// a uri for locating a resource
    pub uri: String,
}

/// Value of the `Ngrok-Version` header sent with every request.
///
/// The management API is versioned with a small integer; version `2` is the
/// current one and the default.
///
/// # Example
///
/// ```
/// use ngrok_api_rs::ApiVersion;
///
/// let version = ApiVersion::new("2").expect("valid version");
/// assert_eq!(version.as_str(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is not a non-empty string of digits.
    pub fn new(version: &str) -> crate::Result<Self> {
        if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::Error::InvalidInput(format!(
                "Invalid API version format: {version}. Expected a number"
            )));
        }

        Ok(ApiVersion(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion("2".to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Body {
        #[serde(default, skip_serializing_if = "Param::is_unset")]
        description: Param<String>,
        #[serde(default, skip_serializing_if = "Param::is_unset")]
        metadata: Param<String>,
        #[serde(default, skip_serializing_if = "Param::is_unset")]
        acl: Param<Vec<String>>,
    }

    #[test]
    fn test_param_serialization_keeps_three_states() {
        let body = Body {
            description: Param::Value("prod".into()),
            metadata: Param::Null,
            acl: Param::Unset,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"description": "prod", "metadata": null}));
        assert!(value.get("acl").is_none());
    }

    #[test]
    fn test_param_deserialization() {
        let body: Body =
            serde_json::from_value(json!({"metadata": null, "acl": ["bind:*.example.com"]}))
                .unwrap();

        assert_eq!(body.description, Param::Unset);
        assert_eq!(body.metadata, Param::Null);
        assert_eq!(body.acl, Param::Value(vec!["bind:*.example.com".to_string()]));
    }

    #[test]
    fn test_param_from_option() {
        assert_eq!(Param::from(Some(3)), Param::Value(3));
        assert_eq!(Param::<i32>::from(None), Param::Null);
        assert_eq!(Param::Value(2).map(|v| v * 2).value(), Some(&4));
    }

    #[test]
    fn test_api_version() {
        assert_eq!(ApiVersion::default().as_str(), "2");
        assert!(ApiVersion::new("3").is_ok());
        assert!(ApiVersion::new("").is_err());
        assert!(ApiVersion::new("v2").is_err());
    }
}
