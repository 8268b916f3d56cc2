use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Verified token payload.
///
/// Only produced by `TokenVerifier`, so holding a `Claims` means signature,
/// `exp`, `aud` and `iss` were already checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// The `permissions` claim, or `None` when it is absent or not a list.
    ///
    /// Non-string entries are skipped.
    pub fn permissions(&self) -> Option<Vec<&str>> {
        match self.0.get("permissions") {
            Some(Value::Array(items)) => Some(items.iter().filter_map(Value::as_str).collect()),
            _ => None,
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}
