use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default)]
/// Decoded JSON body returned by Termii, passed through without interpretation.
///
/// Termii does not document a stable schema for most endpoints, so nothing here assumes a
/// field is present. Object key order is preserved as received.
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level key. Returns `None` when the body is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ApiResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<ApiResponse> for Value {
    fn from(value: ApiResponse) -> Self {
        value.0
    }
}

impl PartialEq<Value> for ApiResponse {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}
