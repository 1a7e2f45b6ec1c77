/// Login credentials submitted by the client.
///
/// Both fields default to empty so an absent field and an empty field take
/// the same rejection path.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Parse a raw request body. Malformed JSON or a non-object body is
    /// treated the same as missing fields; it never aborts the request.
    ///
    /// Only a JSON object counts as credentials. Serde would otherwise fill
    /// the fields positionally from an array body.
    pub fn from_body(raw: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(raw) {
            Ok(value) if value.is_object() => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
