use crate::model::Bookmark;
use crate::sanitize::escape_html;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request body for both create and partial update. Fields stay untyped so that
/// wrong-typed or falsy values go through the same presence rules as missing ones.
#[derive(Debug, Deserialize, Default)]
pub struct BookmarkPayload {
    pub title: Option<JsonValue>,
    pub url: Option<JsonValue>,
    pub description: Option<JsonValue>,
    pub rating: Option<JsonValue>,
}

/// `null`, `false`, `0` and `""` count as not supplied.
pub fn supplied(value: Option<JsonValue>) -> Option<JsonValue> {
    value.filter(|v| match v {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    })
}

/// Strings as-is; any other value as its JSON text.
pub fn text_value(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}

/// Finite numeric value of a rating given as a JSON number or numeric string.
pub fn rating_value(value: &JsonValue) -> Option<f64> {
    let n = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// A bookmark as returned to clients, with free text escaped.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub rating: f64,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        BookmarkResponse {
            id: bookmark.id,
            title: escape_html(&bookmark.title),
            url: bookmark.url.clone(),
            description: bookmark.description.as_deref().map(escape_html),
            rating: bookmark.rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

impl ErrorResponse {
    pub fn new(msg: &str) -> Self {
        ErrorResponse {
            error: ErrorMessage {
                message: msg.to_owned(),
            },
        }
    }
}
