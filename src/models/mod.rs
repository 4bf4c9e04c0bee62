pub mod dealer;
pub mod review;

pub use dealer::Dealer;
pub use review::{Review, Sentiment};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The dealership backend is loose about scalar types: zip codes and car
/// years show up as either JSON strings or numbers. Both are held as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    })
}

/// Display text for fields that only ever get rendered: strings and scalars
/// are shown as-is, `null` and nested values as empty text. Never fails.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => match number.as_i64() {
            Some(value) => value.to_string(),
            None => number.to_string(),
        },
        Value::Bool(value) => value.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
