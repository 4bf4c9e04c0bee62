// src/models/dealer.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::text_or_number;

/// A dealership as returned by `/djangoapp/dealer/{id}/`. The five displayed
/// fields are required; the rest are carried through as raw JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dealer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<Value>,
    pub city: String,
    pub address: String,
    #[serde(deserialize_with = "text_or_number")]
    pub zip: String,
    pub state: String,
    /// Two-letter state abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub st: Option<Value>,
}

impl Dealer {
    /// Subheader line under the dealer name, e.g. `Springfield, 1 Main St, Zip 00000, IL`.
    pub fn location_line(&self) -> String {
        format!(
            "{}, {}, Zip {}, {}",
            self.city, self.address, self.zip, self.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> serde_json::Value {
        json!({
            "full_name": "Acme Motors",
            "city": "Springfield",
            "address": "1 Main St",
            "zip": "00000",
            "state": "IL"
        })
    }

    #[test]
    fn test_location_line() {
        let dealer: Dealer = serde_json::from_value(acme()).unwrap();
        assert_eq!(dealer.full_name, "Acme Motors");
        assert_eq!(dealer.location_line(), "Springfield, 1 Main St, Zip 00000, IL");
    }

    #[test]
    fn test_numeric_zip_and_extra_fields() {
        let dealer: Dealer = serde_json::from_value(json!({
            "id": 15,
            "full_name": "Holdlamis Car Dealership",
            "short_name": "Holdlamis",
            "city": "El Paso",
            "address": "3 Nova Court",
            "zip": 88563,
            "state": "Texas",
            "st": "TX",
            "lat": 31.6948,
            "long": -106.3
        }))
        .unwrap();

        assert_eq!(dealer.id, Some(json!(15)));
        assert_eq!(dealer.zip, "88563");
        assert_eq!(dealer.st, Some(json!("TX")));
    }

    #[test]
    fn test_string_id_is_accepted() {
        let mut value = acme();
        value["id"] = json!("dealer-15");
        value["st"] = json!(null);
        let dealer: Dealer = serde_json::from_value(value).unwrap();
        assert_eq!(dealer.id, Some(json!("dealer-15")));
        assert_eq!(dealer.st, None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut value = acme();
        value.as_object_mut().unwrap().remove("city");
        assert!(serde_json::from_value::<Dealer>(value).is_err());
    }
}
