// src/models/review.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient_text;

/// Sentiment classification attached to a review by the backend analyzer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Exact, case-sensitive match; anything other than `positive` or
    /// `negative` is neutral.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("positive") => Sentiment::Positive,
            Some("negative") => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn icon_path(self) -> &'static str {
        match self {
            Sentiment::Positive => "/assets/positive.png",
            Sentiment::Negative => "/assets/negative.png",
            Sentiment::Neutral => "/assets/neutral.png",
        }
    }
}

// Non-string labels (numbers, objects, null) are neutral too.
impl From<Value> for Sentiment {
    fn from(label: Value) -> Self {
        Sentiment::from_label(label.as_str())
    }
}

/// One review as rendered. Only the displayed fields are interpreted; the
/// backend's bookkeeping fields are carried through untouched so their
/// typing can never reject a review.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealership: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,       // Reviewer name
    #[serde(default, deserialize_with = "lenient_text")]
    pub review: String,     // Review body
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub car_make: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub car_model: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub car_year: String,
}

impl Review {
    pub fn vehicle_line(&self) -> String {
        format!("{} {} {}", self.car_make, self.car_model, self.car_year)
    }

    /// Reviewer name followed by the vehicle, e.g. `Jo — Ford Focus 2020`.
    pub fn byline(&self) -> String {
        format!("{} — {}", self.name, self.vehicle_line())
    }
}
