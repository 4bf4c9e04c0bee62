use std::collections::HashMap;
use std::time::Duration;

use dealership_reviews::api::{DealerApi, DealerEnvelope, ReviewsEnvelope};
use dealership_reviews::error::FetchError;
use dealership_reviews::models::{Dealer, Review};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::sleep;
use serde_json::{json, Value};

/// Canned backend: JSON bodies per dealer id, each answered after a delay.
/// Ids with nothing scripted fail like a dropped connection.
#[derive(Default, Clone)]
pub struct MockDealerApi {
    dealers: HashMap<String, (Duration, Value)>,
    reviews: HashMap<String, (Duration, Value)>,
}

impl MockDealerApi {
    pub fn dealer(mut self, dealer_id: &str, delay_ms: u64, body: Value) -> Self {
        self.dealers
            .insert(dealer_id.to_string(), (Duration::from_millis(delay_ms), body));
        self
    }

    pub fn reviews(mut self, dealer_id: &str, delay_ms: u64, body: Value) -> Self {
        self.reviews
            .insert(dealer_id.to_string(), (Duration::from_millis(delay_ms), body));
        self
    }
}

fn respond<T: 'static>(
    scripted: Option<&(Duration, Value)>,
    decode: fn(Value) -> Result<T, FetchError>,
) -> LocalBoxFuture<'static, Result<T, FetchError>> {
    let scripted = scripted.cloned();
    async move {
        let (delay, body) = scripted.ok_or_else(|| FetchError::Transport("connection refused".into()))?;
        sleep(delay).await;
        decode(body)
    }
    .boxed_local()
}

impl DealerApi for MockDealerApi {
    fn fetch_dealer(&self, dealer_id: &str) -> LocalBoxFuture<'static, Result<Dealer, FetchError>> {
        respond(self.dealers.get(dealer_id), |body| {
            serde_json::from_value::<DealerEnvelope>(body)?.into_dealer()
        })
    }

    fn fetch_reviews(&self, dealer_id: &str) -> LocalBoxFuture<'static, Result<Vec<Review>, FetchError>> {
        respond(self.reviews.get(dealer_id), |body| {
            serde_json::from_value::<ReviewsEnvelope>(body)?.into_reviews()
        })
    }
}

pub fn acme_dealer() -> Value {
    json!({
        "status": 200,
        "dealer": {
            "full_name": "Acme Motors",
            "city": "Springfield",
            "address": "1 Main St",
            "zip": "00000",
            "state": "IL"
        }
    })
}

pub fn slow_service_reviews() -> Value {
    json!({
        "status": 200,
        "reviews": [{
            "sentiment": "negative",
            "review": "Slow service",
            "name": "Jo",
            "car_make": "Ford",
            "car_model": "Focus",
            "car_year": "2020"
        }]
    })
}

pub fn mixed_sentiment_reviews() -> Value {
    json!({
        "status": 200,
        "reviews": [
            { "sentiment": "positive", "review": "Great deal", "name": "Al",
              "car_make": "Audi", "car_model": "A4", "car_year": 2019 },
            { "sentiment": "negative", "review": "Slow service", "name": "Jo",
              "car_make": "Ford", "car_model": "Focus", "car_year": "2020" },
            { "sentiment": 1, "review": "It was fine", "name": null,
              "car_make": "Kia", "car_model": "Rio", "car_year": null, "purchase": "true" }
        ]
    })
}
