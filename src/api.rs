use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::{Dealer, Review};

/// The only status the backend uses for success, carried in the JSON body.
pub const STATUS_OK: u16 = 200;

pub fn dealer_url(origin: &str, dealer_id: &str) -> String {
    format!("{origin}/djangoapp/dealer/{dealer_id}/")
}

pub fn reviews_url(origin: &str, dealer_id: &str) -> String {
    format!("{origin}/djangoapp/reviews/dealer/{dealer_id}/")
}

/// Body of `GET /djangoapp/dealer/{id}/`. `dealer` is either a record or a
/// list of records; it is only interpreted once the status says 200.
#[derive(Deserialize, Debug, Clone)]
pub struct DealerEnvelope {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub dealer: Option<Value>,
}

impl DealerEnvelope {
    pub fn into_dealer(self) -> Result<Dealer, FetchError> {
        if self.status != STATUS_OK {
            return Err(FetchError::Status(self.status));
        }
        let record = match self.dealer {
            Some(Value::Array(records)) => records.into_iter().next(),
            other => other,
        };
        match record {
            None | Some(Value::Null) => Err(FetchError::NotFound),
            Some(record) => Ok(serde_json::from_value(record)?),
        }
    }
}

/// Body of `GET /djangoapp/reviews/dealer/{id}/`.
#[derive(Deserialize, Debug, Clone)]
pub struct ReviewsEnvelope {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub reviews: Option<Value>,
}

impl ReviewsEnvelope {
    /// Reviews in server order; a missing or `null` list is an empty one.
    /// Elements are decoded one by one, so a single unreadable entry becomes
    /// a blank review instead of dropping the whole list.
    pub fn into_reviews(self) -> Result<Vec<Review>, FetchError> {
        if self.status != STATUS_OK {
            return Err(FetchError::Status(self.status));
        }
        let entries = match self.reviews {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(FetchError::Decode(format!("expected a list of reviews, got {other}")))
            }
        };
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry).unwrap_or_else(|err| {
                    warn!("[DEALER] Unreadable review at position {}: {}", index, err);
                    Review::default()
                })
            })
            .collect())
    }
}

/// Backend calls the dealer view depends on. Futures are `!Send`: everything
/// runs on the browser's single thread.
pub trait DealerApi {
    fn fetch_dealer(&self, dealer_id: &str) -> LocalBoxFuture<'static, Result<Dealer, FetchError>>;
    fn fetch_reviews(
        &self,
        dealer_id: &str,
    ) -> LocalBoxFuture<'static, Result<Vec<Review>, FetchError>>;
}

/// How views find the backend: shared through Leptos context.
pub type SharedDealerApi = Rc<dyn DealerApi>;

/// `DealerApi` over plain `fetch` GETs.
#[derive(Debug, Clone)]
pub struct HttpDealerApi {
    config: ApiConfig,
}

impl HttpDealerApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl DealerApi for HttpDealerApi {
    fn fetch_dealer(&self, dealer_id: &str) -> LocalBoxFuture<'static, Result<Dealer, FetchError>> {
        let url = dealer_url(&self.config.origin, dealer_id);
        async move { get_json::<DealerEnvelope>(&url).await?.into_dealer() }.boxed_local()
    }

    fn fetch_reviews(
        &self,
        dealer_id: &str,
    ) -> LocalBoxFuture<'static, Result<Vec<Review>, FetchError>> {
        let url = reviews_url(&self.config.origin, dealer_id);
        async move { get_json::<ReviewsEnvelope>(&url).await?.into_reviews() }.boxed_local()
    }
}

// The HTTP status line is not consulted: the backend reports its outcome in
// the body's `status` field.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url).send().await?;
    Ok(response.json::<T>().await?)
}
