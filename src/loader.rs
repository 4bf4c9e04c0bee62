use std::cell::RefCell;
use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use leptos::logging::{error, log};

use crate::api::DealerApi;
use crate::models::{Dealer, Review};

/// Fetches the dealer record. Any failure is logged and reads as "no dealer".
pub async fn load_dealer<A: DealerApi + ?Sized>(api: &A, dealer_id: &str) -> Option<Dealer> {
    match api.fetch_dealer(dealer_id).await {
        Ok(dealer) => {
            log!("[DEALER] Loaded dealer {}: {}", dealer_id, dealer.full_name);
            Some(dealer)
        }
        Err(err) => {
            error!("Failed to load dealer {}: {}", dealer_id, err);
            None
        }
    }
}

/// Fetches the dealer's reviews. Any failure is logged and reads as "no reviews".
pub async fn load_reviews<A: DealerApi + ?Sized>(api: &A, dealer_id: &str) -> Vec<Review> {
    match api.fetch_reviews(dealer_id).await {
        Ok(reviews) => {
            log!("[DEALER] Loaded {} reviews for dealer {}", reviews.len(), dealer_id);
            reviews
        }
        Err(err) => {
            error!("Failed to load reviews for dealer {}: {}", dealer_id, err);
            Vec::new()
        }
    }
}

/// Abort handles for the fetches issued on behalf of the current dealer id.
///
/// A tracked future that gets aborted resolves to `Err(Aborted)` without
/// polling its body again, so it never writes view state.
#[derive(Debug, Default)]
pub struct InFlight {
    handles: RefCell<Vec<AbortHandle>>,
}

impl InFlight {
    pub fn track<F: Future>(&self, future: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        self.handles.borrow_mut().push(handle);
        Abortable::new(future, registration)
    }

    /// Aborts everything still tracked and returns how many handles were dropped.
    pub fn cancel_all(&self) -> usize {
        let handles = std::mem::take(&mut *self.handles.borrow_mut());
        for handle in &handles {
            handle.abort();
        }
        handles.len()
    }

    /// Starts a new generation of requests, cancelling the previous one.
    pub fn restart(&self) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            log!("[DEALER] Cancelled {} in-flight request(s)", cancelled);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.handles.borrow().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.handles.borrow().is_empty()
    }
}
