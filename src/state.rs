use crate::models::{Dealer, Review};

pub const LOADING_DEALER: &str = "Loading dealer information...";
pub const DEALER_NOT_FOUND: &str = "Dealer not found";
pub const LOADING_REVIEWS: &str = "Loading reviews...";
pub const NO_REVIEWS: &str = "No reviews yet!";

/// Outcome of one request. Starts `Pending` and becomes `Ready` exactly once,
/// whether the request succeeded or not.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Pending,
    Ready(T),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Pending
    }
}

impl<T> Load<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Load::Pending)
    }
}

/// Local state of one dealer view: the two requests are tracked separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealerViewState {
    pub dealer: Load<Option<Dealer>>,
    pub reviews: Load<Vec<Review>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsPanel {
    Loading,
    Empty,
    List(Vec<Review>),
}

impl ReviewsPanel {
    pub fn from_load(reviews: &Load<Vec<Review>>) -> Self {
        match reviews {
            Load::Pending => ReviewsPanel::Loading,
            Load::Ready(reviews) if reviews.is_empty() => ReviewsPanel::Empty,
            Load::Ready(reviews) => ReviewsPanel::List(reviews.clone()),
        }
    }
}

/// What the dealer view shows. The dealer request gates everything: the
/// reviews panel only exists once a dealer has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DealerPage {
    Loading,
    NotFound,
    Found {
        dealer: Dealer,
        reviews: ReviewsPanel,
    },
}

impl DealerPage {
    pub fn from_state(state: &DealerViewState) -> Self {
        match &state.dealer {
            Load::Pending => DealerPage::Loading,
            Load::Ready(None) => DealerPage::NotFound,
            Load::Ready(Some(dealer)) => DealerPage::Found {
                dealer: dealer.clone(),
                reviews: ReviewsPanel::from_load(&state.reviews),
            },
        }
    }
}
