//! Dealer detail view: the dealer's profile followed by its reviews.
use std::rc::Rc;

use futures::FutureExt;
use leptos::logging::log;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::{HttpDealerApi, SharedDealerApi};
use crate::components::header::Header;
use crate::components::reviews_list::ReviewsList;
use crate::config::ApiConfig;
use crate::loader::{load_dealer, load_reviews, InFlight};
use crate::session::AuthContext;
use crate::state::{DealerPage, DealerViewState, Load, DEALER_NOT_FOUND, LOADING_DEALER};

pub const REVIEW_BUTTON_ICON: &str = "/assets/reviewbutton.png";

/// Route to the review submission page for a dealer.
pub fn post_review_href(dealer_id: &str) -> String {
    format!("/postreview/{dealer_id}")
}

/// Mounted at `/dealer/:id`.
#[component]
pub fn DealerRoute() -> impl IntoView {
    let params = use_params_map();
    let dealer_id =
        Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    view! { <DealerDetail dealer_id=dealer_id /> }
}

#[component]
pub fn DealerDetail(#[prop(into)] dealer_id: Signal<String>) -> impl IntoView {
    let api = use_context::<SharedDealerApi>()
        .unwrap_or_else(|| Rc::new(HttpDealerApi::new(ApiConfig::from_window())));
    let state = create_rw_signal(DealerViewState::default());
    let in_flight = Rc::new(InFlight::default());

    // Each dealer id gets a fresh pair of requests; whatever is still running
    // for the previous id is aborted first so it cannot overwrite newer state.
    create_effect({
        let in_flight = Rc::clone(&in_flight);
        move |_| {
            let id = dealer_id.get();
            in_flight.restart();
            state.set(DealerViewState::default());
            log!("[DEALER] Fetching dealer {} and its reviews", id);

            let dealer_task = {
                let api = Rc::clone(&api);
                let id = id.clone();
                async move {
                    let dealer = load_dealer(api.as_ref(), &id).await;
                    state.update(|s| s.dealer = Load::Ready(dealer));
                }
            };
            let reviews_task = {
                let api = Rc::clone(&api);
                async move {
                    let reviews = load_reviews(api.as_ref(), &id).await;
                    state.update(|s| s.reviews = Load::Ready(reviews));
                }
            };

            spawn_local(in_flight.track(dealer_task).map(|_| ()));
            spawn_local(in_flight.track(reviews_task).map(|_| ()));
        }
    });

    on_cleanup(move || {
        in_flight.cancel_all();
    });

    let page = create_memo(move |_| state.with(DealerPage::from_state));

    view! {
        <div class="dealer_page">
            <Header />
            {move || match page.get() {
                DealerPage::Loading => view! { <h3>{ LOADING_DEALER }</h3> }.into_view(),
                DealerPage::NotFound => view! { <h3>{ DEALER_NOT_FOUND }</h3> }.into_view(),
                DealerPage::Found { dealer, reviews } => {
                    let auth = use_context::<AuthContext>().unwrap_or_default();
                    let review_link = auth.is_authenticated().then(|| {
                        let href = dealer_id.with_untracked(|id| post_review_href(id));
                        view! {
                            <a class="post_review" href=href>
                                <img src=REVIEW_BUTTON_ICON alt="Post Review" />
                            </a>
                        }
                    });
                    view! {
                        <div class="dealer_info">
                            <h1>{ dealer.full_name.clone() }{ review_link }</h1>
                            <h4>{ dealer.location_line() }</h4>
                        </div>
                        <ReviewsList panel=reviews />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
