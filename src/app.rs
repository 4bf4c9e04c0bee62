//! Application shell for Dealership Reviews.
//! Wires the backend client and the signed-in user into context and routes
//! `/dealer/:id` to the dealer detail view.
use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::{HttpDealerApi, SharedDealerApi};
use crate::components::dealer_detail::DealerRoute;
use crate::components::header::Header;
use crate::config::ApiConfig;
use crate::session::AuthContext;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_window();
    let api: SharedDealerApi = Rc::new(HttpDealerApi::new(config.clone()));
    provide_context(config);
    provide_context(api);
    // Read once per page load; see `AuthContext`.
    provide_context(AuthContext::from_session_storage());

    view! {
        <Stylesheet id="leptos" href="/pkg/dealership-reviews.css" />
        <Title text="Dealership Reviews" />
        <Router>
            <main>
                <Routes>
                    <Route path="/dealer/:id" view=DealerRoute />
                    <Route path="/*any" view=PageNotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn PageNotFound() -> impl IntoView {
    view! {
        <div class="dealer_page">
            <Header />
            <h3>{ "Page not found" }</h3>
        </div>
    }
}
