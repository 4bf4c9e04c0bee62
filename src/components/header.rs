use leptos::*;
use crate::session::AuthContext;

/// Site-wide page header shown above every dealer view state, with the
/// signed-in username when there is one.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_context::<AuthContext>().unwrap_or_default();
    let (username, set_username) = create_signal(None::<String>);

    // Filled in after mount: the server never sees session storage, so the
    // first render must match its anonymous markup.
    create_effect(move |_| set_username.set(auth.username.clone()));

    view! {
        <nav class="page_header">
            <a class="brand" href="/">{ "Dealerships" }</a>
            <a href="/">{ "Home" }</a>
            {move || username.get().map(|name| view! { <span class="username">{ name }</span> })}
        </nav>
    }
}
