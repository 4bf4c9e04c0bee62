use leptos::*;
use crate::models::{Review, Sentiment};
use crate::state::{ReviewsPanel, LOADING_REVIEWS, NO_REVIEWS};

#[component]
pub fn SentimentIcon(sentiment: Sentiment) -> impl IntoView {
    view! {
        <img src=sentiment.icon_path() class="emotion_icon" alt="Sentiment" />
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let byline = review.byline();
    view! {
        <div class="review_panel">
            <SentimentIcon sentiment=review.sentiment />
            <div class="review">{ review.review }</div>
            <div class="reviewer">{ byline }</div>
        </div>
    }
}

/// Reviews panel under the dealer header: loading, empty, or one card per
/// review in the order the backend returned them.
#[component]
pub fn ReviewsList(panel: ReviewsPanel) -> impl IntoView {
    let body = match panel {
        ReviewsPanel::Loading => view! { <div>{ LOADING_REVIEWS }</div> }.into_view(),
        ReviewsPanel::Empty => view! { <div>{ NO_REVIEWS }</div> }.into_view(),
        ReviewsPanel::List(reviews) => reviews
            .into_iter()
            .map(|review| view! { <ReviewCard review=review /> })
            .collect_view(),
    };

    view! {
        <div class="reviews_panel">{ body }</div>
    }
}
