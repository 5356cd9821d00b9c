use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            {move || {
                let reviews = reviews.get();
                if reviews.is_empty() {
                    view! { <p>"No reviews yet."</p> }.into_view()
                } else {
                    reviews
                        .into_iter()
                        .map(|review| view! {
                            <div class="review">
                                <p class="review-comment">{review.comment}</p>
                                <p class="review-rating">{format!("Rating: {} / 5", review.rating)}</p>
                                <p class="review-author">{format!("- {}", review.user_name)}</p>
                            </div>
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}
