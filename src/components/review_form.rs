use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::error;

use crate::client;
use crate::models::review::Review;
use crate::state::ReviewDraft;

/// Posts a review and hands the stored record to `on_created` once the server accepts it.
#[component]
pub fn ReviewForm(product_id: String, on_created: Callback<Review>) -> impl IntoView {
    let draft = create_rw_signal(ReviewDraft::default());
    let (submit_error, set_submit_error) = create_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let new_review = draft.with_untracked(|d| d.to_new_review(&product_id));
        spawn_local(async move {
            match client::submit_review(&new_review).await {
                Ok(saved) => {
                    on_created.call(saved);
                    draft.update(|d| d.clear_comment());
                    set_submit_error.set(None);
                }
                Err(err) => {
                    error!("[CLIENT] {}", err);
                    set_submit_error.set(Some("Failed to submit review".to_string()));
                }
            }
        });
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <textarea
                rows="4"
                placeholder="Write your review..."
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
            ></textarea>
            <div class="review-form-fields">
                <label>
                    "Username:"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.user_name.clone())
                        on:input=move |ev| draft.update(|d| d.user_name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Rating:"
                    <select on:change=move |ev| draft.update(|d| d.set_rating(&event_target_value(&ev)))>
                        {(1..=5i64)
                            .map(|n| view! {
                                <option
                                    value=n.to_string()
                                    selected=move || draft.with(|d| d.rating == n)
                                >
                                    {n}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
            {move || submit_error.get().map(|message| view! { <p class="error">{message}</p> })}
            <button type="submit">"Submit Review"</button>
        </form>
    }
}
