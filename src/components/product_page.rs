//! Detail page for one product: gallery, product information, reviews and the review form.
use leptos::*;
use leptos::logging::error;
use leptos_router::{use_params_map, A};

use crate::client;
use crate::components::{
    product_gallery::ProductGallery, review_form::ReviewForm, reviews_list::ReviewsList,
};
use crate::models::product::Product;
use crate::models::review::Review;
use crate::state::{ProductDetail, ViewState};

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("product_id").cloned().unwrap_or_default());
    let (detail, set_detail) = create_signal(ViewState::<ProductDetail>::Loading);

    create_effect(move |_| {
        let id = product_id();
        set_detail.set(ViewState::Loading);
        spawn_local(async move {
            let result = client::fetch_product_detail(&id).await;
            if let Err(err) = &result {
                error!("[CLIENT] Product {}: {}", id, err);
            }
            set_detail.set(ViewState::from_result(result));
        });
    });

    // Changes only when another product loads, so appending a review keeps the form mounted
    let product = create_memo(move |_| detail.with(|state| state.map(|d| d.product.clone())));
    let reviews = Signal::derive(move || {
        detail.with(|state| state.ready().map(|d| d.reviews.clone()).unwrap_or_default())
    });

    let on_review_created = Callback::new(move |review: Review| {
        set_detail.update(|state| state.update_ready(|d| d.add_review(review)));
    });

    move || match product.get() {
        ViewState::Loading => view! {
            <div class="loader-wrapper">
                <div class="loader"></div>
            </div>
        }
        .into_view(),
        ViewState::Error(message) => view! { <h1 class="error">"Error: " {message}</h1> }.into_view(),
        ViewState::Ready(product) => view! {
            <ProductDetails product=product reviews=reviews on_review_created=on_review_created/>
        }
        .into_view(),
    }
}

#[component]
fn ProductDetails(
    product: Product,
    reviews: Signal<Vec<Review>>,
    on_review_created: Callback<Review>,
) -> impl IntoView {
    let price = product.display_price();
    let sizes = product
        .sizes
        .iter()
        .map(|size| view! { <span class="size">{size.clone()}</span> })
        .collect_view();

    view! {
        <div class="container product-page">
            <div class="product-layout">
                <ProductGallery images=product.images.clone() name=product.name.clone()/>
                <div class="product-info">
                    <h1 class="product-name">{product.name.clone()}</h1>
                    <p class="product-description">{product.description.clone()}</p>
                    <p class="product-price">{price}</p>
                    <div class="product-sizes">
                        <span class="label">"Available Sizes: "</span>
                        {sizes}
                    </div>
                </div>
            </div>

            <section class="reviews">
                <h2>"Reviews"</h2>
                <ReviewsList reviews=reviews/>
                <ReviewForm product_id=product.id.clone() on_created=on_review_created/>
                <A href="/" class="back-link">"Back to Home"</A>
            </section>
        </div>
    }
}
