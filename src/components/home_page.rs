//! Landing page: a banner followed by a grid of every product.
//! Each card links to the product's detail page.
use leptos::*;
use leptos::logging::error;
use leptos_router::A;

use crate::client;
use crate::models::product::Product;
use crate::state::ViewState;

#[component]
pub fn HomePage() -> impl IntoView {
    let (products, set_products) = create_signal(ViewState::<Vec<Product>>::Loading);

    // Effects only run in the browser, the server renders the loading state
    create_effect(move |_| {
        spawn_local(async move {
            let result = client::fetch_products().await;
            if let Err(err) = &result {
                error!("[CLIENT] {}", err);
            }
            set_products.set(ViewState::from_result(result));
        });
    });

    move || match products.get() {
        ViewState::Loading => view! { <div class="status">"Loading..."</div> }.into_view(),
        ViewState::Error(message) => {
            view! { <div class="status error">"Error: " {message}</div> }.into_view()
        }
        ViewState::Ready(products) => view! {
            <div class="home">
                <Banner/>
                <ProductGrid products=products/>
            </div>
        }
        .into_view(),
    }
}

#[component]
fn Banner() -> impl IntoView {
    view! {
        <div class="banner">
            <h2>"Explore Our Latest Collections!"</h2>
            <p>"Discover special offers on your favorite perfumes."</p>
            <A href="/" class="banner-button">"Shop Now"</A>
        </div>
    }
}

#[component]
fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="container">
            <h1 class="section-title">"Our Perfumes"</h1>
            <div class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let cover = product.cover_image().unwrap_or_default().to_string();
    let price = product.card_price();
    let alt = product.name.clone();

    view! {
        <A href=href class="card">
            <img src=cover alt=alt class="card-image"/>
            <h2 class="card-title">{product.name}</h2>
            <p class="card-description">{product.description}</p>
            <p class="card-price">{price}</p>
        </A>
    }
}
