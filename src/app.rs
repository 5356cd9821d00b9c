/// Root component of the storefront.
/// Sets up document metadata and the routes for the product list and detail pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{home_page::HomePage, navbar::Navbar, product_page::ProductPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Perfume Store"/>
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/product/:product_id" view=ProductPage/>
                </Routes>
            </main>
        </Router>
    }
}
