use leptos::*;
use leptos_router::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <h1 class="brand">"Perfume Store"</h1>
                <ul class="nav-links">
                    <li><A href="/">"Home"</A></li>
                </ul>
            </div>
        </nav>
    }
}
