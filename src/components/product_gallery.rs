use leptos::*;

use crate::state::Gallery;

/// Main image plus clickable thumbnails. Selection never leaves the browser.
#[component]
pub fn ProductGallery(images: Vec<String>, name: String) -> impl IntoView {
    let gallery = create_rw_signal(Gallery::new(images));
    let main_alt = name.clone();

    let thumbnails = gallery
        .with_untracked(|g| g.images().to_vec())
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            let alt = name.clone();
            view! {
                <img
                    src=image
                    alt=alt
                    class="gallery-thumbnail"
                    class:selected=move || gallery.with(|g| g.selected_index() == index)
                    on:click=move |_| gallery.update(|g| g.select(index))
                />
            }
        })
        .collect_view();

    view! {
        <div class="gallery">
            <img
                class="gallery-main"
                src=move || gallery.with(|g| g.selected_image().unwrap_or_default().to_string())
                alt=main_alt
            />
            <div class="gallery-thumbnails">{thumbnails}</div>
        </div>
    }
}
