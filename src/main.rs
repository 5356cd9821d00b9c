#[cfg(feature = "ssr")]
use std::{io, path::Path};
#[cfg(feature = "ssr")]
use storefront::db::Database;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos::logging::{error, log};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use storefront::api;
    use storefront::app::*;
    use storefront::config::Config;

    // Missing DATABASE_URL ends startup here
    let config = Config::from_env().map_err(|e| {
        error!("[SERVER] Configuration error: {}", e);
        io::Error::other(e)
    })?;

    // The store handle is shared with every worker through app data
    let db = Database::new(&config.database_url).map_err(io::Error::other)?;
    db.create_schema().await.map_err(io::Error::other)?;
    log!("[SERVER] Collections ready");

    if let Some(seed) = &config.products_seed {
        seed_products(&db, seed).await?;
    }
    let product_count = db.count_products().await.map_err(io::Error::other)?;
    log!("[SERVER] Serving {} products", product_count);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let mut addr = conf.leptos_options.site_addr;
    if let Some(port) = config.port {
        addr.set_port(port);
    }

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(web::Data::new(db.clone()))
            // Register the JSON API BEFORE the Leptos routes
            .configure(api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Serve the favicon from /favicon.ico
            .service(favicon)
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            // Pass Leptos options to the app
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

// Fill an empty products collection from a JSON seed file
#[cfg(feature = "ssr")]
async fn seed_products(db: &Database, path: &Path) -> io::Result<()> {
    use leptos::logging::log;
    use storefront::models::product::NewProduct;

    let raw = std::fs::read_to_string(path)?;
    let products: Vec<NewProduct> = serde_json::from_str(&raw).map_err(io::Error::other)?;
    let inserted = db.seed_products(&products).await.map_err(io::Error::other)?;
    log!("[SERVER] Seeded {} of {} products from {}", inserted, products.len(), path.display());
    Ok(())
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use storefront::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
