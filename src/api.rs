use actix_cors::Cors;
use actix_web::{web, HttpResponse};
use leptos::logging::log;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::review::ReviewSubmission;

/// Mounts the JSON API under `/api`. Any origin may call it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(Cors::permissive())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::MalformedPayload(err.to_string()).into()
            }))
            .route("/products", web::get().to(list_products)) // GET /api/products
            .route("/products/{id}", web::get().to(get_product)) // GET /api/products/{id}
            .route("/reviews/{product_id}", web::get().to(list_reviews)) // GET /api/reviews/{product_id}
            .route("/reviews", web::post().to(create_review)) // POST /api/reviews
            .default_service(web::route().to(unknown_route)),
    );
}

pub async fn list_products(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let products = db.list_products().await?;
    log!("[SERVER] Returning {} products", products.len());
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get_product(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    log!("[SERVER] Received request for product: {}", id);
    match db.get_product(&id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn list_reviews(
    db: web::Data<Database>,
    product_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reviews = db.list_reviews(&product_id).await?;
    log!("[SERVER] Returning {} reviews for product: {}", reviews.len(), product_id);
    Ok(HttpResponse::Ok().json(reviews))
}

pub async fn create_review(
    db: web::Data<Database>,
    submission: web::Json<ReviewSubmission>,
) -> Result<HttpResponse, ApiError> {
    let new_review = submission
        .into_inner()
        .validate()
        .map_err(ApiError::ValidationMissing)?;
    log!(
        "[API] Received review request - Product ID: {}, User: {}",
        new_review.product_id,
        new_review.user_name
    );

    let review = db.insert_review(&new_review).await?;
    log!("[API] Successfully saved review ID: {}", review.id);
    Ok(HttpResponse::Created().json(review))
}

async fn unknown_route() -> Result<HttpResponse, ApiError> {
    Err(ApiError::UnknownRoute)
}
