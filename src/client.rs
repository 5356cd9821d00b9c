//! HTTP calls the web client makes against the JSON API.
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use thiserror::Error;
use urlencoding::encode;

use crate::models::product::Product;
use crate::models::review::{NewReview, Review};
use crate::state::ProductDetail;

const API_BASE: &str = "/api";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("{context}")]
    Status { context: &'static str, status: u16 },

    /// The request never completed or the body could not be decoded.
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: gloo_net::Error,
    },
}

pub async fn fetch_products() -> Result<Vec<Product>, ClientError> {
    get_json(&format!("{API_BASE}/products"), "Failed to fetch products").await
}

pub async fn fetch_product(product_id: &str) -> Result<Product, ClientError> {
    get_json(
        &format!("{API_BASE}/products/{}", encode(product_id)),
        "Failed to fetch product",
    )
    .await
}

pub async fn fetch_reviews(product_id: &str) -> Result<Vec<Review>, ClientError> {
    get_json(
        &format!("{API_BASE}/reviews/{}", encode(product_id)),
        "Failed to fetch reviews",
    )
    .await
}

/// Fetches the product, then its reviews.
pub async fn fetch_product_detail(product_id: &str) -> Result<ProductDetail, ClientError> {
    let product = fetch_product(product_id).await?;
    let reviews = fetch_reviews(product_id).await?;
    Ok(ProductDetail { product, reviews })
}

pub async fn submit_review(review: &NewReview) -> Result<Review, ClientError> {
    const CONTEXT: &str = "Failed to submit review";
    let url = format!("{API_BASE}/reviews");
    let response = Request::post(&url)
        .json(review)
        .map_err(|source| ClientError::Transport { context: CONTEXT, source })?
        .send()
        .await
        .map_err(|source| ClientError::Transport { context: CONTEXT, source })?;
    let saved: Review = read_json(response, CONTEXT).await?;
    log!("[CLIENT] Review {} saved for product {}", saved.id, saved.product_id);
    Ok(saved)
}

async fn get_json<T: DeserializeOwned>(url: &str, context: &'static str) -> Result<T, ClientError> {
    log!("[CLIENT] GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|source| ClientError::Transport { context, source })?;
    read_json(response, context).await
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, ClientError> {
    if !response.ok() {
        error!("[CLIENT] {} {}: HTTP {}", context, response.url(), response.status());
        return Err(ClientError::Status {
            context,
            status: response.status(),
        });
    }
    response
        .json()
        .await
        .map_err(|source| ClientError::Transport { context, source })
}
