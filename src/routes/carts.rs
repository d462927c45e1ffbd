use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::carts::CartLineList,
    error::AppResult,
    models::Cart,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/{cart_id}", get(get_cart))
        .route("/{cart_id}/product/{product_id}", post(add_product))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 201, description = "Create an empty cart", body = ApiResponse<Cart>),
    ),
    tag = "Carts"
)]
pub async fn create_cart(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ApiResponse<Cart>>)> {
    let response = cart_service::create_cart(&state).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}",
    params(
        ("cart_id" = u64, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "The cart's product lines", body = ApiResponse<CartLineList>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<u64>,
) -> AppResult<Json<ApiResponse<CartLineList>>> {
    let response = cart_service::get_cart(&state, cart_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/product/{product_id}",
    params(
        ("cart_id" = u64, Path, description = "Cart ID"),
        ("product_id" = u64, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Updated cart", body = ApiResponse<Cart>),
        (status = 404, description = "Cart not found"),
    ),
    tag = "Carts"
)]
pub async fn add_product(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(u64, u64)>,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let response = cart_service::add_product(&state, cart_id, product_id).await?;
    Ok(Json(response))
}
