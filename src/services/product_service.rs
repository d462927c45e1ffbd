use serde_json::Value;

use crate::{
    dto::products::{ProductDraft, ProductList, ProductPatch},
    error::{AppError, AppResult},
    models::{Product, next_id},
    notify,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    limit: Option<i64>,
) -> AppResult<ApiResponse<ProductList>> {
    if let Some(limit) = limit
        && limit <= 0
    {
        return Err(AppError::Validation(
            "El parámetro 'limit' debe ser un número positivo.".to_string(),
        ));
    }

    let products = state.products.load().await?;
    let total = products.len() as i64;
    let items = match limit {
        Some(limit) => products.into_iter().take(limit as usize).collect(),
        None => products,
    };

    let meta = Meta::new(limit, total);
    Ok(ApiResponse::success("Productos", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: u64) -> AppResult<ApiResponse<Product>> {
    let products = state.products.load().await?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(not_found)?;
    Ok(ApiResponse::success("Producto", product, None))
}

pub async fn create_product(
    state: &AppState,
    payload: Value,
) -> AppResult<ApiResponse<Product>> {
    let draft = ProductDraft::from_value(&payload)?;

    let mut products = state.products.load().await?;
    if products.iter().any(|p| p.code == draft.code) {
        return Err(AppError::Conflict(
            "El código del producto ya existe.".to_string(),
        ));
    }

    let product = draft.into_product(next_id(products.iter().map(|p| p.id)));
    products.push(product.clone());
    state.products.save(&products).await?;
    notify::products_changed(&state.events, &products);

    Ok(ApiResponse::success(
        "Producto agregado con éxito",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: u64,
    payload: Value,
) -> AppResult<ApiResponse<Product>> {
    let patch = ProductPatch::from_value(&payload)?;

    let mut products = state.products.load().await?;
    let position = products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(not_found)?;

    // Uniqueness of the code holds under update too.
    if let Some(code) = patch.code.as_deref()
        && products.iter().any(|p| p.id != id && p.code == code)
    {
        return Err(AppError::Conflict(
            "El código del producto ya existe.".to_string(),
        ));
    }

    patch.apply(&mut products[position]);
    let product = products[position].clone();
    state.products.save(&products).await?;
    notify::products_changed(&state.events, &products);

    Ok(ApiResponse::success(
        "Producto actualizado con éxito",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn delete_product(state: &AppState, id: u64) -> AppResult<ApiResponse<Product>> {
    let mut products = state.products.load().await?;
    let position = products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(not_found)?;

    let product = products.remove(position);
    state.products.save(&products).await?;
    notify::products_changed(&state.events, &products);

    Ok(ApiResponse::success(
        "Producto eliminado con éxito",
        product,
        Some(Meta::empty()),
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("Producto no encontrado".to_string())
}
