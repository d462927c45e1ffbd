use crate::{
    dto::carts::CartLineList,
    error::{AppError, AppResult},
    models::{Cart, CartLine, next_id},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_cart(state: &AppState) -> AppResult<ApiResponse<Cart>> {
    let mut carts = state.carts.load().await?;
    let cart = Cart {
        id: next_id(carts.iter().map(|c| c.id)),
        products: Vec::new(),
    };
    carts.push(cart.clone());
    state.carts.save(&carts).await?;

    Ok(ApiResponse::success(
        "Carrito creado con éxito",
        cart,
        Some(Meta::empty()),
    ))
}

pub async fn get_cart(state: &AppState, id: u64) -> AppResult<ApiResponse<CartLineList>> {
    let carts = state.carts.load().await?;
    let cart = carts
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(not_found)?;

    Ok(ApiResponse::success(
        "Carrito",
        CartLineList {
            items: cart.products,
        },
        None,
    ))
}

pub async fn add_product(
    state: &AppState,
    cart_id: u64,
    product_id: u64,
) -> AppResult<ApiResponse<Cart>> {
    let mut carts = state.carts.load().await?;
    let position = carts
        .iter()
        .position(|c| c.id == cart_id)
        .ok_or_else(not_found)?;

    // Linear scan; carts hold a handful of lines.
    let cart = &mut carts[position];
    match cart
        .products
        .iter_mut()
        .find(|line| line.product == product_id)
    {
        Some(line) => line.quantity += 1,
        None => cart.products.push(CartLine {
            product: product_id,
            quantity: 1,
        }),
    }

    let cart = cart.clone();
    state.carts.save(&carts).await?;

    Ok(ApiResponse::success(
        "Producto agregado al carrito",
        cart,
        None,
    ))
}

fn not_found() -> AppError {
    AppError::NotFound("Carrito no encontrado".to_string())
}
