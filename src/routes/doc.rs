use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{carts::CartLineList, products::ProductList},
    models::{Cart, CartLine, Product},
    response::{ApiResponse, Meta},
    routes::{carts, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        carts::create_cart,
        carts::get_cart,
        carts::add_product,
    ),
    components(
        schemas(
            Product,
            Cart,
            CartLine,
            ProductList,
            CartLineList,
            params::ProductListQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<Cart>,
            ApiResponse<ProductList>,
            ApiResponse<CartLineList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Carts", description = "Cart endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
