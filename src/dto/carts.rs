use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CartLine;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartLineList {
    #[schema(value_type = Vec<CartLine>)]
    pub items: Vec<CartLine>,
}
