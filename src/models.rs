use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub thumbnails: Vec<String>,
    #[serde(default = "default_status")]
    pub status: bool,
}

fn default_status() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: u64,
    pub products: Vec<CartLine>,
}

/// Next id for a collection: one past the current maximum, 1 when empty.
pub fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::next_id;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(std::iter::empty()), 1);
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(next_id([3, 1, 7].into_iter()), 8);
    }
}
