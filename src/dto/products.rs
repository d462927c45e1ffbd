use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// Fully validated create payload. Checks are manual because the wire payload
/// is free-form JSON: a missing or mistyped field must surface as the API's
/// own validation error, not as a body rejection from the extractor.
#[derive(Debug)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub code: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub thumbnails: Vec<String>,
    pub status: bool,
}

impl ProductDraft {
    pub fn from_value(payload: &Value) -> AppResult<Self> {
        Ok(Self {
            title: required_string(payload, "title")?,
            description: required_string(payload, "description")?,
            code: required_string(payload, "code")?,
            category: required_string(payload, "category")?,
            price: required_number(payload, "price")?,
            stock: required_integer(payload, "stock")?,
            thumbnails: optional_string_list(payload, "thumbnails")?.unwrap_or_default(),
            // Only a missing or null status defaults; an explicit false sticks.
            status: optional_bool(payload, "status")?.unwrap_or(true),
        })
    }

    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            code: self.code,
            category: self.category,
            price: self.price,
            stock: self.stock,
            thumbnails: self.thumbnails,
            status: self.status,
        }
    }
}

/// Partial update payload. Absent or null fields leave the record alone, and
/// an `id` in the payload is ignored outright.
#[derive(Debug)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub thumbnails: Option<Vec<String>>,
    pub status: Option<bool>,
}

impl ProductPatch {
    pub fn from_value(payload: &Value) -> AppResult<Self> {
        Ok(Self {
            title: optional_string(payload, "title")?,
            description: optional_string(payload, "description")?,
            code: optional_string(payload, "code")?,
            category: optional_string(payload, "category")?,
            price: optional_number(payload, "price")?,
            stock: optional_integer(payload, "stock")?,
            thumbnails: optional_string_list(payload, "thumbnails")?,
            status: optional_bool(payload, "status")?,
        })
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(thumbnails) = self.thumbnails {
            product.thumbnails = thumbnails;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}

fn required_string(payload: &Value, field: &str) -> AppResult<String> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(AppError::Validation(format!(
            "El campo '{field}' no puede estar vacío."
        ))),
        None | Some(Value::Null) => Err(AppError::Validation(format!(
            "El campo '{field}' es obligatorio."
        ))),
        Some(_) => Err(AppError::Validation(format!(
            "El campo '{field}' debe ser una cadena."
        ))),
    }
}

fn optional_string(payload: &Value, field: &str) -> AppResult<Option<String>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => required_string(payload, field).map(Some),
    }
}

fn required_number(payload: &Value, field: &str) -> AppResult<f64> {
    match payload.get(field) {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            AppError::Validation(format!("El campo '{field}' debe ser numérico."))
        }),
        None | Some(Value::Null) => Err(AppError::Validation(format!(
            "El campo '{field}' es obligatorio."
        ))),
        Some(_) => Err(AppError::Validation(format!(
            "El campo '{field}' debe ser numérico."
        ))),
    }
}

fn optional_number(payload: &Value, field: &str) -> AppResult<Option<f64>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => required_number(payload, field).map(Some),
    }
}

fn required_integer(payload: &Value, field: &str) -> AppResult<i64> {
    match payload.get(field) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            AppError::Validation(format!("El campo '{field}' debe ser un número entero."))
        }),
        None | Some(Value::Null) => Err(AppError::Validation(format!(
            "El campo '{field}' es obligatorio."
        ))),
        Some(_) => Err(AppError::Validation(format!(
            "El campo '{field}' debe ser numérico."
        ))),
    }
}

fn optional_integer(payload: &Value, field: &str) -> AppResult<Option<i64>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => required_integer(payload, field).map(Some),
    }
}

fn optional_string_list(payload: &Value, field: &str) -> AppResult<Option<Vec<String>>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(values)) => values
            .iter()
            .map(|v| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(AppError::Validation(format!(
                    "El campo '{field}' debe ser una lista de cadenas."
                ))),
            })
            .collect::<AppResult<Vec<_>>>()
            .map(Some),
        Some(_) => Err(AppError::Validation(format!(
            "El campo '{field}' debe ser una lista de cadenas."
        ))),
    }
}

fn optional_bool(payload: &Value, field: &str) -> AppResult<Option<bool>> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(AppError::Validation(format!(
            "El campo '{field}' debe ser booleano."
        ))),
    }
}
