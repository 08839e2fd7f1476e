use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,

    #[validate(range(min = 1, message = "Category is required"))]
    #[serde(rename = "categoria_id")]
    pub category_id: i32,

    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,

    #[serde(rename = "categoria_id", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,

    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "categoria_id")]
    pub category_id: Option<i32>,

    #[serde(rename = "precio_min")]
    pub price_min: Option<f64>,

    #[serde(rename = "precio_max")]
    pub price_max: Option<f64>,

    pub stock_min: Option<i32>,

    #[serde(rename = "activo")]
    pub active: Option<bool>,

    #[serde(rename = "fecha_desde")]
    pub date_from: Option<String>,

    #[serde(rename = "fecha_hasta")]
    pub date_to: Option<String>,
}
