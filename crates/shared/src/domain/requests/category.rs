use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "activa", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "activa", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Unset fields serialize as null and are dropped from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilters {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "activa")]
    pub active: Option<bool>,

    #[serde(rename = "fecha_desde")]
    pub date_from: Option<String>,

    #[serde(rename = "fecha_hasta")]
    pub date_to: Option<String>,
}
