use serde::{Deserialize, Serialize};

/// Category embedded in a product when the backend expands the relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i32,
    #[serde(rename = "categoria_id")]
    pub category_id: i32,
    #[serde(rename = "categoria", default)]
    pub category: Option<CategorySummary>,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<String>,
    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<String>,
}
