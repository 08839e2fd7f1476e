use core::fmt;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Payload type for endpoints that answer with an empty or ignorable `data`.
pub type EmptyData = Option<serde_json::Value>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
    #[serde(default)]
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            status: 200,
        }
    }
}

impl<T: std::fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ApiResponse {{ success: {}, status: {}, message: {}, data: {:?} }}",
            self.success, self.status, self.message, self.data
        )
    }
}

/// Page of records as returned by list endpoints (`{ data: [...], totalPages, ... }`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponsePagination<T> {
    pub data: Vec<T>,

    #[serde(rename = "totalPages")]
    pub total_pages: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<T> ApiResponsePagination<T> {
    pub fn new(data: Vec<T>, total_pages: u32) -> Self {
        Self {
            data,
            total_pages,
            success: None,
            message: None,
            status: None,
            total: None,
            page: None,
            limit: None,
        }
    }
}

impl<T: Serialize> fmt::Display for ApiResponsePagination<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(e) => write!(f, "Error serializing ApiResponsePagination to JSON: {e}"),
        }
    }
}
