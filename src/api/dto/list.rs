//! Response envelopes for collection endpoints.

use serde::{Deserialize, Serialize};

/// Every item of a collection.
///
/// ```json
/// { "length": 2, "data": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAllResponse<T> {
    pub length: usize,
    pub data: Vec<T>,
}

impl<T> GetAllResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            length: data.len(),
            data,
        }
    }
}

/// One page of a collection.
///
/// ```json
/// { "length": 10, "data": [ ... ], "current_page": 2, "total_page": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginateGetAllResponse<T> {
    #[serde(flatten)]
    pub items: GetAllResponse<T>,
    pub current_page: i64,
    pub total_page: i64,
}

impl<T> PaginateGetAllResponse<T> {
    /// Builds a page. `total_page` is at least 1, even for an empty collection.
    pub fn new(data: Vec<T>, current_page: i64, limit: i64, total_items: i64) -> Self {
        let total_page = if limit > 0 && total_items > 0 {
            (total_items + limit - 1) / limit
        } else {
            1
        };

        Self {
            items: GetAllResponse::new(data),
            current_page,
            total_page,
        }
    }
}
