use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size for list endpoints.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Upper bound on page size accepted from clients.
pub const MAX_PER_PAGE: u64 = 100;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageDto {
    pub message: String,
}

/// Zero-indexed pagination query shared by list endpoints.
#[derive(Deserialize, IntoParams, Clone, Copy, Debug)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PaginationQuery {
    /// Page size clamped to `1..=MAX_PER_PAGE`.
    pub fn per_page(&self) -> u64 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

/// Count of records sharing one enumeration value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CountDto {
    pub key: String,
    pub count: u64,
}
