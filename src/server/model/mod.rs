//! Server-side domain models and parameter types.
//!
//! Entity models are converted into these types in the service layer (stored enum
//! strings are parsed here) and turned into DTOs at the controller boundary.

pub mod client;
pub mod document;
pub mod identifier;
pub mod invoice;
pub mod leave_request;
pub mod legal_case;
pub mod task;
pub mod team_member;

/// One page of results plus the figures needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

/// Trims a required text field, returning `None` when nothing is left.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trims an optional text field, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}

/// Lowercases and trims an email, checking it has a local part and a domain.
pub fn normalize_email(email: &str) -> Option<String> {
    let email = email.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;

    (!local.is_empty() && domain.contains('.') && !domain.starts_with('.')).then_some(email)
}
