//! The `{success, message?, data}` envelope every endpoint answers with.

use axum::Json;
use serde::Serialize;

use liftdesk_domain::pagination::{PageRequest, total_pages};

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        })
    }
}

impl Envelope<()> {
    /// `{success: true, message}` with no data key.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: Some(message.into()),
            data: None,
        })
    }
}

/// List payload: `{items, pagination: {page, limit, total, totalPages}}`.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: PageRequest, total: u64) -> Self {
        let page = page.clamped();
        Self {
            items,
            pagination: PageMeta {
                page: page.page,
                limit: page.limit,
                total,
                total_pages: total_pages(total, page.limit),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_skip_message_and_data_keys_when_absent() {
        let Json(env) = Envelope::message("Deleted");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Deleted");
        assert!(json.get("data").is_none());

        let Json(env) = Envelope::data(vec![1, 2, 3]);
        let json = serde_json::to_value(&env).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn should_compute_pagination_meta() {
        let page = PageRequest { page: 2, limit: 10 };
        let p = Paginated::new(vec!["a"; 10], page, 25);
        assert_eq!(p.pagination.page, 2);
        assert_eq!(p.pagination.limit, 10);
        assert_eq!(p.pagination.total, 25);
        assert_eq!(p.pagination.total_pages, 3);
    }
}
