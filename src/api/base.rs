

use serde_json::Value;
use thiserror::Error;

use super::models::Item;


#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}


/// The slice of the Metabase HTTP API needed to empty a collection.
pub trait MetabaseApi {

    fn login(&mut self) -> Result<(), ApiError>;

    /// Raw entries of `GET /api/collection/{id}/items`, unvalidated.
    fn list_collection_items(&self, collection_id: i64) -> Result<Vec<Value>, ApiError>;

    /// Returns the 2xx status on success; any other status is an error.
    fn delete_item(&self, item: &Item) -> Result<u16, ApiError>;


    fn base_url(&self) -> &str;
}


impl<A: MetabaseApi + ?Sized> MetabaseApi for Box<A> {
    fn login(&mut self) -> Result<(), ApiError> {
        (**self).login()
    }

    fn list_collection_items(&self, collection_id: i64) -> Result<Vec<Value>, ApiError> {
        (**self).list_collection_items(collection_id)
    }

    fn delete_item(&self, item: &Item) -> Result<u16, ApiError> {
        (**self).delete_item(item)
    }

    fn base_url(&self) -> &str {
        (**self).base_url()
    }
}
