

use thiserror::Error;

use crate::api::ApiError;
use crate::api::models::Item;


#[derive(Error, Debug)]
pub enum PurgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Login failed: {0}")]
    Auth(#[source] ApiError),

    #[error("Failed to get items from collection {collection_id}: {source}")]
    List {
        collection_id: i64,
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete {} with id {}: {source}", .item.model, .item.id)]
    Delete {
        item: Item,
        #[source]
        source: ApiError,
    },

    #[error("Skipping item with missing model or id in collection {collection_id}: {raw}")]
    MalformedItem { collection_id: i64, raw: String },
}

impl PurgeError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedItem { .. })
    }
}


pub type Result<T> = std::result::Result<T, PurgeError>;
