use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{Value, json};

use crate::api::base::{ApiError, MetabaseApi};
use crate::api::models::Item;


/// In-memory Metabase used by the purge tests. Records every call.
#[derive(Default)]
pub struct FakeMetabase {
    pub login_status: Option<u16>,
    pub collections: HashMap<i64, Vec<Value>>,
    pub failing_collections: HashMap<i64, u16>,
    pub delete_statuses: HashMap<Item, u16>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeMetabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, id: i64, entries: Vec<Value>) -> Self {
        self.collections.insert(id, entries);
        self
    }

    pub fn with_failing_collection(mut self, id: i64, status: u16) -> Self {
        self.failing_collections.insert(id, status);
        self
    }

    pub fn with_delete_status(mut self, item: Item, status: u16) -> Self {
        self.delete_statuses.insert(item, status);
        self
    }

    pub fn with_login_status(mut self, status: u16) -> Self {
        self.login_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }
}

pub fn entry(model: &str, id: i64) -> Value {
    json!({"model": model, "id": id, "name": format!("{model} {id}")})
}

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: String::new(),
    }
}

impl MetabaseApi for FakeMetabase {
    fn login(&mut self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("login".to_string());
        match self.login_status {
            Some(status) if !(200..300).contains(&status) => Err(status_error(status)),
            _ => Ok(()),
        }
    }

    fn list_collection_items(&self, collection_id: i64) -> Result<Vec<Value>, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("list {collection_id}"));
        if let Some(status) = self.failing_collections.get(&collection_id) {
            return Err(status_error(*status));
        }
        self.collections
            .get(&collection_id)
            .cloned()
            .ok_or_else(|| status_error(404))
    }

    fn delete_item(&self, item: &Item) -> Result<u16, ApiError> {
        self.calls.borrow_mut().push(format!("delete {item}"));
        let status = self.delete_statuses.get(item).copied().unwrap_or(204);
        if (200..300).contains(&status) {
            Ok(status)
        } else {
            Err(status_error(status))
        }
    }

    fn base_url(&self) -> &str {
        "https://metabase.test"
    }
}
