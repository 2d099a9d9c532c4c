

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::base::{ApiError, MetabaseApi};
use super::models::{Item, ItemModel};
use crate::core::config::PurgeConfig;
use crate::utils::safe_truncate_ellipsis;


const SESSION_HEADER: &str = "X-Metabase-Session";

const MAX_ERROR_BODY_CHARS: usize = 200;


#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CollectionItemsResponse {
    #[serde(default)]
    data: Vec<Value>,
}


pub fn session_url(base_url: &str) -> String {
    format!("{}/api/session", base_url.trim_end_matches('/'))
}

pub fn collection_items_url(base_url: &str, collection_id: i64) -> String {
    format!(
        "{}/api/collection/{}/items",
        base_url.trim_end_matches('/'),
        collection_id
    )
}

pub fn delete_url(base_url: &str, item: &Item) -> String {
    format!("{}/api/{}/{}", base_url.trim_end_matches('/'), item.model, item.id)
}

/// Query for a collection listing: every supported model, plus questions
/// that live inside dashboards.
pub fn collection_items_query() -> Vec<(&'static str, &'static str)> {
    let mut query: Vec<_> = ItemModel::ALL
        .iter()
        .map(|model| ("models", model.as_str()))
        .collect();
    query.push(("show_dashboard_questions", "true"));
    query
}


/// Blocking Metabase client holding one authenticated session.
pub struct MetabaseClient {
    base_url: String,
    username: String,
    password: String,
    session_id: Option<String>,
    client: Client,
}

impl MetabaseClient {

    pub fn new(config: &PurgeConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url())?;

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for {}", base_url);
        }

        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!("MetabaseClient created for {}", config.base_url());

        Ok(Self {
            base_url: config.base_url().to_string(),
            username: config.user.clone(),
            password: config.password.clone(),
            session_id: None,
            client,
        })
    }


    fn is_authenticated(&self) -> bool {
        self.session_id.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_id {
            Some(id) => request.header(SESSION_HEADER, id),
            None => request,
        }
    }
}


fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body: safe_truncate_ellipsis(body.trim(), MAX_ERROR_BODY_CHARS),
    })
}

impl MetabaseApi for MetabaseClient {
    fn login(&mut self) -> Result<(), ApiError> {
        let url = session_url(&self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                username: &self.username,
                password: &self.password,
            })
            .send()?;
        let body = check_status(response)?.text()?;

        self.session_id = serde_json::from_str::<SessionResponse>(&body)
            .ok()
            .and_then(|s| s.id);
        if !self.is_authenticated() {
            debug!("Session response carried no id, relying on the session cookie");
        }
        Ok(())
    }

    fn list_collection_items(&self, collection_id: i64) -> Result<Vec<Value>, ApiError> {
        let url = collection_items_url(&self.base_url, collection_id);
        debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .query(&collection_items_query())
            .send()?;
        let body = check_status(response)?.text()?;
        let listing: CollectionItemsResponse = serde_json::from_str(&body)?;

        debug!(
            "Collection {} returned {} entries",
            collection_id,
            listing.data.len()
        );
        Ok(listing.data)
    }

    fn delete_item(&self, item: &Item) -> Result<u16, ApiError> {
        let url = delete_url(&self.base_url, item);
        debug!("DELETE {}", url);

        let response = self.authorize(self.client.delete(&url)).send()?;
        let response = check_status(response)?;
        Ok(response.status().as_u16())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
