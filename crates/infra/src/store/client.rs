//! Record store client
//!
//! Typed request/response access to the record service's collections over
//! a PostgREST-style REST interface. Supports filtered select, insert
//! (returning the stored representation), partial update, and delete.
//!
//! Failures surface once: there is no automatic retry, and no timeout is
//! enforced unless an operator configures one on the transport.

use std::time::Duration;

use heypage_domain::StoreConfig;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::errors::StoreApiError;

/// Configuration for the record store client
#[derive(Debug, Clone)]
pub struct RecordStoreConfig {
    /// Base URL of the REST endpoint (e.g. `https://xyz.supabase.co/rest/v1`)
    pub base_url: String,
    /// Opaque API key sent with every request
    pub api_key: String,
    /// Optional transport timeout; `None` leaves the connection unbounded
    pub timeout: Option<Duration>,
}

impl Default for RecordStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321/rest/v1".to_string(),
            api_key: String::new(),
            timeout: None,
        }
    }
}

impl From<&StoreConfig> for RecordStoreConfig {
    fn from(config: &StoreConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// Column equality filter (`?column=eq.value`)
#[derive(Debug, Clone)]
pub struct Filter {
    column: String,
    value: String,
}

impl Filter {
    /// Match rows where `column` equals `value`.
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self { column: column.into(), value: value.to_string() }
    }

    fn query_pair(&self) -> (String, String) {
        (self.column.clone(), format!("eq.{}", self.value))
    }
}

/// Single-column ordering (`?order=column.asc`)
#[derive(Debug, Clone)]
pub struct Order {
    column: String,
    ascending: bool,
}

impl Order {
    /// Order rows by `column` ascending.
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), ascending: true }
    }

    /// Order rows by `column` descending.
    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), ascending: false }
    }

    fn query_pair(&self) -> (String, String) {
        let direction = if self.ascending { "asc" } else { "desc" };
        ("order".to_string(), format!("{}.{}", self.column, direction))
    }
}

/// HTTP client for the record service
pub struct RecordStoreClient {
    http: reqwest::Client,
    config: RecordStoreConfig,
}

impl RecordStoreClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns `StoreApiError::Config` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: RecordStoreConfig) -> Result<Self, StoreApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| StoreApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Select rows from a collection.
    ///
    /// # Errors
    /// Returns an error if the request fails, the store answers with a
    /// non-success status, or the rows cannot be deserialized.
    #[instrument(skip(self, filters, order), fields(collection = %collection))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[Filter],
        order: Option<Order>,
    ) -> Result<Vec<T>, StoreApiError> {
        let mut query: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();
        if let Some(order) = order {
            query.push(order.query_pair());
        }

        debug!(?query, "select");

        let request = self
            .http
            .get(self.collection_url(collection))
            .query(&query);
        let response = self.send(request).await?;

        response
            .json()
            .await
            .map_err(|e| StoreApiError::Decode(e.to_string()))
    }

    /// Insert a row and return the stored representation (the store
    /// assigns the id).
    ///
    /// # Errors
    /// Returns an error if the request fails, the store answers with a
    /// non-success status, or no representation comes back.
    #[instrument(skip(self, row), fields(collection = %collection))]
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        collection: &str,
        row: &T,
    ) -> Result<R, StoreApiError> {
        debug!("insert");

        let request = self
            .http
            .post(self.collection_url(collection))
            .header("Prefer", "return=representation")
            .json(row);
        let response = self.send(request).await?;

        // The store answers an insert with a one-element array.
        let mut rows: Vec<R> = response
            .json()
            .await
            .map_err(|e| StoreApiError::Decode(e.to_string()))?;
        rows.pop().ok_or(StoreApiError::MissingRepresentation)
    }

    /// Apply a partial update to every row matching the filters.
    ///
    /// # Errors
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    #[instrument(skip(self, filters, fields), fields(collection = %collection))]
    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        filters: &[Filter],
        fields: &T,
    ) -> Result<(), StoreApiError> {
        let query: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();

        debug!(?query, "update");

        let request = self
            .http
            .patch(self.collection_url(collection))
            .query(&query)
            .json(fields);
        self.send(request).await?;
        Ok(())
    }

    /// Delete every row matching the filters.
    ///
    /// # Errors
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    #[instrument(skip(self, filters), fields(collection = %collection))]
    pub async fn delete(&self, collection: &str, filters: &[Filter]) -> Result<(), StoreApiError> {
        let query: Vec<(String, String)> = filters.iter().map(Filter::query_pair).collect();

        debug!(?query, "delete");

        let request = self.http.delete(self.collection_url(collection)).query(&query);
        self.send(request).await?;
        Ok(())
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), collection)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreApiError> {
        let response = request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response, StoreApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StoreApiError::Status { status: status.as_u16(), body })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestRow {
        id: String,
        title: String,
    }

    async fn client_for(server: &MockServer) -> RecordStoreClient {
        let config = RecordStoreConfig {
            base_url: server.uri(),
            api_key: "test-key".into(),
            timeout: None,
        };
        RecordStoreClient::new(config).expect("build client")
    }

    #[tokio::test]
    async fn test_select_builds_filters_and_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/links"))
            .and(query_param("user_id", "eq.user-1"))
            .and(query_param("is_archived", "eq.false"))
            .and(query_param("order", "position.asc"))
            .and(header("apikey", "test-key"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "l1", "title": "First"},
                {"id": "l2", "title": "Second"}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let rows: Vec<TestRow> = client
            .select(
                "links",
                &[Filter::eq("user_id", "user-1"), Filter::eq("is_archived", false)],
                Some(Order::asc("position")),
            )
            .await
            .expect("select");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "l1");
    }

    #[tokio::test]
    async fn test_insert_returns_the_stored_representation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/links"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!({"title": "New"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!([{"id": "assigned-id", "title": "New"}])),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let row: TestRow =
            client.insert("links", &json!({"title": "New"})).await.expect("insert");

        assert_eq!(row.id, "assigned-id");
    }

    #[tokio::test]
    async fn test_insert_without_representation_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<TestRow, _> = client.insert("links", &json!({"title": "New"})).await;

        assert!(matches!(result.unwrap_err(), StoreApiError::MissingRepresentation));
    }

    #[tokio::test]
    async fn test_update_patches_matching_rows() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/links"))
            .and(query_param("id", "eq.l1"))
            .and(query_param("user_id", "eq.user-1"))
            .and(body_json(json!({"is_archived": true})))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .update(
                "links",
                &[Filter::eq("id", "l1"), Filter::eq("user_id", "user-1")],
                &json!({"is_archived": true}),
            )
            .await
            .expect("update");
    }

    #[tokio::test]
    async fn test_delete_targets_matching_rows() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/links"))
            .and(query_param("id", "eq.l1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.delete("links", &[Filter::eq("id", "l1")]).await.expect("delete");
    }

    #[tokio::test]
    async fn test_error_status_preserves_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result: Result<Vec<TestRow>, _> = client.select("links", &[], None).await;

        match result.unwrap_err() {
            StoreApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
