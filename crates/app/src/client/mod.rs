//! HTTP client for the external catalog service.

use std::borrow::Cow;

use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

mod errors;

pub use errors::{ApiError, CatalogError};
pub(crate) use errors::ContextExt;

/// Catalog service used when nothing else is configured.
pub const DEFAULT_CATALOG_API_URL: &str = "https://api.catalog.dev.mktlab.app";

const UNREADABLE_BODY: &str = "Unknown error";

/// Configuration for connecting to the catalog service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog base URL, e.g. `"https://api.catalog.dev.mktlab.app"`.
    pub base_url: String,

    /// `Authorization` header value sent with every request.
    pub authorization: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_API_URL.to_string(),
            authorization: None,
        }
    }
}

/// JSON-over-HTTP client for the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    authorization: Option<String>,
    http: Client,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: config.authorization,
            http: Client::new(),
        }
    }

    /// Absolute URL for a catalog endpoint such as `/products`.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// `GET` an endpoint and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-2xx status or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = execute(self.request(Method::GET, endpoint)).await?;

        decode(response).await
    }

    /// Send a JSON body to an endpoint and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-2xx status or an
    /// undecodable body.
    pub async fn send<B, T>(&self, method: Method, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = execute(self.request(method, endpoint).json(body)).await?;

        decode(response).await
    }

    /// `DELETE` an endpoint and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-2xx status or an
    /// undecodable body.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = execute(self.request(Method::DELETE, endpoint)).await?;

        decode(response).await
    }

    /// `DELETE` an endpoint, ignoring whatever body comes back.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-2xx status.
    pub async fn delete_empty(&self, endpoint: &str) -> Result<(), ApiError> {
        execute(self.request(Method::DELETE, endpoint)).await?;

        Ok(())
    }

    /// A bare request carrying neither the JSON content type nor the
    /// configured credentials.
    pub(crate) fn raw_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);

        debug!(%method, %url, "forwarding to catalog");

        self.http.request(method, url)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);

        debug!(%method, %url, "fetching from catalog");

        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        match &self.authorization {
            Some(authorization) => builder.header(AUTHORIZATION, authorization),
            None => builder,
        }
    }
}

/// Percent-encode an identifier as exactly one path segment.
///
/// # Errors
///
/// Returns [`ApiError::Identifier`] for identifiers that would resolve to a
/// different path no matter how they are encoded: empty, `.` and `..`.
pub fn path_segment(id: &str) -> Result<Cow<'_, str>, ApiError> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::Identifier { id: id.to_string() });
    }

    Ok(urlencoding::encode(id))
}

async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_error| UNREADABLE_BODY.to_string());

        return Err(ApiError::Status { status, body });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server, ServerGuard};
    use reqwest::StatusCode;
    use serde::Deserialize;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    fn client(server: &ServerGuard, authorization: Option<&str>) -> CatalogClient {
        CatalogClient::new(ClientConfig {
            base_url: format!("{}/", server.url()),
            authorization: authorization.map(ToString::to_string),
        })
    }

    #[tokio::test]
    async fn get_decodes_json_and_sends_headers() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/things/1")
            .match_header("content-type", "application/json")
            .match_header("authorization", "Bearer abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "name": "widget" }).to_string())
            .create_async()
            .await;

        let thing: Thing = client(&server, Some("Bearer abc")).get("/things/1").await?;

        assert_eq!(
            thing,
            Thing {
                name: "widget".to_string()
            }
        );

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_carries_body_text() -> TestResult {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/things/1")
            .with_status(404)
            .with_body("no such thing")
            .create_async()
            .await;

        let result = client(&server, None).get::<Thing>("/things/1").await;

        assert!(
            matches!(
                &result,
                Err(ApiError::Status { status, body })
                    if *status == StatusCode::NOT_FOUND && body == "no such thing"
            ),
            "expected 404 with body text, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() -> TestResult {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/things/1")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let result = client(&server, None).get::<Thing>("/things/1").await;

        assert!(
            matches!(result, Err(ApiError::Decode(_))),
            "expected decode error, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn send_serializes_body() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/things")
            .match_body(Matcher::Json(json!({ "name": "gadget" })))
            .with_status(201)
            .with_body(json!({ "name": "gadget" }).to_string())
            .create_async()
            .await;

        let created: Thing = client(&server, None)
            .send(Method::POST, "/things", &json!({ "name": "gadget" }))
            .await?;

        assert_eq!(created.name, "gadget");

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn delete_empty_ignores_body() -> TestResult {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("DELETE", "/things/1")
            .with_status(204)
            .create_async()
            .await;

        client(&server, None).delete_empty("/things/1").await?;

        mock.assert_async().await;

        Ok(())
    }

    #[test]
    fn path_segment_escapes_separators() -> TestResult {
        assert_eq!(path_segment("del-1")?, "del-1");
        assert_eq!(
            path_segment("../../../categories/cat-1")?,
            "..%2F..%2F..%2Fcategories%2Fcat-1"
        );
        assert_eq!(path_segment("a?b#c")?, "a%3Fb%23c");

        Ok(())
    }

    #[test]
    fn path_segment_rejects_dot_segments() {
        for id in ["", ".", ".."] {
            let result = path_segment(id);

            assert!(
                matches!(&result, Err(ApiError::Identifier { id: rejected }) if rejected == id),
                "expected {id:?} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = CatalogClient::new(ClientConfig {
            base_url: "https://catalog.example/".to_string(),
            authorization: None,
        });

        assert_eq!(client.url("/products"), "https://catalog.example/products");
    }
}
