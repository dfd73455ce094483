//! REST client for the news service.
//!
//! One client instance covers the whole surface: form-encoded login,
//! article list and detail reads, create/update submission, and delete.
//! Every article request carries the authorization header rendered from
//! the shared [`ApiKeyStore`], read at call time.
//!
//! Failures are classified here, once, by response status; callers only
//! ever see the typed taxonomy from `newsdesk-core`. No retries.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, error, instrument};

use newsdesk_core::article::{Article, Submission};
use newsdesk_core::errors::{AuthError, FetchError};
use newsdesk_core::identity::Identity;

use crate::api_key::ApiKeyStore;

/// Client for the news REST API.
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    keys: Arc<ApiKeyStore>,
}

impl NewsClient {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, keys: Arc<ApiKeyStore>) -> Self {
        Self::with_client(base_url, keys, reqwest::Client::new())
    }

    /// Create a client using a shared HTTP client.
    #[must_use]
    pub fn with_client(
        base_url: impl Into<String>,
        keys: Arc<ApiKeyStore>,
        http: reqwest::Client,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            keys,
        }
    }

    /// The key store this client reads its authorization from.
    #[must_use]
    pub fn keys(&self) -> &Arc<ApiKeyStore> {
        &self.keys
    }

    fn list_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn article_url(&self) -> String {
        format!("{}/article", self.base_url)
    }

    fn login_url(&self) -> String {
        format!("{}/login", self.base_url)
    }

    /// Headers for article requests: JSON content type plus the
    /// authorization value as of this call.
    fn article_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = self.keys.authorization_value();
        let value = HeaderValue::from_str(&auth)
            .map_err(|e| FetchError::Decode(format!("invalid authorization header: {e}")))?;
        let _ = headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Authenticate with the service.
    ///
    /// Sends form-encoded `username`/`passwd` and returns the identity the
    /// server assigned. Classification: 401 means bad credentials, 400 a
    /// malformed request, 5xx a server fault; transport failures surface
    /// as [`AuthError::NetworkUnreachable`].
    #[instrument(skip_all, fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let response = self
            .http
            .post(self.login_url())
            .form(&[("username", username), ("passwd", password)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "login transport failure");
                AuthError::NetworkUnreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = classify_auth_failure(status, response.text().await.unwrap_or_default());
            error!(status = status.as_u16(), "login rejected");
            return Err(err);
        }

        let identity: Identity = response.json().await.map_err(|e| AuthError::Unknown {
            status: status.as_u16(),
            message: format!("malformed login response: {e}"),
        })?;
        debug!(username = %identity.username, "login succeeded");
        Ok(identity)
    }

    /// Fetch the article list (list shape: thumbnails, no body).
    #[instrument(skip_all)]
    pub async fn articles(&self) -> Result<Vec<Article>, FetchError> {
        let headers = self.article_headers()?;
        let response = self
            .http
            .get(self.list_url())
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;

        let articles: Vec<Article> = decode(response).await?;
        debug!(count = articles.len(), "fetched article list");
        Ok(articles)
    }

    /// Fetch a single article (detail shape: body and image data).
    #[instrument(skip_all, fields(id = id))]
    pub async fn article(&self, id: i64) -> Result<Article, FetchError> {
        let headers = self.article_headers()?;
        let url = format!("{}/{id}", self.article_url());
        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;

        decode(response).await
    }

    /// Submit an article write and return the server's persisted version.
    ///
    /// A [`Submission::Create`] posts without an id and the response
    /// carries the server-assigned one; a [`Submission::Update`] posts the
    /// full article and refreshes its timestamps server-side.
    #[instrument(skip_all, fields(id = submission.id()))]
    pub async fn submit(&self, submission: &Submission) -> Result<Article, FetchError> {
        let headers = self.article_headers()?;
        let response = self
            .http
            .post(self.article_url())
            .headers(headers)
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;

        let article: Article = decode(response).await?;
        debug!(id = article.id, "article persisted");
        Ok(article)
    }

    /// Delete an article by id.
    #[instrument(skip_all, fields(id = id))]
    pub async fn delete_article(&self, id: i64) -> Result<(), FetchError> {
        let headers = self.article_headers()?;
        let url = format!("{}/{id}", self.article_url());
        let response = self
            .http
            .delete(url)
            .headers(headers)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), id, "delete rejected");
            return Err(classify_fetch_status(status));
        }
        debug!(id, "article deleted");
        Ok(())
    }
}

/// Map a transport-level failure (no HTTP response) to the taxonomy.
fn transport_error(e: reqwest::Error) -> FetchError {
    error!(error = %e, "transport failure");
    FetchError::NetworkUnreachable
}

/// Classify a non-success article response by status.
fn classify_fetch_status(status: StatusCode) -> FetchError {
    match status.as_u16() {
        404 => FetchError::NotFound,
        401 | 403 => FetchError::Unauthorized,
        s => FetchError::Server { status: s },
    }
}

/// Classify a non-success login response by status.
fn classify_auth_failure(status: StatusCode, body: String) -> AuthError {
    match status.as_u16() {
        401 => AuthError::Unauthorized,
        400 => AuthError::BadRequest,
        s if s >= 500 => AuthError::Server { status: s },
        s => AuthError::Unknown { status: s, message: body },
    }
}

/// Check the status and parse the JSON body of an article response.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        error!(status = status.as_u16(), "article request rejected");
        return Err(classify_fetch_status(status));
    }
    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use newsdesk_core::article::ArticleDraft;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NewsClient {
        NewsClient::new(server.uri(), Arc::new(ApiKeyStore::new()))
    }

    fn wire_article(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "abstract": "abs",
            "subtitle": "sub",
            "update_date": "2024-01-01 10:00:00",
            "category": "Tech",
            "title": "X"
        })
    }

    // ── Login ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_success_returns_identity() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_string_contains("username=alice"))
            .and(body_string_contains("passwd=secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": "u1",
                "group": "g2",
                "username": "alice",
                "apikey": "ALICEKEY"
            })))
            .mount(&server)
            .await;

        let identity = client_for(&server).login("alice", "secret").await.unwrap();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.apikey, "ALICEKEY");
    }

    #[tokio::test]
    async fn login_401_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).login("alice", "wrong").await.unwrap_err();
        assert_matches!(err, AuthError::Unauthorized);
    }

    #[tokio::test]
    async fn login_500_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).login("alice", "secret").await.unwrap_err();
        assert_matches!(err, AuthError::Server { status: 503 });
    }

    #[tokio::test]
    async fn login_unreachable_server() {
        // Nothing listening on this port.
        let client = NewsClient::new("http://127.0.0.1:1", Arc::new(ApiKeyStore::new()));
        let err = client.login("alice", "secret").await.unwrap_err();
        assert_matches!(err, AuthError::NetworkUnreachable);
    }

    // ── Article list / detail ────────────────────────────────────────────

    #[tokio::test]
    async fn articles_sends_anonymous_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(header("Authorization", "PUIRESTAUTH apikey=ANON02"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([wire_article(1), wire_article(2)])),
            )
            .mount(&server)
            .await;

        let articles = client_for(&server).articles().await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, 1);
    }

    #[tokio::test]
    async fn articles_uses_key_at_call_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(header("Authorization", "PUIRESTAUTH apikey=USERKEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.keys().set_user_key("USERKEY");
        assert!(client.articles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn article_detail_parses_body() {
        let server = MockServer::start().await;
        let mut detail = wire_article(5);
        detail["body"] = json!("<p>full text</p>");
        Mock::given(method("GET"))
            .and(path("/article/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail))
            .mount(&server)
            .await;

        let article = client_for(&server).article(5).await.unwrap();
        assert_eq!(article.id, 5);
        assert_eq!(article.body.as_deref(), Some("<p>full text</p>"));
    }

    #[tokio::test]
    async fn missing_article_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).article(99).await.unwrap_err();
        assert_matches!(err, FetchError::NotFound);
    }

    #[tokio::test]
    async fn rejected_key_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).articles().await.unwrap_err();
        assert_matches!(err, FetchError::Unauthorized);
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).articles().await.unwrap_err();
        assert_matches!(err, FetchError::Decode(_));
    }

    // ── Submit / delete ──────────────────────────────────────────────────

    #[tokio::test]
    async fn create_posts_without_id_and_adopts_server_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_json(wire_article(57)))
            .mount(&server)
            .await;

        let draft = ArticleDraft {
            title: "X".into(),
            subtitle: "sub".into(),
            abstract_text: "abs".into(),
            category: "Tech".into(),
            ..ArticleDraft::default()
        };
        let client = client_for(&server);
        let created = client.submit(&Submission::Create(draft)).await.unwrap();
        assert_eq!(created.id, 57);

        // The recorded request body must not contain an id field.
        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["title"], "X");
    }

    #[tokio::test]
    async fn update_posts_with_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/article"))
            .and(body_string_contains("\"id\":57"))
            .respond_with(ResponseTemplate::new(200).set_body_json(wire_article(57)))
            .mount(&server)
            .await;

        let article: Article = serde_json::from_value(wire_article(57)).unwrap();
        let updated = client_for(&server)
            .submit(&Submission::Update(article))
            .await
            .unwrap();
        assert_eq!(updated.id, 57);
    }

    #[tokio::test]
    async fn delete_succeeds_on_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/article/7"))
            .and(header("Authorization", "PUIRESTAUTH apikey=ANON02"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        client_for(&server).delete_article(7).await.unwrap();
    }

    #[tokio::test]
    async fn delete_classifies_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/article/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).delete_article(7).await.unwrap_err();
        assert_matches!(err, FetchError::Server { status: 500 });
    }
}
