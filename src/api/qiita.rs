// Qiita API v2 client
// Bearer-token authenticated GETs against users and items

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ContribError, Result};
use crate::models::item::{ItemPayload, ItemSummary};
use crate::models::user::UserProfile;
use crate::utils::config::PER_PAGE;

/// Qiita REST API client
#[derive(Clone)]
pub struct QiitaClient {
    client: Client,
    base_url: String,
    token: String,
}

// Keep the token out of debug output
impl std::fmt::Debug for QiitaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QiitaClient")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

impl QiitaClient {
    pub fn new(client: Client, base_url: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    /// `page` adds the `page`/`per_page` query pair.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, page: Option<u32>) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(page) = page {
            request = request.query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())]);
        }

        debug!("GET {} page={:?}", url, page);
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!("Qiita error: {}", body);
            return Err(ContribError::Status { url, status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Profile counts of a user
    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile> {
        self.get_json(&format!("users/{}", user_id), None).await
    }

    /// One page (1-based) of the items a user wrote
    pub async fn get_user_items_page(&self, user_id: &str, page: u32) -> Result<Vec<ItemSummary>> {
        self.get_json(&format!("users/{}/items", user_id), Some(page))
            .await
    }

    /// Item metadata
    pub async fn get_item(&self, item_id: &str) -> Result<ItemPayload> {
        self.get_json(&format!("items/{}", item_id), None).await
    }

    /// One page (1-based) of an item's stockers. Only the length matters,
    /// so entries are kept as raw JSON.
    pub async fn get_stockers_page(&self, item_id: &str, page: u32) -> Result<Vec<serde_json::Value>> {
        self.get_json(&format!("items/{}/stockers", item_id), Some(page))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header as header_eq, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> QiitaClient {
        QiitaClient::new(Client::new(), &server.uri(), "secret")
    }

    #[tokio::test]
    async fn test_get_user_sends_auth_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .and(header_eq("Authorization", "Bearer secret"))
            .and(header_eq("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "alice",
                "followees_count": 3,
                "followers_count": 42,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = client(&server).get_user("alice").await.unwrap();
        assert_eq!(profile.followees_count, 3);
        assert_eq!(profile.followers_count, 42);
    }

    #[tokio::test]
    async fn test_paged_request_uses_fixed_page_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/items"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "a1" },
                { "id": "a2" },
            ])))
            .mount(&server)
            .await;

        let page = client(&server).get_user_items_page("alice", 2).await.unwrap();
        let ids: Vec<_> = page.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created_at": "2024-01-01T00:00:00+09:00",
                "updated_at": "2024-01-02T00:00:00+09:00",
                "likes_count": 1,
                "comments_count": 0,
            })))
            .mount(&server)
            .await;

        let api = QiitaClient::new(Client::new(), &format!("{}/", server.uri()), "secret");
        let item = api.get_item("abc").await.unwrap();
        assert_eq!(item.likes_count, 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not found",
                "type": "not_found",
            })))
            .mount(&server)
            .await;

        let err = client(&server).get_user("ghost").await.unwrap_err();
        match err {
            ContribError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "alice" })))
            .mount(&server)
            .await;

        let err = client(&server).get_user("alice").await.unwrap_err();
        assert!(matches!(err, ContribError::Decode(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let api = QiitaClient::new(Client::new(), "https://example.com", "secret");
        assert!(!format!("{:?}", api).contains("secret"));
    }
}
