//! Request builders and the per-endpoint pipeline for the todo API.
//!
//! # Design
//! `ApiClient` holds a read-only `ClientConfig` and a `Transport`. Each
//! endpoint is split into a pure `build_*` method that produces an
//! `HttpRequest` and an async method that runs
//! build → send → validate → decode. The first failing stage ends the call;
//! nothing is retried or cached.
//!
//! # Panics
//! The `build_*` methods panic if the configured base URL joined with the
//! endpoint path is not a valid URL. `ClientConfig` rejects malformed base
//! URLs when it is created, so this only fires for a configuration defect.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{self, AUTHORIZATION};
use crate::config::ClientConfig;
use crate::decode::decode;
use crate::error::ApiError;
use crate::http::{Headers, HttpMethod, HttpRequest};
use crate::transport::Transport;
use crate::types::{CreateUserResponse, Todo, Token, User};
use crate::validate::validate;

/// Client context for the todo API: configuration plus the transport calls
/// go through. Construct one at startup and pass it where calls are made.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /users` with the user as JSON and the default headers.
    pub fn build_create_user(&self, user: &User) -> HttpRequest {
        self.request(
            HttpMethod::Post,
            "/users",
            self.config.default_headers().clone(),
            Some(json_body(user)),
        )
    }

    /// `POST /login` with Basic credentials and no body.
    pub fn build_login(&self, email: &str, password: &str) -> HttpRequest {
        let headers = self
            .config
            .headers_with(AUTHORIZATION, auth::basic(email, password));
        self.request(HttpMethod::Post, "/login", headers, None)
    }

    /// `POST /todos` with a Bearer token and the todo as JSON.
    pub fn build_post_todo(&self, token: &str, todo: &Todo) -> HttpRequest {
        self.request(
            HttpMethod::Post,
            "/todos",
            self.bearer_headers(token),
            Some(json_body(todo)),
        )
    }

    /// `GET /todos` with a Bearer token.
    pub fn build_get_todos(&self, token: &str) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos", self.bearer_headers(token), None)
    }

    /// `DELETE /todos/{id}` with a Bearer token.
    pub fn build_delete_todo(&self, token: &str, id: i64) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            &format!("/todos/{id}"),
            self.bearer_headers(token),
            None,
        )
    }

    fn bearer_headers(&self, token: &str) -> Headers {
        self.config.headers_with(AUTHORIZATION, auth::bearer(token))
    }

    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        headers: Headers,
        body: Option<Bytes>,
    ) -> HttpRequest {
        let raw = format!("{}{path}", self.config.base_url());
        let url = Url::parse(&raw).unwrap_or_else(|e| panic!("invalid endpoint URL {raw:?}: {e}"));
        HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: self.config.timeout(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn create_user(&self, user: &User) -> Result<CreateUserResponse, ApiError> {
        self.execute(self.build_create_user(user)).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        self.execute(self.build_login(email, password)).await
    }

    pub async fn post_todo(&self, token: &str, todo: &Todo) -> Result<Todo, ApiError> {
        self.execute(self.build_post_todo(token, todo)).await
    }

    pub async fn get_todos(&self, token: &str) -> Result<Vec<Todo>, ApiError> {
        self.execute(self.build_get_todos(token)).await
    }

    /// Delete a todo. The server replies with the removed record.
    pub async fn delete_todo(&self, token: &str, id: i64) -> Result<Todo, ApiError> {
        self.execute(self.build_delete_todo(token, id)).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "sending request");

        let result = self.round_trip(request).await;
        if let Err(err) = &result {
            warn!(%method, %url, error = %err, "request failed");
        }
        result
    }

    async fn round_trip<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await?;
        debug!(status = ?response.status(), bytes = response.body.len(), "response received");
        let body = validate(response)?;
        Ok(decode(&body)?)
    }
}

fn json_body<B: Serialize>(value: &B) -> Bytes {
    match serde_json::to_vec(value) {
        Ok(bytes) => Bytes::from(bytes),
        // Request records are plain strings and integers.
        Err(e) => panic!("request body failed to serialize: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{TransportError, ValidationError};
    use crate::transport::MockTransport;
    use std::time::Duration;

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(ClientConfig::default(), MockTransport::new())
    }

    fn user() -> User {
        User {
            name: "name".to_string(),
            email: "email".to_string(),
            password: "password".to_string(),
            verify_password: "password".to_string(),
        }
    }

    const TOKEN: &str = "ZW1haWw6cGFzc3dvcmQ=";

    #[test]
    fn build_create_user_produces_correct_request() {
        let req = client().build_create_user(&user());
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url.as_str(), "http://localhost:8080/users");
        assert_eq!(&req.headers, ClientConfig::default().default_headers());
        assert_eq!(req.timeout, Duration::from_secs(10));
        let body: User = decode(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, user());
    }

    #[test]
    fn build_login_produces_correct_request() {
        let req = client().build_login("email", "password");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url.as_str(), "http://localhost:8080/login");
        assert_eq!(req.headers.len(), 3);
        assert_eq!(
            req.headers.get("Authorization"),
            Some("Basic ZW1haWw6cGFzc3dvcmQ=")
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_post_todo_produces_correct_request() {
        let todo = Todo {
            id: Some(1),
            title: "test1".to_string(),
        };
        let req = client().build_post_todo(TOKEN, &todo);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url.as_str(), "http://localhost:8080/todos");
        assert_eq!(req.headers.len(), 3);
        assert_eq!(
            req.headers.get("Authorization"),
            Some("Bearer ZW1haWw6cGFzc3dvcmQ=")
        );
        let body: Todo = decode(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, todo);
    }

    #[test]
    fn build_post_todo_omits_missing_id() {
        let req = client().build_post_todo(TOKEN, &Todo::new("fresh"));
        let body: serde_json::Value = decode(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "fresh" }));
    }

    #[test]
    fn build_get_todos_produces_correct_request() {
        let req = client().build_get_todos(TOKEN);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url.as_str(), "http://localhost:8080/todos");
        assert_eq!(req.headers.len(), 3);
        assert_eq!(req.headers.get("Authorization"), Some("Bearer ZW1haWw6cGFzc3dvcmQ="));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(TOKEN, 1);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url.as_str(), "http://localhost:8080/todos/1");
        assert_eq!(req.headers.len(), 3);
        assert!(req.body.is_none());
    }

    #[test]
    fn builders_are_deterministic() {
        let c = client();
        assert_eq!(c.build_create_user(&user()), c.build_create_user(&user()));
        assert_eq!(c.build_login("e", "p"), c.build_login("e", "p"));
        assert_eq!(
            c.build_post_todo(TOKEN, &Todo::new("t")),
            c.build_post_todo(TOKEN, &Todo::new("t"))
        );
        assert_eq!(c.build_get_todos(TOKEN), c.build_get_todos(TOKEN));
        assert_eq!(c.build_delete_todo(TOKEN, 7), c.build_delete_todo(TOKEN, 7));
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let config = ClientConfig::new("http://localhost:3000/api/").unwrap();
        let c = ApiClient::new(config, MockTransport::new());
        assert_eq!(c.build_get_todos(TOKEN).url.as_str(), "http://localhost:3000/api/todos");
    }

    #[test]
    fn configured_timeout_is_carried() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(3));
        let c = ApiClient::new(config, MockTransport::new());
        assert_eq!(c.build_login("e", "p").timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn delete_todo_decodes_removed_record() {
        let mock = MockTransport::new()
            .with_body("http://localhost:8080/todos/1", r#"{"id":1,"title":"test"}"#)
            .with_status(200);
        let c = ApiClient::new(ClientConfig::default(), mock);
        let todo = c.delete_todo("token", 1).await.unwrap();
        assert_eq!(todo.id, Some(1));
        assert_eq!(c.transport().requests()[0].method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn status_failure_skips_decode() {
        // The body is not JSON; a decode attempt would produce a DecodeError.
        let mock = MockTransport::new()
            .with_body("http://localhost:8080/todos", "{{}")
            .with_status(500);
        let c = ApiClient::new(ClientConfig::default(), mock);
        let err = c.get_todos("token").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::StatusCode(500))));
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let mock = MockTransport::new().with_error(TransportError::Cancelled);
        let c = ApiClient::new(ClientConfig::default(), mock);
        let err = c.login("email", "password").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Cancelled)));
    }
}
