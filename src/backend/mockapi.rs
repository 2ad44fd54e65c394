//! HTTP backend for a mockapi.io style REST resource.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Url};

use super::wire::{self, CreateTaskBody, UpdateTaskBody};
use super::{BackendError, CreateTaskArgs, Task, TaskBackend, UpdateTaskArgs};

const RESOURCE: &str = "Task";

/// Talks to `{base_url}/Task` with JSON bodies.
#[derive(Debug, Clone)]
pub struct MockApiBackend {
    http: Client,
    base_url: Url,
}

impl MockApiBackend {
    /// Create a client with no request timeout.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client, optionally bounding every request by `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client_builder(base_url, builder)
    }

    fn with_client_builder(base_url: &str, builder: ClientBuilder) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::InvalidData(format!("invalid base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidData(format!("base url '{}' cannot be a base", base_url)));
        }

        let http = builder.build().map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/Task`
    pub fn collection_url(&self) -> Url {
        self.url_with_segments(&[RESOURCE])
    }

    /// `{base}/Task/{id}`, with the id percent-encoded as a path segment.
    pub fn task_url(&self, id: &str) -> Url {
        self.url_with_segments(&[RESOURCE, id])
    }

    fn url_with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The status is what matters; an unreadable error body is left empty
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|e| BackendError::Network(e.to_string()))
    }
}

#[async_trait]
impl TaskBackend for MockApiBackend {
    fn backend_type(&self) -> &str {
        "mockapi"
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, BackendError> {
        let body = self.send(self.http.get(self.collection_url())).await?;
        wire::parse_task_list(&body)
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        let request = self
            .http
            .post(self.collection_url())
            .json(&CreateTaskBody::from(&args));
        let body = self.send(request).await?;
        wire::parse_task(&body)
    }

    async fn update_task(&self, id: &str, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        let request = self.http.put(self.task_url(id)).json(&UpdateTaskBody::from(&args));
        let body = self.send(request).await?;
        wire::parse_task(&body)
    }

    async fn delete_task(&self, id: &str) -> Result<(), BackendError> {
        self.send(self.http.delete(self.task_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// What the server saw of a single request
    struct Received {
        request_line: String,
        headers: String,
        body: String,
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// Backend pointed at a local server that answers one request with `response`.
    async fn serve_once(response: String) -> (MockApiBackend, JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let received = read_request(&mut stream).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            received
        });

        // Loopback requests must not go through a proxy from the environment
        let backend = MockApiBackend::with_client_builder(&base_url, Client::builder().no_proxy()).unwrap();
        (backend, server)
    }

    async fn read_request(stream: &mut TcpStream) -> Received {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let read = stream.read(&mut chunk).await.unwrap();
            assert!(read > 0, "connection closed before the request was complete");
            buffer.extend_from_slice(&chunk[..read]);

            let Some(header_end) = buffer.windows(4).position(|window| window == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
            let body_start = header_end + 4;
            let body_len = content_length(&head);
            if buffer.len() < body_start + body_len {
                continue;
            }

            let mut lines = head.lines();
            let request_line = lines.next().unwrap_or_default().to_string();
            return Received {
                request_line,
                headers: lines.collect::<Vec<_>>().join("\n").to_ascii_lowercase(),
                body: String::from_utf8_lossy(&buffer[body_start..body_start + body_len]).to_string(),
            };
        }
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn fetch_parses_the_task_list() {
        let body = r#"[{"id":"1","name":"A","isActive":true},{"id":2,"name":"B","active":false}]"#;
        let (backend, server) = serve_once(http_response("200 OK", body)).await;

        let tasks = backend.fetch_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, "2");
        assert!(!tasks[1].active);

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "GET /api/Task HTTP/1.1");
    }

    #[tokio::test]
    async fn error_status_keeps_code_and_body() {
        let (backend, _server) = serve_once(http_response("500 Internal Server Error", "oops")).await;

        match backend.fetch_tasks().await {
            Err(BackendError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("expected a status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_status_survives_a_truncated_body() {
        // Promises more bytes than it sends, then hangs up
        let response = "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial".to_string();
        let (backend, _server) = serve_once(response).await;

        let err = backend.delete_task("1").await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 502, .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_data() {
        let (backend, _server) = serve_once(http_response("200 OK", "not json")).await;

        let err = backend.fetch_tasks().await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidData(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let backend = MockApiBackend::with_client_builder(&base_url, Client::builder().no_proxy()).unwrap();
        let err = backend.fetch_tasks().await.unwrap_err();
        assert!(matches!(err, BackendError::Network(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn create_posts_json_to_the_collection() {
        let reply = r#"{"id":"9","name":"Buy milk","description":"Nova tarefa criada pelo app","active":true}"#;
        let (backend, server) = serve_once(http_response("201 Created", reply)).await;

        let task = backend.create_task(CreateTaskArgs::from_name("Buy milk")).await.unwrap();
        assert_eq!(task.id, "9");

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "POST /api/Task HTTP/1.1");
        assert!(received.headers.contains("content-type: application/json"));

        let body: serde_json::Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(body["name"], "Buy milk");
        assert_eq!(body["description"], "Nova tarefa criada pelo app");
        assert_eq!(body["active"], true);
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn update_puts_both_flag_spellings() {
        let reply = r#"{"id":7,"name":"A","description":"d","isActive":false}"#;
        let (backend, server) = serve_once(http_response("200 OK", reply)).await;

        let task = backend
            .update_task("7", UpdateTaskArgs::new("A", "d", false))
            .await
            .unwrap();
        assert_eq!(task.id, "7");
        assert!(!task.active);

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "PUT /api/Task/7 HTTP/1.1");

        let body: serde_json::Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(body["isActive"], false);
        assert_eq!(body["active"], false);
        assert!(body["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn delete_targets_the_task_url() {
        let (backend, server) = serve_once(http_response("200 OK", r#"{"id":"7"}"#)).await;

        backend.delete_task("7").await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received.request_line, "DELETE /api/Task/7 HTTP/1.1");
        assert!(received.body.is_empty());
    }

    #[test]
    fn builds_collection_and_item_urls() {
        let backend = MockApiBackend::new("https://example.mockapi.io/api").unwrap();
        assert_eq!(backend.collection_url().as_str(), "https://example.mockapi.io/api/Task");
        assert_eq!(backend.task_url("42").as_str(), "https://example.mockapi.io/api/Task/42");
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let backend = MockApiBackend::new("http://localhost:3000/api/").unwrap();
        assert_eq!(backend.collection_url().as_str(), "http://localhost:3000/api/Task");
    }

    #[test]
    fn ids_are_encoded_as_a_single_segment() {
        let backend = MockApiBackend::new("http://localhost:3000/api").unwrap();
        assert_eq!(backend.task_url("a/b c").as_str(), "http://localhost:3000/api/Task/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(MockApiBackend::new("not a url").is_err());
        assert!(MockApiBackend::new("mailto:someone@example.com").is_err());
    }
}
