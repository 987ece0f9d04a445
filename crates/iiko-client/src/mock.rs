//! Scripted in-memory transport for tests.
//!
//! Routes match on a substring of the request path (the URL without its
//! query string); the first matching route wins. Unmatched requests get
//! `404`. Every executed request is recorded in order.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use iiko_client::mock::{MockReply, MockTransport};
//!
//! let transport = Arc::new(
//!     MockTransport::new()
//!         .route("api/auth", MockReply::ok("tok123"))
//!         .route("api/logout", MockReply::ok("")),
//! );
//! assert!(transport.requests().is_empty());
//! ```

use std::sync::Mutex;

use crate::error::{Error, ErrorKind, Result};
use crate::request::HttpRequest;
use crate::response::HttpResponse;
use crate::transport::Transport;

/// Scripted outcome for a route.
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond { status: u16, body: String },
    Timeout,
    ConnectionRefused,
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        MockReply::Respond {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(String, MockReply)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route; earlier routes take precedence.
    pub fn route(self, path_fragment: impl Into<String>, reply: MockReply) -> Self {
        self.set_route(path_fragment, reply);
        self
    }

    /// Replace (or add) the reply of a route at any time.
    pub fn set_route(&self, path_fragment: impl Into<String>, reply: MockReply) {
        let path_fragment = path_fragment.into();
        let mut routes = lock(&self.routes);
        match routes.iter_mut().find(|(p, _)| *p == path_fragment) {
            Some(route) => route.1 = reply,
            None => routes.push((path_fragment, reply)),
        }
    }

    /// Every request executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// URLs of every request executed so far, oldest first.
    pub fn urls(&self) -> Vec<String> {
        lock(&self.requests).iter().map(|r| r.url.clone()).collect()
    }

    /// Number of executed requests whose path contains `path_fragment`.
    pub fn count(&self, path_fragment: &str) -> usize {
        lock(&self.requests)
            .iter()
            .filter(|r| r.path().contains(path_fragment))
            .count()
    }

    pub fn clear(&self) {
        lock(&self.requests).clear();
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        lock(&self.requests).push(request.clone());

        let reply = lock(&self.routes)
            .iter()
            .find(|(fragment, _)| request.path().contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(MockReply::Respond { status, body }) => Ok(HttpResponse::new(status, body)),
            Some(MockReply::Timeout) => Err(Error::new(ErrorKind::Timeout)),
            Some(MockReply::ConnectionRefused) => Err(Error::new(ErrorKind::Connection(
                "connection refused".to_string(),
            ))),
            None => Ok(HttpResponse::new(404, "")),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;
    use std::time::Duration;

    fn get(url: &str) -> HttpRequest {
        HttpRequest::new(Method::Get, url, Duration::from_secs(1))
    }

    #[test]
    fn test_routes_and_recording() {
        let transport = MockTransport::new()
            .route("api/auth", MockReply::ok("tok"))
            .route("api/slow", MockReply::Timeout);

        let response = transport.execute(&get("http://h/resto/api/auth?login=u")).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(&response.body[..], b"tok");

        let err = transport.execute(&get("http://h/resto/api/slow")).unwrap_err();
        assert!(err.is_timeout());

        let response = transport.execute(&get("http://h/resto/api/other")).unwrap();
        assert_eq!(response.status, 404);

        assert_eq!(transport.requests().len(), 3);
        assert_eq!(transport.count("api/auth"), 1);
        assert_eq!(transport.urls()[2], "http://h/resto/api/other");
    }

    #[test]
    fn test_route_matches_path_not_query() {
        let transport = MockTransport::new().route("api/auth", MockReply::ok("tok"));
        let response = transport
            .execute(&get("http://h/resto/api/employees?note=api/auth"))
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn test_set_route_replaces_reply() {
        let transport = MockTransport::new().route("api/auth", MockReply::ok("one"));
        transport.set_route("api/auth", MockReply::ConnectionRefused);
        let err = transport.execute(&get("http://h/api/auth")).unwrap_err();
        assert!(err.is_no_response());
    }
}
