//! Loopback HTTP server serving canned responses to tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

type Routes = Arc<Mutex<HashMap<String, Route>>>;

#[derive(Clone)]
struct Route {
    status: u16,
    content_type: &'static str,
    body: String,
}

/// Route table for a stub server that has not been started yet.
#[derive(Default)]
pub(crate) struct StubServer {
    routes: HashMap<String, Route>,
}

/// A started stub server. Routes can still be added, and every request
/// target (path plus query) is recorded in arrival order.
pub(crate) struct RunningStub {
    base_url: String,
    routes: Routes,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(path.to_string(), route(200, "application/json", body));
        self
    }

    pub fn html(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(path.to_string(), route(status, "text/html; charset=utf-8", body));
        self
    }

    pub async fn start(self) -> RunningStub {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Routes = Arc::new(Mutex::new(self.routes));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (task_routes, task_requests) = (Arc::clone(&routes), Arc::clone(&requests));
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = Arc::clone(&task_routes);
                let requests = Arc::clone(&task_requests);
                tokio::spawn(serve(socket, routes, requests));
            }
        });

        RunningStub {
            base_url: format!("http://{addr}"),
            routes,
            requests,
        }
    }
}

impl RunningStub {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn with_json(self, path: &str, body: &str) -> Self {
        self.insert(path, route(200, "application/json", body));
        self
    }

    pub fn with_html(self, path: &str, status: u16, body: &str) -> Self {
        self.insert(path, route(status, "text/html; charset=utf-8", body));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn insert(&self, path: &str, route: Route) {
        self.routes.lock().unwrap().insert(path.to_string(), route);
    }
}

fn route(status: u16, content_type: &'static str, body: &str) -> Route {
    Route {
        status,
        content_type,
        body: body.to_string(),
    }
}

async fn serve(mut socket: TcpStream, routes: Routes, requests: Arc<Mutex<Vec<String>>>) {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&head);
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let path = target.split('?').next().unwrap_or("/").to_string();
    requests.lock().unwrap().push(target);

    let found = routes.lock().unwrap().get(&path).cloned();
    let Route {
        status,
        content_type,
        body,
    } = found.unwrap_or_else(|| route(404, "text/plain", "not found"));

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        if status == 200 { "OK" } else { "Stub" },
        body.len(),
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// HTTP client for tests: no proxy, so loopback requests stay local.
pub(crate) fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// URL of a loopback port nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
