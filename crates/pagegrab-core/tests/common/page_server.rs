//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a mutable route table (raw request path -> status + body) and
//! records every requested path so tests can assert what was, and was not,
//! fetched. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: Vec<u8>,
    /// Pause after sending headers, before the body.
    delay: Option<Duration>,
}

type Routes = Arc<Mutex<HashMap<String, Route>>>;

pub struct PageServer {
    base: String,
    routes: Routes,
    hits: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    /// Starts the server on an ephemeral port; it runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
        let hits = Arc::new(Mutex::new(Vec::new()));
        {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for stream in listener.incoming().flatten() {
                    let routes = Arc::clone(&routes);
                    let hits = Arc::clone(&hits);
                    thread::spawn(move || handle(stream, &routes, &hits));
                }
            });
        }
        Self {
            base: format!("http://127.0.0.1:{}/", port),
            routes,
            hits,
        }
    }

    /// Base URL ending in `/`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Absolute URL for `path` (given without a leading `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn route(&self, path: &str, status: u16, body: &[u8]) {
        self.insert(path, status, body, None);
    }

    pub fn slow_route(&self, path: &str, body: &[u8], delay: Duration) {
        self.insert(path, 200, body, Some(delay));
    }

    fn insert(&self, path: &str, status: u16, body: &[u8], delay: Option<Duration>) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            Route {
                status,
                body: body.to_vec(),
                delay,
            },
        );
    }

    /// Paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn was_requested(&self, path: &str) -> bool {
        self.hits().iter().any(|p| p == path)
    }
}

fn handle(mut stream: TcpStream, routes: &Routes, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    let route = routes.lock().unwrap().get(&path).cloned().unwrap_or(Route {
        status: 404,
        body: b"not found".to_vec(),
        delay: None,
    });
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.body.len()
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    if let Some(delay) = route.delay {
        let _ = stream.flush();
        thread::sleep(delay);
    }
    let _ = stream.write_all(&route.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
