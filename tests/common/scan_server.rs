//! Minimal HTTP/1.1 server standing in for the scanning gateway in
//! integration tests.
//!
//! Captures every request it receives (method, path, content type, full
//! body) and answers each with a fixed status line and body, optionally
//! after a delay so tests can force out-of-order completions.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ScanServerOptions {
    /// HTTP status line to answer with, e.g. "200 OK".
    pub status: &'static str,
    /// Response body, usually a JSON verdict.
    pub body: &'static str,
    /// Delay applied before answering, after the request is fully read.
    pub delay: Duration,
}

impl Default for ScanServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            body: r#"{"status":"success","message":"File processed successfully"}"#,
            delay: Duration::ZERO,
        }
    }
}

pub struct ScanServer {
    /// Full upload endpoint, e.g. "http://127.0.0.1:12345/api/upload/upload".
    pub endpoint: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl ScanServer {
    /// Starts a server in a background thread. The server runs until the
    /// process exits.
    pub fn start(opts: ScanServerOptions) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::default();

        let captured = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let captured = Arc::clone(&captured);
                let opts = opts.clone();
                thread::spawn(move || handle(stream, &captured, &opts));
            }
        });

        ScanServer {
            endpoint: format!("http://127.0.0.1:{}/api/upload/upload", port),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    captured: &Mutex<Vec<CapturedRequest>>,
    opts: &ScanServerOptions,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    // Read until the full header block is in, then drain the body per
    // Content-Length.
    let mut raw = Vec::new();
    let mut buf = [0u8; 8192];
    let header_end = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => n,
            Err(_) => return,
        };
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&raw) {
            break pos;
        }
        if raw.len() > 1 << 20 {
            return;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).into_owned();
    let (method, path, content_type, content_length) = parse_head(&head);

    let body_start = header_end + 4;
    while raw.len() < body_start + content_length {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        raw.extend_from_slice(&buf[..n]);
    }
    let body = raw
        .get(body_start..body_start + content_length)
        .unwrap_or(&[])
        .to_vec();

    captured.lock().unwrap().push(CapturedRequest {
        method,
        path,
        content_type,
        body,
    });

    if !opts.delay.is_zero() {
        thread::sleep(opts.delay);
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Returns (method, path, content type, content length).
fn parse_head(head: &str) -> (String, String, String, usize) {
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut content_type = String::new();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                content_type = value.to_string();
            } else if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
        }
    }

    (method, path, content_type, content_length)
}
