//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes. Each route answers GET with a status and a
//! body; unknown paths answer 404. One request per connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 OK with the given body.
    Body(Vec<u8>),
    /// The given status code with a short text body.
    Status(u16),
    /// 200 OK announcing `announced` bytes but closing after `body`.
    Truncated { body: Vec<u8>, announced: usize },
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until process exit.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let routes: HashMap<String, Route> = routes
        .into_iter()
        .map(|(path, route)| (path.to_string(), route))
        .collect();
    let routes = Arc::new(routes);

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    match routes.get(path) {
        Some(Route::Body(body)) => respond(&mut stream, 200, "OK", body, body.len()),
        Some(Route::Status(code)) => {
            let body = format!("status {}", code);
            respond(&mut stream, *code, "Test Status", body.as_bytes(), body.len())
        }
        Some(Route::Truncated { body, announced }) => {
            respond(&mut stream, 200, "OK", body, *announced)
        }
        None => respond(&mut stream, 404, "Not Found", b"not found", 9),
    }
}

fn respond(
    stream: &mut std::net::TcpStream,
    code: u16,
    reason: &str,
    body: &[u8],
    content_length: usize,
) {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: audio/mpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code, reason, content_length
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
