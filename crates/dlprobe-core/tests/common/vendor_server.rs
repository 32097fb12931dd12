//! Minimal HTTP/1.1 server imitating a vendor download endpoint.
//!
//! `GET /?download=<id>` serves the file registered for `<id>`, or an HTML
//! "Invalid download." placeholder page for unknown IDs. `/redirect/<id>`
//! answers 302 to the matching `/?download=<id>`; `/missing` answers 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct ServedFile {
    pub content_type: &'static str,
    pub content_disposition: Option<&'static [u8]>,
    pub body: Vec<u8>,
}

pub const PLACEHOLDER: &str =
    "<!DOCTYPE html><html><body><p>Invalid download.</p></body></html>";

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(files: HashMap<u64, ServedFile>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let files = Arc::new(files);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let files = Arc::clone(&files);
            thread::spawn(move || handle(stream, &files));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, files: &HashMap<u64, ServedFile>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");

    if let Some(id) = target.strip_prefix("/redirect/") {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: /?download={}\r\nContent-Type: text/html\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            id
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if target == "/missing" {
        let _ = stream.write_all(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let id = target
        .strip_prefix("/?download=")
        .and_then(|s| s.parse::<u64>().ok());
    match id.and_then(|id| files.get(&id)) {
        Some(file) => {
            // Header values are written as raw bytes so tests can serve
            // non-UTF-8 filenames.
            let mut head = format!("HTTP/1.1 200 OK\r\nContent-Type: {}\r\n", file.content_type)
                .into_bytes();
            if let Some(disposition) = file.content_disposition {
                head.extend_from_slice(b"Content-Disposition: ");
                head.extend_from_slice(disposition);
                head.extend_from_slice(b"\r\n");
            }
            head.extend_from_slice(
                format!("Content-Length: {}\r\nConnection: close\r\n\r\n", file.body.len())
                    .as_bytes(),
            );
            let _ = stream.write_all(&head);
            let _ = stream.write_all(&file.body);
        }
        None => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                PLACEHOLDER.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(PLACEHOLDER.as_bytes());
        }
    }
}
