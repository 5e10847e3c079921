//! Minimal HTTP/1.1 server answering HEAD requests for integration tests.
//!
//! Serves a fixed status code for every request. Bodies are never sent
//! (the probe only looks at the status line).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts a server in a background thread answering every request with
/// `status`. Returns the base URL (e.g. "http://127.0.0.1:12345/").
/// The server runs until the process exits.
pub fn start(status: u32) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, status));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// Returns an address nothing is listening on (bind then drop).
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, status: u32) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    if matches!(stream.read(&mut buf), Ok(0) | Err(_)) {
        return;
    }
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status, reason
    );
    let _ = stream.write_all(response.as_bytes());
}
