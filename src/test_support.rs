//! Throwaway HTTP responder and log capture for the in-crate tests.

use std::sync::{Mutex, Once};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the responder saw on the wire.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

pub struct TestServer {
    pub base_url: String,
    request_rx: oneshot::Receiver<CapturedRequest>,
}

impl TestServer {
    pub async fn request(self) -> CapturedRequest {
        self.request_rx.await.expect("server saw no request")
    }
}

/// Answer exactly one request with the given status line and body.
pub async fn serve_once(status: &str, content_type: &str, body: Vec<u8>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let _ = tx.send(parse_request(&String::from_utf8_lossy(&buf)));

        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        request_rx: rx,
    }
}

fn parse_request(raw: &str) -> CapturedRequest {
    let mut lines = raw.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let authorization = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.trim().to_string());

    CapturedRequest {
        method,
        path,
        authorization,
    }
}

/// Base URL of a port nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

struct CapturingLogger {
    lines: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT_LOGGER: Once = Once::new();

pub fn capture_logs() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already set");
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// Error lines mentioning `needle`; tests run in parallel so each one
/// filters on something only it produces.
pub fn error_lines_containing(needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, line)| *level == log::Level::Error && line.contains(needle))
        .map(|(_, line)| line.clone())
        .collect()
}
